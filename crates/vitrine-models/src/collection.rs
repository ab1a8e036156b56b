use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Composite identifier of a collection: the chain it lives on plus its
/// contract address, written as `"chainId-address"` in configuration and
/// grid ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionKey {
    pub chain_id: i64,
    pub address: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidCollectionKey {
    #[error("missing '-' separator in collection key '{0}'")]
    MissingSeparator(String),
    #[error("invalid chain id in collection key '{0}'")]
    InvalidChainId(String),
    #[error("empty address in collection key '{0}'")]
    EmptyAddress(String),
}

impl CollectionKey {
    pub fn new(chain_id: i64, address: &str) -> Self {
        Self {
            chain_id,
            address: address.to_ascii_lowercase(),
        }
    }
}

impl FromStr for CollectionKey {
    type Err = InvalidCollectionKey;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (chain, address) = raw
            .split_once('-')
            .ok_or_else(|| InvalidCollectionKey::MissingSeparator(raw.to_string()))?;
        let chain_id: i64 = chain
            .trim()
            .parse()
            .map_err(|_| InvalidCollectionKey::InvalidChainId(raw.to_string()))?;
        let address = address.trim();
        if address.is_empty() {
            return Err(InvalidCollectionKey::EmptyAddress(raw.to_string()));
        }
        Ok(Self::new(chain_id, address))
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.chain_id, self.address)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub chain_id: i64,
    pub address: String,
    pub name: String,
    pub image: Option<String>,
    pub cover: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub total_volume: Option<String>,
    #[serde(default)]
    pub floor_price: Option<String>,
}

impl Collection {
    /// Key used when matching against a configured preferred ordering.
    pub fn key(&self) -> CollectionKey {
        CollectionKey::new(self.chain_id, &self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_parses_chain_and_address() {
        let key: CollectionKey = "1-0xABCDEF".parse().expect("valid key");
        assert_eq!(key.chain_id, 1);
        assert_eq!(key.address, "0xabcdef");
        assert_eq!(key.to_string(), "1-0xabcdef");
    }

    #[test]
    fn key_without_separator_is_rejected() {
        let err = "nodash".parse::<CollectionKey>().unwrap_err();
        assert!(matches!(err, InvalidCollectionKey::MissingSeparator(_)));
    }

    #[test]
    fn key_with_bad_chain_id_is_rejected() {
        let err = "mainnet-0xabc".parse::<CollectionKey>().unwrap_err();
        assert!(matches!(err, InvalidCollectionKey::InvalidChainId(_)));
    }

    #[test]
    fn key_with_empty_address_is_rejected() {
        let err = "1-".parse::<CollectionKey>().unwrap_err();
        assert!(matches!(err, InvalidCollectionKey::EmptyAddress(_)));
    }
}
