use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sort keys accepted by the backend's `ownerships` list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnershipsOrderBy {
    CreatedAtDesc,
    CreatedAtAsc,
}

impl OwnershipsOrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAtDesc => "CREATED_AT_DESC",
            Self::CreatedAtAsc => "CREATED_AT_ASC",
        }
    }
}

impl FromStr for OwnershipsOrderBy {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "CREATED_AT_DESC" => Ok(Self::CreatedAtDesc),
            "CREATED_AT_ASC" => Ok(Self::CreatedAtAsc),
            _ => Err(()),
        }
    }
}

/// Sort keys accepted by the backend's `assets` list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetsOrderBy {
    CreatedAtDesc,
    CreatedAtAsc,
}

impl AssetsOrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAtDesc => "CREATED_AT_DESC",
            Self::CreatedAtAsc => "CREATED_AT_ASC",
        }
    }
}

impl FromStr for AssetsOrderBy {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "CREATED_AT_DESC" => Ok(Self::CreatedAtDesc),
            "CREATED_AT_ASC" => Ok(Self::CreatedAtAsc),
            _ => Err(()),
        }
    }
}

/// Sort keys accepted by the backend's `collections` list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionsOrderBy {
    TotalVolumeDesc,
    CreatedAtDesc,
    CreatedAtAsc,
}

impl CollectionsOrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TotalVolumeDesc => "TOTAL_VOLUME_DESC",
            Self::CreatedAtDesc => "CREATED_AT_DESC",
            Self::CreatedAtAsc => "CREATED_AT_ASC",
        }
    }
}

impl FromStr for CollectionsOrderBy {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "TOTAL_VOLUME_DESC" => Ok(Self::TotalVolumeDesc),
            "CREATED_AT_DESC" => Ok(Self::CreatedAtDesc),
            "CREATED_AT_ASC" => Ok(Self::CreatedAtAsc),
            _ => Err(()),
        }
    }
}
