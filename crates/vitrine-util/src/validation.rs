use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("value is too short (min {min}, got {got})")]
    TooShort { min: usize, got: usize },
    #[error("value is too long (max {max}, got {got})")]
    TooLong { max: usize, got: usize },
    #[error("invalid characters")]
    InvalidCharacters,
    #[error("invalid format")]
    InvalidFormat,
}

/// Accepts 0x-prefixed hex account addresses as used by the marketplace
/// backend. Case is not significant; callers lowercase before querying.
pub fn validate_account_address(address: &str) -> Result<(), ValidationError> {
    let hex = address
        .strip_prefix("0x")
        .ok_or(ValidationError::InvalidFormat)?;
    if hex.len() != 40 {
        return Err(ValidationError::InvalidFormat);
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidCharacters);
    }
    Ok(())
}

pub fn validate_token_id(token_id: &str) -> Result<(), ValidationError> {
    let len = token_id.len();
    if len < 1 {
        return Err(ValidationError::TooShort { min: 1, got: len });
    }
    if len > 128 {
        return Err(ValidationError::TooLong { max: 128, got: len });
    }
    if !token_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidCharacters);
    }
    Ok(())
}
