use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use vitrine_core::AppState;
use vitrine_util::validation::validate_account_address;

/// The wallet address of the signed-in account, forwarded by the
/// upstream auth layer. The session protocol itself is out of scope
/// here; this surface only needs a validated address to scope queries
/// and the last-seen cookie.
pub struct AuthAccount {
    pub address: String,
}

impl FromRequestParts<AppState> for AuthAccount {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let address = parts
            .headers
            .get("x-wallet-address")
            .and_then(|v| v.to_str().ok())
            .ok_or((StatusCode::UNAUTHORIZED, "Missing account address"))?;

        validate_account_address(address)
            .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid account address"))?;

        Ok(AuthAccount {
            address: address.to_ascii_lowercase(),
        })
    }
}
