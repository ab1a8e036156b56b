use axum::{
    extract::{OriginalUri, Path, State},
    Json,
};
use serde_json::{json, Value};
use vitrine_core::{order, paginate::PageState, AppState};
use vitrine_models::{AssetsOrderBy, OwnershipsOrderBy};
use vitrine_util::validation::validate_account_address;

use crate::error::ApiError;
use crate::routes::{order_view, pagination_view, request_url};

const ORDER_CHOICES: &[&str] = &["CREATED_AT_DESC", "CREATED_AT_ASC"];

fn checked_address(address: &str) -> Result<String, ApiError> {
    validate_account_address(address)
        .map_err(|e| ApiError::BadRequest(format!("invalid address: {e}")))?;
    Ok(address.to_ascii_lowercase())
}

/// Tokens currently owned by the given account.
pub async fn owned_assets(
    State(state): State<AppState>,
    Path(address): Path<String>,
    uri: OriginalUri,
) -> Result<Json<Value>, ApiError> {
    let address = checked_address(&address)?;
    let url = request_url(&state, &uri)?;
    let page_state = PageState::derive(&url, state.config.default_limit);
    let order_by = order::order_from_url(&url, OwnershipsOrderBy::CreatedAtDesc);

    let page = state
        .client
        .fetch_owned_assets(&address, order_by, page_state.limit, page_state.offset)
        .await?;

    Ok(Json(json!({
        "address": address,
        "tab": "owned",
        "assets": page.nodes,
        "pagination": pagination_view(
            &url,
            page_state,
            page.page_info,
            page.total_count,
            &state.config.limit_choices,
        ),
        "orderBy": order_view(&url, order_by.as_str(), ORDER_CHOICES),
    })))
}

/// Tokens minted by the given account.
pub async fn created_assets(
    State(state): State<AppState>,
    Path(address): Path<String>,
    uri: OriginalUri,
) -> Result<Json<Value>, ApiError> {
    let address = checked_address(&address)?;
    let url = request_url(&state, &uri)?;
    let page_state = PageState::derive(&url, state.config.default_limit);
    let order_by = order::order_from_url(&url, AssetsOrderBy::CreatedAtDesc);

    let page = state
        .client
        .fetch_created_assets(&address, order_by, page_state.limit, page_state.offset)
        .await?;

    Ok(Json(json!({
        "address": address,
        "tab": "created",
        "assets": page.nodes,
        "pagination": pagination_view(
            &url,
            page_state,
            page.page_info,
            page.total_count,
            &state.config.limit_choices,
        ),
        "orderBy": order_view(&url, order_by.as_str(), ORDER_CHOICES),
    })))
}
