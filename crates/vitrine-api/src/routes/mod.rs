use axum::extract::OriginalUri;
use serde_json::{json, Value};
use url::Url;
use vitrine_core::{order, paginate, paginate::PageState, AppState};
use vitrine_models::PageInfo;

use crate::error::ApiError;

pub mod collections;
pub mod home;
pub mod notifications;
pub mod users;

const FALLBACK_BASE: &str = "http://localhost:8080";

/// Reconstruct the absolute request URL. Pagination and sort state live
/// in the URL's query string, so every listing handler starts here.
pub(crate) fn request_url(state: &AppState, uri: &OriginalUri) -> Result<Url, ApiError> {
    let base = state
        .config
        .public_url
        .as_deref()
        .unwrap_or(FALLBACK_BASE);
    let base = Url::parse(base).map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;
    base.join(&uri.to_string())
        .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))
}

/// Pagination block of a listing view-model: current cursor, page-size
/// choices, and ready-made hrefs for the renderer.
pub(crate) fn pagination_view(
    url: &Url,
    page_state: PageState,
    info: PageInfo,
    total_count: Option<u64>,
    limit_choices: &[u32],
) -> Value {
    let limits: Vec<Value> = limit_choices
        .iter()
        .map(|&limit| {
            json!({
                "value": limit,
                "href": paginate::change_limit(url, limit).to_string(),
            })
        })
        .collect();
    json!({
        "page": page_state.page,
        "limit": page_state.limit,
        "offset": page_state.offset,
        "hasNextPage": info.has_next_page,
        "hasPreviousPage": info.has_previous_page,
        "totalCount": total_count,
        "limits": limits,
        "nextHref": info
            .has_next_page
            .then(|| paginate::page_href(url, page_state.page.saturating_add(1)).to_string()),
        "previousHref": (page_state.page > 1)
            .then(|| paginate::page_href(url, page_state.page - 1).to_string()),
    })
}

/// Sort block of a listing view-model.
pub(crate) fn order_view(url: &Url, value: &str, choices: &[&str]) -> Value {
    let choices: Vec<Value> = choices
        .iter()
        .map(|&choice| {
            json!({
                "value": choice,
                "href": order::change_order(url, choice).to_string(),
            })
        })
        .collect();
    json!({ "value": value, "choices": choices })
}
