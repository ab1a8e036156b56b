use axum::{extract::State, Json};
use serde_json::{json, Value};
use vitrine_core::{keyorder::order_by_key, AppState};
use vitrine_models::Collection;

use crate::error::ApiError;

/// Collections pinned to the home page, in the configured display order.
///
/// The backend returns matches in arbitrary order; the result is
/// reordered to the configured key list, with unconfigured results
/// dropped and configured-but-missing collections silently omitted.
pub async fn home_collections(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let keys = &state.config.home_collections;
    if keys.is_empty() {
        return Ok(Json(json!({ "collections": [] })));
    }

    let page = state
        .client
        .fetch_collections_by_keys(keys, keys.len() as u32)
        .await?;
    let ordered = order_by_key(keys, page.nodes, |collection: &Collection| collection.key());

    Ok(Json(json!({ "collections": ordered })))
}
