use axum::{
    extract::{OriginalUri, State},
    Json,
};
use serde_json::{json, Value};
use vitrine_core::{order, paginate::PageState, AppState};
use vitrine_models::CollectionsOrderBy;

use crate::error::ApiError;
use crate::routes::{order_view, pagination_view, request_url};

const ORDER_CHOICES: &[&str] = &["TOTAL_VOLUME_DESC", "CREATED_AT_DESC", "CREATED_AT_ASC"];

pub async fn explore_collections(
    State(state): State<AppState>,
    uri: OriginalUri,
) -> Result<Json<Value>, ApiError> {
    let url = request_url(&state, &uri)?;
    let page_state = PageState::derive(&url, state.config.default_limit);
    let order_by = order::order_from_url(&url, CollectionsOrderBy::TotalVolumeDesc);

    let page = state
        .client
        .fetch_collections(order_by, page_state.limit, page_state.offset)
        .await?;

    Ok(Json(json!({
        "collections": page.nodes,
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
