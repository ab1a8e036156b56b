use axum::{
    extract::{Path, State},
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;
use vitrine_core::{
    listing::ListingSession, AppState, OwnedSession,
};
use vitrine_models::Notification;

use crate::error::ApiError;
use crate::middleware::AuthAccount;

/// First page of the account's notifications.
///
/// Opens a listing session for incremental loading and records the view
/// in the per-account last-seen cookie consumed by the badge logic.
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthAccount,
) -> Result<impl IntoResponse, ApiError> {
    let limit = state.config.default_limit;
    let page = state
        .client
        .fetch_notifications(&auth.address, limit, 0)
        .await?;

    let mut session = ListingSession::new(limit)?;
    session.prime(page);

    let session_id = Uuid::new_v4();
    let body = session_view(session_id, &session);
    state
        .notification_sessions
        .insert(
            session_id,
            Arc::new(OwnedSession::new(auth.address.clone(), session)),
        )
        .await;

    let cookie = last_seen_cookie(&auth.address, state.config.cookie_secure);
    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Json(body)))
}

/// Load the next page into an existing session.
///
/// The offset only advances on a confirmed success; a failed fetch
/// leaves the session untouched so the same offset can be retried. A
/// second trigger while a fetch is pending is rejected with 409.
pub async fn load_more(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let entry = state
        .notification_sessions
        .get(&session_id)
        .await
        .ok_or(ApiError::NotFound)?;
    if entry.owner != auth.address {
        return Err(ApiError::NotFound);
    }

    // Reserve the fetch under the lock, then release it for the network
    // round-trip so the in-flight guard (not lock contention) handles
    // concurrent triggers.
    let (ticket, limit) = {
        let mut session = entry.session.lock().await;
        let ticket = session.begin_load_more()?;
        (ticket, session.limit())
    };

    let result = state
        .client
        .fetch_notifications(&auth.address, limit, ticket.offset)
        .await;

    let mut session = entry.session.lock().await;
    match result {
        Ok(page) => {
            session.complete(ticket, page)?;
            Ok(Json(session_view(session_id, &session)))
        }
        Err(e) => {
            session.fail(ticket);
            Err(e.into())
        }
    }
}

fn session_view(session_id: Uuid, session: &ListingSession<Notification>) -> Value {
    json!({
        "sessionId": session_id,
        "notifications": session.nodes(),
        "hasNextPage": session.has_next_page(),
        "offset": session.offset(),
        "limit": session.limit(),
    })
}

fn last_seen_cookie(address: &str, secure: bool) -> String {
    let seen_at = chrono::Utc::now().to_rfc3339();
    let mut cookie = format!("lastNotification-{address}={seen_at}; Path=/; SameSite=Strict");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_carries_account_and_attributes() {
        let cookie = last_seen_cookie("0xabc", true);
        assert!(cookie.starts_with("lastNotification-0xabc="));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.ends_with("Secure"));
    }

    #[test]
    fn insecure_deployments_omit_secure_attribute() {
        let cookie = last_seen_cookie("0xabc", false);
        assert!(!cookie.contains("Secure"));
    }
}
