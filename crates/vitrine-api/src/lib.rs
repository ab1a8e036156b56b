use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::{from_fn, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};
use vitrine_core::AppState;

pub mod error;
pub mod middleware;
pub mod routes;

pub fn build_router() -> Router<AppState> {
    let cors = build_cors_layer();
    Router::new()
        // Health
        .route("/health", get(health))
        .route("/api/v1/health", get(health))
        .route("/metrics", get(metrics))
        // Home
        .route(
            "/api/v1/home/collections",
            get(routes::home::home_collections),
        )
        // Explore
        .route(
            "/api/v1/explore/collections",
            get(routes::collections::explore_collections),
        )
        // User profile listings
        .route(
            "/api/v1/users/{address}/owned",
            get(routes::users::owned_assets),
        )
        .route(
            "/api/v1/users/{address}/created",
            get(routes::users::created_assets),
        )
        // Notifications
        .route(
            "/api/v1/notifications",
            get(routes::notifications::list_notifications),
        )
        .route(
            "/api/v1/notifications/{session_id}/more",
            post(routes::notifications::load_more),
        )
        // Middleware layers
        .layer(cors)
        .layer(from_fn(rate_limit_middleware))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

fn build_cors_layer() -> tower_http::cors::CorsLayer {
    // The JSON surface is consumed by the marketplace's own renderer,
    // which may be served from a different origin in development.
    tower_http::cors::CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(tower_http::cors::Any)
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "vitrine" })),
    )
}

async fn metrics() -> impl IntoResponse {
    let requests = REQUEST_COUNT.load(Ordering::Relaxed);
    let limited = RATE_LIMITED_COUNT.load(Ordering::Relaxed);
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4")],
        format!(
            "vitrine_up 1\nvitrine_http_requests_total {}\nvitrine_http_rate_limited_total {}\n",
            requests, limited
        ),
    )
}

/// Per-client request budget for a one-second window.
const RATE_LIMIT_PER_SECOND: u32 = 300;

static RATE_LIMIT_STATE: OnceLock<Mutex<HashMap<String, (i64, u32)>>> = OnceLock::new();
static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static RATE_LIMITED_COUNT: AtomicU64 = AtomicU64::new(0);

fn rate_limit_state() -> &'static Mutex<HashMap<String, (i64, u32)>> {
    RATE_LIMIT_STATE.get_or_init(|| Mutex::new(HashMap::new()))
}

async fn rate_limit_middleware(req: Request, next: Next) -> Response {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
    let now = chrono::Utc::now().timestamp();
    let key = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("local")
        .to_string();

    let allowed = {
        let mut map = match rate_limit_state().lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let entry = map.entry(key).or_insert((now, 0));
        note_request(entry, now)
    };

    if !allowed {
        RATE_LIMITED_COUNT.fetch_add(1, Ordering::Relaxed);
        return crate::error::ApiError::RateLimited.into_response();
    }

    next.run(req).await
}

/// Count one request against the client's current one-second window,
/// resetting the counter when the window rolls over. Returns whether the
/// request is within budget.
fn note_request(entry: &mut (i64, u32), now: i64) -> bool {
    if entry.0 != now {
        *entry = (now, 0);
    }
    if entry.1 >= RATE_LIMIT_PER_SECOND {
        false
    } else {
        entry.1 += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_over_the_per_second_budget_are_rejected() {
        let mut entry = (10, 0);
        for _ in 0..RATE_LIMIT_PER_SECOND {
            assert!(note_request(&mut entry, 10));
        }
        assert!(!note_request(&mut entry, 10));
        // a new second resets the window
        assert!(note_request(&mut entry, 11));
    }
}
