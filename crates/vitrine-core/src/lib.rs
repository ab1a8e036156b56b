pub mod keyorder;
pub mod listing;
pub mod order;
pub mod paginate;

use listing::ListingSession;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;
use vitrine_client::GraphqlClient;
use vitrine_models::CollectionKey;

/// A listing session bound to the account that opened it. Lookups by id
/// must also match the owner, so one account cannot drive another's
/// session.
#[derive(Debug)]
pub struct OwnedSession<T> {
    pub owner: String,
    pub session: Mutex<ListingSession<T>>,
}

impl<T> OwnedSession<T> {
    pub fn new(owner: String, session: ListingSession<T>) -> Self {
        Self {
            owner,
            session: Mutex::new(session),
        }
    }
}

/// Live listing sessions keyed by the id handed to the client. Sessions
/// for abandoned views are never explicitly cancelled; they simply age
/// out of the cache.
pub type SessionStore<T> = moka::future::Cache<Uuid, Arc<OwnedSession<T>>>;

/// Build a session store with the configured idle TTL and a bounded
/// capacity so runaway clients cannot pin memory.
pub fn build_session_store<T>(ttl: Duration) -> SessionStore<T>
where
    T: Send + Sync + 'static,
{
    moka::future::Cache::builder()
        .max_capacity(10_000)
        .time_to_idle(ttl)
        .build()
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Page size applied when a listing URL carries no `limit` parameter.
    pub default_limit: u32,
    /// Page sizes offered to the user in listing view-models.
    pub limit_choices: Vec<u32>,
    /// Collections pinned to the home grid, in display order.
    pub home_collections: Vec<CollectionKey>,
    /// Public URL of this front-end, used when composing absolute hrefs.
    pub public_url: Option<String>,
    /// Whether the last-seen-notification cookie is marked Secure.
    pub cookie_secure: bool,
    pub session_ttl_seconds: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<GraphqlClient>,
    pub config: AppConfig,
    pub notification_sessions: SessionStore<vitrine_models::Notification>,
}
