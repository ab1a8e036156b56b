use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    /// Backend-defined action discriminator, e.g. `OFFER_PURCHASED`.
    pub action: String,
    pub account_address: String,
    pub asset_id: Option<String>,
    pub asset_name: Option<String>,
    pub asset_image: Option<String>,
    pub created_at: DateTime<Utc>,
}
