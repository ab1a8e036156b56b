use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub chain_id: i64,
    pub collection_address: String,
    pub token_id: String,
    pub name: String,
    pub image: Option<String>,
    pub animation_url: Option<String>,
    pub creator_address: Option<String>,
    pub owner_address: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    pub created_at: DateTime<Utc>,
}
