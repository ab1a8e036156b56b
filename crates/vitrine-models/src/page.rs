use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// Immutable snapshot of a single list fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub nodes: Vec<T>,
    pub page_info: PageInfo,
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl<T> PageResult<T> {
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            page_info: PageInfo::default(),
            total_count: Some(0),
        }
    }
}
