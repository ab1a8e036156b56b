use serde::Deserialize;

pub const DEFAULT_LIMIT: u32 = 12;
pub const MAX_LIMIT: u32 = 100;
/// Upper bound on the page number. Keeps `(page - 1) * limit` well inside
/// u32 range for any accepted limit; no real listing comes close.
pub const MAX_PAGE: u32 = 100_000;

/// Raw `page`/`limit`/`orderBy` query parameters as they arrive on a
/// listing URL. Values are optional here; clamping and defaulting happen
/// in `PageState::derive`.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    #[serde(rename = "orderBy")]
    pub order_by: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).clamp(1, MAX_PAGE)
    }

    pub fn limit_or(&self, default: u32) -> u32 {
        self.limit.unwrap_or(default).clamp(1, MAX_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_params_fall_back_to_defaults() {
        let params = PageParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit_or(DEFAULT_LIMIT), 12);
    }

    #[test]
    fn zero_values_are_clamped() {
        let params = PageParams {
            page: Some(0),
            limit: Some(0),
            order_by: None,
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit_or(DEFAULT_LIMIT), 1);
    }

    #[test]
    fn oversized_page_is_capped() {
        let params = PageParams {
            page: Some(u32::MAX),
            limit: None,
            order_by: None,
        };
        assert_eq!(params.page(), MAX_PAGE);
    }

    #[test]
    fn oversized_limit_is_capped() {
        let params = PageParams {
            page: None,
            limit: Some(5000),
            order_by: None,
        };
        assert_eq!(params.limit_or(DEFAULT_LIMIT), MAX_LIMIT);
    }
}
