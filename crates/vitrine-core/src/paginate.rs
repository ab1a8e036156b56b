use serde::Serialize;
use url::Url;
use vitrine_util::pagination::PageParams;

/// Pagination state derived from a listing URL. Pure function of the URL
/// plus the configured default limit; the URL is the only place this
/// state persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub page: u32,
    pub limit: u32,
    pub offset: u32,
}

impl PageState {
    pub fn derive(url: &Url, default_limit: u32) -> Self {
        let params = PageParams {
            page: query_u32(url, "page"),
            limit: query_u32(url, "limit"),
            order_by: None,
        };
        let page = params.page();
        let limit = params.limit_or(default_limit);
        Self {
            page,
            limit,
            offset: (page - 1).saturating_mul(limit),
        }
    }
}

fn query_u32(url: &Url, name: &str) -> Option<u32> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .and_then(|(_, value)| value.parse().ok())
}

/// Replace or append one query parameter, leaving every other pair in
/// its original position.
fn set_query_param(url: &Url, name: &str, value: &str) -> Url {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    match pairs.iter_mut().find(|(k, _)| k == name) {
        Some(pair) => pair.1 = value.to_string(),
        None => pairs.push((name.to_string(), value.to_string())),
    }
    let mut rewritten = url.clone();
    rewritten
        .query_pairs_mut()
        .clear()
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    rewritten
}

/// Rewrite the URL for a new page size. The page always resets to 1 so
/// the recomputed offset stays aligned with the new limit.
pub fn change_limit(url: &Url, new_limit: u32) -> Url {
    let rewritten = set_query_param(url, "limit", &new_limit.to_string());
    set_query_param(&rewritten, "page", "1")
}

/// Href for navigating to a specific page with the current limit kept.
pub fn page_href(url: &Url, page: u32) -> Url {
    set_query_param(url, "page", &page.max(1).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_url(query: &str) -> Url {
        Url::parse(&format!("https://market.example/explore?{query}")).expect("url")
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        for (page, limit) in [(1u32, 12u32), (2, 12), (3, 24), (7, 48)] {
            let url = listing_url(&format!("page={page}&limit={limit}"));
            let state = PageState::derive(&url, 12);
            assert_eq!(state.offset, (page - 1) * limit);
        }
    }

    #[test]
    fn missing_params_use_defaults() {
        let state = PageState::derive(&listing_url(""), 12);
        assert_eq!(state, PageState { page: 1, limit: 12, offset: 0 });
    }

    #[test]
    fn extreme_page_param_is_capped_without_overflow() {
        let url = listing_url("page=4294967295&limit=100");
        let state = PageState::derive(&url, 12);
        assert_eq!(state.page, vitrine_util::pagination::MAX_PAGE);
        assert_eq!(state.limit, 100);
        assert_eq!(state.offset, (state.page - 1) * state.limit);
    }

    #[test]
    fn garbage_params_fall_back() {
        let state = PageState::derive(&listing_url("page=banana&limit=-3"), 12);
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, 12);
    }

    #[test]
    fn change_limit_resets_page_to_one() {
        let url = listing_url("page=3&limit=12&orderBy=CREATED_AT_ASC");
        let rewritten = change_limit(&url, 48);
        let state = PageState::derive(&rewritten, 12);
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, 48);
        assert_eq!(state.offset, 0);
        // unrelated params survive the rewrite
        assert!(rewritten.query().unwrap().contains("orderBy=CREATED_AT_ASC"));
    }

    #[test]
    fn page_href_keeps_limit_and_order() {
        let url = listing_url("page=2&limit=24&orderBy=CREATED_AT_DESC");
        let href = page_href(&url, 3);
        let state = PageState::derive(&href, 12);
        assert_eq!(state.page, 3);
        assert_eq!(state.limit, 24);
        assert_eq!(state.offset, 48);
    }
}
