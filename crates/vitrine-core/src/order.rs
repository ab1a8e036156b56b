use std::str::FromStr;
use url::Url;

/// Read `orderBy` from a listing URL, falling back to the supplied
/// default when the parameter is absent or not a known sort key.
pub fn order_from_url<T>(url: &Url, default: T) -> T
where
    T: FromStr + Copy,
{
    url.query_pairs()
        .find(|(key, _)| key == "orderBy")
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(default)
}

/// Rewrite only the `orderBy` parameter. Every other parameter is kept
/// verbatim, including `page` — changing the sort while deep in a listing
/// intentionally keeps the current page, matching the long-standing
/// behavior of this surface.
pub fn change_order(url: &Url, value: &str) -> Url {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    match pairs.iter_mut().find(|(k, _)| k == "orderBy") {
        Some(pair) => pair.1 = value.to_string(),
        None => pairs.push(("orderBy".to_string(), value.to_string())),
    }
    let mut rewritten = url.clone();
    rewritten
        .query_pairs_mut()
        .clear()
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_models::OwnershipsOrderBy;

    fn listing_url(query: &str) -> Url {
        Url::parse(&format!("https://market.example/owned?{query}")).expect("url")
    }

    #[test]
    fn valid_order_is_parsed() {
        let url = listing_url("orderBy=CREATED_AT_ASC");
        let order = order_from_url(&url, OwnershipsOrderBy::CreatedAtDesc);
        assert_eq!(order, OwnershipsOrderBy::CreatedAtAsc);
    }

    #[test]
    fn absent_order_uses_default() {
        let order = order_from_url(&listing_url("page=2"), OwnershipsOrderBy::CreatedAtDesc);
        assert_eq!(order, OwnershipsOrderBy::CreatedAtDesc);
    }

    #[test]
    fn unknown_order_uses_default() {
        let url = listing_url("orderBy=PRICE_DESC");
        let order = order_from_url(&url, OwnershipsOrderBy::CreatedAtDesc);
        assert_eq!(order, OwnershipsOrderBy::CreatedAtDesc);
    }

    #[test]
    fn change_order_preserves_other_params() {
        let url = listing_url("page=3&limit=24&orderBy=CREATED_AT_DESC&id=0xabc");
        let rewritten = change_order(&url, "CREATED_AT_ASC");
        let query = rewritten.query().unwrap();
        assert!(query.contains("orderBy=CREATED_AT_ASC"));
        assert!(query.contains("page=3"));
        assert!(query.contains("limit=24"));
        assert!(query.contains("id=0xabc"));
    }

    #[test]
    fn change_order_appends_when_absent() {
        let rewritten = change_order(&listing_url("page=2"), "CREATED_AT_ASC");
        assert!(rewritten.query().unwrap().contains("orderBy=CREATED_AT_ASC"));
    }
}
