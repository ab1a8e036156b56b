use std::collections::HashMap;
use std::hash::Hash;

/// Reorder fetched items to match a configured preferred key order.
///
/// Keys with no matching item are dropped; items whose key is not in the
/// preferred list are ignored. This is a stable reorder keyed by
/// identity, not a sort by field value.
pub fn order_by_key<T, K, F>(preferred: &[K], items: Vec<T>, key_fn: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut by_key: HashMap<K, T> = items
        .into_iter()
        .map(|item| (key_fn(&item), item))
        .collect();
    preferred
        .iter()
        .filter_map(|key| by_key.remove(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_follows_preferred_order() {
        let preferred = vec!["k1", "k2", "k3"];
        // fetched out of order, k1 missing
        let fetched = vec![("k3", "c"), ("k2", "b")];
        let ordered = order_by_key(&preferred, fetched, |item| item.0);
        assert_eq!(ordered, vec![("k2", "b"), ("k3", "c")]);
    }

    #[test]
    fn unlisted_items_are_dropped() {
        let preferred = vec!["k1"];
        let fetched = vec![("k9", "x"), ("k1", "a")];
        let ordered = order_by_key(&preferred, fetched, |item| item.0);
        assert_eq!(ordered, vec![("k1", "a")]);
    }

    #[test]
    fn empty_inputs_yield_empty_output() {
        let ordered = order_by_key(&["k1"], Vec::<(&str, &str)>::new(), |item| item.0);
        assert!(ordered.is_empty());
        let ordered = order_by_key(&[], vec![("k1", "a")], |item| item.0);
        assert!(ordered.is_empty());
    }
}
