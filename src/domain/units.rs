//! Unit and relation identifier handling.

/// Turn a unit name like `dashboard/3` into an identifier safe for config
/// file directives (`dashboard-3`).
pub fn normalize_unit_name(unit: &str) -> String {
    unit.replace('/', "-")
}

/// Sort relation ids by their numeric suffix within each relation name, so
/// `identity-service:10` orders after `identity-service:9` rather than
/// between `:1` and `:2`. Ids without a parseable suffix fall back to
/// lexical order.
pub fn sorted_ids(mut ids: Vec<String>) -> Vec<String> {
    ids.sort_by_cached_key(|id| split_id(id));
    ids
}

fn split_id(id: &str) -> (String, Option<u64>, String) {
    if let Some((prefix, suffix)) = id.rsplit_once([':', '/'])
        && let Ok(n) = suffix.parse::<u64>()
    {
        return (prefix.to_string(), Some(n), String::new());
    }
    (id.to_string(), None, id.to_string())
}
