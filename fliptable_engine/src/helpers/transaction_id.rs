use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// JSON fields that wallet providers use for the transaction identifier, in order of preference.
const ID_FIELDS: [&str; 3] = ["transaction_id", "id", "tx_id"];

/// Fallback patterns for responses that are not JSON, or that bury the id in a message. Ordered by specificity. If a
/// pattern has a capture group, the group is the id; otherwise the whole match is.
static ID_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)([0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})",
        r#"(?i)transaction[_\s-]?id[":\s]+([a-zA-Z0-9_-]+)"#,
        r#"(?i)tx[_\s-]?id[":\s]+([a-zA-Z0-9_-]+)"#,
        r"0x[a-fA-F0-9]{64}",
        r"[a-zA-Z0-9]{32,64}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Transaction id patterns are valid regular expressions"))
    .collect()
});

/// Pulls a transaction id out of a wallet provider's response body.
///
/// JSON bodies are checked for `transaction_id`, `id` or `tx_id`, at the top level or inside a `data` object, and
/// nothing else. Non-JSON bodies are scanned for UUIDs, `transaction id: ...` / `tx_id: ...` phrases, 0x-prefixed
/// transaction hashes and long alphanumeric ids, in that order.
pub fn extract_transaction_id(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }
    // JSON replies carry ids only in named fields. Other long strings in them (wallet addresses, hashes of the
    // request) are not transaction ids.
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let candidates = [Some(&json), json.get("data")];
        let id = candidates
            .into_iter()
            .flatten()
            .find_map(|obj| ID_FIELDS.iter().find_map(|field| obj.get(*field).and_then(id_value)));
        if let Some(id) = &id {
            trace!("Transaction id found in JSON response: {id}");
        }
        return id;
    }
    ID_PATTERNS.iter().find_map(|re| {
        re.captures(body).and_then(|caps| caps.get(1).or_else(|| caps.get(0))).map(|m| m.as_str().to_string())
    })
}

fn id_value(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
