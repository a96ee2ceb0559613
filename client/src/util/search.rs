//! Search query URL helpers for the dashboard search input.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Query parameter carrying the dashboard search term.
pub const SEARCH_PARAM: &str = "search";

/// Debounce applied before a typed term is written to the URL.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Build `path?search=<term>`, or just `path` when the term is blank.
#[must_use]
pub fn build_search_url(path: &str, term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        return path.to_owned();
    }
    format!("{path}?{SEARCH_PARAM}={}", encode_query_value(term))
}

/// Percent-encode a query value, keeping RFC 3986 unreserved characters.
#[must_use]
pub fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(char::from(byte)),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
