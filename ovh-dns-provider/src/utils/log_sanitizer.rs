//! Keep secrets and large payloads out of logs.
//!
//! Zone exports and record lists can be long; application secrets and
//! consumer keys must never be printed in full.

/// Longest response excerpt written to a log line, in bytes.
const TRUNCATE_LIMIT: usize = 256;

/// Characters of a secret left visible by [`mask_secret`].
const VISIBLE_SECRET_CHARS: usize = 4;

/// Cut `s` to at most [`TRUNCATE_LIMIT`] bytes on a char boundary, noting the full size.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Show only the first few characters of a credential, e.g. `abcd****`.
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(VISIBLE_SECRET_CHARS).collect();
    if visible.len() == secret.len() {
        "*".repeat(secret.chars().count().max(1))
    } else {
        format!("{visible}****")
    }
}
