//! Database naming: sanitization and CI-derived name resolution.

use crate::ci::CiContext;

/// Turns an arbitrary label into a provider-safe identifier.
///
/// `/` and `-` become `_`, the result is lowercased, then anything outside `[a-z0-9_]` is
/// dropped. Total and idempotent.
pub fn sanitize(raw: &str) -> String {
    raw.replace(['/', '-'], "_")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

/// Picks the database name for this run. First match wins:
/// an explicit non-blank hint, then `pr-<number>-<branch>`, then `test-<run number>`.
pub fn resolve_database_name(hint: Option<&str>, ci: &CiContext) -> String {
    if let Some(hint) = hint.filter(|h| !h.trim().is_empty()) {
        return sanitize(hint);
    }

    match &ci.pull_request {
        Some(pr) => sanitize(&format!("pr-{}-{}", pr.number, pr.head_ref)),
        None => sanitize(&format!("test-{}", ci.run_number)),
    }
}
