// src/people/merge.rs
use std::collections::HashSet;

use crate::people::types::ProfileRecord;

/// Placeholder for an absent side of the fallback key, so that two
/// fully-empty records still collide into one.
const MISSING: &str = "None";

/// Unions both strategies' records, keeping the first record seen per dedup
/// key and preserving first-seen order.
pub fn dedupe(records: Vec<ProfileRecord>) -> Vec<ProfileRecord> {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();

    for record in records {
        if seen.insert(dedup_key(&record)) {
            kept.push(record);
        }
    }

    kept
}

/// Profile URL when present, otherwise the pipe-joined name/headline pair.
fn dedup_key(record: &ProfileRecord) -> String {
    match record.profile_url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => format!(
            "{}|{}",
            record.full_name.as_deref().unwrap_or(MISSING),
            record.headline.as_deref().unwrap_or(MISSING),
        ),
    }
}
