// src/people/json_ld.rs
use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::debug;

use crate::people::text::{clean_text, split_name};
use crate::people::types::ProfileRecord;
use crate::people::url::{extract_public_id, PUBLIC_ID_PATTERN};

/// JSON-LD fallback strategy.
///
/// Scans `application/ld+json` script blocks for Person-typed objects. The
/// `url` field is taken as-is (structured data carries absolute URLs);
/// location and distance never appear in these blocks and stay empty.
pub struct JsonLdExtractor {
    script_selector: Selector,
    public_id_regex: Regex,
}

impl JsonLdExtractor {
    pub fn new() -> Self {
        Self {
            script_selector: Selector::parse("script[type='application/ld+json']").unwrap(),
            public_id_regex: Regex::new(PUBLIC_ID_PATTERN).unwrap(),
        }
    }

    pub fn extract(&self, document: &Html) -> Vec<ProfileRecord> {
        let mut records = Vec::new();

        for script in document.select(&self.script_selector) {
            let raw = script.text().collect::<String>();
            let payload: Value = match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    // Malformed structured data is common and non-fatal.
                    debug!("Skipping unparseable ld+json block: {}", err);
                    continue;
                }
            };

            for object in as_sequence(payload) {
                if let Some(record) = self.person_record(&object) {
                    records.push(record);
                }
            }
        }

        debug!(
            "Structured-data strategy matched {} Person objects",
            records.len()
        );
        records
    }

    fn person_record(&self, object: &Value) -> Option<ProfileRecord> {
        let map = object.as_object()?;
        if map.get("@type").and_then(Value::as_str) != Some("Person") {
            return None;
        }

        let full_name = clean_text(map.get("name").and_then(Value::as_str));
        let (first_name, last_name) = split_name(full_name.as_deref().unwrap_or(""));
        let headline = clean_text(map.get("jobTitle").and_then(Value::as_str));
        let url = map.get("url").and_then(Value::as_str);
        let public_id = url.and_then(|u| extract_public_id(&self.public_id_regex, u));

        Some(ProfileRecord {
            full_name,
            first_name,
            last_name,
            headline,
            public_id,
            profile_url: url.map(str::to_string),
            ..ProfileRecord::default()
        })
    }
}

impl Default for JsonLdExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// A single object becomes a one-element sequence; null becomes empty.
fn as_sequence(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<ProfileRecord> {
        let document = Html::parse_document(html);
        JsonLdExtractor::new().extract(&document)
    }

    #[test]
    fn maps_person_object() {
        let html = r#"
            <script type="application/ld+json">
              {"@type":"Person","name":"Ann Lee","jobTitle":"CTO",
               "url":"https://linkedin.com/in/annlee"}
            </script>
        "#;

        let records = extract(html);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.full_name.as_deref(), Some("Ann Lee"));
        assert_eq!(record.first_name.as_deref(), Some("Ann"));
        assert_eq!(record.last_name.as_deref(), Some("Lee"));
        assert_eq!(record.headline.as_deref(), Some("CTO"));
        assert_eq!(record.public_id.as_deref(), Some("annlee"));
        assert_eq!(
            record.profile_url.as_deref(),
            Some("https://linkedin.com/in/annlee")
        );
        assert_eq!(record.location, None);
        assert_eq!(record.distance, None);
    }

    #[test]
    fn array_payload_keeps_only_persons() {
        let html = r#"
            <script type="application/ld+json">
              [{"@type":"Organization","name":"Acme"},
               {"@type":"Person","name":"Ann Lee"},
               "stray string",
               {"name":"untyped"}]
            </script>
        "#;

        let records = extract(html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].full_name.as_deref(), Some("Ann Lee"));
    }

    #[test]
    fn malformed_blocks_are_skipped() {
        let html = r#"
            <script type="application/ld+json">{not json at all</script>
            <script type="application/ld+json">
              {"@type":"Person","name":"Bob Ray"}
            </script>
        "#;

        let records = extract(html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].full_name.as_deref(), Some("Bob Ray"));
    }

    #[test]
    fn null_and_non_ld_scripts_yield_nothing() {
        let html = r#"
            <script type="application/ld+json">null</script>
            <script>var person = {"@type":"Person","name":"Not Me"};</script>
        "#;
        assert!(extract(html).is_empty());
    }

    #[test]
    fn non_string_url_is_ignored() {
        let html = r#"
            <script type="application/ld+json">
              {"@type":"Person","name":"Ann Lee","url":42}
            </script>
        "#;

        let records = extract(html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].public_id, None);
        assert_eq!(records[0].profile_url, None);
    }
}
