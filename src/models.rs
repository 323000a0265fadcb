use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::people::ProfileRecord;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// JSON envelope written by the driver around the extracted profiles.
#[derive(Debug, Serialize)]
pub struct ParseReport {
    pub source: String,
    pub parsed_at: DateTime<Utc>,
    pub total_profiles: usize,
    pub profiles: Vec<ProfileRecord>,
}

impl ParseReport {
    pub fn new(source: String, profiles: Vec<ProfileRecord>) -> Self {
        Self {
            source,
            parsed_at: Utc::now(),
            total_profiles: profiles.len(),
            profiles,
        }
    }
}
