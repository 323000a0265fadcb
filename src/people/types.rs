// src/people/types.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_ORIGIN: &str = "https://www.linkedin.com";

/// One extracted person, keyed to the wire schema of the search results.
///
/// Every field is optional: a record exists as soon as an anchor or a
/// JSON-LD Person object matches, even when no surrounding field could be
/// recovered. `id` and `profile_id` are reserved slots that neither
/// extraction strategy currently populates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub id: Option<String>,
    pub location: Option<String>,
    pub headline: Option<String>,
    pub profile_id: Option<String>,
    pub distance: Option<String>,
    pub public_id: Option<String>,
    pub profile_url: Option<String>,
}

/// Which card field a class rule feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSlot {
    Name,
    Headline,
    Location,
}

/// Maps a class-list substring vocabulary to a card slot.
///
/// Rules are checked in order against every span/div inside the card; the
/// first element matching a rule fills its slot and the slot is never
/// overwritten. Markup drift is handled by extending the vocabulary, not by
/// touching the matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRule {
    pub slot: CardSlot,
    pub classes: Vec<String>,
}

impl CardRule {
    pub fn matches(&self, class_list: &str) -> bool {
        self.classes
            .iter()
            .any(|needle| class_list.contains(needle.as_str()))
    }
}

/// Tuning knobs for the extraction pipeline.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Origin prepended to root-relative profile hrefs.
    pub origin: String,
    /// How many parent levels to climb from an anchor to its card. Too
    /// shallow misses sibling fields, too deep merges unrelated cards.
    pub max_ancestor_hops: usize,
    /// Ordered class-vocabulary rules for name/headline/location.
    pub card_rules: Vec<CardRule>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            max_ancestor_hops: 4,
            card_rules: default_card_rules(),
        }
    }
}

pub fn default_card_rules() -> Vec<CardRule> {
    fn rule(slot: CardSlot, classes: &[&str]) -> CardRule {
        CardRule {
            slot,
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    vec![
        rule(
            CardSlot::Name,
            &["name", "actor-name", "entity-result__title-text"],
        ),
        rule(
            CardSlot::Headline,
            &["subtitle", "headline", "entity-result__primary-subtitle"],
        ),
        rule(
            CardSlot::Location,
            &["location", "entity-result__secondary-subtitle"],
        ),
    ]
}
