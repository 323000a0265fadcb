// src/people/parser.rs
use scraper::Html;
use tracing::{debug, info};

use crate::people::cards::CardExtractor;
use crate::people::json_ld::JsonLdExtractor;
use crate::people::merge::dedupe;
use crate::people::types::{ParserConfig, ProfileRecord};

/// Runs both extraction strategies over a parsed document and merges their
/// output. Selectors and regexes are compiled once at construction; a parser
/// value holds no mutable state and can be reused across documents and
/// shared between threads.
pub struct PeopleParser {
    cards: CardExtractor,
    json_ld: JsonLdExtractor,
}

impl PeopleParser {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            cards: CardExtractor::new(&config),
            json_ld: JsonLdExtractor::new(),
        }
    }

    /// Extracts an ordered, de-duplicated list of profile records.
    ///
    /// Best-effort by design: malformed fragments degrade to missing fields
    /// or skipped blocks, never to an error. The html5ever front end builds
    /// a tree for any input string, so there is no failure path.
    pub fn parse(&self, html: &str) -> Vec<ProfileRecord> {
        let document = Html::parse_document(html);

        let mut records = self.cards.extract(&document);
        let from_cards = records.len();
        records.extend(self.json_ld.extract(&document));
        debug!(
            "Strategies produced {} card records and {} structured-data records",
            from_cards,
            records.len() - from_cards
        );

        let unique = dedupe(records);
        info!("Extracted {} unique profiles", unique.len());
        unique
    }
}

impl Default for PeopleParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}
