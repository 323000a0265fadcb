// src/people/cards.rs
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::people::text::{clean_text, split_name};
use crate::people::types::{CardRule, CardSlot, ParserConfig, ProfileRecord};
use crate::people::url::{extract_public_id, normalize_profile_url, PUBLIC_ID_PATTERN};

/// Anchor-based card scanning strategy.
///
/// Every anchor whose href contains the `/in/` marker produces one record;
/// the surrounding card container is found by a bounded ancestor walk and
/// mined for name/headline/location elements and a connection-distance
/// token. Duplicate anchors for the same profile are expected here and
/// resolved by the merger.
pub struct CardExtractor {
    anchor_selector: Selector,
    public_id_regex: Regex,
    distance_regex: Regex,
    rules: Vec<CardRule>,
    max_ancestor_hops: usize,
    origin: String,
}

impl CardExtractor {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            anchor_selector: Selector::parse("a[href]").unwrap(),
            public_id_regex: Regex::new(PUBLIC_ID_PATTERN).unwrap(),
            distance_regex: Regex::new(r"(?i)\b(1st|2nd|3rd|\d+(?:st|nd|rd|th))\b").unwrap(),
            rules: config.card_rules.clone(),
            max_ancestor_hops: config.max_ancestor_hops,
            origin: config.origin.clone(),
        }
    }

    pub fn extract(&self, document: &Html) -> Vec<ProfileRecord> {
        let mut records = Vec::new();

        for anchor in document.select(&self.anchor_selector) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            // Sole admission filter: the profile-path marker.
            if !href.contains("/in/") {
                continue;
            }
            records.push(self.record_for_anchor(anchor, href));
        }

        debug!("Card strategy matched {} profile anchors", records.len());
        records
    }

    fn record_for_anchor(&self, anchor: ElementRef<'_>, href: &str) -> ProfileRecord {
        let profile_url = normalize_profile_url(href, &self.origin);
        // The public id comes from the raw href, not the normalized URL.
        let public_id = extract_public_id(&self.public_id_regex, href);

        let card = self.enclosing_card(anchor);
        let (name_el, headline_el, location_el) = self.classify_fields(card);

        let anchor_text = anchor.text().collect::<String>();
        // Anchor text takes priority over the heuristic name element.
        let full_name = clean_text(Some(anchor_text.as_str()))
            .or_else(|| name_el.and_then(|el| clean_text(Some(element_text(el).as_str()))));
        let headline = headline_el.and_then(|el| clean_text(Some(element_text(el).as_str())));
        let location = location_el.and_then(|el| clean_text(Some(element_text(el).as_str())));
        let distance = self.find_distance(card);

        let (first_name, last_name) = split_name(full_name.as_deref().unwrap_or(""));

        ProfileRecord {
            full_name,
            first_name,
            last_name,
            location,
            headline,
            distance,
            public_id,
            profile_url: Some(profile_url),
            ..ProfileRecord::default()
        }
    }

    /// Climbs at most `max_ancestor_hops` parent elements, stopping early at
    /// the tree root.
    fn enclosing_card<'a>(&self, anchor: ElementRef<'a>) -> ElementRef<'a> {
        let mut card = anchor;
        for _ in 0..self.max_ancestor_hops {
            match card.parent().and_then(ElementRef::wrap) {
                Some(parent) => card = parent,
                None => break,
            }
        }
        card
    }

    /// Scans the card's span/div descendants in document order and fills
    /// each slot with its first matching element. Filled slots are never
    /// overwritten.
    fn classify_fields<'a>(
        &self,
        card: ElementRef<'a>,
    ) -> (
        Option<ElementRef<'a>>,
        Option<ElementRef<'a>>,
        Option<ElementRef<'a>>,
    ) {
        let mut name_el = None;
        let mut headline_el = None;
        let mut location_el = None;

        for element in card.descendent_elements() {
            if element.id() == card.id() {
                continue;
            }
            if !matches!(element.value().name(), "span" | "div") {
                continue;
            }

            let class_list = element
                .value()
                .classes()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();

            for rule in &self.rules {
                let slot = match rule.slot {
                    CardSlot::Name => &mut name_el,
                    CardSlot::Headline => &mut headline_el,
                    CardSlot::Location => &mut location_el,
                };
                if slot.is_none() && rule.matches(&class_list) {
                    *slot = Some(element);
                }
            }
        }

        (name_el, headline_el, location_el)
    }

    /// First word-bounded connection ordinal in the card's flattened text,
    /// original casing preserved.
    fn find_distance(&self, card: ElementRef<'_>) -> Option<String> {
        let joined = card.text().collect::<Vec<_>>().join(" ");
        let flattened = joined.split_whitespace().collect::<Vec<_>>().join(" ");
        self.distance_regex
            .captures(&flattened)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
