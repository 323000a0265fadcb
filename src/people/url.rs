// src/people/url.rs
use regex::Regex;

/// Captures the slug after the `/in/` profile-path marker. Percent escapes
/// stay encoded; the slug is taken verbatim from the href.
pub const PUBLIC_ID_PATTERN: &str = r"/in/([A-Za-z0-9\-_%]+)";

/// Turns a possibly relative profile href into an absolute URL.
///
/// Protocol-relative hrefs get the https scheme, root-relative ones get the
/// configured origin, anything else passes through unchanged (no further
/// validation of absolute URLs or unusual schemes).
pub fn normalize_profile_url(href: &str, origin: &str) -> String {
    if href.starts_with("//") {
        format!("https:{href}")
    } else if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        href.to_string()
    }
}

/// Pulls the public id out of a profile path, if the marker is present.
pub fn extract_public_id(pattern: &Regex, text: &str) -> Option<String> {
    let caps = pattern.captures(text)?;
    let slug = caps.get(1)?.as_str().trim_end_matches('/');
    if slug.is_empty() {
        None
    } else {
        Some(slug.to_string())
    }
}
