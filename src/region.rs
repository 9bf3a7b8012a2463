//! Region slug to emoji flag lookup.
//!
//! DigitalOcean region slugs are a three letter city code followed by a
//! datacenter number (`nyc3`, `fra1`). Only the city code matters here.

/// Country code for a three letter region code.
pub fn country_for_region(code: &str) -> Option<&'static str> {
    match code {
        "fra" => Some("DE"),
        "nyc" => Some("US"),
        "sfo" => Some("US"),
        "atl" => Some("US"),
        "ams" => Some("NL"),
        "sgp" => Some("SG"),
        "lon" => Some("GB"),
        "tor" => Some("CA"),
        "blr" => Some("IN"),
        "syd" => Some("AU"),
        _ => None,
    }
}

/// Flag glyph for a two letter country code.
pub fn flag_for_country(country: &str) -> Option<&'static str> {
    match country {
        "DE" => Some("\u{1F1E9}\u{1F1EA}"),
        "US" => Some("\u{1F1FA}\u{1F1F8}"),
        "SG" => Some("\u{1F1F8}\u{1F1EC}"),
        "GB" => Some("\u{1F1EC}\u{1F1E7}"),
        "NL" => Some("\u{1F1F3}\u{1F1F1}"),
        "CA" => Some("\u{1F1E8}\u{1F1E6}"),
        "IN" => Some("\u{1F1EE}\u{1F1F3}"),
        "AU" => Some("\u{1F1E6}\u{1F1FA}"),
        _ => None,
    }
}

/// Flag for a region slug, or `""` when the region is unknown or the slug
/// is shorter than three characters.
pub fn flag_for_region_slug(slug: &str) -> &'static str {
    slug.get(..3)
        .and_then(country_for_region)
        .and_then(flag_for_country)
        .unwrap_or("")
}
