// Cleaning and normalization of the raw CSV batches.

use crate::domain::demographic::DemographicProfile;
use crate::domain::listing::CleanListing;
use crate::pipeline::models::{RawDemographic, RawListing};
use once_cell::sync::Lazy;
use regex::Regex;

// A standalone 5-digit run, optionally carrying a ZIP+4 suffix we discard.
static ZIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{5})(?:-\d{4})?\b").unwrap());

/// Normalize a ZIP-code-like value to a 5-digit string.
///
/// A recognizable 5-digit run wins ("90210-1234" keeps its leading group).
/// Otherwise everything that is not a digit is dropped: no digits at all is
/// absent, an over-long run keeps its last 5 digits (junk numeric prefixes),
/// and a short run is zero-padded on the left. Never fails.
pub fn normalize_zip(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if let Some(caps) = ZIP_RE.captures(value) {
        return Some(caps[1].to_string());
    }
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let kept = if digits.len() > 5 {
        &digits[digits.len() - 5..]
    } else {
        &digits[..]
    };
    Some(format!("{kept:0>5}"))
}

/// Pull the first ZIP code out of unstructured text, scanning left to right.
pub fn extract_zip_from_text(text: &str) -> Option<String> {
    ZIP_RE.captures(text).map(|caps| caps[1].to_string())
}

fn abbreviate(token: &str) -> &str {
    match token {
        "street" => "st",
        "avenue" => "ave",
        "boulevard" => "blvd",
        "road" => "rd",
        "drive" => "dr",
        "lane" => "ln",
        "place" => "pl",
        "court" => "ct",
        "parkway" => "pkwy",
        other => other,
    }
}

/// Normalize address text for consistent matching and display: lowercase,
/// periods and commas become spaces, whitespace collapses, street suffixes
/// abbreviate. Never used as a join key.
pub fn normalize_address(text: &str) -> Option<String> {
    let lowered = text.to_lowercase().replace(['.', ','], " ");
    let tokens: Vec<&str> = lowered.split_whitespace().map(abbreviate).collect();
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

fn parse_f64(value: Option<&str>) -> Option<f64> {
    value?.trim().parse().ok()
}

fn parse_i64(value: Option<&str>) -> Option<i64> {
    value?.trim().parse().ok()
}

/// Per-row listing cleanup. Every row survives: an unparseable field becomes
/// `None`, never an error.
pub fn clean_listings(listings: Vec<RawListing>) -> Vec<CleanListing> {
    listings.into_iter().map(clean_listing).collect()
}

fn clean_listing(raw: RawListing) -> CleanListing {
    let clean_address = raw.raw_address.as_deref().and_then(normalize_address);

    // Prefer the explicit postal code; fall back to whatever the free-text
    // address carries.
    let postal_code = raw
        .postal_code
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| raw.raw_address.as_deref().and_then(extract_zip_from_text));

    let zip_code = normalize_zip(postal_code.as_deref());

    let sq_ft = parse_f64(raw.sq_ft.as_deref());
    let bedrooms = parse_i64(raw.bedrooms.as_deref());
    let listing_price = parse_f64(raw.listing_price.as_deref());

    // Defined only when both inputs exist and the area is meaningful.
    let price_per_sqft = match (listing_price, sq_ft) {
        (Some(price), Some(area)) if area > 0.0 => Some(price / area),
        _ => None,
    };

    CleanListing {
        raw_address: raw.raw_address,
        postal_code,
        clean_address,
        zip_code,
        sq_ft,
        bedrooms,
        listing_price,
        price_per_sqft,
    }
}

pub fn clean_demographics(demographics: Vec<RawDemographic>) -> Vec<DemographicProfile> {
    demographics
        .into_iter()
        .map(|raw| DemographicProfile {
            zip_code: normalize_zip(raw.zip_code.as_deref()),
            median_income: parse_f64(raw.median_income.as_deref()),
            school_rating: parse_f64(raw.school_rating.as_deref()),
            crime_index: raw.crime_index.filter(|s| !s.trim().is_empty()),
        })
        .collect()
}
