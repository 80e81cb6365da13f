// Approximate recovery of listing ZIP codes against the demographics key set.

use crate::domain::demographic::DemographicProfile;
use crate::domain::listing::CleanListing;
use std::collections::HashSet;

/// Minimum similarity score (0-100) a fuzzy match must clear.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 90.0;

/// The demographics key set in first-seen order, deduplicated.
///
/// Order matters: equal-score fuzzy matches resolve to the earliest entry,
/// so the iteration order of this list is the tie-break rule.
pub fn known_zips(demographics: &[DemographicProfile]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    demographics
        .iter()
        .filter_map(|d| d.zip_code.as_deref())
        .filter(|zip| seen.insert(*zip))
        .map(str::to_string)
        .collect()
}

/// Normalized edit-distance ratio on the 0-100 scale. Identical strings score
/// 100; one substituted digit between two 5-digit ZIPs scores exactly 90.
fn similarity(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 100.0;
    }
    let distance = strsim::levenshtein(a, b);
    100.0 * (1.0 - distance as f64 / total as f64)
}

/// Fuzzy-match a suspect ZIP against the known key set.
///
/// Absent in, absent out: there is nothing to score. Otherwise the
/// best-scoring key wins if it clears the threshold; on a tie the earliest
/// entry in `known` is kept.
pub fn resolve_zip(candidate: Option<&str>, known: &[String], threshold: f64) -> Option<String> {
    let candidate = candidate?;
    let mut best: Option<(&str, f64)> = None;
    for zip in known {
        let score = similarity(candidate, zip);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((zip.as_str(), score)),
        }
    }
    match best {
        Some((zip, score)) if score >= threshold => Some(zip.to_string()),
        _ => None,
    }
}

/// Second pass over cleaned listings: rows whose key is missing or unknown
/// get one fuzzy-match attempt, everything else is untouched. Unresolvable
/// rows keep `None` and simply won't match anything in the merge.
pub fn resolve_listings(listings: &mut [CleanListing], known: &[String]) {
    let members: HashSet<&str> = known.iter().map(String::as_str).collect();
    for listing in listings.iter_mut() {
        let is_known = listing
            .zip_code
            .as_deref()
            .map_or(false, |zip| members.contains(zip));
        if !is_known {
            listing.zip_code =
                resolve_zip(listing.zip_code.as_deref(), known, DEFAULT_MATCH_THRESHOLD);
        }
    }
}
