use serde::Serialize;

/// A demographics row after cleaning. `zip_code` is the unique join key;
/// a row whose key failed normalization keeps `None` and never matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemographicProfile {
    pub zip_code: Option<String>,
    pub median_income: Option<f64>,
    pub school_rating: Option<f64>,
    pub crime_index: Option<String>,
}
