// src/domain/listing.rs

use serde::Serialize;

/// A property listing after cleaning: flattened, normalized, ready for the
/// merge. This acts as an anti-corruption layer between the raw CSV rows and
/// the reconciled output.
///
/// Absent means absent. A missing price is `None`, never zero; a ZIP that
/// failed normalization is `None`, never a partial digit string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanListing {
    pub raw_address: Option<String>,
    /// The source's postal code if it had one, otherwise whatever ZIP the
    /// free-text address carried.
    pub postal_code: Option<String>,
    pub clean_address: Option<String>,
    /// Exactly 5 ASCII digits whenever present.
    pub zip_code: Option<String>,
    pub sq_ft: Option<f64>,
    pub bedrooms: Option<i64>,
    pub listing_price: Option<f64>,
    /// Defined iff listing_price and sq_ft are both present and sq_ft > 0.
    pub price_per_sqft: Option<f64>,
}
