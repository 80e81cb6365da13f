use serde::Serialize;

/// One listing joined to at most one demographics row, plus synthetic
/// display coordinates. Demographic fields are `None` when the listing's
/// ZIP matched nothing; lat/lon are `None` when there is no ZIP at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconciledRow {
    pub raw_address: Option<String>,
    pub postal_code: Option<String>,
    pub clean_address: Option<String>,
    pub zip_code: Option<String>,
    pub sq_ft: Option<f64>,
    pub bedrooms: Option<i64>,
    pub listing_price: Option<f64>,
    pub price_per_sqft: Option<f64>,

    pub median_income: Option<f64>,
    pub school_rating: Option<f64>,
    pub crime_index: Option<String>,

    pub lat: Option<f64>,
    pub lon: Option<f64>,
}
