use serde::Deserialize;

// listings csv
//  ├── raw_address      "1 State St, Chicago, IL 60601"
//  ├── postal_code      optional, may disagree with the address
//  ├── sq_ft            numeric-ish text
//  ├── bedrooms         numeric-ish text
//  └── listing_price    numeric-ish text
//
// demographics csv
//  ├── zip_code         join key, noisy
//  ├── median_income    numeric-ish text
//  ├── school_rating    numeric-ish text
//  └── crime_index      category label

/// One raw listings row, exactly as the source file carries it. Numeric-ish
/// columns stay text until the cleaner coerces them.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub raw_address: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub sq_ft: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<String>,
    #[serde(default)]
    pub listing_price: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDemographic {
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub median_income: Option<String>,
    #[serde(default)]
    pub school_rating: Option<String>,
    #[serde(default)]
    pub crime_index: Option<String>,
}
