// Cardinality-checked left join of listings onto demographics.

use crate::domain::demographic::DemographicProfile;
use crate::domain::listing::CleanListing;
use crate::domain::reconciled::ReconciledRow;
use crate::errors::PipelineError;
use std::collections::HashMap;

/// Left outer join on the normalized 5-digit key.
///
/// Every listing appears exactly once in the output, unmatched rows with
/// absent demographic fields. A duplicate key on the demographics side makes
/// the many-to-one relationship ambiguous, so the whole merge fails before
/// producing anything rather than guessing which row wins.
pub fn merge_data(
    demographics: &[DemographicProfile],
    listings: Vec<CleanListing>,
) -> Result<Vec<ReconciledRow>, PipelineError> {
    let mut by_zip: HashMap<&str, &DemographicProfile> = HashMap::new();
    for profile in demographics {
        if let Some(zip) = profile.zip_code.as_deref() {
            if by_zip.insert(zip, profile).is_some() {
                return Err(PipelineError::DuplicateZipKey(zip.to_string()));
            }
        }
    }

    Ok(listings
        .into_iter()
        .map(|listing| {
            let hit = listing
                .zip_code
                .as_deref()
                .and_then(|zip| by_zip.get(zip).copied());
            let (median_income, school_rating, crime_index) = match hit {
                Some(d) => (d.median_income, d.school_rating, d.crime_index.clone()),
                None => (None, None, None),
            };
            ReconciledRow {
                raw_address: listing.raw_address,
                postal_code: listing.postal_code,
                clean_address: listing.clean_address,
                zip_code: listing.zip_code,
                sq_ft: listing.sq_ft,
                bedrooms: listing.bedrooms,
                listing_price: listing.listing_price,
                price_per_sqft: listing.price_per_sqft,
                median_income,
                school_rating,
                crime_index,
                lat: None,
                lon: None,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(zip: Option<&str>, income: Option<f64>) -> DemographicProfile {
        DemographicProfile {
            zip_code: zip.map(str::to_string),
            median_income: income,
            school_rating: None,
            crime_index: None,
        }
    }

    fn listing(zip: Option<&str>) -> CleanListing {
        CleanListing {
            raw_address: None,
            postal_code: None,
            clean_address: None,
            zip_code: zip.map(str::to_string),
            sq_ft: None,
            bedrooms: None,
            listing_price: None,
            price_per_sqft: None,
        }
    }

    #[test]
    fn duplicate_demographics_key_is_fatal_and_names_the_zip() {
        let demographics = vec![
            profile(Some("60601"), Some(80000.0)),
            profile(Some("60601"), Some(95000.0)),
        ];
        let err = merge_data(&demographics, vec![listing(Some("60601"))]).unwrap_err();
        match err {
            PipelineError::DuplicateZipKey(zip) => assert_eq!(zip, "60601"),
            other => panic!("expected DuplicateZipKey, got {other:?}"),
        }
    }

    #[test]
    fn keyless_demographics_rows_are_not_duplicates() {
        let demographics = vec![profile(None, None), profile(None, None)];
        let out = merge_data(&demographics, vec![listing(None)]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].median_income, None);
    }

    #[test]
    fn output_length_always_equals_listings_length() {
        let demographics = vec![profile(Some("60601"), Some(80000.0))];
        let listings = vec![
            listing(Some("60601")),
            listing(Some("60601")), // many-to-one is fine on the listings side
            listing(Some("99999")),
            listing(None),
        ];
        let out = merge_data(&demographics, listings).unwrap();
        assert_eq!(out.len(), 4);

        assert_eq!(out[0].median_income, Some(80000.0));
        assert_eq!(out[1].median_income, Some(80000.0));
        assert_eq!(out[2].median_income, None);
        assert_eq!(out[3].median_income, None);
    }

    #[test]
    fn merge_does_not_synthesize_coordinates() {
        let demographics = vec![profile(Some("60601"), None)];
        let out = merge_data(&demographics, vec![listing(Some("60601"))]).unwrap();
        assert_eq!(out[0].lat, None);
        assert_eq!(out[0].lon, None);
    }
}
