mod models;

pub mod cleaner;
pub mod geo;
pub mod merger;
pub mod resolver;

pub use models::{RawDemographic, RawListing};

use crate::domain::demographic::DemographicProfile;
use crate::domain::reconciled::ReconciledRow;
use crate::errors::PipelineError;

/// Everything a downstream consumer needs: the reconciled batch for analysis
/// and the cleaned demographics batch for filter option enumeration.
#[derive(Debug)]
pub struct PipelineOutput {
    pub reconciled: Vec<ReconciledRow>,
    pub demographics: Vec<DemographicProfile>,
}

/// Full linkage run: clean both batches, recover bad listing keys against the
/// demographics key set, left-join, then synthesize display coordinates.
///
/// Pure and re-invocable: no I/O, no state shared across calls. The only
/// fatal outcome is a duplicate demographics key; every per-field problem is
/// absorbed as an absent value along the way.
pub fn run_pipeline(
    demographics: Vec<RawDemographic>,
    listings: Vec<RawListing>,
) -> Result<PipelineOutput, PipelineError> {
    let demographics = cleaner::clean_demographics(demographics);
    let mut listings = cleaner::clean_listings(listings);

    let known = resolver::known_zips(&demographics);
    resolver::resolve_listings(&mut listings, &known);

    let mut reconciled = merger::merge_data(&demographics, listings)?;
    geo::add_geo(&mut reconciled);

    Ok(PipelineOutput {
        reconciled,
        demographics,
    })
}
