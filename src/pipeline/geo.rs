// Synthetic geocoding for map display. These are reproducible pseudo
// positions scattered over the continental display extent, not real ones.

use crate::domain::reconciled::ReconciledRow;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const LAT_RANGE: (f64, f64) = (25.0, 49.0);
pub const LON_RANGE: (f64, f64) = (-124.0, -66.0);

/// Deterministic pseudo-coordinates for a ZIP code.
///
/// The digit string seeds the generator, so the same ZIP always lands on the
/// same point across runs. Latitude is drawn first, then longitude.
pub fn zip_to_lat_lon(zip: &str) -> (f64, f64) {
    // Normalized ZIPs are always numeric; anything else falls back to seed 0
    // rather than panicking.
    let seed = zip.parse::<u64>().unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(seed);
    let lat = rng.gen_range(LAT_RANGE.0..=LAT_RANGE.1);
    let lon = rng.gen_range(LON_RANGE.0..=LON_RANGE.1);
    (lat, lon)
}

/// Fill coordinates for every row that has a ZIP. Keyless rows keep `None`
/// and stay off the map, but remain in the batch.
pub fn add_geo(rows: &mut [ReconciledRow]) {
    for row in rows.iter_mut() {
        if let Some(zip) = row.zip_code.as_deref() {
            let (lat, lon) = zip_to_lat_lon(zip);
            row.lat = Some(lat);
            row.lon = Some(lon);
        }
    }
}
