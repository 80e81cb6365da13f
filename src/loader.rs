// CSV loading with a memoized cache keyed by file identity.

use crate::errors::PipelineError;
use crate::pipeline::{RawDemographic, RawListing};
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::time::UNIX_EPOCH;

/// Where the two input batches live.
#[derive(Debug, Clone)]
pub struct DataFiles {
    pub demographics_path: String,
    pub listings_path: String,
}

/// Re-reading an unchanged file is wasted work, so parsed batches are
/// memoized against a fingerprint of the file's identity (path, size,
/// mtime). The core pipeline stays side-effect-free; dropping this cache
/// only costs time, never correctness.
#[derive(Default)]
pub struct Loader {
    demographics: HashMap<String, (String, Vec<RawDemographic>)>,
    listings: HashMap<String, (String, Vec<RawListing>)>,
}

fn fingerprint(path: &str) -> Result<String, PipelineError> {
    let meta = fs::metadata(path)
        .map_err(|e| PipelineError::LoadError(format!("stat {path}: {e}")))?;
    let mtime = meta
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    hasher.update(meta.len().to_le_bytes());
    hasher.update(mtime.to_le_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

fn read_csv<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, PipelineError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| PipelineError::LoadError(format!("open {path}: {e}")))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T =
            record.map_err(|e| PipelineError::LoadError(format!("parse {path}: {e}")))?;
        rows.push(row);
    }
    Ok(rows)
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load both raw batches, serving unchanged files from the cache.
    pub fn load_raw_data(
        &mut self,
        files: &DataFiles,
    ) -> Result<(Vec<RawDemographic>, Vec<RawListing>), PipelineError> {
        let demographics = Self::load_cached(&mut self.demographics, &files.demographics_path)?;
        let listings = Self::load_cached(&mut self.listings, &files.listings_path)?;
        Ok((demographics, listings))
    }

    fn load_cached<T: DeserializeOwned + Clone>(
        cache: &mut HashMap<String, (String, Vec<T>)>,
        path: &str,
    ) -> Result<Vec<T>, PipelineError> {
        let fp = fingerprint(path)?;
        if let Some((cached_fp, rows)) = cache.get(path) {
            if *cached_fp == fp {
                return Ok(rows.clone());
            }
        }
        let rows = read_csv::<T>(path)?;
        cache.insert(path.to_string(), (fp, rows.clone()));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ziplink_{}_{}", std::process::id(), name))
    }

    fn write_file(path: &PathBuf, contents: &str) {
        let mut file = fs::File::create(path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn loads_both_batches_from_csv() {
        let demo_path = temp_path("demo.csv");
        let listings_path = temp_path("listings.csv");
        write_file(
            &demo_path,
            "zip_code,median_income,school_rating,crime_index\n60601,80000,8.0,Low\n",
        );
        write_file(
            &listings_path,
            "raw_address,postal_code,sq_ft,bedrooms,listing_price\n\
             \"1 State St, Chicago, IL 60601\",,1000,2,300000\n",
        );

        let mut loader = Loader::new();
        let files = DataFiles {
            demographics_path: demo_path.to_string_lossy().into_owned(),
            listings_path: listings_path.to_string_lossy().into_owned(),
        };
        let (demographics, listings) = loader.load_raw_data(&files).unwrap();

        assert_eq!(demographics.len(), 1);
        assert_eq!(demographics[0].zip_code.as_deref(), Some("60601"));
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].postal_code, None); // empty cell is absent
        assert_eq!(listings[0].sq_ft.as_deref(), Some("1000"));

        fs::remove_file(demo_path).ok();
        fs::remove_file(listings_path).ok();
    }

    #[test]
    fn unchanged_file_is_served_from_cache_and_changes_reload() {
        let path = temp_path("demo_cache.csv");
        write_file(
            &path,
            "zip_code,median_income,school_rating,crime_index\n60601,80000,8.0,Low\n",
        );

        let key = path.to_string_lossy().into_owned();
        let mut loader = Loader::new();

        let first = Loader::load_cached::<RawDemographic>(&mut loader.demographics, &key).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(loader.demographics.len(), 1);

        let again = Loader::load_cached::<RawDemographic>(&mut loader.demographics, &key).unwrap();
        assert_eq!(again.len(), 1);
        assert_eq!(loader.demographics.len(), 1);

        // A different byte length changes the fingerprint even when the
        // filesystem's mtime granularity is coarse.
        write_file(
            &path,
            "zip_code,median_income,school_rating,crime_index\n60601,80000,8.0,Low\n90210,120000,9.0,Low\n",
        );
        let reloaded =
            Loader::load_cached::<RawDemographic>(&mut loader.demographics, &key).unwrap();
        assert_eq!(reloaded.len(), 2);

        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let mut loader = Loader::new();
        let files = DataFiles {
            demographics_path: "/nonexistent/demo.csv".to_string(),
            listings_path: "/nonexistent/listings.csv".to_string(),
        };
        let err = loader.load_raw_data(&files).unwrap_err();
        assert!(matches!(err, PipelineError::LoadError(_)));
    }
}
