use crate::loader::{DataFiles, Loader};
use crate::pipeline::run_pipeline;
use chrono::Utc;
use std::collections::HashSet;

mod domain;
mod errors;
mod loader;
mod output;
mod pipeline;


fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "Usage: {} <demographics.csv> <listings.csv> [out.xlsx]",
            args[0]
        );
        std::process::exit(1);
    }

    let files = DataFiles {
        demographics_path: args[1].clone(),
        listings_path: args[2].clone(),
    };
    let out_path = args.get(3).map(String::as_str).unwrap_or("reconciled.xlsx");

    println!(
        "Run started at {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );

    // 1. Load both CSV batches (cached by file identity).
    let mut loader = Loader::new();
    let (demographics, listings) = match loader.load_raw_data(&files) {
        Ok(batches) => batches,
        Err(e) => {
            eprintln!("❌ Loading input files failed: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "Loaded {} demographics rows, {} listing rows",
        demographics.len(),
        listings.len()
    );

    // 2. Clean, resolve, merge, geocode.
    let result = match run_pipeline(demographics, listings) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("❌ Pipeline failed: {e}");
            std::process::exit(1);
        }
    };

    let keys: HashSet<&str> = result
        .demographics
        .iter()
        .filter_map(|d| d.zip_code.as_deref())
        .collect();
    let matched = result
        .reconciled
        .iter()
        .filter(|r| r.zip_code.as_deref().map_or(false, |z| keys.contains(z)))
        .count();
    println!(
        "Matched {matched} of {} listings to a demographics row",
        result.reconciled.len()
    );

    // 3. Export.
    if let Err(e) = output::save_reconciled_debug(&result.reconciled, "reconciled_debug.json") {
        eprintln!("Debug dump failed: {e}");
    }
    if let Err(e) = output::export_reconciled_xlsx(&result.reconciled, out_path) {
        eprintln!("❌ Export failed: {e}");
        std::process::exit(1);
    }

    println!("✅ Wrote {out_path}");
}
