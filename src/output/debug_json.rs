use crate::domain::reconciled::ReconciledRow;
use std::fs::File;
use std::io::BufWriter;

/// Pretty-printed JSON dump of the reconciled batch, for eyeballing a run.
pub fn save_reconciled_debug(rows: &[ReconciledRow], filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, rows)?;
    Ok(())
}
