// errors.rs
use std::fmt;

/// Errors originating from either the loader (I/O, CSV shape)
/// or downstream pipeline stages (merge invariants, export).
#[derive(Debug)]
pub enum PipelineError {
    /// The demographics side of the join carried the same ZIP key twice.
    /// Merging would have to guess which row wins, so it refuses instead.
    DuplicateZipKey(String),
    LoadError(String),
    XlsxError(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::DuplicateZipKey(zip) => {
                write!(f, "Duplicate ZIP key in demographics: {zip}")
            }
            PipelineError::LoadError(msg) => write!(f, "Load error: {msg}"),
            PipelineError::XlsxError(msg) => write!(f, "Xlsx export error: {msg}"),
        }
    }
}

impl std::error::Error for PipelineError {}
