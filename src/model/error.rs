use std::io;

use thiserror::Error;

use crate::model::fs::FSError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid source location {location}: {reason}")]
    Location { location: String, reason: String },

    #[error("couldn't open {path} for writing: {source}")]
    Output { path: String, source: io::Error },

    #[error("failed to set up storage client: {0}")]
    Client(String),

    #[error("listing objects in {location} failed: {source}")]
    Listing { location: String, source: FSError },

    #[error("couldn't generate JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("couldn't write generated JSON to output: {0}")]
    Write(#[from] io::Error),

    #[error("short write when writing generated JSON to output: wrote {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },
}
