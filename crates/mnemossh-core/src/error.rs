//! Errors raised by the derivation pipeline.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid seed length: need {expected} bytes, got {actual}")]
    InvalidSeedLength { expected: usize, actual: usize },
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),
    #[error("Encoding failed: {0}")]
    Encoding(String),
    #[error("Malformed key: {0}")]
    MalformedKey(String),
    #[error("Failed to write {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
