use teller::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

/// Sample dataset shipped with the repository.
pub const DEFAULT_SHIPMENTS_PATH: &str = "resources/shipments.csv";

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Resolves the warehouse data path. An optional first argument overrides the
/// bundled sample; when given, it must name an existing file.
pub fn parse_shipments_arg() -> Result<PathBuf> {
    let filename = match env::args().nth(1) {
        Some(filename) => filename,
        None => return Ok(PathBuf::from(DEFAULT_SHIPMENTS_PATH)),
    };

    let path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    return Ok(path);
}
