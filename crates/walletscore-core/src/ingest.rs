//! Input collaborator: read a transaction file and normalize it.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::IngestError;
use crate::normalize::normalize;
use crate::types::NormalizedTransaction;

/// Parse the JSON document at `path`.
///
/// Fails if the file is missing, unreadable or not valid JSON.
pub fn read_json(path: &Path) -> Result<Value, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_reader(BufReader::new(file)).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    info!(?path, "ingest: input parsed");
    Ok(value)
}

/// Read and normalize every transaction in the file at `path`.
pub fn load_transactions(path: &Path) -> Result<Vec<NormalizedTransaction>, IngestError> {
    normalize(&read_json(path)?)
}
