//! Error types for Walletscore.
//!
//! Only structural failures are errors. Malformed fields inside a single
//! transaction record degrade to sentinels and never surface here.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("cannot read {path:?}: {source}")] Read { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON in {path:?}: {source}")] Json { path: PathBuf, source: serde_json::Error },
    #[error("top-level input must be an object or an array, got {0}")] InvalidShape(&'static str),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot create directory {path:?}: {source}")] CreateDir { path: PathBuf, source: std::io::Error },
    #[error("csv write to {path:?}: {source}")] Csv { path: PathBuf, source: csv::Error },
    #[error("flush {path:?}: {source}")] Flush { path: PathBuf, source: std::io::Error },
}

#[derive(Error, Debug)]
pub enum WalletScoreError {
    #[error(transparent)] Ingest(#[from] IngestError),
    #[error(transparent)] Export(#[from] ExportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_shape_message_names_kind() {
        let err = IngestError::InvalidShape("string");
        assert_eq!(
            err.to_string(),
            "top-level input must be an object or an array, got string"
        );
    }

    #[test]
    fn umbrella_is_transparent() {
        let err: WalletScoreError = IngestError::InvalidShape("number").into();
        assert!(matches!(err, WalletScoreError::Ingest(IngestError::InvalidShape("number"))));
        assert!(err.to_string().ends_with("got number"));
    }
}
