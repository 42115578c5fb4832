//! Run configuration for the walletscore binary.
//!
//! Provides [`RunConfig`] with the fixed default input and output paths, so
//! the binary runs with no arguments.

use std::path::PathBuf;

use walletscore_core::constants::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse a `--log-format` value. Anything other than `"json"` is text.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Configuration for one scoring run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// JSON transaction log to read.
    pub input_path: PathBuf,
    /// Score table to write.
    pub output_path: PathBuf,
    /// Optional feature table dump.
    pub features_path: Option<PathBuf>,
    /// Log level filter string (e.g. "info", "walletscore_core=debug").
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            features_path: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}
