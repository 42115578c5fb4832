//! Output collaborator: write score and feature tables as CSV.
//!
//! The destination directory is created when absent. Headers are always
//! written, so an empty table still produces a valid file.

use std::fs;
use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use crate::error::ExportError;
use crate::types::{WalletFeatures, WalletScore};

/// Header of the score table.
pub const SCORE_HEADER: [&str; 2] = ["wallet", "credit_score"];

/// Header of the feature table, in [`WalletFeatures`] field order.
pub const FEATURE_HEADER: [&str; 15] = [
    "wallet",
    "total_txns",
    "total_amount",
    "average_amount",
    "max_amount",
    "min_amount",
    "deposit_count",
    "borrow_count",
    "repay_count",
    "redeemunderlying_count",
    "liquidationcall_count",
    "borrow_to_repay_ratio",
    "liquidation_ratio",
    "first_seen",
    "last_seen",
];

/// Create the parent directory of `path` if it does not exist.
pub fn ensure_parent_dir(path: &Path) -> Result<(), ExportError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Render a score in plain decimal notation, always with a fractional part.
///
/// # Examples
///
/// ```
/// use walletscore_core::export::format_score;
/// assert_eq!(format_score(187.5), "187.5");
/// assert_eq!(format_score(1000.0), "1000.0");
/// assert_eq!(format_score(0.0000001), "0.0000001");
/// ```
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}

/// Write the `wallet,credit_score` table to `path`.
pub fn write_scores(path: &Path, scores: &[WalletScore]) -> Result<(), ExportError> {
    ensure_parent_dir(path)?;
    let csv_err = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    wtr.write_record(SCORE_HEADER).map_err(csv_err)?;
    for score in scores {
        wtr.write_record([score.wallet.as_str(), format_score(score.credit_score).as_str()])
            .map_err(csv_err)?;
    }
    wtr.flush().map_err(|source| ExportError::Flush {
        path: path.to_path_buf(),
        source,
    })?;

    info!(?path, wallets = scores.len(), "export: scores written");
    Ok(())
}

/// Write the full feature table to `path`.
pub fn write_features(path: &Path, features: &[WalletFeatures]) -> Result<(), ExportError> {
    ensure_parent_dir(path)?;
    let csv_err = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    wtr.write_record(FEATURE_HEADER).map_err(csv_err)?;
    for row in features {
        wtr.serialize(row).map_err(csv_err)?;
    }
    wtr.flush().map_err(|source| ExportError::Flush {
        path: path.to_path_buf(),
        source,
    })?;

    info!(?path, wallets = features.len(), "export: features written");
    Ok(())
}
