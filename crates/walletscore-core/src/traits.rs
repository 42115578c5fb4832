//! Trait interfaces for Walletscore.
//!
//! - [`CreditScorer`] — feature table to score table (walletscore-engine implements)

use crate::types::{WalletFeatures, WalletScore};

/// Pure computation of credit scores from a complete feature table.
///
/// Scaling is relative to the whole table, so implementations receive every
/// wallet at once. The returned table holds exactly one row per input row,
/// in input order, with every `credit_score` in `[0, 1000]`.
pub trait CreditScorer {
    fn score(&self, features: &[WalletFeatures]) -> Vec<WalletScore>;
}
