//! Score engine implementing the [`CreditScorer`] trait.
//!
//! Safe features are min–max scaled across the whole wallet set and
//! averaged into `safe_score`. Risk features are used raw:
//! `risk_score = 1 - mean(risk features)`, which goes negative for heavy
//! borrowers and liquidated wallets. The blend
//! `1000 * (0.7 * safe_score + 0.3 * risk_score)` is clipped to `[0, 1000]`.

use tracing::{debug, info};
use walletscore_core::constants::{
    MAX_CREDIT_SCORE, MIN_CREDIT_SCORE, RISK_WEIGHT, RiskFeature, SAFE_WEIGHT, SCORE_SCALE,
    SafeFeature,
};
use walletscore_core::traits::CreditScorer;
use walletscore_core::types::{WalletFeatures, WalletScore};

use crate::scaler::MinMaxScaler;

/// Intermediate scores of one wallet.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub wallet: String,
    /// Mean of the scaled safe features, in `[0, 1]`.
    pub safe_score: f64,
    /// `1 - mean(raw risk features)`. Unbounded below.
    pub risk_score: f64,
    /// Final clipped score, in `[0, 1000]`.
    pub credit_score: f64,
}

/// The production credit scorer.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine;

impl ScoreEngine {
    /// Create a new ScoreEngine.
    pub fn new() -> Self {
        Self
    }

    /// Fit one scaler per safe feature, in [`SafeFeature::ALL`] order.
    pub fn fit(features: &[WalletFeatures]) -> [MinMaxScaler; SafeFeature::ALL.len()] {
        SafeFeature::ALL.map(|feature| {
            let scaler = MinMaxScaler::fit(features.iter().map(|f| f.safe(feature)));
            if scaler.is_degenerate() {
                debug!(column = feature.column(), value = scaler.min(), "engine: constant column scales to 0");
            }
            scaler
        })
    }

    /// Compute safe, risk and credit scores for every wallet, in input order.
    pub fn breakdown(&self, features: &[WalletFeatures]) -> Vec<ScoreBreakdown> {
        let scalers = Self::fit(features);

        features
            .iter()
            .map(|f| {
                let safe_sum: f64 = SafeFeature::ALL
                    .iter()
                    .zip(&scalers)
                    .map(|(feature, scaler)| scaler.transform(f.safe(*feature)))
                    .sum();
                let safe_score = safe_sum / SafeFeature::ALL.len() as f64;

                let risk_sum: f64 = RiskFeature::ALL.iter().map(|r| f.risk(*r)).sum();
                let risk_score = 1.0 - risk_sum / RiskFeature::ALL.len() as f64;

                ScoreBreakdown {
                    wallet: f.wallet.clone(),
                    safe_score,
                    risk_score,
                    credit_score: credit_score(safe_score, risk_score),
                }
            })
            .collect()
    }
}

/// Blend and clip. NaN inputs resolve to the minimum score.
fn credit_score(safe_score: f64, risk_score: f64) -> f64 {
    let raw = SCORE_SCALE * (SAFE_WEIGHT * safe_score + RISK_WEIGHT * risk_score);
    if raw.is_nan() {
        return MIN_CREDIT_SCORE;
    }
    raw.clamp(MIN_CREDIT_SCORE, MAX_CREDIT_SCORE)
}

impl CreditScorer for ScoreEngine {
    fn score(&self, features: &[WalletFeatures]) -> Vec<WalletScore> {
        let scores: Vec<WalletScore> = self
            .breakdown(features)
            .into_iter()
            .map(|b| WalletScore {
                wallet: b.wallet,
                credit_score: b.credit_score,
            })
            .collect();

        let saturated = scores
            .iter()
            .filter(|s| s.credit_score == MIN_CREDIT_SCORE)
            .count();
        info!(wallets = scores.len(), saturated, "engine: credit scores computed");
        scores
    }
}
