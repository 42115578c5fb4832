//! Stage composition: raw input → normalized rows → features → scores.

use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::{IngestError, WalletScoreError};
use crate::export::{write_features, write_scores};
use crate::features::build_wallet_features;
use crate::ingest::load_transactions;
use crate::normalize::normalize;
use crate::traits::CreditScorer;
use crate::types::{NormalizedTransaction, WalletFeatures, WalletScore};

/// The three tables produced by one run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub transactions: Vec<NormalizedTransaction>,
    pub features: Vec<WalletFeatures>,
    pub scores: Vec<WalletScore>,
}

/// Run every stage over an already parsed input document.
pub fn run<S: CreditScorer>(input: &Value, scorer: &S) -> Result<PipelineOutput, IngestError> {
    Ok(score_transactions(normalize(input)?, scorer))
}

/// Aggregate and score already normalized rows.
pub fn score_transactions<S: CreditScorer>(
    transactions: Vec<NormalizedTransaction>,
    scorer: &S,
) -> PipelineOutput {
    let features = build_wallet_features(&transactions);
    let scores = scorer.score(&features);
    info!(wallets = scores.len(), "pipeline: scores calculated");

    PipelineOutput {
        transactions,
        features,
        scores,
    }
}

/// Read `input`, score it and write the score table to `output`.
///
/// When `features_out` is given the feature table is written there after
/// the score table, so a failed score write leaves no feature file behind.
/// Nothing is written if the input cannot be read or has the wrong shape.
pub fn run_files<S: CreditScorer>(
    input: &Path,
    output: &Path,
    features_out: Option<&Path>,
    scorer: &S,
) -> Result<PipelineOutput, WalletScoreError> {
    let result = score_transactions(load_transactions(input)?, scorer);

    write_scores(output, &result.scores)?;
    if let Some(path) = features_out {
        write_features(path, &result.features)?;
    }
    Ok(result)
}
