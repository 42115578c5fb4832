//! Shared test helpers for E2E and property tests.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{Value, json};
use walletscore_core::pipeline::{self, PipelineOutput};
use walletscore_engine::ScoreEngine;

/// A transaction in the `user`/`type`/`amount` shape.
pub fn flat_tx(user: &str, action: &str, amount: f64) -> Value {
    json!({"user": user, "type": action, "amount": amount})
}

/// A transaction with wallet and amount nested under `params`.
pub fn nested_tx(user: &str, action: &str, amount: &str) -> Value {
    json!({"action": action, "params": {"user": user, "amount": amount}})
}

/// Score an in-memory document with the production engine.
pub fn score(input: &Value) -> PipelineOutput {
    pipeline::run(input, &ScoreEngine::new()).unwrap()
}

/// Parse a written score table into `wallet → credit_score`.
pub fn read_scores(path: &Path) -> BTreeMap<String, f64> {
    let text = std::fs::read_to_string(path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("wallet,credit_score"));
    lines
        .map(|line| {
            let (wallet, score) = line.rsplit_once(',').unwrap();
            (wallet.to_string(), score.parse().unwrap())
        })
        .collect()
}

/// The three-transaction log used throughout the docs.
pub fn example_log() -> Value {
    json!([
        {"user": "0xA", "type": "deposit", "amount": 100},
        {"user": "0xA", "type": "borrow", "amount": 50},
        {"user": "0xA", "type": "repay", "amount": 50},
    ])
}
