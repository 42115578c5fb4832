//! End-to-end tests: JSON file in, CSV score table out.

use std::collections::BTreeSet;

use serde_json::json;
use walletscore_core::constants::UNKNOWN;
use walletscore_core::error::{IngestError, WalletScoreError};
use walletscore_core::pipeline::run_files;
use walletscore_engine::ScoreEngine;
use walletscore_tests::helpers::*;

/// Write `contents` to `data/user_transactions.json` under a fresh temp dir.
fn input_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    let path = data.join("user_transactions.json");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn example_log_scores_187_5() {
    let (dir, input) = input_file(&example_log().to_string());
    let output = dir.path().join("outputs").join("wallet_scores.csv");

    let result = run_files(&input, &output, None, &ScoreEngine::new()).unwrap();

    let f = &result.features[0];
    assert_eq!((f.deposit_count, f.borrow_count, f.repay_count), (1, 1, 1));
    assert_eq!(f.borrow_to_repay_ratio, 0.5);
    assert_eq!(f.liquidation_ratio, 0.0);

    let scores = read_scores(&output);
    assert_eq!(scores.len(), 1);
    let score = scores["0xA"];
    assert!(score > 0.0 && score < 1000.0);
    assert!((score - 187.5).abs() < 1e-9);
}

#[test]
fn every_wallet_appears_once() {
    let log = json!([
        flat_tx("0xA", "deposit", 10.0),
        nested_tx("0xB", "borrow", "25"),
        {"wallet": "0xC", "method": "liquidationCall", "amount": "7"},
        {"address": "0xD", "action": "redeemUnderlying"},
        {"foo": "bar"},
        flat_tx("0xA", "repay", 5.0),
        nested_tx("0xB", "repay", "25"),
        "not an object",
    ]);
    let (dir, input) = input_file(&log.to_string());
    let output = dir.path().join("outputs").join("wallet_scores.csv");

    run_files(&input, &output, None, &ScoreEngine::new()).unwrap();
    let scores = read_scores(&output);

    let expected: BTreeSet<_> = ["0xA", "0xB", "0xC", "0xD", UNKNOWN].into_iter().collect();
    let written: BTreeSet<_> = scores.keys().map(String::as_str).collect();
    assert_eq!(written, expected);
    assert!(scores.values().all(|s| (0.0..=1000.0).contains(s)));
}

#[test]
fn output_is_sorted_by_wallet() {
    let log = json!([
        flat_tx("0xC", "deposit", 1.0),
        flat_tx("0xA", "deposit", 2.0),
        flat_tx("0xB", "deposit", 3.0),
    ]);
    let (dir, input) = input_file(&log.to_string());
    let output = dir.path().join("scores.csv");
    run_files(&input, &output, None, &ScoreEngine::new()).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    let wallets: Vec<_> = text
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(wallets, ["0xA", "0xB", "0xC"]);
}

#[test]
fn single_object_input() {
    let (dir, input) = input_file(r#"{"user": "0xSolo", "type": "deposit", "amount": 5}"#);
    let output = dir.path().join("scores.csv");
    run_files(&input, &output, None, &ScoreEngine::new()).unwrap();

    let scores = read_scores(&output);
    // Every safe column is constant and no risk feature fires.
    assert!((scores["0xSolo"] - 300.0).abs() < 1e-9);
}

#[test]
fn empty_array_writes_header_only() {
    let (dir, input) = input_file("[]");
    let output = dir.path().join("outputs").join("wallet_scores.csv");
    run_files(&input, &output, None, &ScoreEngine::new()).unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "wallet,credit_score\n");
}

#[test]
fn bare_string_input_fails_without_output() {
    let (dir, input) = input_file("\"0xA\"");
    let output = dir.path().join("outputs").join("wallet_scores.csv");

    let err = run_files(&input, &output, None, &ScoreEngine::new()).unwrap_err();
    assert!(matches!(err, WalletScoreError::Ingest(IngestError::InvalidShape("string"))));
    assert!(!output.exists());
    assert!(!dir.path().join("outputs").exists());
}

#[test]
fn non_json_input_fails_without_output() {
    let (dir, input) = input_file("user,type,amount\n0xA,deposit,1\n");
    let output = dir.path().join("scores.csv");

    let err = run_files(&input, &output, None, &ScoreEngine::new()).unwrap_err();
    assert!(matches!(err, WalletScoreError::Ingest(IngestError::Json { .. })));
    assert!(!output.exists());
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_files(
        &dir.path().join("data").join("user_transactions.json"),
        &dir.path().join("scores.csv"),
        None,
        &ScoreEngine::new(),
    )
    .unwrap_err();
    assert!(matches!(err, WalletScoreError::Ingest(IngestError::Read { .. })));
}

#[test]
fn feature_dump_matches_scores() {
    let (dir, input) = input_file(&example_log().to_string());
    let output = dir.path().join("out").join("scores.csv");
    let features = dir.path().join("out").join("features.csv");

    run_files(&input, &output, Some(features.as_path()), &ScoreEngine::new()).unwrap();

    let text = std::fs::read_to_string(&features).unwrap();
    let mut lines = text.lines();
    let header: Vec<_> = lines.next().unwrap().split(',').collect();
    let row: Vec<_> = lines.next().unwrap().split(',').collect();
    let col = |name: &str| row[header.iter().position(|h| *h == name).unwrap()];

    assert_eq!(col("wallet"), "0xA");
    assert_eq!(col("total_txns"), "3");
    assert_eq!(col("deposit_count"), "1");
    assert_eq!(col("borrow_to_repay_ratio"), "0.5");
    assert_eq!(col("first_seen"), "");
    assert!(lines.next().is_none());
}

#[test]
fn prudent_wallet_outscores_liquidated_wallet() {
    let log = json!([
        flat_tx("0xSaver", "deposit", 5000.0),
        flat_tx("0xSaver", "deposit", 3000.0),
        flat_tx("0xSaver", "repay", 1000.0),
        flat_tx("0xSaver", "redeemunderlying", 2000.0),
        flat_tx("0xRisky", "borrow", 100.0),
        flat_tx("0xRisky", "borrow", 100.0),
        flat_tx("0xRisky", "liquidationcall", 100.0),
    ]);
    let out = score(&log);
    let by_wallet = |w: &str| out.scores.iter().find(|s| s.wallet == w).unwrap().credit_score;

    assert!(by_wallet("0xSaver") > by_wallet("0xRisky"));
    assert_eq!(by_wallet("0xRisky"), 0.0);
}

#[test]
fn noisy_fields_never_abort() {
    let log = json!([
        {"user": "0xA", "type": "deposit", "amount": "not-a-number", "timestamp": "soon"},
        {"user": "0xA", "type": null, "amount": {"nested": true}},
        {"user": "", "wallet": null, "params": "oops"},
        {"user": "0xA", "type": "DEPOSIT", "params": {"amount": "1e2"}, "time": 1_629_178_166},
    ]);
    let out = score(&log);
    assert_eq!(out.transactions.len(), 4);

    let a = out.features.iter().find(|f| f.wallet == "0xA").unwrap();
    assert_eq!(a.total_txns, 3);
    assert_eq!(a.deposit_count, 2);
    assert_eq!(a.total_amount, 100.0);
    assert!(a.first_seen.is_some());
    assert!(out.features.iter().any(|f| f.wallet == UNKNOWN));
}
