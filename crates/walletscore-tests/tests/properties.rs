//! Property tests over randomly generated transaction logs.
//!
//! Checks the whole-pipeline invariants: one score per distinct resolved
//! wallet, every score inside `[0, 1000]`, and no panics on noisy fields.

use std::collections::BTreeSet;

use proptest::prelude::*;
use serde_json::{Value, json};
use walletscore_core::constants::UNKNOWN;
use walletscore_tests::helpers::score;

const ACTIONS: [&str; 8] = [
    "deposit",
    "borrow",
    "repay",
    "redeemunderlying",
    "liquidationcall",
    "Deposit",
    "swap",
    "",
];

/// Amount encodings seen in real logs, plus garbage.
fn amount_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        (0.0f64..1e20).prop_map(|a| json!(a)),
        (0u64..u64::MAX).prop_map(|a| json!(a.to_string())),
        Just(json!(null)),
        Just(json!("n/a")),
        Just(json!(-5)),
    ]
}

/// One record in one of several field layouts.
fn record_strategy() -> impl Strategy<Value = Value> {
    (0u8..6, 0usize..ACTIONS.len(), amount_strategy(), 0u8..4).prop_map(
        |(wallet, action, amount, layout)| {
            let wallet = format!("0x{wallet:02x}");
            let action = ACTIONS[action];
            match layout {
                0 => json!({"user": wallet, "type": action, "amount": amount}),
                1 => json!({"action": action, "params": {"user": wallet, "amount": amount}}),
                2 => json!({"wallet": wallet, "method": action, "params": {"value": amount}}),
                _ => json!({"type": action, "amount": amount}),
            }
        },
    )
}

proptest! {
    #[test]
    fn one_bounded_score_per_wallet(records in proptest::collection::vec(record_strategy(), 1..80)) {
        let input = Value::Array(records);
        let out = score(&input);

        prop_assert_eq!(out.transactions.len(), input.as_array().unwrap().len());

        let resolved: BTreeSet<&str> = out.transactions.iter().map(|t| t.wallet.as_str()).collect();
        let scored: Vec<&str> = out.scores.iter().map(|s| s.wallet.as_str()).collect();
        let scored_set: BTreeSet<&str> = scored.iter().copied().collect();
        prop_assert_eq!(scored.len(), scored_set.len());
        prop_assert_eq!(&scored_set, &resolved);

        for s in &out.scores {
            prop_assert!((0.0..=1000.0).contains(&s.credit_score), "{} -> {}", s.wallet, s.credit_score);
        }
    }

    #[test]
    fn identical_wallets_score_identically(n in 2usize..10, amount in 1.0f64..1e9) {
        let records: Vec<Value> = (0..n)
            .map(|i| json!({"user": format!("0x{i}"), "type": "deposit", "amount": amount}))
            .collect();
        let out = score(&Value::Array(records));

        // Every safe column is constant, so each wallet lands on the risk-only score.
        for s in &out.scores {
            prop_assert!((s.credit_score - 300.0).abs() < 1e-9);
        }
    }

    #[test]
    fn unknown_wallet_only_when_unresolved(records in proptest::collection::vec(record_strategy(), 1..40)) {
        let expect_unknown = records.iter().any(|r| {
            r.get("user").is_none() && r.get("wallet").is_none() && r.pointer("/params/user").is_none()
        });
        let out = score(&Value::Array(records));
        let has_unknown = out.scores.iter().any(|s| s.wallet == UNKNOWN);
        prop_assert_eq!(has_unknown, expect_unknown);
    }
}
