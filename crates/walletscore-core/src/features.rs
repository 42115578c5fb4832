//! Feature aggregator: per-wallet behavioural statistics.
//!
//! Rows are grouped by exact wallet string (the `"unknown"` sentinel is a
//! group like any other). The output is ordered by wallet in ascending byte
//! order.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::constants::Action;
use crate::types::{NormalizedTransaction, WalletFeatures};

/// Running totals for one wallet.
#[derive(Debug, Clone)]
struct Accumulator {
    count: u64,
    sum: f64,
    max: f64,
    min: f64,
    actions: [u64; Action::ALL.len()],
    first_seen: Option<DateTime<Utc>>,
    last_seen: Option<DateTime<Utc>>,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            max: f64::NEG_INFINITY,
            min: f64::INFINITY,
            actions: [0; Action::ALL.len()],
            first_seen: None,
            last_seen: None,
        }
    }

    fn push(&mut self, row: &NormalizedTransaction) {
        self.count += 1;
        self.sum += row.amount;
        self.max = self.max.max(row.amount);
        self.min = self.min.min(row.amount);

        if let Some(action) = Action::from_label(&row.action) {
            self.actions[action as usize] += 1;
        }

        if let Some(ts) = row.timestamp {
            self.first_seen = Some(self.first_seen.map_or(ts, |t| t.min(ts)));
            self.last_seen = Some(self.last_seen.map_or(ts, |t| t.max(ts)));
        }
    }

    fn finish(self, wallet: String) -> WalletFeatures {
        let count = |action: Action| self.actions[action as usize];

        let deposit_count = count(Action::Deposit);
        let borrow_count = count(Action::Borrow);
        let repay_count = count(Action::Repay);
        let redeemunderlying_count = count(Action::RedeemUnderlying);
        let liquidationcall_count = count(Action::LiquidationCall);

        // A group always holds at least one row, but keep empty groups at zero.
        let (total_amount, max_amount, min_amount) = if self.count == 0 {
            (0.0, 0.0, 0.0)
        } else {
            (finite(self.sum), self.max, self.min)
        };
        let average_amount = if self.count == 0 {
            0.0
        } else {
            total_amount / self.count as f64
        };

        WalletFeatures {
            wallet,
            total_txns: self.count,
            total_amount,
            average_amount,
            max_amount,
            min_amount,
            deposit_count,
            borrow_count,
            repay_count,
            redeemunderlying_count,
            liquidationcall_count,
            borrow_to_repay_ratio: borrow_count as f64 / (repay_count + 1) as f64,
            liquidation_ratio: liquidationcall_count as f64 / (self.count + 1) as f64,
            first_seen: self.first_seen,
            last_seen: self.last_seen,
        }
    }
}

/// Saturate an overflowed sum at the largest finite value.
fn finite(x: f64) -> f64 {
    if x.is_finite() { x } else { f64::MAX }
}

/// Build one [`WalletFeatures`] row per distinct wallet.
///
/// An empty input yields an empty table.
///
/// # Examples
///
/// ```
/// use walletscore_core::features::build_wallet_features;
/// use walletscore_core::types::NormalizedTransaction;
///
/// let row = |action: &str, amount: f64| NormalizedTransaction {
///     wallet: "0xA".into(),
///     action: action.into(),
///     amount,
///     timestamp: None,
/// };
/// let features = build_wallet_features(&[row("borrow", 50.0), row("repay", 50.0)]);
/// assert_eq!(features.len(), 1);
/// assert_eq!(features[0].borrow_to_repay_ratio, 0.5);
/// ```
pub fn build_wallet_features(rows: &[NormalizedTransaction]) -> Vec<WalletFeatures> {
    let mut groups: BTreeMap<&str, Accumulator> = BTreeMap::new();
    for row in rows {
        groups
            .entry(row.wallet.as_str())
            .or_insert_with(Accumulator::new)
            .push(row);
    }

    let features: Vec<WalletFeatures> = groups
        .into_iter()
        .map(|(wallet, acc)| acc.finish(wallet.to_string()))
        .collect();

    info!(rows = rows.len(), wallets = features.len(), "features: wallet features built");
    features
}
