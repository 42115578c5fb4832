//! Table rows passed between pipeline stages.
//!
//! Each stage builds a fresh `Vec` of its own row type; earlier tables are
//! only ever borrowed downstream.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::{Action, RiskFeature, SafeFeature};

/// A raw transaction entry as found in the input file. No field is guaranteed.
pub type RawTransaction = serde_json::Map<String, serde_json::Value>;

/// One fixed-schema row per raw input entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedTransaction {
    /// Resolved wallet address, or [`UNKNOWN`](crate::constants::UNKNOWN).
    pub wallet: String,
    /// Lowercase action label, or [`UNKNOWN`](crate::constants::UNKNOWN).
    pub action: String,
    /// Non-negative, finite transaction magnitude. `0.0` when unresolved.
    pub amount: f64,
    /// Epoch-seconds timestamp, `None` when missing or unparsable.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Behavioural summary of one wallet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletFeatures {
    pub wallet: String,
    pub total_txns: u64,
    pub total_amount: f64,
    pub average_amount: f64,
    pub max_amount: f64,
    pub min_amount: f64,
    pub deposit_count: u64,
    pub borrow_count: u64,
    pub repay_count: u64,
    pub redeemunderlying_count: u64,
    pub liquidationcall_count: u64,
    /// `borrow_count / (repay_count + 1)`.
    pub borrow_to_repay_ratio: f64,
    /// `liquidationcall_count / (total_txns + 1)`.
    pub liquidation_ratio: f64,
    /// Earliest resolved timestamp. Not used for scoring.
    pub first_seen: Option<DateTime<Utc>>,
    /// Latest resolved timestamp. Not used for scoring.
    pub last_seen: Option<DateTime<Utc>>,
}

impl WalletFeatures {
    /// Number of transactions of the given action.
    pub fn action_count(&self, action: Action) -> u64 {
        match action {
            Action::Deposit => self.deposit_count,
            Action::Borrow => self.borrow_count,
            Action::Repay => self.repay_count,
            Action::RedeemUnderlying => self.redeemunderlying_count,
            Action::LiquidationCall => self.liquidationcall_count,
        }
    }

    /// Unscaled value of a safe feature.
    pub fn safe(&self, feature: SafeFeature) -> f64 {
        match feature {
            SafeFeature::TotalTxns => self.total_txns as f64,
            SafeFeature::TotalAmount => self.total_amount,
            SafeFeature::AverageAmount => self.average_amount,
            SafeFeature::MaxAmount => self.max_amount,
            SafeFeature::MinAmount => self.min_amount,
            SafeFeature::DepositCount => self.deposit_count as f64,
            SafeFeature::RepayCount => self.repay_count as f64,
            SafeFeature::RedeemUnderlyingCount => self.redeemunderlying_count as f64,
        }
    }

    /// Value of a risk feature.
    pub fn risk(&self, feature: RiskFeature) -> f64 {
        match feature {
            RiskFeature::BorrowToRepayRatio => self.borrow_to_repay_ratio,
            RiskFeature::LiquidationRatio => self.liquidation_ratio,
            RiskFeature::BorrowCount => self.borrow_count as f64,
            RiskFeature::LiquidationCallCount => self.liquidationcall_count as f64,
        }
    }
}

/// Final credit score of one wallet, in `[0, 1000]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletScore {
    pub wallet: String,
    pub credit_score: f64,
}
