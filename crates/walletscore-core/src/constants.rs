//! Scoring constants. Action vocabulary, feature groups, weights and default paths.

/// Sentinel used when a wallet or action cannot be resolved from a record.
pub const UNKNOWN: &str = "unknown";

/// Weight of the scaled safe-feature mean in the final score.
pub const SAFE_WEIGHT: f64 = 0.7;

/// Weight of the risk score in the final score.
pub const RISK_WEIGHT: f64 = 0.3;

/// Multiplier taking the weighted `[0, 1]` blend onto the credit scale.
pub const SCORE_SCALE: f64 = 1000.0;

/// Lowest credit score a wallet can receive.
pub const MIN_CREDIT_SCORE: f64 = 0.0;

/// Highest credit score a wallet can receive.
pub const MAX_CREDIT_SCORE: f64 = 1000.0;

/// Input file read by the CLI when no `--input` is given.
pub const DEFAULT_INPUT_PATH: &str = "data/user_transactions.json";

/// Output table written by the CLI when no `--output` is given.
pub const DEFAULT_OUTPUT_PATH: &str = "outputs/wallet_scores.csv";

/// Lending-protocol actions counted per wallet.
///
/// Any other action label (including the `"unknown"` sentinel) still counts
/// towards `total_txns` but has no dedicated counter.
///
/// # Examples
///
/// ```
/// use walletscore_core::constants::Action;
/// assert_eq!(Action::from_label("repay"), Some(Action::Repay));
/// assert_eq!(Action::from_label("swap"), None);
/// assert_eq!(Action::LiquidationCall.as_str(), "liquidationcall");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Deposit,
    Borrow,
    Repay,
    RedeemUnderlying,
    LiquidationCall,
}

impl Action {
    /// Every counted action, in column order.
    pub const ALL: [Action; 5] = [
        Action::Deposit,
        Action::Borrow,
        Action::Repay,
        Action::RedeemUnderlying,
        Action::LiquidationCall,
    ];

    /// Lowercase label as it appears in normalized transactions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Borrow => "borrow",
            Self::Repay => "repay",
            Self::RedeemUnderlying => "redeemunderlying",
            Self::LiquidationCall => "liquidationcall",
        }
    }

    /// Exact match against a normalized (lowercase) action label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == label)
    }
}

/// Features that raise the score after min–max scaling across all wallets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafeFeature {
    TotalTxns,
    TotalAmount,
    AverageAmount,
    MaxAmount,
    MinAmount,
    DepositCount,
    RepayCount,
    RedeemUnderlyingCount,
}

impl SafeFeature {
    pub const ALL: [SafeFeature; 8] = [
        SafeFeature::TotalTxns,
        SafeFeature::TotalAmount,
        SafeFeature::AverageAmount,
        SafeFeature::MaxAmount,
        SafeFeature::MinAmount,
        SafeFeature::DepositCount,
        SafeFeature::RepayCount,
        SafeFeature::RedeemUnderlyingCount,
    ];

    /// Column name in the feature table.
    pub fn column(&self) -> &'static str {
        match self {
            Self::TotalTxns => "total_txns",
            Self::TotalAmount => "total_amount",
            Self::AverageAmount => "average_amount",
            Self::MaxAmount => "max_amount",
            Self::MinAmount => "min_amount",
            Self::DepositCount => "deposit_count",
            Self::RepayCount => "repay_count",
            Self::RedeemUnderlyingCount => "redeemunderlying_count",
        }
    }
}

/// Features that lower the score. Used raw, never rescaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskFeature {
    BorrowToRepayRatio,
    LiquidationRatio,
    BorrowCount,
    LiquidationCallCount,
}

impl RiskFeature {
    pub const ALL: [RiskFeature; 4] = [
        RiskFeature::BorrowToRepayRatio,
        RiskFeature::LiquidationRatio,
        RiskFeature::BorrowCount,
        RiskFeature::LiquidationCallCount,
    ];

    /// Column name in the feature table.
    pub fn column(&self) -> &'static str {
        match self {
            Self::BorrowToRepayRatio => "borrow_to_repay_ratio",
            Self::LiquidationRatio => "liquidation_ratio",
            Self::BorrowCount => "borrow_count",
            Self::LiquidationCallCount => "liquidationcall_count",
        }
    }
}
