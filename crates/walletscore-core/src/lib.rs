//! # walletscore-core
//! Data model and the first two stages of wallet credit scoring.
//!
//! - **Normalizer** ([`normalize`]): heterogeneous transaction records into
//!   fixed-schema rows, degrading malformed fields to sentinels.
//! - **Feature aggregator** ([`features`]): per-wallet counts, amount
//!   statistics and borrow/liquidation ratios.
//! - **Scoring seam** ([`traits::CreditScorer`]): implemented by
//!   `walletscore-engine`.
//! - **File collaborators** ([`ingest`], [`export`]) and stage
//!   composition ([`pipeline`]).

pub mod constants;
pub mod error;
pub mod export;
pub mod features;
pub mod ingest;
pub mod normalize;
pub mod pipeline;
pub mod traits;
pub mod types;

pub use error::{ExportError, IngestError, WalletScoreError};
pub use traits::CreditScorer;
pub use types::{NormalizedTransaction, RawTransaction, WalletFeatures, WalletScore};
