//! # walletscore-engine — Credit score computation.
//!
//! - **Min–max scaling**: each safe feature column is rescaled to `[0, 1]`
//!   across the full wallet set; constant columns scale to 0.
//! - **Weighted blend**: `1000 * (0.7 * safe_score + 0.3 * risk_score)`,
//!   where risk features enter unscaled.
//! - **Saturation**: the result is clipped to `[0, 1000]`.

pub mod engine;
pub mod scaler;

pub use engine::{ScoreBreakdown, ScoreEngine};
pub use scaler::MinMaxScaler;
