//! Min–max scaling of a single feature column.
//!
//! A column is fitted on every wallet's value, then each value is mapped
//! linearly so the observed minimum becomes 0 and the maximum becomes 1.
//!
//! A column whose range is below [`DEGENERATE_RANGE`] is degenerate: every
//! value in it scales to exactly 0, never NaN.

/// Ranges narrower than this are treated as zero-width.
pub const DEGENERATE_RANGE: f64 = 10.0 * f64::EPSILON;

/// Fitted bounds of one feature column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxScaler {
    min: f64,
    max: f64,
}

impl MinMaxScaler {
    /// Fit the scaler on a column. An empty column fits to `[0, 0]`.
    pub fn fit(column: impl IntoIterator<Item = f64>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for x in column {
            min = min.min(x);
            max = max.max(x);
        }
        if min > max {
            return Self { min: 0.0, max: 0.0 };
        }
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether every fitted value scales to 0.
    pub fn is_degenerate(&self) -> bool {
        let range = self.max - self.min;
        range.is_nan() || range < DEGENERATE_RANGE
    }

    /// Scale `x` into `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use walletscore_engine::scaler::MinMaxScaler;
    ///
    /// let scaler = MinMaxScaler::fit([10.0, 20.0, 30.0]);
    /// assert_eq!(scaler.transform(10.0), 0.0);
    /// assert_eq!(scaler.transform(20.0), 0.5);
    /// assert_eq!(scaler.transform(30.0), 1.0);
    ///
    /// let constant = MinMaxScaler::fit([7.0, 7.0]);
    /// assert_eq!(constant.transform(7.0), 0.0);
    /// ```
    pub fn transform(&self, x: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        ((x - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}
