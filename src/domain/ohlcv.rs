//! OHLCV bar representation.

use chrono::NaiveDate;

/// One daily observation, as delivered by a data provider and after validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OhlcvBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl OhlcvBar {
    /// (high + low + close) / 3
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// Checks the bar invariants, returning the first violated rule.
    ///
    /// A valid bar has finite fields, strictly positive prices,
    /// non-negative volume and `low <= open, close <= high`.
    pub fn check(&self) -> Result<(), String> {
        let fields = [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{name} is not finite ({value})"));
        }
        if let Some((name, value)) = fields[..4].iter().find(|(_, v)| *v <= 0.0) {
            return Err(format!("{name} must be positive ({value})"));
        }
        if self.volume < 0.0 {
            return Err(format!("negative volume ({})", self.volume));
        }
        if self.low > self.high {
            return Err(format!("low {} above high {}", self.low, self.high));
        }
        if self.open < self.low || self.open > self.high {
            return Err(format!(
                "open {} outside [{}, {}]",
                self.open, self.low, self.high
            ));
        }
        if self.close < self.low || self.close > self.high {
            return Err(format!(
                "close {} outside [{}, {}]",
                self.close, self.low, self.high
            ));
        }
        Ok(())
    }
}
