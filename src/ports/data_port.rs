//! Market data port trait.

use crate::domain::error::TrendscopeError;
use crate::domain::ohlcv::OhlcvBar;
use std::fmt;

/// Lookback requested from the provider. The pipeline always asks for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    OneYear,
}

impl Period {
    pub fn days(&self) -> i64 {
        match self {
            Period::OneYear => 365,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::OneYear => write!(f, "1y"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Daily,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interval::Daily => write!(f, "1d"),
        }
    }
}

/// Source of raw OHLCV rows. Rows are unvalidated; `BarSeries::from_raw` checks them.
pub trait DataPort {
    fn fetch(
        &self,
        ticker: &str,
        period: Period,
        interval: Interval,
    ) -> Result<Vec<OhlcvBar>, TrendscopeError>;
}
