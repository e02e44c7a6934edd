//! Short-term trend classification from the EMA(9)/EMA(20) pair.

use crate::domain::error::TrendscopeError;
use crate::domain::indicator::IndicatorKey;
use crate::domain::indicator_frame::IndicatorFrame;
use std::fmt;

pub const FAST_EMA: IndicatorKey = IndicatorKey::Ema(9);
pub const SLOW_EMA: IndicatorKey = IndicatorKey::Ema(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendLabel {
    Up,
    Down,
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendLabel::Up => write!(f, "up"),
            TrendLabel::Down => write!(f, "down"),
        }
    }
}

/// `Up` iff fast > slow. Equal values are `Down`.
pub fn classify_values(fast: f64, slow: f64) -> TrendLabel {
    if fast > slow {
        TrendLabel::Up
    } else {
        TrendLabel::Down
    }
}

/// Labels the frame from its latest `ema_9` and `ema_20` values.
///
/// Fails with `InsufficientHistory` when either is undefined at the last
/// index, which happens whenever the series has fewer than 20 bars.
pub fn classify(frame: &IndicatorFrame) -> Result<TrendLabel, TrendscopeError> {
    let fast = latest_required(frame, FAST_EMA)?;
    let slow = latest_required(frame, SLOW_EMA)?;
    Ok(classify_values(fast, slow))
}

fn latest_required(frame: &IndicatorFrame, key: IndicatorKey) -> Result<f64, TrendscopeError> {
    frame
        .latest(key)
        .ok_or_else(|| TrendscopeError::InsufficientHistory {
            indicator: key.to_string(),
            bars: frame.len(),
            minimum: key.min_bars(),
        })
}
