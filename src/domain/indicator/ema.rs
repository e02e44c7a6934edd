//! Exponential Moving Average indicator.
//!
//! k = 2/(n+1), seed with first SMA, then EMA[i] = C[i]*k + EMA[i-1]*(1-k).
//! Warmup: first (n-1) bars are undefined.

use crate::domain::indicator::{IndicatorKey, IndicatorPoint, IndicatorSeries};
use crate::domain::ohlcv::OhlcvBar;

pub fn calculate_ema(bars: &[OhlcvBar], period: usize) -> IndicatorSeries {
    let mut values = Vec::with_capacity(bars.len());

    if period == 0 {
        values.extend(bars.iter().map(|b| IndicatorPoint::undefined(b.date)));
        return IndicatorSeries {
            key: IndicatorKey::Ema(period),
            values,
        };
    }

    let k = 2.0 / (period as f64 + 1.0);
    let mut ema = 0.0;
    let mut sum = 0.0;

    for (i, bar) in bars.iter().enumerate() {
        if i < period - 1 {
            sum += bar.close;
            values.push(IndicatorPoint::undefined(bar.date));
        } else if i == period - 1 {
            sum += bar.close;
            ema = sum / period as f64;
            values.push(IndicatorPoint::defined(bar.date, ema));
        } else {
            ema = bar.close * k + ema * (1.0 - k);
            values.push(IndicatorPoint::defined(bar.date, ema));
        }
    }

    IndicatorSeries {
        key: IndicatorKey::Ema(period),
        values,
    }
}
