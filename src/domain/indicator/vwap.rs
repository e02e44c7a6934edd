//! Volume-Weighted Average Price indicator.

use crate::domain::indicator::{IndicatorKey, IndicatorPoint, IndicatorSeries};
use crate::domain::ohlcv::OhlcvBar;

/// Calculate cumulative VWAP from the first bar of the series.
///
/// VWAP[i] = sum(TP[0..=i] * V[0..=i]) / sum(V[0..=i]), TP = (H + L + C) / 3
///
/// Not a rolling window: the accumulation never resets. A point stays
/// undefined while the cumulative volume is still zero.
pub fn calculate_vwap(bars: &[OhlcvBar]) -> IndicatorSeries {
    let mut values = Vec::with_capacity(bars.len());
    let mut pv_sum: f64 = 0.0;
    let mut volume_sum: f64 = 0.0;

    for bar in bars {
        pv_sum += bar.typical_price() * bar.volume;
        volume_sum += bar.volume;

        if volume_sum > 0.0 {
            values.push(IndicatorPoint::defined(bar.date, pv_sum / volume_sum));
        } else {
            values.push(IndicatorPoint::undefined(bar.date));
        }
    }

    IndicatorSeries {
        key: IndicatorKey::Vwap,
        values,
    }
}
