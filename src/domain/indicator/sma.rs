//! Simple Moving Average indicator.
//!
//! O(n) sliding window: add the newest close, drop the one leaving the window.
//! SMA(n) = (P[i-n+1] + ... + P[i]) / n
//! Warmup: first (n-1) bars are undefined.

use crate::domain::indicator::{IndicatorKey, IndicatorPoint, IndicatorSeries};
use crate::domain::ohlcv::OhlcvBar;

pub fn calculate_sma(bars: &[OhlcvBar], period: usize) -> IndicatorSeries {
    let mut values = Vec::with_capacity(bars.len());

    if period == 0 {
        values.extend(bars.iter().map(|b| IndicatorPoint::undefined(b.date)));
        return IndicatorSeries {
            key: IndicatorKey::Sma(period),
            values,
        };
    }

    let mut window_sum: f64 = 0.0;

    for (i, bar) in bars.iter().enumerate() {
        window_sum += bar.close;
        if i >= period {
            window_sum -= bars[i - period].close;
        }

        if i + 1 >= period {
            values.push(IndicatorPoint::defined(bar.date, window_sum / period as f64));
        } else {
            values.push(IndicatorPoint::undefined(bar.date));
        }
    }

    IndicatorSeries {
        key: IndicatorKey::Sma(period),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_bars(prices: &[f64]) -> Vec<OhlcvBar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, &close)| OhlcvBar {
                date: start + chrono::Duration::days(i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1000.0,
            })
            .collect()
    }

    #[test]
    fn sma_warmup() {
        let bars = make_bars(&[10.0, 20.0, 30.0, 40.0]);
        let series = calculate_sma(&bars, 3);

        assert!(!series.values[0].is_defined());
        assert!(!series.values[1].is_defined());
        assert!(series.values[2].is_defined());
        assert!(series.values[3].is_defined());
    }

    #[test]
    fn sma_sliding_window() {
        let bars = make_bars(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let series = calculate_sma(&bars, 3);

        assert!((series.value_at(2).unwrap() - 20.0).abs() < 1e-12);
        assert!((series.value_at(3).unwrap() - 30.0).abs() < 1e-12);
        assert!((series.value_at(4).unwrap() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn sma_equal_prices() {
        let bars = make_bars(&[42.5; 200]);
        let series = calculate_sma(&bars, 200);

        assert_eq!(series.first_defined(), Some(199));
        assert!((series.latest().unwrap() - 42.5).abs() < 1e-9);
    }

    #[test]
    fn sma_period_1_is_close() {
        let bars = make_bars(&[3.0, 7.0]);
        let series = calculate_sma(&bars, 1);
        assert_eq!(series.value_at(0), Some(3.0));
        assert_eq!(series.value_at(1), Some(7.0));
    }

    #[test]
    fn sma_insufficient_bars() {
        let bars = make_bars(&[1.0, 2.0]);
        let series = calculate_sma(&bars, 200);
        assert_eq!(series.values.len(), 2);
        assert_eq!(series.first_defined(), None);
    }

    #[test]
    fn sma_indicator_key() {
        let series = calculate_sma(&[], 200);
        assert_eq!(series.key, IndicatorKey::Sma(200));
        assert!(series.values.is_empty());
    }
}
