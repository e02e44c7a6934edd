//! Indicator engine: computes the bar-aligned indicator frame for a series.

use crate::domain::bar_series::BarSeries;
use crate::domain::indicator::ema::calculate_ema;
use crate::domain::indicator::sma::calculate_sma;
use crate::domain::indicator::vwap::calculate_vwap;
use crate::domain::indicator::{IndicatorKey, IndicatorSeries};
use crate::domain::ohlcv::OhlcvBar;
use tracing::debug;

/// The indicators attached to every analysis, in presentation order.
pub const STANDARD_INDICATORS: [IndicatorKey; 6] = [
    IndicatorKey::Ema(9),
    IndicatorKey::Ema(20),
    IndicatorKey::Ema(50),
    IndicatorKey::Ema(200),
    IndicatorKey::Sma(200),
    IndicatorKey::Vwap,
];

/// Index-aligned indicator series, one per key, each as long as the bar series.
#[derive(Debug, Clone)]
pub struct IndicatorFrame {
    len: usize,
    series: Vec<IndicatorSeries>,
}

impl IndicatorFrame {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn keys(&self) -> impl Iterator<Item = IndicatorKey> + '_ {
        self.series.iter().map(|s| s.key)
    }

    pub fn series(&self) -> &[IndicatorSeries] {
        &self.series
    }

    pub fn get(&self, key: IndicatorKey) -> Option<&IndicatorSeries> {
        self.series.iter().find(|s| s.key == key)
    }

    pub fn value_at(&self, key: IndicatorKey, index: usize) -> Option<f64> {
        self.get(key).and_then(|s| s.value_at(index))
    }

    /// Value at the last aligned index; `None` if the key is absent or undefined.
    pub fn latest(&self, key: IndicatorKey) -> Option<f64> {
        self.get(key).and_then(IndicatorSeries::latest)
    }
}

pub fn compute_indicator(bars: &[OhlcvBar], key: IndicatorKey) -> IndicatorSeries {
    match key {
        IndicatorKey::Ema(period) => calculate_ema(bars, period),
        IndicatorKey::Sma(period) => calculate_sma(bars, period),
        IndicatorKey::Vwap => calculate_vwap(bars),
    }
}

/// Computes each requested indicator independently.
///
/// Never fails: windows longer than the series leave that indicator
/// undefined without affecting the others. Duplicate keys are computed once.
pub fn compute_frame(series: &BarSeries, keys: &[IndicatorKey]) -> IndicatorFrame {
    let bars = series.bars();
    let mut out: Vec<IndicatorSeries> = Vec::with_capacity(keys.len());

    for &key in keys {
        if out.iter().any(|s| s.key == key) {
            continue;
        }
        let computed = compute_indicator(bars, key);
        match computed.first_defined() {
            Some(first) => debug!(indicator = %key, first_defined = first, "computed indicator"),
            None => debug!(
                indicator = %key,
                bars = bars.len(),
                needed = key.min_bars(),
                "indicator undefined over whole series"
            ),
        }
        out.push(computed);
    }

    IndicatorFrame {
        len: bars.len(),
        series: out,
    }
}

pub fn compute_standard_frame(series: &BarSeries) -> IndicatorFrame {
    compute_frame(series, &STANDARD_INDICATORS)
}
