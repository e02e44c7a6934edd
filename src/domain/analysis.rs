//! The analysis pipeline: series → indicator frame → trend + projection.
//!
//! Everything here is synchronous and owned by one invocation. The result is a
//! plain value handed to whichever presenter is attached, if any.

use crate::domain::bar_series::BarSeries;
use crate::domain::error::TrendscopeError;
use crate::domain::indicator_frame::{compute_standard_frame, IndicatorFrame};
use crate::domain::projection::{project, Projection};
use crate::ports::data_port::{DataPort, Interval, Period};
use rand::Rng;
use tracing::{info, warn};

pub const DEFAULT_TICKER: &str = "BOVA11.SA";

#[derive(Debug, Clone)]
pub struct Analysis {
    pub series: BarSeries,
    pub frame: IndicatorFrame,
    pub projection: Projection,
}

impl Analysis {
    pub fn ticker(&self) -> &str {
        self.series.ticker()
    }
}

/// Runs the pipeline over an already validated series.
pub fn analyze<R: Rng + ?Sized>(series: BarSeries, rng: &mut R) -> Result<Analysis, TrendscopeError> {
    let frame = compute_standard_frame(&series);
    let projection = project(&series, &frame, rng)?;
    info!(
        ticker = series.ticker(),
        bars = series.len(),
        trend = %projection.label,
        price = projection.price,
        "analysis complete"
    );
    Ok(Analysis {
        series,
        frame,
        projection,
    })
}

/// Fetches one year of daily bars for `ticker` and validates them.
///
/// Any provider failure or empty payload is reported as `EmptySeries`; the
/// underlying cause is logged.
pub fn load_series(data_port: &dyn DataPort, ticker: &str) -> Result<BarSeries, TrendscopeError> {
    info!(ticker, "fetching {} of {} bars", Period::OneYear, Interval::Daily);
    let rows = match data_port.fetch(ticker, Period::OneYear, Interval::Daily) {
        Ok(rows) => rows,
        Err(e) => {
            warn!(ticker, error = %e, "data fetch failed");
            return Err(TrendscopeError::EmptySeries {
                ticker: ticker.to_string(),
            });
        }
    };
    BarSeries::from_raw(ticker, rows)
}

pub fn run_analysis<R: Rng + ?Sized>(
    data_port: &dyn DataPort,
    ticker: &str,
    rng: &mut R,
) -> Result<Analysis, TrendscopeError> {
    let series = load_series(data_port, ticker)?;
    analyze(series, rng)
}
