//! Yahoo Finance data adapter.
//!
//! Fetches daily bars from Yahoo's v8 chart API using its `range`/`interval`
//! query. The endpoint is unofficial and may change shape without notice; the
//! CSV adapter is the offline fallback.

use crate::domain::error::TrendscopeError;
use crate::domain::ohlcv::OhlcvBar;
use crate::ports::data_port::{DataPort, Interval, Period};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

const BASE_URL: &str = "https://query2.finance.yahoo.com/v8/finance/chart";

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    meta: Option<ChartMeta>,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    /// Exchange offset from UTC in seconds.
    gmtoffset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<f64>>,
}

pub struct YahooAdapter {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooAdapter {
    pub fn new() -> Result<Self, TrendscopeError> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, TrendscopeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) trendscope")
            .build()
            .map_err(|e| TrendscopeError::Provider {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn chart_url(&self, ticker: &str, period: Period, interval: Interval) -> String {
        format!(
            "{}/{ticker}?range={period}&interval={interval}",
            self.base_url
        )
    }
}

/// Converts a chart response into rows.
///
/// Days where every field is null (holidays) are dropped; partially null
/// days keep NaN so that series validation rejects them.
fn parse_response(ticker: &str, resp: ChartResponse) -> Result<Vec<OhlcvBar>, TrendscopeError> {
    let result = match (resp.chart.result, resp.chart.error) {
        (Some(result), _) => result,
        (None, Some(err)) => {
            return Err(TrendscopeError::Provider {
                reason: format!("{ticker}: {}: {}", err.code, err.description),
            });
        }
        (None, None) => {
            return Err(TrendscopeError::Provider {
                reason: format!("{ticker}: empty result with no error"),
            });
        }
    };

    let Some(data) = result.into_iter().next() else {
        return Ok(Vec::new());
    };
    let timestamps = data.timestamp.unwrap_or_default();
    let offset = data.meta.and_then(|m| m.gmtoffset).unwrap_or(0);
    let Some(quote) = data.indicators.quote.into_iter().next() else {
        return Ok(Vec::new());
    };

    let mut rows = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        // Session dates are the exchange's local calendar day.
        let date = chrono::DateTime::from_timestamp(ts + offset, 0)
            .map(|dt| dt.naive_utc().date())
            .ok_or_else(|| TrendscopeError::Provider {
                reason: format!("invalid timestamp: {ts}"),
            })?;

        let open = quote.open.get(i).copied().flatten();
        let high = quote.high.get(i).copied().flatten();
        let low = quote.low.get(i).copied().flatten();
        let close = quote.close.get(i).copied().flatten();
        let volume = quote.volume.get(i).copied().flatten();

        if open.is_none() && high.is_none() && low.is_none() && close.is_none() && volume.is_none()
        {
            continue;
        }

        rows.push(OhlcvBar {
            date,
            open: open.unwrap_or(f64::NAN),
            high: high.unwrap_or(f64::NAN),
            low: low.unwrap_or(f64::NAN),
            close: close.unwrap_or(f64::NAN),
            volume: volume.unwrap_or(f64::NAN),
        });
    }

    Ok(rows)
}

impl DataPort for YahooAdapter {
    fn fetch(
        &self,
        ticker: &str,
        period: Period,
        interval: Interval,
    ) -> Result<Vec<OhlcvBar>, TrendscopeError> {
        let url = self.chart_url(ticker, period, interval);
        info!(ticker, %url, "requesting chart data");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| TrendscopeError::Provider {
                reason: format!("request for {ticker} failed: {e}"),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TrendscopeError::Provider {
                reason: format!("HTTP {status} for {ticker}"),
            });
        }

        let chart: ChartResponse = resp.json().map_err(|e| TrendscopeError::Provider {
            reason: format!("failed to parse response for {ticker}: {e}"),
        })?;

        let rows = parse_response(ticker, chart)?;
        debug!(ticker, rows = rows.len(), "parsed chart data");
        Ok(rows)
    }
}
