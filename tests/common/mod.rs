#![allow(dead_code)]

use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;
use trendscope::domain::error::TrendscopeError;
pub use trendscope::domain::ohlcv::OhlcvBar;
use trendscope::ports::data_port::{DataPort, Interval, Period};

pub struct MockDataPort {
    pub data: HashMap<String, Vec<OhlcvBar>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, ticker: &str, bars: Vec<OhlcvBar>) -> Self {
        self.data.insert(ticker.to_string(), bars);
        self
    }

    pub fn with_error(mut self, ticker: &str, reason: &str) -> Self {
        self.errors.insert(ticker.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch(
        &self,
        ticker: &str,
        _period: Period,
        _interval: Interval,
    ) -> Result<Vec<OhlcvBar>, TrendscopeError> {
        if let Some(reason) = self.errors.get(ticker) {
            return Err(TrendscopeError::Provider {
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(ticker).cloned().unwrap_or_default())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_bar(date: &str, close: f64) -> OhlcvBar {
    OhlcvBar {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        open: close,
        high: close + 1.0,
        low: close - 1.0,
        close,
        volume: 1_000.0,
    }
}

/// One bar per calendar day with the given closes.
pub fn bars_from_closes(start_date: &str, closes: &[f64]) -> Vec<OhlcvBar> {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d").unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| OhlcvBar {
            date: start + chrono::Duration::days(i as i64),
            open: close,
            high: close + 0.5,
            low: close - 0.5,
            close,
            volume: 1_000.0 + (i % 5) as f64 * 100.0,
        })
        .collect()
}

/// Closes rising linearly from `from` to `to` (inclusive) over `count` bars.
pub fn linear_closes(count: usize, from: f64, to: f64) -> Vec<f64> {
    if count == 1 {
        return vec![from];
    }
    let step = (to - from) / (count - 1) as f64;
    (0..count).map(|i| from + step * i as f64).collect()
}

/// Mildly oscillating series around `start_price`.
pub fn generate_bars(start_date: &str, count: usize, start_price: f64) -> Vec<OhlcvBar> {
    let closes: Vec<f64> = (0..count)
        .map(|i| start_price + ((i % 10) as f64 - 5.0) * 0.5)
        .collect();
    bars_from_closes(start_date, &closes)
}

pub fn write_csv(dir: &Path, ticker: &str, bars: &[OhlcvBar]) {
    let mut content = String::from("date,open,high,low,close,volume\n");
    for b in bars {
        writeln!(
            content,
            "{},{},{},{},{},{}",
            b.date.format("%Y-%m-%d"),
            b.open,
            b.high,
            b.low,
            b.close,
            b.volume
        )
        .unwrap();
    }
    std::fs::write(dir.join(format!("{ticker}.csv")), content).unwrap();
}
