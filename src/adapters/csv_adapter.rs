//! CSV file data adapter.
//!
//! Reads `<base_path>/<TICKER>.csv` with a `date,open,high,low,close,volume`
//! header. The requested period is anchored at the latest date in the file,
//! so an exported history replays the same way regardless of today's date.

use crate::domain::error::TrendscopeError;
use crate::domain::ohlcv::OhlcvBar;
use crate::ports::data_port::{DataPort, Interval, Period};
use chrono::{Duration, NaiveDate};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, ticker: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", ticker))
    }

    fn read_rows(&self, ticker: &str) -> Result<Vec<OhlcvBar>, TrendscopeError> {
        let path = self.csv_path(ticker);
        let content = fs::read_to_string(&path).map_err(|e| TrendscopeError::Provider {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut rows = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| TrendscopeError::Provider {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = field(&record, 0, "date")?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                TrendscopeError::Provider {
                    reason: format!("invalid date '{}': {}", date_str, e),
                }
            })?;

            rows.push(OhlcvBar {
                date,
                open: number(&record, 1, "open")?,
                high: number(&record, 2, "high")?,
                low: number(&record, 3, "low")?,
                close: number(&record, 4, "close")?,
                volume: number(&record, 5, "volume")?,
            });
        }

        Ok(rows)
    }
}

fn field<'r>(
    record: &'r csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<&'r str, TrendscopeError> {
    record.get(index).ok_or_else(|| TrendscopeError::Provider {
        reason: format!("missing {} column", name),
    })
}

fn number(record: &csv::StringRecord, index: usize, name: &str) -> Result<f64, TrendscopeError> {
    let raw = field(record, index, name)?.trim();
    raw.parse().map_err(|e| TrendscopeError::Provider {
        reason: format!("invalid {} value '{}': {}", name, raw, e),
    })
}

impl DataPort for CsvAdapter {
    fn fetch(
        &self,
        ticker: &str,
        period: Period,
        _interval: Interval,
    ) -> Result<Vec<OhlcvBar>, TrendscopeError> {
        let mut rows = self.read_rows(ticker)?;

        let Some(last) = rows.iter().map(|b| b.date).max() else {
            return Ok(rows);
        };
        let cutoff = last - Duration::days(period.days());
        let total = rows.len();
        rows.retain(|b| b.date >= cutoff);
        debug!(ticker, total, kept = rows.len(), %cutoff, "filtered csv rows to period");
        Ok(rows)
    }
}
