//! Validated, date-ordered bar series for a single ticker.
//!
//! A [`BarSeries`] is the input boundary of the analysis pipeline: raw rows
//! from a data provider are sorted by date and checked against the OHLCV
//! invariants once, after which the series is read-only.

use crate::domain::error::TrendscopeError;
use crate::domain::ohlcv::OhlcvBar;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct BarSeries {
    ticker: String,
    bars: Vec<OhlcvBar>,
}

impl BarSeries {
    /// Validates raw provider rows into a series.
    ///
    /// Rows are sorted by date; gaps are left as-is. Fails with
    /// `EmptySeries` on zero rows and `MalformedBar` on the first row that
    /// breaks a bar invariant or repeats a date.
    pub fn from_raw(ticker: &str, mut rows: Vec<OhlcvBar>) -> Result<Self, TrendscopeError> {
        if rows.is_empty() {
            return Err(TrendscopeError::EmptySeries {
                ticker: ticker.to_string(),
            });
        }

        rows.sort_by_key(|b| b.date);

        for bar in &rows {
            bar.check().map_err(|reason| TrendscopeError::MalformedBar {
                date: bar.date,
                reason,
            })?;
        }
        if let Some(pair) = rows.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(TrendscopeError::MalformedBar {
                date: pair[1].date,
                reason: "duplicate date".into(),
            });
        }

        Ok(Self {
            ticker: ticker.to_string(),
            bars: rows,
        })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn bars(&self) -> &[OhlcvBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always false for a constructed series; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn latest(&self) -> &OhlcvBar {
        // from_raw guarantees at least one bar
        &self.bars[self.bars.len() - 1]
    }

    pub fn first_date(&self) -> NaiveDate {
        self.bars[0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.latest().date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_bar(date: &str, close: f64) -> OhlcvBar {
        OhlcvBar {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            open: close - 1.0,
            high: close + 1.0,
            low: close - 2.0,
            close,
            volume: 1000.0,
        }
    }

    #[test]
    fn empty_rows_rejected() {
        let err = BarSeries::from_raw("BOVA11.SA", vec![]).unwrap_err();
        assert!(matches!(err, TrendscopeError::EmptySeries { ref ticker } if ticker == "BOVA11.SA"));
    }

    #[test]
    fn single_row_accepted() {
        let series = BarSeries::from_raw("X", vec![make_bar("2024-01-02", 10.0)]).unwrap();
        assert_eq!(series.len(), 1);
        assert!(!series.is_empty());
        assert_eq!(series.first_date(), series.last_date());
    }

    #[test]
    fn rows_sorted_by_date() {
        let rows = vec![
            make_bar("2024-01-03", 12.0),
            make_bar("2024-01-01", 10.0),
            make_bar("2024-01-02", 11.0),
        ];
        let series = BarSeries::from_raw("X", rows).unwrap();
        let closes: Vec<f64> = series.bars().iter().map(|b| b.close).collect();
        assert_eq!(closes, vec![10.0, 11.0, 12.0]);
        assert_eq!(series.latest().close, 12.0);
    }

    #[test]
    fn duplicate_dates_rejected() {
        let rows = vec![make_bar("2024-01-01", 10.0), make_bar("2024-01-01", 11.0)];
        let err = BarSeries::from_raw("X", rows).unwrap_err();
        match err {
            TrendscopeError::MalformedBar { reason, .. } => assert_eq!(reason, "duplicate date"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_found_after_sorting() {
        let rows = vec![
            make_bar("2024-01-03", 12.0),
            make_bar("2024-01-01", 10.0),
            make_bar("2024-01-03", 13.0),
        ];
        let err = BarSeries::from_raw("X", rows).unwrap_err();
        match err {
            TrendscopeError::MalformedBar { date, reason } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
                assert_eq!(reason, "duplicate date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_bar_reports_date() {
        let mut bad = make_bar("2024-01-02", 11.0);
        bad.volume = -5.0;
        let rows = vec![make_bar("2024-01-01", 10.0), bad];
        let err = BarSeries::from_raw("X", rows).unwrap_err();
        match err {
            TrendscopeError::MalformedBar { date, reason } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
                assert!(reason.contains("negative volume"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn gaps_are_preserved() {
        let rows = vec![make_bar("2024-01-01", 10.0), make_bar("2024-01-05", 11.0)];
        let series = BarSeries::from_raw("X", rows).unwrap();
        let dates: Vec<NaiveDate> = series.bars().iter().map(|b| b.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            ]
        );
        assert_eq!(series.latest().close, 11.0);
    }
}
