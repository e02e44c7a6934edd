//! Domain error types.

use chrono::NaiveDate;

/// Top-level error type for trendscope.
#[derive(Debug, thiserror::Error)]
pub enum TrendscopeError {
    #[error("no data available for {ticker}")]
    EmptySeries { ticker: String },

    #[error("malformed bar at {date}: {reason}")]
    MalformedBar { date: NaiveDate, reason: String },

    #[error("insufficient history for {indicator}: have {bars} bars, need {minimum}")]
    InsufficientHistory {
        indicator: String,
        bars: usize,
        minimum: usize,
    },

    #[error("data provider error: {reason}")]
    Provider { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TrendscopeError> for std::process::ExitCode {
    fn from(err: &TrendscopeError) -> Self {
        let code: u8 = match err {
            TrendscopeError::Io(_) => 1,
            TrendscopeError::ConfigParse { .. }
            | TrendscopeError::ConfigMissing { .. }
            | TrendscopeError::ConfigInvalid { .. } => 2,
            TrendscopeError::Provider { .. } => 3,
            TrendscopeError::EmptySeries { .. } | TrendscopeError::MalformedBar { .. } => 5,
            TrendscopeError::InsufficientHistory { .. } => 6,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = TrendscopeError::EmptySeries {
            ticker: "BOVA11.SA".into(),
        };
        assert_eq!(err.to_string(), "no data available for BOVA11.SA");

        let err = TrendscopeError::InsufficientHistory {
            indicator: "ema_20".into(),
            bars: 10,
            minimum: 20,
        };
        assert_eq!(
            err.to_string(),
            "insufficient history for ema_20: have 10 bars, need 20"
        );

        let err = TrendscopeError::MalformedBar {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            reason: "negative volume".into(),
        };
        assert_eq!(err.to_string(), "malformed bar at 2024-03-01: negative volume");
    }

    // ExitCode has no PartialEq; compare the Debug output against a known code.
    fn exit_report(err: &TrendscopeError) -> String {
        format!("{:?}", std::process::ExitCode::from(err))
    }

    fn code_report(code: u8) -> String {
        format!("{:?}", std::process::ExitCode::from(code))
    }

    #[test]
    fn exit_codes_per_variant() {
        let cases: Vec<(TrendscopeError, u8)> = vec![
            (
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into(),
                1,
            ),
            (
                TrendscopeError::ConfigParse {
                    file: "a.ini".into(),
                    reason: "bad".into(),
                },
                2,
            ),
            (
                TrendscopeError::ConfigMissing {
                    section: "data".into(),
                    key: "csv_dir".into(),
                },
                2,
            ),
            (
                TrendscopeError::ConfigInvalid {
                    section: "analysis".into(),
                    key: "seed".into(),
                    reason: "not a number".into(),
                },
                2,
            ),
            (
                TrendscopeError::Provider {
                    reason: "HTTP 500".into(),
                },
                3,
            ),
            (
                TrendscopeError::EmptySeries {
                    ticker: "X".into(),
                },
                5,
            ),
            (
                TrendscopeError::MalformedBar {
                    date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                    reason: "duplicate date".into(),
                },
                5,
            ),
            (
                TrendscopeError::InsufficientHistory {
                    indicator: "ema_9".into(),
                    bars: 1,
                    minimum: 9,
                },
                6,
            ),
        ];

        for (err, code) in &cases {
            assert_eq!(exit_report(err), code_report(*code), "{err}");
            assert_ne!(exit_report(err), code_report(0), "{err}");
        }
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: TrendscopeError = io.into();
        assert!(matches!(err, TrendscopeError::Io(_)));
    }
}
