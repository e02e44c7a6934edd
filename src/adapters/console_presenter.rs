//! Console presenter: prints the summary and optionally writes the chart.

use crate::adapters::chart_svg::render_chart;
use crate::adapters::text_summary::format_summary;
use crate::domain::analysis::Analysis;
use crate::domain::error::TrendscopeError;
use crate::domain::settings::Locale;
use crate::ports::presentation_port::PresentationPort;
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

pub struct ConsolePresenter<W: Write> {
    out: RefCell<W>,
    locale: Locale,
    currency_prefix: String,
    chart_path: Option<PathBuf>,
}

impl ConsolePresenter<std::io::Stdout> {
    pub fn stdout(locale: Locale, currency_prefix: &str, chart_path: Option<PathBuf>) -> Self {
        Self::new(std::io::stdout(), locale, currency_prefix, chart_path)
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W, locale: Locale, currency_prefix: &str, chart_path: Option<PathBuf>) -> Self {
        Self {
            out: RefCell::new(out),
            locale,
            currency_prefix: currency_prefix.to_string(),
            chart_path,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> PresentationPort for ConsolePresenter<W> {
    fn present(&self, analysis: &Analysis) -> Result<(), TrendscopeError> {
        if let Some(path) = &self.chart_path {
            fs::write(path, render_chart(analysis))?;
            info!(path = %path.display(), "chart written");
        }

        let summary = format_summary(&analysis.projection, self.locale, &self.currency_prefix);
        let mut out = self.out.borrow_mut();
        writeln!(out, "{}", summary)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::analyze;
    use crate::domain::bar_series::BarSeries;
    use crate::domain::ohlcv::OhlcvBar;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn falling_analysis() -> Analysis {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = (0..25)
            .map(|i| {
                let close = 80.0 - i as f64;
                OhlcvBar {
                    date: start + chrono::Duration::days(i as i64),
                    open: close,
                    high: close + 0.5,
                    low: close - 0.5,
                    close,
                    volume: 1_000.0,
                }
            })
            .collect();
        analyze(
            BarSeries::from_raw("ITUB4.SA", bars).unwrap(),
            &mut StdRng::seed_from_u64(9),
        )
        .unwrap()
    }

    #[test]
    fn prints_portuguese_summary() {
        let presenter = ConsolePresenter::new(Vec::new(), Locale::Pt, "R$", None);
        presenter.present(&falling_analysis()).unwrap();
        let text = String::from_utf8(presenter.into_inner()).unwrap();

        assert!(text.starts_with("Tendência atual: baixa\n"));
        assert!(text.contains("Preço sugerido para o próximo dia: R$"));
    }

    #[test]
    fn writes_chart_when_configured() {
        let dir = TempDir::new().unwrap();
        let chart = dir.path().join("chart.svg");
        let presenter = ConsolePresenter::new(Vec::new(), Locale::En, "$", Some(chart.clone()));
        presenter.present(&falling_analysis()).unwrap();

        let svg = fs::read_to_string(&chart).unwrap();
        assert!(svg.contains("Análise de ITUB4.SA"));
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(text.starts_with("Current trend: down"));
    }

    #[test]
    fn chart_write_failure_is_io_error() {
        let presenter = ConsolePresenter::new(
            Vec::new(),
            Locale::Pt,
            "R$",
            Some(PathBuf::from("/nonexistent/dir/chart.svg")),
        );
        let err = presenter.present(&falling_analysis()).unwrap_err();
        assert!(matches!(err, TrendscopeError::Io(_)));
    }
}
