//! Configuration parsing and validation.
//!
//! Every key is optional; a present key must hold a usable value. The
//! `csv_dir` requirement is checked on the resolved settings, after any
//! command-line overrides have been applied.

use crate::domain::error::TrendscopeError;
use crate::domain::settings::{AnalysisConfig, Locale, ProviderKind};
use crate::ports::config_port::ConfigPort;

pub fn validate_config(config: &dyn ConfigPort) -> Result<(), TrendscopeError> {
    check_settings(&settings_from_config(config)?)
}

/// Reads `[analysis]`, `[data]` and `[output]` over the defaults.
pub fn settings_from_config(config: &dyn ConfigPort) -> Result<AnalysisConfig, TrendscopeError> {
    let mut settings = AnalysisConfig::default();

    if let Some(ticker) = config.get_string("analysis", "ticker") {
        settings.ticker = parse_ticker(&ticker)?;
    }
    if let Some(seed) = config.get_string("analysis", "seed") {
        settings.seed = Some(parse_seed(&seed)?);
    }
    if let Some(provider) = config.get_string("data", "provider") {
        settings.provider = provider
            .parse::<ProviderKind>()
            .map_err(|reason| invalid("data", "provider", reason))?;
    }
    settings.csv_dir = config.get_path("data", "csv_dir");
    if let Some(locale) = config.get_string("output", "locale") {
        settings.locale = parse_locale(&locale)?;
    }
    if let Some(prefix) = config.get_string("output", "currency_prefix") {
        settings.currency_prefix = prefix.trim().to_string();
    }
    settings.chart_path = config.get_path("output", "chart_path");

    Ok(settings)
}

pub fn check_settings(settings: &AnalysisConfig) -> Result<(), TrendscopeError> {
    if settings.provider == ProviderKind::Csv && settings.csv_dir.is_none() {
        return Err(TrendscopeError::ConfigMissing {
            section: "data".to_string(),
            key: "csv_dir".to_string(),
        });
    }
    Ok(())
}

fn invalid(section: &str, key: &str, reason: impl Into<String>) -> TrendscopeError {
    TrendscopeError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.into(),
    }
}

/// Trimmed, upper-cased ticker symbol.
pub fn parse_ticker(value: &str) -> Result<String, TrendscopeError> {
    let ticker = value.trim();
    if ticker.is_empty() {
        return Err(invalid("analysis", "ticker", "ticker must not be empty"));
    }
    if ticker.contains(char::is_whitespace) {
        return Err(invalid("analysis", "ticker", "ticker must not contain whitespace"));
    }
    Ok(ticker.to_uppercase())
}

pub fn parse_seed(value: &str) -> Result<u64, TrendscopeError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| invalid("analysis", "seed", "seed must be a non-negative integer"))
}

pub fn parse_locale(value: &str) -> Result<Locale, TrendscopeError> {
    value
        .parse::<Locale>()
        .map_err(|reason| invalid("output", "locale", reason))
}
