//! Resolved run settings for one analysis invocation.

use crate::domain::analysis::DEFAULT_TICKER;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Yahoo,
    Csv,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yahoo" => Ok(ProviderKind::Yahoo),
            "csv" => Ok(ProviderKind::Csv),
            other => Err(format!("unknown provider '{other}' (expected yahoo or csv)")),
        }
    }
}

/// Language of the textual summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Pt,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt" | "pt-br" | "pt_br" => Ok(Locale::Pt),
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            other => Err(format!("unknown locale '{other}' (expected pt or en)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub ticker: String,
    pub seed: Option<u64>,
    pub provider: ProviderKind,
    pub csv_dir: Option<PathBuf>,
    pub locale: Locale,
    pub currency_prefix: String,
    pub chart_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ticker: DEFAULT_TICKER.to_string(),
            seed: None,
            provider: ProviderKind::Yahoo,
            csv_dir: None,
            locale: Locale::Pt,
            currency_prefix: "R$".to_string(),
            chart_path: None,
        }
    }
}
