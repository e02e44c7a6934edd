//! Localized textual summary of a projection.

use crate::domain::projection::Projection;
use crate::domain::settings::Locale;
use crate::domain::trend::TrendLabel;

pub fn trend_word(label: TrendLabel, locale: Locale) -> &'static str {
    match (locale, label) {
        (Locale::Pt, TrendLabel::Up) => "alta",
        (Locale::Pt, TrendLabel::Down) => "baixa",
        (Locale::En, TrendLabel::Up) => "up",
        (Locale::En, TrendLabel::Down) => "down",
    }
}

pub fn format_price(price: f64, currency_prefix: &str) -> String {
    format!("{}{:.2}", currency_prefix, price)
}

/// Two lines: current trend, then the suggested next-day price.
pub fn format_summary(projection: &Projection, locale: Locale, currency_prefix: &str) -> String {
    let trend = trend_word(projection.label, locale);
    let price = format_price(projection.price, currency_prefix);
    match locale {
        Locale::Pt => format!(
            "Tendência atual: {}\nPreço sugerido para o próximo dia: {}",
            trend, price
        ),
        Locale::En => format!(
            "Current trend: {}\nSuggested next-day price: {}",
            trend, price
        ),
    }
}
