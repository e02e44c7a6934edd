//! Next-day price projection.
//!
//! A naive heuristic, not a forecast: the latest close is nudged by a
//! uniform draw from [0.1%, 1%] in the direction of the trend label.
//! The random source is a parameter so callers can seed it; the production
//! default is the unseeded thread RNG, so repeated runs differ.

use crate::domain::bar_series::BarSeries;
use crate::domain::error::TrendscopeError;
use crate::domain::indicator_frame::IndicatorFrame;
use crate::domain::trend::{classify, TrendLabel};
use rand::Rng;

pub const PERTURBATION_MIN: f64 = 0.001;
pub const PERTURBATION_MAX: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub price: f64,
    pub label: TrendLabel,
}

pub fn project_price<R: Rng + ?Sized>(close: f64, label: TrendLabel, rng: &mut R) -> Projection {
    let perturbation = rng.gen_range(PERTURBATION_MIN..=PERTURBATION_MAX);
    let price = match label {
        TrendLabel::Up => close * (1.0 + perturbation),
        TrendLabel::Down => close * (1.0 - perturbation),
    };
    Projection { price, label }
}

/// Classifies the frame and projects from the series' latest close.
pub fn project<R: Rng + ?Sized>(
    series: &BarSeries,
    frame: &IndicatorFrame,
    rng: &mut R,
) -> Result<Projection, TrendscopeError> {
    let label = classify(frame)?;
    Ok(project_price(series.latest().close, label, rng))
}
