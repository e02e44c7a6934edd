//! Technical indicator implementations.
//!
//! This module provides types for representing indicator values and series:
//! - `IndicatorPoint`: A single point in an indicator time series
//! - `IndicatorKey`: Indicator identity + window (serves as frame key)
//! - `IndicatorSeries`: A time series of indicator values
//!
//! A point before the indicator's warmup window holds `None`. Zero is a
//! legitimate value and never stands in for "no data".

pub mod ema;
pub mod sma;
pub mod vwap;

use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

impl IndicatorPoint {
    pub fn undefined(date: NaiveDate) -> Self {
        Self { date, value: None }
    }

    pub fn defined(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value: Some(value),
        }
    }

    pub fn is_defined(&self) -> bool {
        self.value.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndicatorKey {
    Ema(usize),
    Sma(usize),
    Vwap,
}

impl IndicatorKey {
    /// Number of bars needed before the first defined value.
    pub fn min_bars(&self) -> usize {
        match self {
            IndicatorKey::Ema(window) | IndicatorKey::Sma(window) => *window,
            IndicatorKey::Vwap => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IndicatorSeries {
    pub key: IndicatorKey,
    pub values: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).and_then(|p| p.value)
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.last().and_then(|p| p.value)
    }

    /// Index of the first defined point, if any.
    pub fn first_defined(&self) -> Option<usize> {
        self.values.iter().position(IndicatorPoint::is_defined)
    }
}

impl fmt::Display for IndicatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorKey::Ema(window) => write!(f, "ema_{}", window),
            IndicatorKey::Sma(window) => write!(f, "sma_{}", window),
            IndicatorKey::Vwap => write!(f, "vwap"),
        }
    }
}
