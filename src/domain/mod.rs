//! Core domain types and logic.

pub mod ohlcv;
pub mod bar_series;
pub mod indicator;
pub mod indicator_frame;
pub mod trend;
pub mod projection;
pub mod analysis;
pub mod settings;
pub mod config_validation;
pub mod error;
