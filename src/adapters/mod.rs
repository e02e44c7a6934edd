//! Concrete adapter implementations for ports.

pub mod csv_adapter;
#[cfg(feature = "yahoo")]
pub mod yahoo_adapter;
pub mod file_config_adapter;
pub mod text_summary;
pub mod chart_svg;
pub mod enriched_csv;
pub mod console_presenter;
