//! Presentation port trait.

use crate::domain::analysis::Analysis;
use crate::domain::error::TrendscopeError;

/// One-way consumer of a finished analysis (console, chart file, ...).
pub trait PresentationPort {
    fn present(&self, analysis: &Analysis) -> Result<(), TrendscopeError>;
}
