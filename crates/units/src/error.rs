use thiserror::Error;

use crate::quantity::Dimension;

/// Errors raised by the runtime-tagged quantity layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: Dimension, found: Dimension },
    #[error("unknown unit symbol {0:?}")]
    UnknownUnit(String),
}
