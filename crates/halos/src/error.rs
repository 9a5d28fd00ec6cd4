use thiserror::Error;

use cosmology::CosmologyError;
use units::UnitError;

use crate::root::RootError;

/// Errors raised by halo profiles and the virial solver.
#[derive(Error, Debug)]
pub enum HaloError {
    /// A virial accessor was called on an NFW profile that was never bound.
    #[error("virial parameters not set")]
    UnboundVirialState,

    /// The root finder saw no sign change across the radius bracket.
    #[error("no sign change between r = {lower} kpc and r = {upper} kpc; widen the radius bracket")]
    Bracketing { lower: f64, upper: f64 },

    #[error("root finder failed: {0}")]
    Solver(RootError),

    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error(transparent)]
    Units(#[from] UnitError),

    #[error(transparent)]
    Cosmology(#[from] CosmologyError),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HaloError>;

/// Rejects non-finite and non-positive values.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(HaloError::InvalidParameter { name, value });
    }
    Ok(value)
}

pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(HaloError::InvalidParameter { name, value });
    }
    Ok(value)
}
