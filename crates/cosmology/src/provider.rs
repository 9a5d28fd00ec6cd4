//! Trait abstraction for background cosmologies.

use units::constants::{G, PI};
use units::{Density, HubbleRate, Time};

use crate::error::CosmologyError;

/// A model of the homogeneous expanding universe.
///
/// Implementors provide the Hubble parameter; the critical density and the
/// other derived quantities come for free.
pub trait CosmologyProvider: std::fmt::Debug {
    /// Hubble parameter H(z).
    ///
    /// Fails with [`CosmologyError::InvalidRedshift`] for `z <= -1`.
    fn hubble_parameter(&self, redshift: f64) -> Result<HubbleRate, CosmologyError>;

    /// Critical density ρ_c(z) = 3 H(z)² / (8π G).
    fn critical_density(&self, redshift: f64) -> Result<Density, CosmologyError> {
        let h = self.hubble_parameter(redshift)?.to_km_per_sec_per_kpc();
        Ok(Density::from_msun_per_kpc3(3.0 * h * h / (8.0 * PI * G)))
    }

    /// Dimensionless expansion rate E(z) = H(z) / H0.
    fn efunc(&self, redshift: f64) -> Result<f64, CosmologyError> {
        Ok(self.hubble_parameter(redshift)? / self.hubble_parameter(0.0)?)
    }

    /// Hubble time 1/H0.
    fn hubble_time(&self) -> Result<Time, CosmologyError> {
        Ok(self.hubble_parameter(0.0)?.hubble_time())
    }
}

/// Rejects redshifts at or beyond the big bang (1 + z <= 0) and NaN.
pub(crate) fn check_redshift(redshift: f64) -> Result<(), CosmologyError> {
    if !redshift.is_finite() || redshift <= -1.0 {
        return Err(CosmologyError::InvalidRedshift(redshift));
    }
    Ok(())
}
