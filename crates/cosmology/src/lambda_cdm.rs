use serde::Serialize;
use std::fmt;

use units::HubbleRate;

use crate::error::CosmologyError;
use crate::provider::{check_redshift, CosmologyProvider};

/// A Λ-cold-dark-matter cosmology with optional curvature and radiation.
///
/// E(z)² = Ω_r(1+z)⁴ + Ω_m(1+z)³ + Ω_k(1+z)² + Ω_Λ, with Ω_k = 1 − Ω_m − Ω_Λ − Ω_r.
///
/// # Examples
///
/// ```rust
/// use cosmology::{CosmologyProvider, LambdaCdm};
///
/// let planck = LambdaCdm::planck18();
/// let rho_c = planck.critical_density(0.0).unwrap();
/// assert!((rho_c.to_msun_per_kpc3() - 127.05).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LambdaCdm {
    /// Hubble constant in km/s/Mpc
    h0: f64,
    omega_m: f64,
    omega_lambda: f64,
    omega_r: f64,
}

impl LambdaCdm {
    pub fn new(
        h0: f64,
        omega_m: f64,
        omega_lambda: f64,
        omega_r: f64,
    ) -> Result<Self, CosmologyError> {
        if !(h0.is_finite() && h0 > 0.0) {
            return Err(CosmologyError::InvalidParameter { name: "h0", value: h0 });
        }
        for (name, value) in [
            ("omega_m", omega_m),
            ("omega_lambda", omega_lambda),
            ("omega_r", omega_r),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CosmologyError::InvalidParameter { name, value });
            }
        }

        Ok(Self {
            h0,
            omega_m,
            omega_lambda,
            omega_r,
        })
    }

    /// Spatially flat model without radiation (Ω_Λ = 1 − Ω_m).
    pub fn flat(h0: f64, omega_m: f64) -> Result<Self, CosmologyError> {
        Self::new(h0, omega_m, 1.0 - omega_m, 0.0)
    }

    /// Planck 2018 (TT,TE,EE+lowE+lensing+BAO), the default reference cosmology.
    pub fn planck18() -> Self {
        Self {
            h0: 67.66,
            omega_m: 0.30966,
            omega_lambda: 1.0 - 0.30966,
            omega_r: 0.0,
        }
    }

    /// Planck 2015 (TT,TE,EE+lowP+lensing+ext).
    pub fn planck15() -> Self {
        Self {
            h0: 67.74,
            omega_m: 0.3075,
            omega_lambda: 1.0 - 0.3075,
            omega_r: 0.0,
        }
    }

    /// WMAP nine-year.
    pub fn wmap9() -> Self {
        Self {
            h0: 69.32,
            omega_m: 0.2865,
            omega_lambda: 1.0 - 0.2865,
            omega_r: 0.0,
        }
    }

    pub fn h0(&self) -> HubbleRate {
        HubbleRate::from_km_per_sec_per_mpc(self.h0)
    }

    /// Dimensionless Hubble constant h = H0 / (100 km/s/Mpc).
    pub fn little_h(&self) -> f64 {
        self.h0 / 100.0
    }

    pub fn omega_m(&self) -> f64 {
        self.omega_m
    }

    pub fn omega_lambda(&self) -> f64 {
        self.omega_lambda
    }

    pub fn omega_r(&self) -> f64 {
        self.omega_r
    }

    pub fn omega_k(&self) -> f64 {
        1.0 - self.omega_m - self.omega_lambda - self.omega_r
    }

    fn e_squared(&self, redshift: f64) -> f64 {
        let a_inv = 1.0 + redshift;
        self.omega_r * a_inv.powi(4)
            + self.omega_m * a_inv.powi(3)
            + self.omega_k() * a_inv.powi(2)
            + self.omega_lambda
    }
}

impl Default for LambdaCdm {
    fn default() -> Self {
        Self::planck18()
    }
}

impl CosmologyProvider for LambdaCdm {
    fn hubble_parameter(&self, redshift: f64) -> Result<HubbleRate, CosmologyError> {
        check_redshift(redshift)?;
        let e2 = self.e_squared(redshift);
        // Closed models with large Λ can recollapse: E² < 0 has no real H(z)
        if e2 <= 0.0 {
            return Err(CosmologyError::InvalidRedshift(redshift));
        }
        Ok(self.h0() * e2.sqrt())
    }

    fn efunc(&self, redshift: f64) -> Result<f64, CosmologyError> {
        Ok(self.hubble_parameter(redshift)? / self.h0())
    }
}

impl fmt::Display for LambdaCdm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LambdaCdm(H0={} km/s/Mpc, Om0={}, Ode0={}, Or0={})",
            self.h0, self.omega_m, self.omega_lambda, self.omega_r
        )
    }
}
