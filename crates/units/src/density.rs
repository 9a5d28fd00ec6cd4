use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::{KPC_PER_MPC, KPC_TO_CM, PI, SOLAR_MASS_G};
use crate::length::Length;
use crate::mass::Mass;

/// g/cm³ expressed in M☉/kpc³
const GRAMS_PER_CM3_TO_MSUN_PER_KPC3: f64 = KPC_TO_CM * KPC_TO_CM * KPC_TO_CM / SOLAR_MASS_G;

/// A physical mass density (mass per volume) quantity using f64 precision.
///
/// The base unit is solar masses per cubic kiloparsec. Typical values:
/// - Critical density of the universe today: ~127 M☉/kpc³
/// - 200 × critical (virial threshold): ~2.5 × 10⁴ M☉/kpc³
/// - Milky-Way halo scale density: ~10⁶-10⁷ M☉/kpc³
///
/// # Examples
///
/// ```rust
/// use units::Density;
///
/// let rho_0 = Density::from_msun_per_kpc3(1.0e7);
/// let cgs = rho_0.to_grams_per_cm3();
/// assert!(cgs > 6.0e-25 && cgs < 7.0e-25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Density(f64); // Base unit: M☉/kpc³

impl Density {
    /// Creates a new `Density` from a value in M☉/kpc³.
    pub fn from_msun_per_kpc3(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Density` from a value in M☉/Mpc³.
    pub fn from_msun_per_mpc3(value: f64) -> Self {
        Self(value / KPC_PER_MPC.powi(3))
    }

    /// Creates a new `Density` from a value in g/cm³.
    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value * GRAMS_PER_CM3_TO_MSUN_PER_KPC3)
    }

    /// Creates a new `Density` from a value in kg/m³.
    ///
    /// 1 kg/m³ = 0.001 g/cm³
    pub fn from_kg_per_m3(value: f64) -> Self {
        Self::from_grams_per_cm3(value * 0.001)
    }

    /// Returns the density in M☉/kpc³.
    pub fn to_msun_per_kpc3(&self) -> f64 {
        self.0
    }

    pub fn to_msun_per_mpc3(&self) -> f64 {
        self.0 * KPC_PER_MPC.powi(3)
    }

    /// Converts the density to g/cm³.
    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0 / GRAMS_PER_CM3_TO_MSUN_PER_KPC3
    }

    /// Converts the density to kg/m³.
    pub fn to_kg_per_m3(&self) -> f64 {
        self.to_grams_per_cm3() * 1000.0
    }

    /// Mass of a uniform sphere of radius `r` at this density.
    ///
    /// M = 4/3 π ρ r³
    pub fn mass_within_radius(&self, r: Length) -> Mass {
        Mass::from_solar_masses(4.0 / 3.0 * PI * self.0 * r.to_kpc().powi(3))
    }

    /// Radius of a uniform sphere of this density containing `mass`.
    ///
    /// r = (3M / 4πρ)^(1/3)
    pub fn radius_enclosing(&self, mass: Mass) -> Length {
        Length::from_kpc((3.0 * mass.to_solar_masses() / (4.0 * PI * self.0)).cbrt())
    }

    /// Returns true if the value is finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Add for Density {
    type Output = Density;

    fn add(self, rhs: Density) -> Density {
        Density(self.0 + rhs.0)
    }
}

impl Sub for Density {
    type Output = Density;

    fn sub(self, rhs: Density) -> Density {
        Density(self.0 - rhs.0)
    }
}

impl Mul<f64> for Density {
    type Output = Density;

    fn mul(self, rhs: f64) -> Density {
        Density(self.0 * rhs)
    }
}

impl Div<f64> for Density {
    type Output = Density;

    fn div(self, rhs: f64) -> Density {
        Density(self.0 / rhs)
    }
}

/// Division of Density by Density returns a dimensionless ratio
impl Div for Density {
    type Output = f64;

    fn div(self, rhs: Density) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Density (commutative multiplication)
impl Mul<Density> for f64 {
    type Output = Density;

    fn mul(self, rhs: Density) -> Density {
        rhs * self
    }
}
