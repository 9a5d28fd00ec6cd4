use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::{PI, SOLAR_MASS_G};
use crate::density::Density;
use crate::length::Length;

/// A physical mass quantity using f64 precision.
///
/// The `Mass` struct represents mass values with solar masses as the base unit,
/// the natural scale for galaxies and dark-matter halos.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let milky_way = Mass::from_solar_masses(1.0e12);
/// let in_grams = milky_way.to_grams();
/// assert!(in_grams > 1.0e45);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a zero mass value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in solar masses.
    ///
    /// This is the most direct constructor since solar masses are the base unit.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in grams.
    pub fn from_grams(value: f64) -> Self {
        Self(value / SOLAR_MASS_G)
    }

    pub fn from_kg(value: f64) -> Self {
        Self::from_grams(value * 1000.0)
    }

    /// Returns the mass value in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Converts the mass to grams.
    pub fn to_grams(&self) -> f64 {
        self.0 * SOLAR_MASS_G
    }

    pub fn to_kg(&self) -> f64 {
        self.to_grams() / 1000.0
    }

    /// Mean density of this mass spread uniformly through a sphere of radius `r`.
    ///
    /// ρ̄ = M / (4/3 π r³)
    pub fn mean_density_within(&self, r: Length) -> Density {
        let volume = 4.0 / 3.0 * PI * r.to_kpc().powi(3);
        Density::from_msun_per_kpc3(self.0 / volume)
    }

    /// Returns true if the value is finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Power function
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Mass (commutative multiplication)
impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}
