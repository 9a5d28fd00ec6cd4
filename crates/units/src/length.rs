use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::{KPC_PER_MPC, KPC_TO_CM, KPC_TO_KM, KPC_TO_M, PC_PER_KPC};

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with kiloparsecs as the base unit.
/// Halo scale radii are a few to a few tens of kpc and virial radii a few hundred,
/// so kpc keeps every value of interest close to unity.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let scale_radius = Length::from_kpc(20.0);
/// let virial_radius = Length::from_mpc(0.25);
///
/// assert_eq!(virial_radius / scale_radius, 12.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: kpc

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in kiloparsecs.
    pub fn from_kpc(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in megaparsecs.
    pub fn from_mpc(value: f64) -> Self {
        Self(value * KPC_PER_MPC)
    }

    /// Creates a new `Length` from a value in parsecs.
    pub fn from_pc(value: f64) -> Self {
        Self(value / PC_PER_KPC)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value / KPC_TO_KM)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value / KPC_TO_M)
    }

    /// Creates a new `Length` from a value in centimeters.
    pub fn from_cm(value: f64) -> Self {
        Self(value / KPC_TO_CM)
    }

    /// Returns the length in kiloparsecs.
    pub fn to_kpc(&self) -> f64 {
        self.0
    }

    pub fn to_mpc(&self) -> f64 {
        self.0 / KPC_PER_MPC
    }

    pub fn to_pc(&self) -> f64 {
        self.0 * PC_PER_KPC
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 * KPC_TO_KM
    }

    /// Converts the length to meters.
    pub fn to_m(&self) -> f64 {
        self.0 * KPC_TO_M
    }

    /// Converts the length to centimeters.
    pub fn to_cm(&self) -> f64 {
        self.0 * KPC_TO_CM
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 {
            self
        } else {
            other
        }
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }

    /// Returns true if the value is finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Raise to integer power (returns dimensionless f64 in kpcⁿ)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

impl Div<&Length> for Length {
    type Output = f64;

    fn div(self, rhs: &Length) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
