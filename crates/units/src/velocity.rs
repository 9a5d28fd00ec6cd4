use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::G;
use crate::length::Length;
use crate::mass::Mass;

/// A physical velocity quantity using f64 precision, stored in km/s.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: km/s

impl Velocity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_m_per_sec(value: f64) -> Self {
        Self(value / 1.0e3)
    }

    pub fn from_cm_per_sec(value: f64) -> Self {
        Self(value / 1.0e5)
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_m_per_sec(&self) -> f64 {
        self.0 * 1.0e3
    }

    pub fn to_cm_per_sec(&self) -> f64 {
        self.0 * 1.0e5
    }
}

/// Circular velocity of a test particle orbiting at radius `r` around an
/// enclosed mass `mass`.
///
/// v_c = √(G M / r)
///
/// # Examples
/// ```
/// use units::{circular_velocity, Length, Mass};
///
/// // ~1e12 M☉ within 250 kpc gives roughly 130 km/s
/// let v = circular_velocity(Mass::from_solar_masses(1.0e12), Length::from_kpc(250.0));
/// assert!((v.to_km_per_sec() - 131.2).abs() < 1.0);
/// ```
pub fn circular_velocity(mass: Mass, r: Length) -> Velocity {
    Velocity((G * mass.to_solar_masses() / r.to_kpc()).sqrt())
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}

impl Div for Velocity {
    type Output = f64;

    fn div(self, rhs: Velocity) -> f64 {
        self.0 / rhs.0
    }
}
