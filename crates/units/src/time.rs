use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::SECONDS_PER_GYR;

/// A physical time quantity using f64 precision.
///
/// The `Time` struct represents time with gigayears as the base unit,
/// which is natural for cosmological timescales (the Hubble time is ~14 Gyr).
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let age = Time::from_gyr(13.8);
/// assert_eq!(age.to_myr(), 13_800.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Gyr

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Time` from a value in gigayears.
    pub fn from_gyr(value: f64) -> Self {
        Self(value)
    }

    /// Creates a time from a value in million years (Myr)
    pub fn from_myr(value: f64) -> Self {
        Self(value / 1.0e3)
    }

    /// Creates a new `Time` from a value in years.
    pub fn from_years(value: f64) -> Self {
        Self(value / 1.0e9)
    }

    /// Creates a new `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self(value / SECONDS_PER_GYR)
    }

    /// Returns the time in gigayears.
    pub fn to_gyr(&self) -> f64 {
        self.0
    }

    /// Returns the time in million years
    pub fn to_myr(&self) -> f64 {
        self.0 * 1.0e3
    }

    pub fn to_years(&self) -> f64 {
        self.0 * 1.0e9
    }

    /// Converts the time to seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0 * SECONDS_PER_GYR
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}
