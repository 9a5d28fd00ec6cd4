use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

use crate::constants::{KPC_PER_MPC, MPC_TO_KM, SECONDS_PER_GYR};
use crate::time::Time;

/// An expansion rate (inverse time), stored in km/s/Mpc.
///
/// Hubble parameters are quoted in km/s/Mpc by convention; the inverse-time
/// conversions are what enter the critical density and the Hubble time.
///
/// # Examples
///
/// ```rust
/// use units::HubbleRate;
///
/// let h0 = HubbleRate::from_km_per_sec_per_mpc(67.66);
/// assert!((h0.hubble_time().to_gyr() - 14.45).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct HubbleRate(f64); // Base unit: km/s/Mpc

impl HubbleRate {
    pub fn from_km_per_sec_per_mpc(value: f64) -> Self {
        Self(value)
    }

    pub fn from_per_second(value: f64) -> Self {
        Self(value * MPC_TO_KM)
    }

    pub fn from_per_gyr(value: f64) -> Self {
        Self::from_per_second(value / SECONDS_PER_GYR)
    }

    pub fn to_km_per_sec_per_mpc(&self) -> f64 {
        self.0
    }

    /// km/s/kpc, the rate paired with G in kpc (km/s)² / M☉.
    pub fn to_km_per_sec_per_kpc(&self) -> f64 {
        self.0 / KPC_PER_MPC
    }

    pub fn to_per_second(&self) -> f64 {
        self.0 / MPC_TO_KM
    }

    pub fn to_per_gyr(&self) -> f64 {
        self.to_per_second() * SECONDS_PER_GYR
    }

    /// The Hubble time 1/H.
    pub fn hubble_time(&self) -> Time {
        Time::from_seconds(1.0 / self.to_per_second())
    }
}

impl Mul<f64> for HubbleRate {
    type Output = HubbleRate;

    fn mul(self, rhs: f64) -> HubbleRate {
        HubbleRate(self.0 * rhs)
    }
}

impl Div for HubbleRate {
    type Output = f64;

    fn div(self, rhs: HubbleRate) -> f64 {
        self.0 / rhs.0
    }
}
