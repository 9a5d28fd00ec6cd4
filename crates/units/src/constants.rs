//! Physical constants and unit scale factors.
//!
//! Values follow CODATA 2018 and the IAU 2015 nominal solar mass.

/// Mass of the Sun in grams.
pub const SOLAR_MASS_G: f64 = 1.988409870698051e33;

/// Mass of the Sun in kilograms.
pub const SOLAR_MASS_KG: f64 = SOLAR_MASS_G / 1000.0;

/// One kiloparsec in kilometers.
pub const KPC_TO_KM: f64 = 3.0856775814913673e16;

/// One kiloparsec in meters.
pub const KPC_TO_M: f64 = KPC_TO_KM * 1.0e3;

/// One kiloparsec in centimeters.
pub const KPC_TO_CM: f64 = KPC_TO_KM * 1.0e5;

/// One megaparsec in kilometers.
pub const MPC_TO_KM: f64 = KPC_TO_KM * 1.0e3;

pub const KPC_PER_MPC: f64 = 1.0e3;
pub const PC_PER_KPC: f64 = 1.0e3;

/// Julian year in seconds (365.25 days).
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0;

pub const SECONDS_PER_GYR: f64 = SECONDS_PER_YEAR * 1.0e9;

/// Newtonian constant of gravitation in SI units (m³ kg⁻¹ s⁻²).
pub const G_SI: f64 = 6.6743e-11;

/// Newtonian constant of gravitation in kpc (km/s)² / M☉.
///
/// This is the natural system for halo work: G·M/r with M in solar masses and
/// r in kiloparsecs gives a squared velocity in (km/s)².
pub const G: f64 = G_SI * SOLAR_MASS_KG / KPC_TO_M / 1.0e6;

/// Pi
pub const PI: f64 = std::f64::consts::PI;
