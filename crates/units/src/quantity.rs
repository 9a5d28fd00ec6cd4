//! Runtime-tagged physical quantities.
//!
//! The typed newtypes ([`Mass`], [`Length`], ...) catch dimension errors at
//! compile time. Values that arrive from configuration files or that must be
//! reported in a caller-chosen unit travel as a [`Quantity`] instead: a value
//! paired with a [`Unit`], where every conversion is checked against the
//! unit's [`Dimension`] and fails with [`UnitError::DimensionMismatch`] rather
//! than producing a silently wrong number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use crate::constants::{
    KPC_PER_MPC, KPC_TO_CM, KPC_TO_KM, KPC_TO_M, MPC_TO_KM, PC_PER_KPC, SECONDS_PER_GYR,
    SOLAR_MASS_G,
};
use crate::error::UnitError;
use crate::{Density, HubbleRate, Length, Mass, Time, Velocity};

/// Physical dimension of a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Dimensionless,
    Mass,
    Length,
    Time,
    Velocity,
    Density,
    /// Inverse time (expansion rates)
    Rate,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Dimensionless => "dimensionless",
            Dimension::Mass => "mass",
            Dimension::Length => "length",
            Dimension::Time => "time",
            Dimension::Velocity => "velocity",
            Dimension::Density => "density",
            Dimension::Rate => "rate",
        };
        f.write_str(name)
    }
}

/// A concrete unit of measure.
///
/// Each unit knows its dimension and its scale relative to the canonical unit
/// of that dimension (M☉, kpc, Gyr, km/s, M☉/kpc³, km/s/Mpc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "")]
    Dimensionless,

    #[serde(rename = "Msun", alias = "solMass")]
    SolarMass,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,

    #[serde(rename = "kpc")]
    Kiloparsec,
    #[serde(rename = "Mpc")]
    Megaparsec,
    #[serde(rename = "pc")]
    Parsec,
    #[serde(rename = "km")]
    Kilometer,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "cm")]
    Centimeter,

    #[serde(rename = "Gyr")]
    Gigayear,
    #[serde(rename = "Myr")]
    Megayear,
    #[serde(rename = "yr")]
    Year,
    #[serde(rename = "s")]
    Second,

    #[serde(rename = "km/s")]
    KmPerSecond,
    #[serde(rename = "m/s")]
    MetersPerSecond,
    #[serde(rename = "cm/s")]
    CmPerSecond,

    #[serde(rename = "Msun/kpc3", alias = "solMass/kpc3")]
    MsunPerKpc3,
    #[serde(rename = "Msun/Mpc3", alias = "solMass/Mpc3")]
    MsunPerMpc3,
    #[serde(rename = "g/cm3")]
    GramPerCm3,
    #[serde(rename = "kg/m3")]
    KgPerM3,

    #[serde(rename = "km/s/Mpc")]
    KmPerSecondPerMpc,
    #[serde(rename = "1/s")]
    PerSecond,
    #[serde(rename = "1/Gyr")]
    PerGyr,
}

impl Unit {
    const ALL: [Unit; 24] = [
        Unit::Dimensionless,
        Unit::SolarMass,
        Unit::Gram,
        Unit::Kilogram,
        Unit::Kiloparsec,
        Unit::Megaparsec,
        Unit::Parsec,
        Unit::Kilometer,
        Unit::Meter,
        Unit::Centimeter,
        Unit::Gigayear,
        Unit::Megayear,
        Unit::Year,
        Unit::Second,
        Unit::KmPerSecond,
        Unit::MetersPerSecond,
        Unit::CmPerSecond,
        Unit::MsunPerKpc3,
        Unit::MsunPerMpc3,
        Unit::GramPerCm3,
        Unit::KgPerM3,
        Unit::KmPerSecondPerMpc,
        Unit::PerSecond,
        Unit::PerGyr,
    ];

    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Dimensionless => Dimension::Dimensionless,
            Unit::SolarMass | Unit::Gram | Unit::Kilogram => Dimension::Mass,
            Unit::Kiloparsec
            | Unit::Megaparsec
            | Unit::Parsec
            | Unit::Kilometer
            | Unit::Meter
            | Unit::Centimeter => Dimension::Length,
            Unit::Gigayear | Unit::Megayear | Unit::Year | Unit::Second => Dimension::Time,
            Unit::KmPerSecond | Unit::MetersPerSecond | Unit::CmPerSecond => Dimension::Velocity,
            Unit::MsunPerKpc3 | Unit::MsunPerMpc3 | Unit::GramPerCm3 | Unit::KgPerM3 => {
                Dimension::Density
            }
            Unit::KmPerSecondPerMpc | Unit::PerSecond | Unit::PerGyr => Dimension::Rate,
        }
    }

    /// Multiplier taking a value in this unit to the canonical unit of its dimension.
    pub fn scale(&self) -> f64 {
        match self {
            Unit::Dimensionless => 1.0,
            Unit::SolarMass => 1.0,
            Unit::Gram => 1.0 / SOLAR_MASS_G,
            Unit::Kilogram => 1.0e3 / SOLAR_MASS_G,
            Unit::Kiloparsec => 1.0,
            Unit::Megaparsec => KPC_PER_MPC,
            Unit::Parsec => 1.0 / PC_PER_KPC,
            Unit::Kilometer => 1.0 / KPC_TO_KM,
            Unit::Meter => 1.0 / KPC_TO_M,
            Unit::Centimeter => 1.0 / KPC_TO_CM,
            Unit::Gigayear => 1.0,
            Unit::Megayear => 1.0e-3,
            Unit::Year => 1.0e-9,
            Unit::Second => 1.0 / SECONDS_PER_GYR,
            Unit::KmPerSecond => 1.0,
            Unit::MetersPerSecond => 1.0e-3,
            Unit::CmPerSecond => 1.0e-5,
            Unit::MsunPerKpc3 => 1.0,
            Unit::MsunPerMpc3 => 1.0 / (KPC_PER_MPC * KPC_PER_MPC * KPC_PER_MPC),
            Unit::GramPerCm3 => KPC_TO_CM * KPC_TO_CM * KPC_TO_CM / SOLAR_MASS_G,
            Unit::KgPerM3 => 1.0e-3 * KPC_TO_CM * KPC_TO_CM * KPC_TO_CM / SOLAR_MASS_G,
            Unit::KmPerSecondPerMpc => 1.0,
            Unit::PerSecond => MPC_TO_KM,
            Unit::PerGyr => MPC_TO_KM / SECONDS_PER_GYR,
        }
    }

    /// Conventional symbol, also used for (de)serialization.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Dimensionless => "",
            Unit::SolarMass => "Msun",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Kiloparsec => "kpc",
            Unit::Megaparsec => "Mpc",
            Unit::Parsec => "pc",
            Unit::Kilometer => "km",
            Unit::Meter => "m",
            Unit::Centimeter => "cm",
            Unit::Gigayear => "Gyr",
            Unit::Megayear => "Myr",
            Unit::Year => "yr",
            Unit::Second => "s",
            Unit::KmPerSecond => "km/s",
            Unit::MetersPerSecond => "m/s",
            Unit::CmPerSecond => "cm/s",
            Unit::MsunPerKpc3 => "Msun/kpc3",
            Unit::MsunPerMpc3 => "Msun/Mpc3",
            Unit::GramPerCm3 => "g/cm3",
            Unit::KgPerM3 => "kg/m3",
            Unit::KmPerSecondPerMpc => "km/s/Mpc",
            Unit::PerSecond => "1/s",
            Unit::PerGyr => "1/Gyr",
        }
    }

    /// The canonical unit for a dimension.
    pub fn canonical(dimension: Dimension) -> Unit {
        match dimension {
            Dimension::Dimensionless => Unit::Dimensionless,
            Dimension::Mass => Unit::SolarMass,
            Dimension::Length => Unit::Kiloparsec,
            Dimension::Time => Unit::Gigayear,
            Dimension::Velocity => Unit::KmPerSecond,
            Dimension::Density => Unit::MsunPerKpc3,
            Dimension::Rate => Unit::KmPerSecondPerMpc,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.replace("solMass", "Msun");
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.symbol() == normalized)
            .ok_or_else(|| UnitError::UnknownUnit(trimmed.to_string()))
    }
}

/// A value tagged with its unit.
///
/// # Examples
///
/// ```rust
/// use units::{Quantity, Unit};
///
/// let r = Quantity::new(0.25, Unit::Megaparsec);
/// assert_eq!(r.to(Unit::Kiloparsec).unwrap().value(), 250.0);
///
/// // Lengths cannot become masses
/// assert!(r.to(Unit::SolarMass).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, Unit::Dimensionless)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Re-expresses the quantity in `target`.
    ///
    /// Fails with [`UnitError::DimensionMismatch`] if `target` measures a
    /// different dimension.
    pub fn to(&self, target: Unit) -> Result<Quantity, UnitError> {
        self.require(target.dimension())?;
        Ok(Quantity::new(
            self.value * self.unit.scale() / target.scale(),
            target,
        ))
    }

    /// Numeric value in `target`, checked like [`Quantity::to`].
    pub fn value_in(&self, target: Unit) -> Result<f64, UnitError> {
        self.to(target).map(|q| q.value)
    }

    /// Value in the canonical unit of this quantity's dimension.
    pub fn canonical_value(&self) -> f64 {
        self.value * self.unit.scale()
    }

    /// Checks that this quantity measures `expected`.
    pub fn require(&self, expected: Dimension) -> Result<&Self, UnitError> {
        let found = self.dimension();
        if found != expected {
            return Err(UnitError::DimensionMismatch { expected, found });
        }
        Ok(self)
    }

    /// Sum expressed in this quantity's unit.
    pub fn checked_add(&self, rhs: Quantity) -> Result<Quantity, UnitError> {
        let rhs = rhs.to(self.unit)?;
        Ok(Quantity::new(self.value + rhs.value, self.unit))
    }

    /// Difference expressed in this quantity's unit.
    pub fn checked_sub(&self, rhs: Quantity) -> Result<Quantity, UnitError> {
        let rhs = rhs.to(self.unit)?;
        Ok(Quantity::new(self.value - rhs.value, self.unit))
    }

    /// Dimensionless ratio of two quantities of the same dimension.
    pub fn ratio(&self, rhs: Quantity) -> Result<f64, UnitError> {
        let rhs = rhs.to(self.unit)?;
        Ok(self.value / rhs.value)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.value * rhs, self.unit)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit == Unit::Dimensionless {
            return write!(f, "{}", self.value);
        }
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::dimensionless(value)
    }
}

macro_rules! impl_quantity_bridge {
    ($typed:ty, $unit:expr, $from:path, $to:ident) => {
        impl From<$typed> for Quantity {
            fn from(value: $typed) -> Self {
                Quantity::new(value.$to(), $unit)
            }
        }

        impl TryFrom<Quantity> for $typed {
            type Error = UnitError;

            fn try_from(quantity: Quantity) -> Result<Self, Self::Error> {
                Ok($from(quantity.value_in($unit)?))
            }
        }
    };
}

impl_quantity_bridge!(Mass, Unit::SolarMass, Mass::from_solar_masses, to_solar_masses);
impl_quantity_bridge!(Length, Unit::Kiloparsec, Length::from_kpc, to_kpc);
impl_quantity_bridge!(Time, Unit::Gigayear, Time::from_gyr, to_gyr);
impl_quantity_bridge!(Velocity, Unit::KmPerSecond, Velocity::from_km_per_sec, to_km_per_sec);
impl_quantity_bridge!(Density, Unit::MsunPerKpc3, Density::from_msun_per_kpc3, to_msun_per_kpc3);
impl_quantity_bridge!(
    HubbleRate,
    Unit::KmPerSecondPerMpc,
    HubbleRate::from_km_per_sec_per_mpc,
    to_km_per_sec_per_mpc
);
