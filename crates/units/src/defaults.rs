//! Default units used when normalizing results for display and storage.

use serde::{Deserialize, Serialize};

use crate::error::UnitError;
use crate::quantity::{Dimension, Quantity, Unit};

/// A table mapping each physical dimension to the unit results are reported in.
///
/// The standard table is M☉, kpc, km/s, Gyr, with density derived as
/// mass / length³ (M☉/kpc³).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub mass: Unit,
    pub length: Unit,
    pub velocity: Unit,
    pub time: Unit,
    pub density: Unit,
}

/// The table every library result is normalized to unless told otherwise.
pub const DEFAULT_UNITS: DefaultUnits = DefaultUnits {
    mass: Unit::SolarMass,
    length: Unit::Kiloparsec,
    velocity: Unit::KmPerSecond,
    time: Unit::Gigayear,
    density: Unit::MsunPerKpc3,
};

impl Default for DefaultUnits {
    fn default() -> Self {
        DEFAULT_UNITS
    }
}

impl DefaultUnits {
    /// Builds a custom table, checking each unit against the dimension of its slot.
    pub fn new(
        mass: Unit,
        length: Unit,
        velocity: Unit,
        time: Unit,
        density: Unit,
    ) -> Result<Self, UnitError> {
        let slots = [
            (Dimension::Mass, mass),
            (Dimension::Length, length),
            (Dimension::Velocity, velocity),
            (Dimension::Time, time),
            (Dimension::Density, density),
        ];
        for (expected, unit) in slots {
            let found = unit.dimension();
            if found != expected {
                return Err(UnitError::DimensionMismatch { expected, found });
            }
        }

        Ok(Self {
            mass,
            length,
            velocity,
            time,
            density,
        })
    }

    /// The unit results of `dimension` are reported in, if the table covers it.
    pub fn unit_for(&self, dimension: Dimension) -> Option<Unit> {
        match dimension {
            Dimension::Mass => Some(self.mass),
            Dimension::Length => Some(self.length),
            Dimension::Velocity => Some(self.velocity),
            Dimension::Time => Some(self.time),
            Dimension::Density => Some(self.density),
            Dimension::Dimensionless | Dimension::Rate => None,
        }
    }

    /// Re-expresses `quantity` in the table's unit for its dimension.
    ///
    /// Dimensions the table does not cover are returned unchanged.
    pub fn normalize(&self, quantity: Quantity) -> Quantity {
        match self.unit_for(quantity.dimension()) {
            Some(unit) => Quantity::new(quantity.canonical_value() / unit.scale(), unit),
            None => quantity,
        }
    }

    /// Converts a typed value to a [`Quantity`] in the table's unit.
    pub fn express(&self, value: impl Into<Quantity>) -> Quantity {
        self.normalize(value.into())
    }
}
