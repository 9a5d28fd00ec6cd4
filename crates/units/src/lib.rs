//! Physical quantities for halo modelling.
//!
//! Typed newtypes ([`Mass`], [`Length`], [`Density`], ...) carry their
//! dimension in the type system and store values in astrophysical base units
//! (M☉, kpc, M☉/kpc³, km/s, Gyr). [`Quantity`] carries its unit at runtime for
//! values that cross configuration or reporting boundaries.

pub mod constants;
pub mod defaults;
pub mod density;
pub mod error;
pub mod hubble_rate;
pub mod length;
pub mod mass;
pub mod quantity;
pub mod time;
pub mod velocity;


pub use constants::{G, SOLAR_MASS_G};
pub use defaults::{DefaultUnits, DEFAULT_UNITS};
pub use density::Density;
pub use error::UnitError;
pub use hubble_rate::HubbleRate;
pub use length::Length;
pub use mass::Mass;
pub use quantity::{Dimension, Quantity, Unit};
pub use time::Time;
pub use velocity::{circular_velocity, Velocity};
