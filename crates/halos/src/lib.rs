//! Dark-matter halo density profiles and their virial radii.
//!
//! Profiles ([`Hernquist`], [`Nfw`], [`DoublePowerLaw`]) implement
//! [`DensityProfile`]; those with a closed-form cumulative mass also implement
//! [`EnclosedMass`]. A [`Virial`] context derives the overdensity threshold
//! ρ_vir = Δ ρ_crit(z) from a cosmology and finds where any profile meets it.
//!
//! ```rust
//! use halos::{Nfw, Virial};
//! use units::{Density, Length};
//!
//! let virial = Virial::standard()?;
//! let mut halo = Nfw::new(Density::from_msun_per_kpc3(1.0e7), Length::from_kpc(20.0))?;
//! halo.set_virial(&virial)?;
//!
//! let c = halo.concentration()?;
//! assert!(c > 7.0 && c < 20.0);
//! # Ok::<(), halos::HaloError>(())
//! ```

pub mod config;
pub mod double_power;
pub mod error;
pub mod halo_profile;
pub mod hernquist;
pub mod nfw;
pub mod profile;
pub mod root;
pub mod summary;
pub mod virial;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod hernquist_test;

pub use config::{HaloConfig, ProfileConfig, VirialConfig};
pub use double_power::DoublePowerLaw;
pub use error::{HaloError, Result};
pub use halo_profile::HaloProfile;
pub use hernquist::Hernquist;
pub use nfw::{Nfw, VirialBinding};
pub use profile::{DensityProfile, EnclosedMass};
pub use root::{Brent, Root, RootError};
pub use summary::HaloSummary;
pub use virial::{RadiusBracket, Virial, VirialCriterion, DEFAULT_OVERDENSITY};
