use serde::Serialize;
use std::fmt;

use units::{Density, Length, Mass};

use crate::double_power::DoublePowerLaw;
use crate::hernquist::Hernquist;
use crate::nfw::Nfw;
use crate::profile::{DensityProfile, EnclosedMass};

/// A halo profile of any supported shape.
///
/// This enum wraps every profile variant for use where the shape is only
/// known at runtime (e.g. read from configuration).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum HaloProfile {
    Hernquist(Hernquist),
    Nfw(Nfw),
    DoublePowerLaw(DoublePowerLaw),
}

impl HaloProfile {
    /// Enclosed mass, where the variant has a closed form.
    ///
    /// `None` for [`DoublePowerLaw`]: its enclosed mass has to be integrated
    /// numerically by the caller.
    pub fn enclosed_mass(&self, r: Length) -> Option<Mass> {
        match self {
            HaloProfile::Hernquist(p) => Some(p.enclosed_mass(r)),
            HaloProfile::Nfw(p) => Some(p.enclosed_mass(r)),
            HaloProfile::DoublePowerLaw(_) => None,
        }
    }

    /// Mean enclosed density, where the enclosed mass has a closed form.
    pub fn mean_enclosed_density(&self, r: Length) -> Option<Density> {
        self.enclosed_mass(r).map(|m| m.mean_density_within(r))
    }

    pub fn name(&self) -> &'static str {
        match self {
            HaloProfile::Hernquist(_) => "Hernquist",
            HaloProfile::Nfw(_) => "NFW",
            HaloProfile::DoublePowerLaw(_) => "DoublePowerLaw",
        }
    }

    pub fn as_nfw(&self) -> Option<&Nfw> {
        match self {
            HaloProfile::Nfw(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_nfw_mut(&mut self) -> Option<&mut Nfw> {
        match self {
            HaloProfile::Nfw(p) => Some(p),
            _ => None,
        }
    }
}

impl DensityProfile for HaloProfile {
    fn scale_density(&self) -> Density {
        match self {
            HaloProfile::Hernquist(p) => p.scale_density(),
            HaloProfile::Nfw(p) => p.scale_density(),
            HaloProfile::DoublePowerLaw(p) => p.scale_density(),
        }
    }

    fn scale_radius(&self) -> Length {
        match self {
            HaloProfile::Hernquist(p) => p.scale_radius(),
            HaloProfile::Nfw(p) => p.scale_radius(),
            HaloProfile::DoublePowerLaw(p) => p.scale_radius(),
        }
    }

    fn density(&self, r: Length) -> Density {
        match self {
            HaloProfile::Hernquist(p) => p.density(r),
            HaloProfile::Nfw(p) => p.density(r),
            HaloProfile::DoublePowerLaw(p) => p.density(r),
        }
    }
}

impl From<Hernquist> for HaloProfile {
    fn from(profile: Hernquist) -> Self {
        HaloProfile::Hernquist(profile)
    }
}

impl From<Nfw> for HaloProfile {
    fn from(profile: Nfw) -> Self {
        HaloProfile::Nfw(profile)
    }
}

impl From<DoublePowerLaw> for HaloProfile {
    fn from(profile: DoublePowerLaw) -> Self {
        HaloProfile::DoublePowerLaw(profile)
    }
}

impl fmt::Display for HaloProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HaloProfile::Hernquist(p) => fmt::Display::fmt(p, f),
            HaloProfile::Nfw(p) => fmt::Display::fmt(p, f),
            HaloProfile::DoublePowerLaw(p) => fmt::Display::fmt(p, f),
        }
    }
}
