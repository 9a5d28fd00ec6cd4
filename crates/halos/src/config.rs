//! Serde-facing halo configuration.
//!
//! A [`HaloConfig`] names a virial definition and a profile. Dimensioned
//! parameters are [`Quantity`] values, so they may be given in any compatible
//! unit and are dimension-checked when the configuration is built:
//!
//! ```json
//! {
//!   "virial": { "redshift": 0.0, "overdensity": 200.0, "cosmology": "planck18" },
//!   "profile": {
//!     "type": "nfw",
//!     "rho_0": { "value": 1.0e7, "unit": "Msun/kpc3" },
//!     "r_0": { "value": 20.0, "unit": "kpc" },
//!     "bind_virial": true
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use cosmology::{CosmologyConfig, LambdaCdm};
use units::{Mass, Quantity};

use crate::double_power::DoublePowerLaw;
use crate::error::Result;
use crate::halo_profile::HaloProfile;
use crate::hernquist::Hernquist;
use crate::nfw::Nfw;
use crate::virial::{Virial, DEFAULT_OVERDENSITY};

/// Redshift, overdensity and cosmology of the virial threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirialConfig {
    pub redshift: f64,
    pub overdensity: f64,
    pub cosmology: CosmologyConfig,
}

impl Default for VirialConfig {
    fn default() -> Self {
        Self {
            redshift: 0.0,
            overdensity: DEFAULT_OVERDENSITY,
            cosmology: CosmologyConfig::default(),
        }
    }
}

impl VirialConfig {
    pub fn build(&self) -> Result<Virial<LambdaCdm>> {
        Virial::new(self.redshift, self.cosmology.build()?, self.overdensity)
    }
}

/// One of the supported profile shapes with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProfileConfig {
    Hernquist {
        rho_0: Quantity,
        r_0: Quantity,
    },
    Nfw {
        rho_0: Quantity,
        r_0: Quantity,
        /// Solve for the virial radius after construction
        #[serde(default)]
        bind_virial: bool,
    },
    /// NFW specified by virial mass and concentration
    NfwFromVirial {
        m_vir: Quantity,
        concentration: f64,
    },
    DoublePowerLaw {
        rho_0: Quantity,
        r_0: Quantity,
        alpha: f64,
        beta: f64,
        gamma: f64,
    },
}

impl ProfileConfig {
    pub fn build(&self, virial: &Virial<LambdaCdm>) -> Result<HaloProfile> {
        let profile: HaloProfile = match *self {
            ProfileConfig::Hernquist { rho_0, r_0 } => Hernquist::from_quantities(rho_0, r_0)?.into(),
            ProfileConfig::Nfw {
                rho_0,
                r_0,
                bind_virial,
            } => {
                let nfw = Nfw::from_quantities(rho_0, r_0)?;
                if bind_virial {
                    nfw.bound(virial)?.into()
                } else {
                    nfw.into()
                }
            }
            ProfileConfig::NfwFromVirial {
                m_vir,
                concentration,
            } => Nfw::from_virial_mass(Mass::try_from(m_vir)?, concentration, Some(virial))?.into(),
            ProfileConfig::DoublePowerLaw {
                rho_0,
                r_0,
                alpha,
                beta,
                gamma,
            } => DoublePowerLaw::from_quantities(rho_0, r_0, alpha, beta, gamma)?.into(),
        };
        Ok(profile)
    }
}

/// A complete halo description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HaloConfig {
    #[serde(default)]
    pub virial: VirialConfig,
    pub profile: ProfileConfig,
}

impl HaloConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the configuration and builds the virial context and profile.
    pub fn build(&self) -> Result<(Virial<LambdaCdm>, HaloProfile)> {
        let virial = self.virial.build()?;
        let profile = self.profile.build(&virial)?;
        Ok((virial, profile))
    }
}
