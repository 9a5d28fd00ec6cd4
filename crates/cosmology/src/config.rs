//! Serde-facing cosmology selection.

use serde::{Deserialize, Serialize};

use crate::error::CosmologyError;
use crate::lambda_cdm::LambdaCdm;

/// Named parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Planck18,
    Planck15,
    Wmap9,
}

/// Either a preset name or explicit ΛCDM parameters.
///
/// ```rust
/// use cosmology::CosmologyConfig;
///
/// let preset: CosmologyConfig = serde_json::from_str(r#""wmap9""#).unwrap();
/// let custom: CosmologyConfig =
///     serde_json::from_str(r#"{"h0": 70.0, "omega_m": 0.3}"#).unwrap();
///
/// assert_eq!(preset.build().unwrap().h0().to_km_per_sec_per_mpc(), 69.32);
/// assert_eq!(custom.build().unwrap().omega_lambda(), 0.7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CosmologyConfig {
    Preset(Preset),
    Custom {
        h0: f64,
        omega_m: f64,
        /// Defaults to the flat value 1 − Ω_m − Ω_r
        #[serde(default, skip_serializing_if = "Option::is_none")]
        omega_lambda: Option<f64>,
        #[serde(default)]
        omega_r: f64,
    },
}

impl Default for CosmologyConfig {
    fn default() -> Self {
        CosmologyConfig::Preset(Preset::Planck18)
    }
}

impl CosmologyConfig {
    pub fn build(&self) -> Result<LambdaCdm, CosmologyError> {
        match *self {
            CosmologyConfig::Preset(Preset::Planck18) => Ok(LambdaCdm::planck18()),
            CosmologyConfig::Preset(Preset::Planck15) => Ok(LambdaCdm::planck15()),
            CosmologyConfig::Preset(Preset::Wmap9) => Ok(LambdaCdm::wmap9()),
            CosmologyConfig::Custom {
                h0,
                omega_m,
                omega_lambda,
                omega_r,
            } => {
                let omega_lambda = omega_lambda.unwrap_or(1.0 - omega_m - omega_r);
                LambdaCdm::new(h0, omega_m, omega_lambda, omega_r)
            }
        }
    }
}
