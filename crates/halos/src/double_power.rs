use serde::Serialize;
use std::fmt;
use tracing::warn;

use units::{Density, Length, Quantity};

use crate::error::{require_finite, require_positive, Result};
use crate::profile::DensityProfile;

/// The generalized (α, β, γ) double power law (Zhao 1996).
///
/// ρ(r) = ρ_0 x^(−γ) (1 + x^α)^((γ−β)/α), x = r/r_0
///
/// γ is the inner logarithmic slope, β the outer one and α the sharpness of
/// the transition. NFW is (1, 3, 1) and Hernquist (1, 4, 1).
///
/// There is no closed form for the enclosed mass of a general (α, β, γ), so
/// this profile does not implement [`crate::EnclosedMass`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoublePowerLaw {
    rho_0: Density,
    r_0: Length,
    alpha: f64,
    beta: f64,
    gamma: f64,
}

impl DoublePowerLaw {
    pub fn new(rho_0: Density, r_0: Length, alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        require_positive("rho_0", rho_0.to_msun_per_kpc3())?;
        require_positive("r_0", r_0.to_kpc())?;
        require_positive("alpha", alpha)?;
        require_finite("beta", beta)?;
        require_finite("gamma", gamma)?;

        if beta <= gamma {
            warn!(beta, gamma, "double power law with beta <= gamma does not fall off outward");
        }

        Ok(Self {
            rho_0,
            r_0,
            alpha,
            beta,
            gamma,
        })
    }

    /// Builds the profile from runtime-tagged quantities in any compatible unit.
    pub fn from_quantities(
        rho_0: Quantity,
        r_0: Quantity,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> Result<Self> {
        Self::new(
            Density::try_from(rho_0)?,
            Length::try_from(r_0)?,
            alpha,
            beta,
            gamma,
        )
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Exponent of x, p_1 = −γ
    pub fn inner_power(&self) -> f64 {
        -self.gamma
    }

    /// Exponent of (1 + x^α), p_2 = (γ − β)/α
    pub fn outer_power(&self) -> f64 {
        (self.gamma - self.beta) / self.alpha
    }
}

impl DensityProfile for DoublePowerLaw {
    fn scale_density(&self) -> Density {
        self.rho_0
    }

    fn scale_radius(&self) -> Length {
        self.r_0
    }

    fn density(&self, r: Length) -> Density {
        let x = self.dimensionless_radius(r);
        if x <= 0.0 {
            // x → 0⁺ limit: cusp, core or hole depending on the inner slope
            let limit = match self.gamma {
                g if g > 0.0 => f64::INFINITY,
                g if g == 0.0 => 1.0,
                _ => 0.0,
            };
            return self.rho_0 * limit;
        }
        self.rho_0 * (x.powf(self.inner_power()) * (1.0 + x.powf(self.alpha)).powf(self.outer_power()))
    }
}

impl fmt::Display for DoublePowerLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DoublePowerLaw(rho_0={:.3e} Msun/kpc3, r_0={:.3e} kpc, alpha={}, beta={}, gamma={})",
            self.rho_0.to_msun_per_kpc3(),
            self.r_0.to_kpc(),
            self.alpha,
            self.beta,
            self.gamma
        )
    }
}
