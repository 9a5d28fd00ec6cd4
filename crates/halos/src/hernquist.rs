use serde::Serialize;
use std::fmt;

use units::constants::PI;
use units::{Density, Length, Mass, Quantity};

use crate::error::{require_positive, Result};
use crate::profile::{cuspy_density, DensityProfile, EnclosedMass};

/// The Hernquist (1990) profile, ρ(r) = ρ_0 / (x (1+x)³) with x = r/r_0.
///
/// Total mass is finite: M(<r) → 2π ρ_0 r_0³ as r → ∞.
///
/// # Examples
///
/// ```rust
/// use halos::{DensityProfile, EnclosedMass, Hernquist};
/// use units::{Density, Length};
///
/// let halo = Hernquist::new(Density::from_msun_per_kpc3(1.0e7), Length::from_kpc(20.0)).unwrap();
///
/// // Half the total mass lies inside (1 + √2) r_0
/// let r_half = Length::from_kpc(20.0 * (1.0 + 2.0_f64.sqrt()));
/// let ratio = halo.enclosed_mass(r_half) / halo.total_mass();
/// assert!((ratio - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hernquist {
    rho_0: Density,
    r_0: Length,
}

impl Hernquist {
    pub fn new(rho_0: Density, r_0: Length) -> Result<Self> {
        require_positive("rho_0", rho_0.to_msun_per_kpc3())?;
        require_positive("r_0", r_0.to_kpc())?;
        Ok(Self { rho_0, r_0 })
    }

    /// Builds the profile from runtime-tagged quantities in any compatible unit.
    pub fn from_quantities(rho_0: Quantity, r_0: Quantity) -> Result<Self> {
        Self::new(Density::try_from(rho_0)?, Length::try_from(r_0)?)
    }

    /// M(<∞) = 2π ρ_0 r_0³
    pub fn total_mass(&self) -> Mass {
        Mass::from_solar_masses(2.0 * PI * self.rho_0.to_msun_per_kpc3() * self.r_0.powi(3))
    }
}

impl DensityProfile for Hernquist {
    fn scale_density(&self) -> Density {
        self.rho_0
    }

    fn scale_radius(&self) -> Length {
        self.r_0
    }

    fn density(&self, r: Length) -> Density {
        let x = self.dimensionless_radius(r);
        cuspy_density(self.rho_0, x, |x| 1.0 / (x * (1.0 + x).powi(3)))
    }
}

impl EnclosedMass for Hernquist {
    fn enclosed_mass(&self, r: Length) -> Mass {
        let x = self.dimensionless_radius(r).max(0.0);
        self.total_mass() * (x * x / ((1.0 + x) * (1.0 + x)))
    }
}

impl fmt::Display for Hernquist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hernquist(rho_0={:.3e} Msun/kpc3, r_0={:.3e} kpc)",
            self.rho_0.to_msun_per_kpc3(),
            self.r_0.to_kpc()
        )
    }
}
