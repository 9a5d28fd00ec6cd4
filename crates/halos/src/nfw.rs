use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use cosmology::CosmologyProvider;
use units::constants::PI;
use units::{Density, Length, Mass, Quantity};

use crate::error::{require_positive, HaloError, Result};
use crate::profile::{cuspy_density, DensityProfile, EnclosedMass};
use crate::virial::{RadiusBracket, Virial, VirialCriterion};

/// The virial solution attached to an NFW profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VirialBinding {
    pub r_vir: Length,
    pub m_vir: Mass,
    /// c = r_vir / r_0
    pub concentration: f64,
}

/// The Navarro-Frenk-White (1996) profile, ρ(r) = ρ_0 / (x (1+x)²) with x = r/r_0.
///
/// An NFW halo may carry a [`VirialBinding`] relating it to a cosmological
/// overdensity threshold. The binding is set by [`Nfw::set_virial`] (which
/// solves for r_vir) or by [`Nfw::from_virial_mass`] (which derives the scale
/// parameters analytically from a given mass and concentration). Rebinding
/// overwrites the previous solution.
///
/// `set_virial` mutates in place; share a bound profile across threads only
/// behind external synchronization if it may be rebound.
///
/// # Examples
///
/// ```rust
/// use halos::{Nfw, Virial};
/// use units::Mass;
///
/// let virial = Virial::standard().unwrap();
/// let halo = Nfw::from_virial_mass(Mass::from_solar_masses(1.0e12), 10.0, Some(&virial)).unwrap();
///
/// assert_eq!(halo.concentration().unwrap(), 10.0);
/// assert!(halo.virial_radius().unwrap().to_kpc() > 200.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nfw {
    rho_0: Density,
    r_0: Length,
    #[serde(skip_serializing_if = "Option::is_none")]
    virial: Option<VirialBinding>,
}

impl Nfw {
    /// An unbound NFW profile.
    pub fn new(rho_0: Density, r_0: Length) -> Result<Self> {
        require_positive("rho_0", rho_0.to_msun_per_kpc3())?;
        require_positive("r_0", r_0.to_kpc())?;
        Ok(Self {
            rho_0,
            r_0,
            virial: None,
        })
    }

    /// An NFW profile bound to `virial` at construction.
    pub fn with_virial<C: CosmologyProvider>(
        rho_0: Density,
        r_0: Length,
        virial: &Virial<C>,
    ) -> Result<Self> {
        Self::new(rho_0, r_0)?.bound(virial)
    }

    /// Builds the profile from runtime-tagged quantities in any compatible unit.
    pub fn from_quantities(rho_0: Quantity, r_0: Quantity) -> Result<Self> {
        Self::new(Density::try_from(rho_0)?, Length::try_from(r_0)?)
    }

    /// Creates an NFW profile from a virial mass and concentration.
    ///
    /// r_vir follows in closed form from the overdensity threshold, then
    /// r_0 = r_vir / c and ρ_0 = M_vir / (4π r_0³ f(c)). No root finding is
    /// involved: the concentration is an input, so the binding is exact.
    /// Without a context the standard one (z = 0, Planck18, Δ = 200) is used.
    pub fn from_virial_mass(m_vir: Mass, c_vir: f64, virial: Option<&Virial>) -> Result<Self> {
        match virial {
            Some(virial) => Self::from_virial_mass_in(m_vir, c_vir, virial),
            None => Self::from_virial_mass_in(m_vir, c_vir, &Virial::standard()?),
        }
    }

    /// [`Nfw::from_virial_mass`] against a context backed by any cosmology.
    pub fn from_virial_mass_in<C: CosmologyProvider>(
        m_vir: Mass,
        c_vir: f64,
        virial: &Virial<C>,
    ) -> Result<Self> {
        require_positive("m_vir", m_vir.to_solar_masses())?;
        require_positive("c_vir", c_vir)?;

        let r_vir = virial.r_vir(m_vir);
        let r_0 = r_vir / c_vir;
        let rho_0 = m_vir.to_solar_masses() / (4.0 * PI * r_0.powi(3) * Self::mass_function(c_vir));

        let mut nfw = Self::new(Density::from_msun_per_kpc3(rho_0), r_0)?;
        nfw.virial = Some(VirialBinding {
            r_vir,
            m_vir,
            concentration: c_vir,
        });
        Ok(nfw)
    }

    /// f(x) = ln(1+x) − x/(1+x), the shape of the enclosed mass.
    pub fn mass_function(x: f64) -> f64 {
        x.ln_1p() - x / (1.0 + x)
    }

    /// Solves for the virial radius against `virial` and stores the result.
    ///
    /// The virial radius is where the mean enclosed density equals the
    /// threshold ρ_vir, which makes M_vir = M(<r_vir).
    pub fn set_virial<C: CosmologyProvider>(&mut self, virial: &Virial<C>) -> Result<&VirialBinding> {
        self.set_virial_with(virial, VirialCriterion::MeanEnclosedDensity)
    }

    /// Like [`Nfw::set_virial`], choosing which density must meet the threshold.
    pub fn set_virial_with<C: CosmologyProvider>(
        &mut self,
        virial: &Virial<C>,
        criterion: VirialCriterion,
    ) -> Result<&VirialBinding> {
        let r_vir = virial.solve_radius(&*self, criterion, RadiusBracket::default())?;
        let binding = VirialBinding {
            r_vir,
            m_vir: virial.m_vir(r_vir),
            concentration: r_vir / self.r_0,
        };

        debug!(
            r_vir_kpc = binding.r_vir.to_kpc(),
            m_vir_msun = binding.m_vir.to_solar_masses(),
            concentration = binding.concentration,
            rebound = self.virial.is_some(),
            ?criterion,
            "bound NFW profile"
        );
        Ok(&*self.virial.insert(binding))
    }

    /// Consumes the profile and returns it bound to `virial`.
    pub fn bound<C: CosmologyProvider>(mut self, virial: &Virial<C>) -> Result<Self> {
        self.set_virial(virial)?;
        Ok(self)
    }

    pub fn virial(&self) -> Option<&VirialBinding> {
        self.virial.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.virial.is_some()
    }

    fn binding(&self) -> Result<&VirialBinding> {
        self.virial.as_ref().ok_or(HaloError::UnboundVirialState)
    }

    pub fn virial_radius(&self) -> Result<Length> {
        Ok(self.binding()?.r_vir)
    }

    pub fn virial_mass(&self) -> Result<Mass> {
        Ok(self.binding()?.m_vir)
    }

    pub fn concentration(&self) -> Result<f64> {
        Ok(self.binding()?.concentration)
    }
}

impl DensityProfile for Nfw {
    fn scale_density(&self) -> Density {
        self.rho_0
    }

    fn scale_radius(&self) -> Length {
        self.r_0
    }

    fn density(&self, r: Length) -> Density {
        let x = self.dimensionless_radius(r);
        cuspy_density(self.rho_0, x, |x| 1.0 / (x * (1.0 + x).powi(2)))
    }
}

impl EnclosedMass for Nfw {
    fn enclosed_mass(&self, r: Length) -> Mass {
        let x = self.dimensionless_radius(r).max(0.0);
        Mass::from_solar_masses(
            4.0 * PI * self.rho_0.to_msun_per_kpc3() * self.r_0.powi(3) * Self::mass_function(x),
        )
    }
}

impl fmt::Display for Nfw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NFW(rho_0={:.3e} Msun/kpc3, r_0={:.3e} kpc)",
            self.rho_0.to_msun_per_kpc3(),
            self.r_0.to_kpc()
        )
    }
}
