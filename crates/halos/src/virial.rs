//! Virial definitions of halo size and mass.
//!
//! A halo's virial radius is where its density reaches a fixed multiple (the
//! overdensity Δ, commonly 200) of the critical density of the universe at the
//! halo's redshift. [`Virial`] holds that threshold and offers two routes to
//! the radius:
//!
//! - closed form: [`Virial::r_vir`] and [`Virial::m_vir`] convert between a
//!   radius and the mass of a sphere at exactly the threshold density;
//! - root finding: [`Virial::find_radius`] locates the radius at which an
//!   arbitrary [`DensityProfile`] meets the threshold.
//!
//! The two are not interchangeable. Closed forms need the mass (or radius) as
//! an input; the solver derives it from a profile's shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use cosmology::{CosmologyProvider, LambdaCdm};
use units::{DefaultUnits, Density, HubbleRate, Length, Mass, Quantity};

use crate::error::{require_positive, HaloError, Result};
use crate::profile::{DensityProfile, EnclosedMass};
use crate::root::{Brent, RootError};

pub const DEFAULT_OVERDENSITY: f64 = 200.0;

/// Search interval for the virial radius, in multiples of the profile's scale radius.
///
/// Expressing the bracket relative to r_0 keeps it meaningful for halos of any size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusBracket {
    pub min_radius: f64,
    pub max_radius: f64,
}

impl Default for RadiusBracket {
    fn default() -> Self {
        Self {
            min_radius: 1e-3,
            max_radius: 1e3,
        }
    }
}

impl RadiusBracket {
    pub fn new(min_radius: f64, max_radius: f64) -> Result<Self> {
        require_positive("min_radius", min_radius)?;
        require_positive("max_radius", max_radius)?;
        if min_radius >= max_radius {
            return Err(HaloError::InvalidParameter {
                name: "max_radius",
                value: max_radius,
            });
        }
        Ok(Self {
            min_radius,
            max_radius,
        })
    }

    /// Physical bounds for a profile with scale radius `r_0`.
    pub fn bounds(&self, r_0: Length) -> (Length, Length) {
        (r_0 * self.min_radius, r_0 * self.max_radius)
    }
}

/// Which density has to equal the threshold at the virial radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VirialCriterion {
    /// ρ(r_vir) = ρ_vir. Needs only the density law, so it works for any profile.
    LocalDensity,
    /// M(<r_vir) / (4/3 π r_vir³) = ρ_vir. Needs the enclosed mass; this is
    /// the criterion under which M_vir = M(<r_vir).
    MeanEnclosedDensity,
}

/// A cosmological overdensity threshold: the bridge between density profiles
/// and virial radii and masses.
///
/// Immutable once constructed.
///
/// # Examples
///
/// ```rust
/// use halos::Virial;
/// use units::Mass;
///
/// let virial = Virial::standard().unwrap();
/// let r = virial.r_vir(Mass::from_solar_masses(1.0e12));
/// assert!((virial.m_vir(r).to_solar_masses() / 1.0e12 - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Virial<C = LambdaCdm> {
    cosmology: C,
    redshift: f64,
    overdensity: f64,
    hubble: HubbleRate,
    rho_crit: Density,
    rho_vir: Density,
}

impl Virial<LambdaCdm> {
    /// z = 0, Planck18, Δ = 200.
    pub fn standard() -> Result<Self> {
        Self::at_redshift(0.0)
    }

    /// Planck18 with Δ = 200 at the given redshift.
    pub fn at_redshift(redshift: f64) -> Result<Self> {
        Self::new(redshift, LambdaCdm::planck18(), DEFAULT_OVERDENSITY)
    }
}

impl<C: CosmologyProvider> Virial<C> {
    pub fn new(redshift: f64, cosmology: C, overdensity: f64) -> Result<Self> {
        require_positive("overdensity", overdensity)?;

        let hubble = cosmology.hubble_parameter(redshift)?;
        let rho_crit = cosmology.critical_density(redshift)?;
        let rho_vir = rho_crit * overdensity;

        Ok(Self {
            cosmology,
            redshift,
            overdensity,
            hubble,
            rho_crit,
            rho_vir,
        })
    }

    pub fn cosmology(&self) -> &C {
        &self.cosmology
    }

    pub fn redshift(&self) -> f64 {
        self.redshift
    }

    pub fn overdensity(&self) -> f64 {
        self.overdensity
    }

    /// H(z)
    pub fn hubble_parameter(&self) -> HubbleRate {
        self.hubble
    }

    /// ρ_crit(z)
    pub fn critical_density(&self) -> Density {
        self.rho_crit
    }

    /// The threshold ρ_vir = Δ ρ_crit(z).
    pub fn virial_density(&self) -> Density {
        self.rho_vir
    }

    /// Radius of a sphere of mean density ρ_vir containing mass `m`.
    ///
    /// r = (3M / 4π ρ_vir)^(1/3), the exact inverse of [`Virial::m_vir`].
    pub fn r_vir(&self, m: Mass) -> Length {
        self.rho_vir.radius_enclosing(m)
    }

    /// Mass of a sphere of radius `r` at mean density ρ_vir.
    ///
    /// M = 4/3 π ρ_vir r³, the exact inverse of [`Virial::r_vir`].
    pub fn m_vir(&self, r: Length) -> Mass {
        self.rho_vir.mass_within_radius(r)
    }

    /// [`Virial::r_vir`] for a runtime-tagged mass, reported in `units`.
    pub fn r_vir_quantity(&self, m: Quantity, units: &DefaultUnits) -> Result<Quantity> {
        let m = Mass::try_from(m)?;
        Ok(units.express(self.r_vir(m)))
    }

    /// [`Virial::m_vir`] for a runtime-tagged radius, reported in `units`.
    pub fn m_vir_quantity(&self, r: Quantity, units: &DefaultUnits) -> Result<Quantity> {
        let r = Length::try_from(r)?;
        Ok(units.express(self.m_vir(r)))
    }

    /// Radius at which the profile's density equals ρ_vir, searched over the
    /// default bracket [10⁻³ r_0, 10³ r_0].
    pub fn find_radius<P: DensityProfile + ?Sized>(&self, profile: &P) -> Result<Length> {
        self.find_radius_in(profile, RadiusBracket::default())
    }

    /// [`Virial::find_radius`] over an explicit bracket.
    ///
    /// Fails with [`HaloError::Bracketing`] if the density does not cross
    /// ρ_vir inside the bracket; callers may retry with a wider one.
    pub fn find_radius_in<P: DensityProfile + ?Sized>(
        &self,
        profile: &P,
        bracket: RadiusBracket,
    ) -> Result<Length> {
        self.solve(profile.scale_radius(), bracket, |r| profile.density(r))
    }

    /// Radius at which the profile's mean enclosed density equals ρ_vir.
    pub fn find_mean_density_radius<P: EnclosedMass + ?Sized>(
        &self,
        profile: &P,
        bracket: RadiusBracket,
    ) -> Result<Length> {
        self.solve(profile.scale_radius(), bracket, |r| {
            profile.mean_enclosed_density(r)
        })
    }

    /// Dispatches on `criterion`.
    pub fn solve_radius<P: EnclosedMass + ?Sized>(
        &self,
        profile: &P,
        criterion: VirialCriterion,
        bracket: RadiusBracket,
    ) -> Result<Length> {
        match criterion {
            VirialCriterion::LocalDensity => self.find_radius_in(profile, bracket),
            VirialCriterion::MeanEnclosedDensity => self.find_mean_density_radius(profile, bracket),
        }
    }

    /// Solves density_of(r) = ρ_vir over the bracket scaled by r_0.
    fn solve<F>(&self, r_0: Length, bracket: RadiusBracket, density_of: F) -> Result<Length>
    where
        F: Fn(Length) -> Density,
    {
        let bracket = RadiusBracket::new(bracket.min_radius, bracket.max_radius)?;
        let (lower, upper) = bracket.bounds(r_0);
        let threshold = self.rho_vir;

        // Normalized to the threshold so the residual is dimensionless
        let excess = |r_kpc: f64| density_of(Length::from_kpc(r_kpc)) / threshold - 1.0;

        let root = Brent::default()
            .solve(excess, lower.to_kpc(), upper.to_kpc())
            .map_err(|err| match err {
                RootError::NoSignChange { lower, upper, .. } => {
                    HaloError::Bracketing { lower, upper }
                }
                other => HaloError::Solver(other),
            })?;

        debug!(
            r_kpc = root.x,
            iterations = root.iterations,
            residual = root.residual,
            "virial radius converged"
        );
        Ok(Length::from_kpc(root.x))
    }
}

impl<C: CosmologyProvider + fmt::Display> fmt::Display for Virial<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Virial(redshift={}, overdensity={}, cosmology={})",
            self.redshift, self.overdensity, self.cosmology
        )
    }
}
