//! Trait abstraction for spherical halo density profiles.
//!
//! Every profile is a dimensionless shape anchored to physical units by a
//! scale density ρ_0 and a scale radius r_0. Profiles are required to provide
//! ρ(r); those with a closed-form cumulative mass additionally implement
//! [`EnclosedMass`] and get the mean enclosed density and circular velocity
//! for free.
//!
//! | Trait | Required | Derived |
//! |-------|----------|---------|
//! | [`DensityProfile`] | `scale_density`, `scale_radius`, `density` | `dimensionless_radius` |
//! | [`EnclosedMass`] | `enclosed_mass` | `mean_enclosed_density`, `circular_velocity` |

use units::{circular_velocity, Density, Length, Mass, Velocity};

/// A spherically symmetric density law ρ(r).
pub trait DensityProfile {
    /// Scale density ρ_0.
    fn scale_density(&self) -> Density;

    /// Scale radius r_0.
    fn scale_radius(&self) -> Length;

    /// Mass density at radius r.
    ///
    /// Strictly decreasing in r for every physical halo. Radii at or below
    /// zero evaluate the central limit.
    fn density(&self, r: Length) -> Density;

    /// x = r / r_0
    fn dimensionless_radius(&self, r: Length) -> f64 {
        r / self.scale_radius()
    }
}

/// A profile whose enclosed mass M(<r) has a closed form.
pub trait EnclosedMass: DensityProfile {
    /// Mass inside radius r. Zero at r = 0 and strictly increasing.
    fn enclosed_mass(&self, r: Length) -> Mass;

    /// Mean density inside radius r, M(<r) / (4/3 π r³). Requires r > 0.
    fn mean_enclosed_density(&self, r: Length) -> Density {
        self.enclosed_mass(r).mean_density_within(r)
    }

    /// Circular velocity √(G M(<r) / r).
    fn circular_velocity(&self, r: Length) -> Velocity {
        circular_velocity(self.enclosed_mass(r), r)
    }
}

/// Scale density times x-dependent shape, clamping x ≤ 0 to the cusp.
pub(crate) fn cuspy_density(rho_0: Density, x: f64, shape: impl Fn(f64) -> f64) -> Density {
    if x <= 0.0 {
        return Density::from_msun_per_kpc3(f64::INFINITY);
    }
    rho_0 * shape(x)
}
