use serde::Serialize;

use cosmology::CosmologyProvider;
use units::{circular_velocity, DefaultUnits, Quantity, DEFAULT_UNITS};

use crate::error::Result;
use crate::nfw::Nfw;
use crate::profile::DensityProfile;
use crate::virial::Virial;

/// Report of a bound NFW halo with every dimensioned field in display units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HaloSummary {
    pub redshift: f64,
    pub overdensity: f64,
    pub rho_0: Quantity,
    pub r_0: Quantity,
    pub r_vir: Quantity,
    pub m_vir: Quantity,
    pub concentration: f64,
    pub rho_vir: Quantity,
    /// Circular velocity at r_vir
    pub v_vir: Quantity,
}

impl HaloSummary {
    /// Summarizes a bound NFW profile. Fails with
    /// [`crate::HaloError::UnboundVirialState`] if it was never bound.
    pub fn new<C: CosmologyProvider>(
        nfw: &Nfw,
        virial: &Virial<C>,
        display: &DefaultUnits,
    ) -> Result<Self> {
        let r_vir = nfw.virial_radius()?;
        let m_vir = nfw.virial_mass()?;

        Ok(Self {
            redshift: virial.redshift(),
            overdensity: virial.overdensity(),
            rho_0: display.express(nfw.scale_density()),
            r_0: display.express(nfw.scale_radius()),
            r_vir: display.express(r_vir),
            m_vir: display.express(m_vir),
            concentration: nfw.concentration()?,
            rho_vir: display.express(virial.virial_density()),
            v_vir: display.express(circular_velocity(m_vir, r_vir)),
        })
    }

    /// Summary in the standard display units.
    pub fn standard<C: CosmologyProvider>(nfw: &Nfw, virial: &Virial<C>) -> Result<Self> {
        Self::new(nfw, virial, &DEFAULT_UNITS)
    }
}
