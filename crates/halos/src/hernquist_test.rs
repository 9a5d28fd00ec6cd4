mod tests {
    use approx::assert_relative_eq;

    use units::constants::PI;
    use units::{Density, Dimension, Length, Quantity, Unit, UnitError};

    use crate::error::HaloError;
    use crate::hernquist::Hernquist;
    use crate::profile::{DensityProfile, EnclosedMass};

    fn milky_way() -> Hernquist {
        Hernquist::new(Density::from_msun_per_kpc3(1.0e7), Length::from_kpc(20.0)).unwrap()
    }

    #[test]
    fn test_density_at_scale_radius() {
        let halo = milky_way();
        // x = 1: ρ_0 / (1 · 2³)
        let rho = halo.density(Length::from_kpc(20.0));
        assert_relative_eq!(rho.to_msun_per_kpc3(), 1.0e7 / 8.0, max_relative = 1e-14);
    }

    #[test]
    fn test_enclosed_mass_closed_form() {
        let halo = milky_way();
        let total = 2.0 * PI * 1.0e7 * 20.0_f64.powi(3);
        assert_relative_eq!(halo.total_mass().to_solar_masses(), total, max_relative = 1e-14);

        // x = 1: M = M_tot / 4
        let m = halo.enclosed_mass(Length::from_kpc(20.0));
        assert_relative_eq!(m.to_solar_masses(), total / 4.0, max_relative = 1e-14);

        assert_eq!(halo.enclosed_mass(Length::zero()).to_solar_masses(), 0.0);
    }

    #[test]
    fn test_monotonicity() {
        let halo = milky_way();
        let radii: Vec<Length> = (0..60)
            .map(|i| Length::from_kpc(0.01 * 1.25_f64.powi(i)))
            .collect();

        for pair in radii.windows(2) {
            assert!(halo.density(pair[0]) > halo.density(pair[1]));
            assert!(halo.enclosed_mass(pair[0]) < halo.enclosed_mass(pair[1]));
        }
    }

    #[test]
    fn test_mass_continuity() {
        // dM/dr = 4π r² ρ(r)
        let halo = milky_way();
        for r_kpc in [0.1, 1.0, 5.0, 20.0, 80.0, 300.0, 2000.0] {
            let h = r_kpc * 1e-5;
            let m_plus = halo.enclosed_mass(Length::from_kpc(r_kpc + h)).to_solar_masses();
            let m_minus = halo.enclosed_mass(Length::from_kpc(r_kpc - h)).to_solar_masses();
            let dm_dr = (m_plus - m_minus) / (2.0 * h);

            let shell = 4.0 * PI * r_kpc * r_kpc * halo.density(Length::from_kpc(r_kpc)).to_msun_per_kpc3();
            assert_relative_eq!(dm_dr, shell, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_center_is_a_cusp() {
        let halo = milky_way();
        assert!(halo.density(Length::zero()).to_msun_per_kpc3().is_infinite());
        assert!(halo.density(Length::from_kpc(-1.0)).to_msun_per_kpc3().is_infinite());
    }

    #[test]
    fn test_mean_density_and_circular_velocity() {
        let halo = milky_way();
        let r = Length::from_kpc(20.0);
        let mean = halo.mean_enclosed_density(r).to_msun_per_kpc3();
        let expected = halo.enclosed_mass(r).to_solar_masses() / (4.0 / 3.0 * PI * 8000.0);
        assert_relative_eq!(mean, expected, max_relative = 1e-12);

        let v = halo.circular_velocity(r).to_km_per_sec();
        assert_relative_eq!(
            v,
            (units::G * halo.enclosed_mass(r).to_solar_masses() / 20.0).sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_invalid_parameters() {
        let err = Hernquist::new(Density::from_msun_per_kpc3(0.0), Length::from_kpc(20.0)).unwrap_err();
        assert!(matches!(err, HaloError::InvalidParameter { name: "rho_0", .. }));

        let err = Hernquist::new(Density::from_msun_per_kpc3(1.0), Length::from_kpc(f64::NAN)).unwrap_err();
        assert!(matches!(err, HaloError::InvalidParameter { name: "r_0", .. }));
    }

    #[test]
    fn test_from_quantities() {
        let halo = Hernquist::from_quantities(
            Quantity::new(1.0e16, Unit::MsunPerMpc3),
            Quantity::new(0.02, Unit::Megaparsec),
        )
        .unwrap();
        assert_relative_eq!(halo.scale_radius().to_kpc(), 20.0, max_relative = 1e-14);
        assert_relative_eq!(halo.scale_density().to_msun_per_kpc3(), 1.0e7, max_relative = 1e-14);

        let err = Hernquist::from_quantities(
            Quantity::new(20.0, Unit::Kiloparsec),
            Quantity::new(1.0e7, Unit::MsunPerKpc3),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            HaloError::Units(UnitError::DimensionMismatch {
                expected: Dimension::Density,
                found: Dimension::Length,
            })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            milky_way().to_string(),
            "Hernquist(rho_0=1.000e7 Msun/kpc3, r_0=2.000e1 kpc)"
        );
    }
}
