mod tests {
    use approx::assert_relative_eq;

    use crate::error::CosmologyError;
    use crate::lambda_cdm::LambdaCdm;
    use crate::provider::CosmologyProvider;

    #[test]
    fn test_planck18_today() {
        let cosmo = LambdaCdm::planck18();
        let h0 = cosmo.hubble_parameter(0.0).unwrap();
        assert_relative_eq!(h0.to_km_per_sec_per_mpc(), 67.66, max_relative = 1e-12);
        assert_relative_eq!(cosmo.efunc(0.0).unwrap(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(cosmo.omega_k(), 0.0, epsilon = 1e-12);

        // ρ_c = 2.775e11 h² M☉/Mpc³ ≈ 127.05 M☉/kpc³
        let rho_c = cosmo.critical_density(0.0).unwrap();
        assert_relative_eq!(rho_c.to_msun_per_kpc3(), 127.05, max_relative = 1e-3);
        assert_relative_eq!(rho_c.to_grams_per_cm3(), 8.599e-30, max_relative = 1e-3);
    }

    #[test]
    fn test_critical_density_scales_with_h_squared() {
        let cosmo = LambdaCdm::flat(70.0, 0.3).unwrap();
        let rho_c = cosmo.critical_density(0.0).unwrap();
        let little_h = cosmo.little_h();
        assert_relative_eq!(
            rho_c.to_msun_per_mpc3(),
            2.775e11 * little_h * little_h,
            max_relative = 1e-3
        );
    }

    #[test]
    fn test_expansion_history() {
        let cosmo = LambdaCdm::flat(70.0, 0.3).unwrap();

        // Matter + Λ only: E(1)² = 0.3 × 8 + 0.7
        assert_relative_eq!(cosmo.efunc(1.0).unwrap(), (0.3_f64 * 8.0 + 0.7).sqrt(), max_relative = 1e-12);

        // H(z) grows with redshift, so does ρ_c
        let mut previous = cosmo.critical_density(0.0).unwrap();
        for z in [0.5, 1.0, 2.0, 5.0] {
            let rho = cosmo.critical_density(z).unwrap();
            assert!(rho > previous);
            previous = rho;
        }
    }

    #[test]
    fn test_radiation_and_curvature() {
        let cosmo = LambdaCdm::new(70.0, 0.3, 0.6, 1.0e-4).unwrap();
        assert_relative_eq!(cosmo.omega_k(), 1.0 - 0.3 - 0.6 - 1.0e-4, max_relative = 1e-12);

        let z: f64 = 3.0;
        let expected = (1.0e-4 * (1.0 + z).powi(4)
            + 0.3 * (1.0 + z).powi(3)
            + cosmo.omega_k() * (1.0 + z).powi(2)
            + 0.6)
            .sqrt();
        assert_relative_eq!(cosmo.efunc(z).unwrap(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_hubble_time() {
        let cosmo = LambdaCdm::planck18();
        assert_relative_eq!(cosmo.hubble_time().unwrap().to_gyr(), 14.45, max_relative = 1e-3);
    }

    #[test]
    fn test_invalid_parameters() {
        assert_eq!(
            LambdaCdm::new(-70.0, 0.3, 0.7, 0.0).unwrap_err(),
            CosmologyError::InvalidParameter {
                name: "h0",
                value: -70.0
            }
        );
        assert!(matches!(
            LambdaCdm::new(70.0, -0.1, 0.7, 0.0),
            Err(CosmologyError::InvalidParameter { name: "omega_m", .. })
        ));
        assert!(matches!(
            LambdaCdm::flat(70.0, 1.5),
            Err(CosmologyError::InvalidParameter { name: "omega_lambda", .. })
        ));
    }

    #[test]
    fn test_invalid_redshift() {
        let cosmo = LambdaCdm::planck18();
        assert_eq!(
            cosmo.hubble_parameter(-1.0).unwrap_err(),
            CosmologyError::InvalidRedshift(-1.0)
        );
        assert!(cosmo.critical_density(f64::NAN).is_err());
        assert!(cosmo.hubble_parameter(-0.5).is_ok());
    }

    #[test]
    fn test_display() {
        let text = LambdaCdm::flat(70.0, 0.3).unwrap().to_string();
        assert_eq!(text, "LambdaCdm(H0=70 km/s/Mpc, Om0=0.3, Ode0=0.7, Or0=0)");
    }
}
