mod tests {
    use approx::assert_relative_eq;

    use cosmology::CosmologyConfig;
    use units::{Quantity, Unit, UnitError};

    use crate::config::{HaloConfig, ProfileConfig, VirialConfig};
    use crate::error::HaloError;
    use crate::halo_profile::HaloProfile;
    use crate::profile::DensityProfile;

    const MILKY_WAY: &str = r#"{
        "virial": { "redshift": 0.0, "overdensity": 200.0, "cosmology": "planck18" },
        "profile": {
            "type": "nfw",
            "rho_0": { "value": 1.0e7, "unit": "Msun/kpc3" },
            "r_0": { "value": 20.0, "unit": "kpc" },
            "bind_virial": true
        }
    }"#;

    #[test]
    fn test_bound_nfw_from_json() {
        let config = HaloConfig::from_json(MILKY_WAY).unwrap();
        let (virial, profile) = config.build().unwrap();

        assert_eq!(virial.overdensity(), 200.0);
        let nfw = profile.as_nfw().unwrap();
        assert!(nfw.is_bound());
        let c = nfw.concentration().unwrap();
        assert!(c > 7.0 && c < 20.0);
    }

    #[test]
    fn test_units_are_converted() {
        let json = r#"{
            "profile": {
                "type": "hernquist",
                "rho_0": { "value": 10.0, "unit": "Msun/Mpc3" },
                "r_0": { "value": 0.02, "unit": "Mpc" }
            }
        }"#;
        let (_, profile) = HaloConfig::from_json(json).unwrap().build().unwrap();

        assert!(matches!(profile, HaloProfile::Hernquist(_)));
        assert_relative_eq!(profile.scale_radius().to_kpc(), 20.0, max_relative = 1e-12);
        assert_relative_eq!(profile.scale_density().to_msun_per_kpc3(), 1.0e-8, max_relative = 1e-12);
    }

    #[test]
    fn test_default_virial_section() {
        let json = r#"{
            "profile": {
                "type": "nfw",
                "rho_0": { "value": 1.0e7, "unit": "Msun/kpc3" },
                "r_0": { "value": 20.0, "unit": "kpc" }
            }
        }"#;
        let config = HaloConfig::from_json(json).unwrap();
        assert_eq!(config.virial, VirialConfig::default());
        assert_eq!(config.virial.cosmology, CosmologyConfig::default());

        // bind_virial defaults to false
        let (_, profile) = config.build().unwrap();
        assert!(!profile.as_nfw().unwrap().is_bound());
    }

    #[test]
    fn test_nfw_from_virial_mass() {
        let json = r#"{
            "virial": { "redshift": 0.5, "cosmology": { "h0": 70.0, "omega_m": 0.3 } },
            "profile": {
                "type": "nfw_from_virial",
                "m_vir": { "value": 1.0e12, "unit": "Msun" },
                "concentration": 8.0
            }
        }"#;
        let (virial, profile) = HaloConfig::from_json(json).unwrap().build().unwrap();
        assert_eq!(virial.redshift(), 0.5);
        assert_eq!(virial.overdensity(), 200.0);

        let nfw = profile.as_nfw().unwrap();
        assert_eq!(nfw.concentration().unwrap(), 8.0);
        assert_relative_eq!(nfw.virial_mass().unwrap().to_solar_masses(), 1.0e12, max_relative = 1e-12);
        assert_relative_eq!(
            nfw.virial_radius().unwrap().to_kpc(),
            virial.r_vir(nfw.virial_mass().unwrap()).to_kpc(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_double_power_law() {
        let json = r#"{
            "profile": {
                "type": "double_power_law",
                "rho_0": { "value": 1.0e7, "unit": "Msun/kpc3" },
                "r_0": { "value": 20.0, "unit": "kpc" },
                "alpha": 2.0, "beta": 3.0, "gamma": 0.0
            }
        }"#;
        let (_, profile) = HaloConfig::from_json(json).unwrap().build().unwrap();
        match profile {
            HaloProfile::DoublePowerLaw(p) => {
                assert_eq!((p.alpha(), p.beta(), p.gamma()), (2.0, 3.0, 0.0));
            }
            other => panic!("expected a double power law, got {other}"),
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let json = r#"{
            "profile": {
                "type": "nfw",
                "rho_0": { "value": 20.0, "unit": "kpc" },
                "r_0": { "value": 1.0e7, "unit": "Msun/kpc3" }
            }
        }"#;
        let result = HaloConfig::from_json(json).unwrap().build();
        assert!(matches!(
            result,
            Err(HaloError::Units(UnitError::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn test_invalid_values() {
        let config = HaloConfig {
            virial: VirialConfig {
                overdensity: -1.0,
                ..VirialConfig::default()
            },
            profile: ProfileConfig::Hernquist {
                rho_0: Quantity::new(1.0e7, Unit::MsunPerKpc3),
                r_0: Quantity::new(20.0, Unit::Kiloparsec),
            },
        };
        assert!(matches!(
            config.build(),
            Err(HaloError::InvalidParameter { name: "overdensity", .. })
        ));

        let config = HaloConfig {
            virial: VirialConfig::default(),
            profile: ProfileConfig::NfwFromVirial {
                m_vir: Quantity::new(1.0e12, Unit::SolarMass),
                concentration: 0.0,
            },
        };
        assert!(matches!(config.build(), Err(HaloError::InvalidParameter { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let unknown_type = r#"{ "profile": { "type": "einasto" } }"#;
        assert!(matches!(HaloConfig::from_json(unknown_type), Err(HaloError::Config(_))));

        let unknown_unit = r#"{
            "profile": {
                "type": "hernquist",
                "rho_0": { "value": 1.0, "unit": "furlongs" },
                "r_0": { "value": 1.0, "unit": "kpc" }
            }
        }"#;
        assert!(matches!(HaloConfig::from_json(unknown_unit), Err(HaloError::Config(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let config = HaloConfig::from_json(MILKY_WAY).unwrap();
        let text = config.to_json().unwrap();
        assert!(text.contains("\"type\": \"nfw\""));
        assert_eq!(HaloConfig::from_json(&text).unwrap(), config);
    }
}
