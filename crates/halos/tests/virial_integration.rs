//! Integration tests for profiles and the virial solver working together.
//!
//! These exercise the public API the way a caller would: build a cosmology,
//! build profiles, bind them, and check the physical identities that must hold
//! between the closed forms and the numerical solutions.

use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use cosmology::LambdaCdm;
use halos::{
    DensityProfile, DoublePowerLaw, EnclosedMass, HaloConfig, HaloError, HaloProfile, HaloSummary,
    Hernquist, Nfw, RadiusBracket, Virial, VirialCriterion,
};
use units::constants::PI;
use units::{Density, Length, Mass, Unit};

fn log_uniform(rng: &mut ChaCha8Rng, low: f64, high: f64) -> f64 {
    10.0_f64.powf(rng.random_range(low..high))
}

fn random_profiles(rng: &mut ChaCha8Rng, n: usize) -> Vec<HaloProfile> {
    (0..n)
        .flat_map(|_| {
            let rho_0 = Density::from_msun_per_kpc3(log_uniform(rng, 5.5, 8.5));
            let r_0 = Length::from_kpc(log_uniform(rng, -0.5, 2.0));
            let alpha = rng.random_range(0.5..3.0);
            let gamma = rng.random_range(0.0..1.5);
            let beta = rng.random_range(2.5..5.0);
            [
                HaloProfile::from(Hernquist::new(rho_0, r_0).unwrap()),
                HaloProfile::from(Nfw::new(rho_0, r_0).unwrap()),
                HaloProfile::from(DoublePowerLaw::new(rho_0, r_0, alpha, beta, gamma).unwrap()),
            ]
        })
        .collect()
}

#[test]
fn closed_forms_round_trip() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for z in [0.0, 0.5, 2.0, 6.0] {
        let virial = Virial::at_redshift(z).unwrap();
        for _ in 0..100 {
            let m = Mass::from_solar_masses(log_uniform(&mut rng, 6.0, 16.0));
            let back = virial.m_vir(virial.r_vir(m));
            assert_relative_eq!(back.to_solar_masses(), m.to_solar_masses(), max_relative = 1e-12);
        }
    }
}

#[test]
fn profiles_are_monotonic() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let profiles = random_profiles(&mut rng, 10);
    let radii: Vec<Length> = (0..50).map(|i| Length::from_kpc(0.01 * 1.3_f64.powi(i))).collect();

    for profile in &profiles {
        for pair in radii.windows(2) {
            assert!(
                profile.density(pair[0]) > profile.density(pair[1]),
                "{profile} not decreasing at {} kpc",
                pair[0].to_kpc()
            );
            if let (Some(inner), Some(outer)) =
                (profile.enclosed_mass(pair[0]), profile.enclosed_mass(pair[1]))
            {
                assert!(inner < outer);
            }
        }
    }
}

#[test]
fn enclosed_mass_derivative_matches_shell_mass() {
    let hernquist = Hernquist::new(Density::from_msun_per_kpc3(4.0e6), Length::from_kpc(12.0)).unwrap();
    let nfw = Nfw::new(Density::from_msun_per_kpc3(4.0e6), Length::from_kpc(12.0)).unwrap();
    let profiles: [&dyn EnclosedMass; 2] = [&hernquist, &nfw];

    for profile in profiles {
        for i in 0..30 {
            let r = 0.05 * 1.4_f64.powi(i);
            let h = r * 1e-5;
            let dm_dr = (profile.enclosed_mass(Length::from_kpc(r + h)).to_solar_masses()
                - profile.enclosed_mass(Length::from_kpc(r - h)).to_solar_masses())
                / (2.0 * h);
            let shell = 4.0 * PI * r * r * profile.density(Length::from_kpc(r)).to_msun_per_kpc3();
            assert_relative_eq!(dm_dr, shell, max_relative = 1e-6);
        }
    }
}

#[test]
fn solver_meets_threshold_for_every_profile() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let virial = Virial::standard().unwrap();
    let threshold = virial.virial_density();

    for profile in random_profiles(&mut rng, 20) {
        let r = match virial.find_radius(&profile) {
            Ok(r) => r,
            // Retry once over a wider bracket, as a caller would
            Err(HaloError::Bracketing { .. }) => virial
                .find_radius_in(&profile, RadiusBracket::new(1e-6, 1e6).unwrap())
                .unwrap(),
            Err(err) => panic!("{profile}: {err}"),
        };
        let ratio = profile.density(r) / threshold;
        assert!((ratio - 1.0).abs() < 1e-6, "{profile}: ρ(r_vir)/ρ_vir = {ratio}");
    }
}

#[test]
fn virial_mass_construction_is_self_consistent() {
    let virial = Virial::at_redshift(0.3).unwrap();
    for (log_m, c) in [(9.0, 20.0), (11.0, 12.0), (12.0, 9.0), (13.5, 6.0), (15.0, 4.0)] {
        let m = Mass::from_solar_masses(10.0_f64.powf(log_m));
        let halo = Nfw::from_virial_mass(m, c, Some(&virial)).unwrap();

        assert_eq!(halo.concentration().unwrap(), c);
        assert_relative_eq!(halo.virial_mass().unwrap().to_solar_masses(), m.to_solar_masses(), max_relative = 1e-12);
        // The profile's own enclosed mass agrees with the closed form
        let r_vir = halo.virial_radius().unwrap();
        assert_relative_eq!(halo.enclosed_mass(r_vir).to_solar_masses(), m.to_solar_masses(), max_relative = 1e-10);

        // And solving the bare profile recovers the same concentration
        let rebound = Nfw::new(halo.scale_density(), halo.scale_radius())
            .unwrap()
            .bound(&virial)
            .unwrap();
        assert_relative_eq!(rebound.concentration().unwrap(), c, max_relative = 1e-8);
    }
}

#[test]
fn double_power_law_reduces_to_named_profiles() {
    let rho_0 = Density::from_msun_per_kpc3(2.0e6);
    let r_0 = Length::from_kpc(15.0);
    let nfw = Nfw::new(rho_0, r_0).unwrap();
    let hernquist = Hernquist::new(rho_0, r_0).unwrap();
    let as_nfw = DoublePowerLaw::new(rho_0, r_0, 1.0, 3.0, 1.0).unwrap();
    let as_hernquist = DoublePowerLaw::new(rho_0, r_0, 1.0, 4.0, 1.0).unwrap();

    for i in 0..40 {
        let r = Length::from_kpc(0.01 * 1.35_f64.powi(i));
        assert_relative_eq!(
            as_nfw.density(r).to_msun_per_kpc3(),
            nfw.density(r).to_msun_per_kpc3(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            as_hernquist.density(r).to_msun_per_kpc3(),
            hernquist.density(r).to_msun_per_kpc3(),
            max_relative = 1e-12
        );
    }
}

#[test]
fn milky_way_scale_halo() {
    let virial = Virial::new(0.0, LambdaCdm::planck18(), 200.0).unwrap();
    let mut halo = Nfw::new(Density::from_msun_per_kpc3(1.0e7), Length::from_kpc(20.0)).unwrap();
    let binding = *halo.set_virial(&virial).unwrap();

    let r_vir = binding.r_vir.to_kpc();
    assert!((150.0..400.0).contains(&r_vir), "r_vir = {r_vir} kpc");
    assert!((7.0..20.0).contains(&binding.concentration));
    assert_relative_eq!(binding.concentration, r_vir / 20.0, max_relative = 1e-12);
    assert_relative_eq!(
        halo.mean_enclosed_density(binding.r_vir) / virial.virial_density(),
        1.0,
        max_relative = 1e-8
    );

    // The local criterion puts the edge where ρ itself reaches the threshold
    let local = halo
        .set_virial_with(&virial, VirialCriterion::LocalDensity)
        .unwrap()
        .r_vir;
    assert!(local < binding.r_vir);
    assert_relative_eq!(halo.density(local) / virial.virial_density(), 1.0, max_relative = 1e-8);

    let summary = HaloSummary::standard(&halo, &virial).unwrap();
    assert_eq!(summary.r_vir.unit(), Unit::Kiloparsec);
    assert_relative_eq!(summary.r_vir.value(), local.to_kpc());
}

#[test]
fn unbound_nfw_has_no_concentration() {
    let halo = Nfw::new(Density::from_msun_per_kpc3(1.0e7), Length::from_kpc(20.0)).unwrap();
    assert!(matches!(halo.concentration(), Err(HaloError::UnboundVirialState)));
    assert!(matches!(
        HaloSummary::standard(&halo, &Virial::standard().unwrap()),
        Err(HaloError::UnboundVirialState)
    ));
}

#[test]
fn configuration_drives_the_same_solution() {
    let json = r#"{
        "virial": { "cosmology": "planck18" },
        "profile": {
            "type": "nfw",
            "rho_0": { "value": 6.77e-25, "unit": "g/cm3" },
            "r_0": { "value": 0.02, "unit": "Mpc" },
            "bind_virial": true
        }
    }"#;
    let (virial, profile) = HaloConfig::from_json(json).unwrap().build().unwrap();
    let configured = profile.as_nfw().unwrap();

    let direct = Nfw::new(configured.scale_density(), Length::from_kpc(20.0))
        .unwrap()
        .bound(&virial)
        .unwrap();
    assert_relative_eq!(
        configured.virial_radius().unwrap().to_kpc(),
        direct.virial_radius().unwrap().to_kpc(),
        max_relative = 1e-10
    );
}
