//! Milky-Way-scale halo example
//!
//! Binds an NFW profile to the Planck18 virial threshold, compares it with the
//! other profile shapes and prints the resulting summary as JSON.
//!
//! Run with: RUST_LOG=halos=debug cargo run --package halos --example milky_way

use halos::{
    DensityProfile, DoublePowerLaw, HaloProfile, HaloSummary, Hernquist, Nfw, Virial, VirialCriterion,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use units::{Density, Length, Mass};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    println!("Dark-Matter Halo: Virial Radius of a Milky-Way Analog\n");
    println!("{}", "=".repeat(60));

    let virial = Virial::standard()?;
    println!("{virial}");
    println!(
        "  ρ_crit = {:.3} M☉/kpc³, ρ_vir = {:.3e} M☉/kpc³",
        virial.critical_density().to_msun_per_kpc3(),
        virial.virial_density().to_msun_per_kpc3()
    );

    let rho_0 = Density::from_msun_per_kpc3(1.0e7);
    let r_0 = Length::from_kpc(20.0);

    let mut nfw = Nfw::new(rho_0, r_0)?;
    let binding = *nfw.set_virial(&virial)?;
    info!(
        r_vir_kpc = binding.r_vir.to_kpc(),
        concentration = binding.concentration,
        "bound milky-way halo"
    );

    println!("\nNFW (mean enclosed density criterion):");
    println!("  r_vir = {:.1} kpc", binding.r_vir.to_kpc());
    println!("  M_vir = {:.3e} M☉", binding.m_vir.to_solar_masses());
    println!("  c     = {:.2}", binding.concentration);

    let summary = HaloSummary::standard(&nfw, &virial)?;
    println!("\n{}", serde_json::to_string_pretty(&summary)?);

    let local = *nfw.set_virial_with(&virial, VirialCriterion::LocalDensity)?;
    println!("\nNFW (local density criterion):");
    println!("  r_vir = {:.1} kpc, c = {:.2}", local.r_vir.to_kpc(), local.concentration);

    println!("\nLocal-density crossing for each profile shape:");
    let profiles: Vec<HaloProfile> = vec![
        Hernquist::new(rho_0, r_0)?.into(),
        Nfw::new(rho_0, r_0)?.into(),
        DoublePowerLaw::new(rho_0, r_0, 2.0, 3.0, 0.0)?.into(),
    ];
    for profile in &profiles {
        let r = virial.find_radius(profile)?;
        let mass = profile
            .enclosed_mass(r)
            .map(|m| format!("{:.3e} M☉", m.to_solar_masses()))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "  {:<16} r = {:>7.1} kpc  ρ(r)/ρ_vir = {:.6}  M(<r) = {}",
            profile.name(),
            r.to_kpc(),
            profile.density(r) / virial.virial_density(),
            mass
        );
    }

    println!("\nHalos built from virial mass (c = 10):");
    for log_m in [10.0, 11.0, 12.0, 13.0, 14.0, 15.0] {
        let m = Mass::from_solar_masses(10.0_f64.powf(log_m));
        let halo = Nfw::from_virial_mass(m, 10.0, Some(&virial))?;
        println!(
            "  M_vir = 1e{log_m:.0} M☉  r_vir = {:>8.1} kpc  r_0 = {:>7.2} kpc",
            halo.virial_radius()?.to_kpc(),
            halo.scale_radius().to_kpc()
        );
    }

    Ok(())
}
