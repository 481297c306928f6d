use approx::assert_relative_eq;
use cyclotron_sim::*;

#[test]
fn default_proton_matches_reference_readouts() {
    let derived = derive(ParticleSpecies::Proton, 1.0, 0.5).expect("valid inputs");
    let rounded = derived.rounded();

    assert_eq!(rounded.frequency_mhz, 15.245);
    assert_eq!(rounded.radius_mm, 3.231);
    assert_eq!(rounded.speed_percent_c, 0.10);
    assert_eq!(rounded.period_ns, 65.59);
}

#[test]
fn rounding_happens_only_at_the_display_boundary() {
    let derived = derive(ParticleSpecies::Proton, 1.0, 0.5).unwrap();
    assert!(derived.frequency_mhz != derived.rounded().frequency_mhz);
    assert_relative_eq!(derived.frequency_mhz, 15.245_608_6, max_relative = 1e-8);
}

#[test]
fn repeated_calls_are_bit_identical() {
    for species in ParticleSpecies::ALL {
        let a = derive(species, 0.73, 2.5).unwrap();
        let b = derive(species, 0.73, 2.5).unwrap();
        assert_eq!(a.frequency_mhz.to_bits(), b.frequency_mhz.to_bits());
        assert_eq!(a.radius_mm.to_bits(), b.radius_mm.to_bits());
        assert_eq!(a.speed_percent_c.to_bits(), b.speed_percent_c.to_bits());
        assert_eq!(a.period_ns.to_bits(), b.period_ns.to_bits());
    }
}

#[test]
fn frequency_ignores_kinetic_energy() {
    for species in ParticleSpecies::ALL {
        let low = derive(species, 1.2, 0.1).unwrap();
        let high = derive(species, 1.2, 900.0).unwrap();
        assert_eq!(low.frequency_mhz, high.frequency_mhz);
        assert_eq!(low.period_ns, high.period_ns);
    }
}

#[test]
fn radius_and_speed_scale_with_square_root_of_energy() {
    let base = derive(ParticleSpecies::Deuteron, 0.8, 1.0).unwrap();
    let quadrupled = derive(ParticleSpecies::Deuteron, 0.8, 4.0).unwrap();
    assert_relative_eq!(quadrupled.radius_mm, 2.0 * base.radius_mm, max_relative = 1e-12);
    assert_relative_eq!(
        quadrupled.speed_percent_c,
        2.0 * base.speed_percent_c,
        max_relative = 1e-12
    );
}

#[test]
fn alpha_and_deuteron_share_nearly_the_same_frequency() {
    let alpha = derive(ParticleSpecies::Alpha, 1.0, 0.5).unwrap();
    let deuteron = derive(ParticleSpecies::Deuteron, 1.0, 0.5).unwrap();
    assert_relative_eq!(alpha.frequency_mhz, deuteron.frequency_mhz, max_relative = 1e-2);
}

#[test]
fn classical_speed_is_not_clamped_below_light() {
    // 1 GeV electron: the classical estimate is far above c.
    let derived = derive(ParticleSpecies::Electron, 1.0, 1.0e6).unwrap();
    assert!(derived.speed_percent_c > 100.0);
}

#[test]
fn zero_energy_gives_zero_radius() {
    let derived = derive(ParticleSpecies::Proton, 1.0, 0.0).unwrap();
    assert_eq!(derived.radius_mm, 0.0);
    assert_eq!(derived.speed_percent_c, 0.0);
}

#[test]
fn non_positive_flux_density_is_rejected() {
    for flux in [0.0, -1.0, f64::NAN] {
        let err = derive(ParticleSpecies::Proton, flux, 0.5).unwrap_err();
        assert!(matches!(
            err,
            CyclotronError::InvalidParameter {
                name: "magnetic_flux_density",
                ..
            }
        ));
    }
}

#[test]
fn negative_energy_is_rejected() {
    let err = derive(ParticleSpecies::Alpha, 1.0, -0.5).unwrap_err();
    assert!(matches!(err, CyclotronError::InvalidParameter { .. }));
}

#[test]
fn out_of_range_but_valid_inputs_are_not_clamped() {
    let derived = derive(ParticleSpecies::Proton, 10.0, 0.5).unwrap();
    let reference = derive(ParticleSpecies::Proton, 1.0, 0.5).unwrap();
    assert_relative_eq!(
        derived.frequency_mhz,
        10.0 * reference.frequency_mhz,
        max_relative = 1e-12
    );
}
