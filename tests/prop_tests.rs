//! Property-based tests for derivation and integration using proptest.

use cyclotron_sim::*;
use proptest::prelude::*;

fn species() -> impl Strategy<Value = ParticleSpecies> {
    prop::sample::select(ParticleSpecies::ALL.to_vec())
}

// ── Derivation ───────────────────────────────────────────────────────

proptest! {
    /// Identical inputs give bit-identical outputs.
    #[test]
    fn derive_is_deterministic(
        species in species(),
        flux in 0.05f64..2.0,
        energy in 0.0f64..1000.0,
    ) {
        let a = derive(species, flux, energy).unwrap();
        let b = derive(species, flux, energy).unwrap();
        prop_assert_eq!(a.frequency_mhz.to_bits(), b.frequency_mhz.to_bits());
        prop_assert_eq!(a.radius_mm.to_bits(), b.radius_mm.to_bits());
        prop_assert_eq!(a.speed_percent_c.to_bits(), b.speed_percent_c.to_bits());
        prop_assert_eq!(a.period_ns.to_bits(), b.period_ns.to_bits());
    }

    /// Classical cyclotron frequency does not depend on energy.
    #[test]
    fn frequency_is_energy_independent(
        species in species(),
        flux in 0.05f64..2.0,
        low in 0.0f64..10.0,
        high in 10.0f64..5000.0,
    ) {
        let a = derive(species, flux, low).unwrap();
        let b = derive(species, flux, high).unwrap();
        prop_assert_eq!(a.frequency_mhz, b.frequency_mhz);
    }

    /// Radius and speed scale as sqrt(K).
    #[test]
    fn radius_scales_with_sqrt_energy(
        species in species(),
        flux in 0.05f64..2.0,
        energy in 0.01f64..100.0,
        factor in 1.0f64..50.0,
    ) {
        let base = derive(species, flux, energy).unwrap();
        let scaled = derive(species, flux, energy * factor).unwrap();
        let expected = factor.sqrt();
        prop_assert!((scaled.radius_mm / base.radius_mm - expected).abs() < 1e-9 * expected);
        let speed_ratio = scaled.speed_percent_c / base.speed_percent_c;
        prop_assert!((speed_ratio - expected).abs() < 1e-9 * expected);
    }

    /// Frequency and period are reciprocal.
    #[test]
    fn period_is_inverse_frequency(species in species(), flux in 0.05f64..2.0) {
        let derived = derive(species, flux, 1.0).unwrap();
        let product = derived.frequency_mhz * 1e6 * derived.period_ns * 1e-9;
        prop_assert!((product - 1.0).abs() < 1e-12);
    }
}

// ── Integration ──────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The physics step ignores the wall-clock delta.
    #[test]
    fn ticks_are_decoupled_from_real_time(
        deltas in prop::collection::vec(0.0f64..1.0, 1..400),
        flux in 0.05f64..2.0,
    ) {
        let params = SimulationParameters::new(ParticleSpecies::Proton, flux);
        let mut reference = StepIntegrator::new(params).unwrap();
        let mut jittered = StepIntegrator::new(params).unwrap();
        reference.start();
        jittered.start();

        for delta in &deltas {
            reference.tick(0.05).unwrap();
            jittered.tick(*delta).unwrap();
        }
        prop_assert_eq!(reference.state(), jittered.state());
    }

    /// Turn indices step by one, times increase, and E = K + E0.
    #[test]
    fn turn_events_are_well_formed(
        species in prop::sample::select(vec![
            ParticleSpecies::Proton,
            ParticleSpecies::Deuteron,
            ParticleSpecies::Alpha,
        ]),
        flux in 0.3f64..2.0,
    ) {
        let params = SimulationParameters::new(species, flux);
        let mut integrator = StepIntegrator::new(params).unwrap();
        integrator.start();

        let rest_energy = species.properties().rest_energy();
        let mut previous: Option<TurnEvent> = None;
        let mut last_count = 0;
        for _ in 0..20_000 {
            if !integrator.is_running() {
                break;
            }
            let emitted = integrator.tick(0.016).unwrap();
            prop_assert!(integrator.half_turns() >= last_count);
            last_count = integrator.half_turns();

            if let Some(event) = emitted {
                prop_assert!((event.total_energy - (event.kinetic_energy + rest_energy)).abs()
                    <= 1e-12 * event.total_energy);
                if let Some(prev) = previous {
                    prop_assert_eq!(event.turn, prev.turn + 1);
                    prop_assert!(event.time > prev.time);
                } else {
                    prop_assert_eq!(event.turn, 1);
                }
                previous = Some(event);
            }
        }
    }
}
