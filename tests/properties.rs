// Invariants that must hold for any configuration, surface and pointer.

use particle_canvas::config::{ColorMode, Configuration};
use particle_canvas::sim::{Ripples, Simulation};
use particle_canvas::Pointer;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn any_config() -> impl Strategy<Value = Configuration> {
    (
        10usize..=300,
        1.0f32..=10.0,
        0.5f32..=5.0,
        50.0f32..=300.0,
        -1.0f32..=1.0,
        0.0f32..=5.0,
        any::<bool>(),
    )
        .prop_map(|(count, size, speed, radius, gravity, turbulence, rainbow)| Configuration {
            particle_count: count,
            particle_size: size,
            speed,
            interaction_radius: radius,
            gravity,
            turbulence,
            color_mode: if rainbow { ColorMode::Rainbow } else { ColorMode::Custom },
            ..Configuration::default()
        })
}

fn any_pointer() -> impl Strategy<Value = Pointer> {
    (-200.0f32..1_200.0, -200.0f32..1_200.0, any::<bool>())
        .prop_map(|(x, y, pressed)| Pointer { x, y, pressed })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn particles_stay_on_the_torus_and_under_the_speed_limit(
        config in any_config(),
        pointer in any_pointer(),
        w in 1u32..1_000,
        h in 1u32..1_000,
        ticks in 1usize..80,
        seed in any::<u64>(),
    ) {
        let mut sim = Simulation::new(w, h, SmallRng::seed_from_u64(seed));
        sim.reinitialize(&config);

        for _ in 0..ticks {
            sim.step(&config, &pointer);
            let p = sim.particles();
            for i in 0..p.n {
                prop_assert!(p.x[i] >= 0.0 && p.x[i] < w as f32);
                prop_assert!(p.y[i] >= 0.0 && p.y[i] < h as f32);
                prop_assert!(p.vx[i].abs() <= config.speed);
                prop_assert!(p.vy[i].abs() <= config.speed);
                prop_assert!(p.hue[i] >= 0.0 && p.hue[i] < 360.0);
            }
        }
    }

    #[test]
    fn reinitialize_yields_exactly_the_requested_batch(
        config in any_config(),
        w in 1u32..2_000,
        h in 1u32..2_000,
        seed in any::<u64>(),
    ) {
        let mut sim = Simulation::new(w, h, SmallRng::seed_from_u64(seed));
        sim.reinitialize(&config);
        let p = sim.particles();

        prop_assert_eq!(p.len(), config.particle_count);
        for i in 0..p.n {
            prop_assert!(p.x[i] >= 0.0 && p.x[i] < w as f32);
            prop_assert!(p.y[i] >= 0.0 && p.y[i] < h as f32);
            prop_assert!(p.size[i] >= 1.0 && p.size[i] < config.particle_size + 1.0);
        }
    }

    #[test]
    fn ripples_fade_strictly_and_retire_once(
        config in any_config(),
        x in 0.0f32..800.0,
        y in 0.0f32..600.0,
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut ripples = Ripples::new();
        prop_assert!(ripples.spawn(x, y, &config, &mut rng));

        let mut updates = 0;
        let (mut radius, mut opacity) = (ripples.radius[0], ripples.opacity[0]);
        loop {
            let was_faded = ripples.opacity[0] <= 0.0;
            ripples.update();
            updates += 1;
            if ripples.is_empty() {
                // removed on the first update that saw it at zero
                prop_assert!(was_faded);
                break;
            }
            prop_assert!(ripples.opacity[0] < opacity);
            prop_assert!(ripples.radius[0] > radius);
            radius = ripples.radius[0];
            opacity = ripples.opacity[0];
        }
        prop_assert_eq!(updates, 51);
    }
}
