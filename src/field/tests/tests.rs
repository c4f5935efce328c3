use super::*;
use crate::domain::config::{CONNECTION_DIMMING, CONNECTION_DISTANCE};

fn single_particle_field(p: Particle) -> ParticleFieldCore {
    let mut field = ParticleFieldCore::new(1024, 800, 7);
    field.particles = vec![p];
    field
}

#[test]
fn particle_count_follows_width_tier() {
    let field = ParticleFieldCore::new(500, 800, 1);
    assert_eq!(field.particle_count(), 50);

    let field = ParticleFieldCore::new(1024, 800, 1);
    assert_eq!(field.particle_count(), 120);

    // Breakpoint itself is desktop
    let field = ParticleFieldCore::new(768, 800, 1);
    assert_eq!(field.particle_count(), 120);
    let field = ParticleFieldCore::new(767, 800, 1);
    assert_eq!(field.particle_count(), 50);
}

#[test]
fn resize_within_desktop_tier_keeps_particle_array() {
    let mut field = ParticleFieldCore::new(1024, 800, 3);
    let before = field.particles().as_ptr();
    let snapshot = field.particles().to_vec();

    assert!(!field.resize(1200, 900));
    assert_eq!(field.particles().as_ptr(), before);
    assert_eq!(field.particles(), snapshot.as_slice());
    assert_eq!(field.reallocations(), 1);
}

#[test]
fn resize_within_mobile_tier_keeps_particle_array() {
    let mut field = ParticleFieldCore::new(500, 800, 3);
    let before = field.particles().as_ptr();

    assert!(!field.resize(300, 600));
    assert_eq!(field.particles().as_ptr(), before);
    assert_eq!(field.particle_count(), 50);
}

#[test]
fn resize_across_tiers_reallocates() {
    let mut field = ParticleFieldCore::new(500, 800, 3);
    assert_eq!(field.reallocations(), 1);

    assert!(field.resize(1024, 800));
    assert_eq!(field.particle_count(), 120);
    assert_eq!(field.reallocations(), 2);

    assert!(field.resize(400, 800));
    assert_eq!(field.particle_count(), 50);
    assert_eq!(field.reallocations(), 3);
}

#[test]
fn reallocating_resize_refreshes_render_buffers() {
    let mut field = ParticleFieldCore::new(1024, 800, 3);
    assert_eq!(field.circles().len(), 120 * CIRCLE_STRIDE);

    assert!(field.resize(500, 800));
    assert_eq!(field.frame(), 0);
    assert_eq!(field.circles().len(), 50 * CIRCLE_STRIDE);
    let first = field.particles()[0];
    assert_eq!(&field.circles()[..3], &[first.x, first.y, first.radius]);
}

#[test]
fn resize_updates_dimensions_with_height_multiplier() {
    let mut field = ParticleFieldCore::new(1024, 1000, 3);
    assert_eq!(field.width(), 1024);
    assert_eq!(field.height(), 1300);

    field.resize(1280, 700);
    assert_eq!(field.width(), 1280);
    assert_eq!(field.height(), 910);
}

#[test]
fn spawned_particles_respect_ranges() {
    let field = ParticleFieldCore::new(1024, 800, 99);
    let (w, h) = (field.width() as f32, field.height() as f32);
    for p in field.particles() {
        assert!(p.x >= 0.0 && p.x < w);
        assert!(p.y >= 0.0 && p.y < h);
        assert!(p.vx >= -0.25 && p.vx < 0.25);
        assert!(p.vy >= -0.25 && p.vy < 0.25);
        assert!(p.radius >= 0.0 && p.radius < 1.5);
    }
}

#[test]
fn same_seed_spawns_same_field() {
    let a = ParticleFieldCore::new(1024, 800, 1234);
    let b = ParticleFieldCore::new(1024, 800, 1234);
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn drift_advances_by_velocity() {
    let mut field = single_particle_field(Particle::new(100.0, 100.0, 0.2, -0.1, 1.0));
    field.step();
    let p = field.particles()[0];
    assert!((p.x - 100.2).abs() < 1e-5);
    assert!((p.y - 99.9).abs() < 1e-5);
    assert_eq!(field.frame(), 1);
}

#[test]
fn crossing_left_edge_flips_vx_once() {
    let mut field = single_particle_field(Particle::new(0.1, 100.0, -0.25, 0.0, 1.0));

    field.step();
    let p = field.particles()[0];
    assert!(p.x < 0.0, "particle may render out of bounds for one frame");
    assert_eq!(p.vx, 0.25);

    field.step();
    let p = field.particles()[0];
    assert!(p.x > 0.0);
    assert_eq!(p.vx, 0.25, "no second flip once back inside");
}

#[test]
fn crossing_bottom_edge_flips_vy_only() {
    let mut field = single_particle_field(Particle::new(50.0, 0.0, 0.1, 0.2, 1.0));
    let height = field.height() as f32;
    field.particles[0].y = height - 0.1;

    field.step();
    let p = field.particles()[0];
    assert!(p.y > height);
    assert_eq!(p.vy, -0.2);
    assert_eq!(p.vx, 0.1);
}

#[test]
fn reflection_reports_crossed_axes() {
    let mut p = Particle::new(-1.0, 5.0, -1.0, 1.0, 1.0);
    assert_eq!(p.reflect(10.0, 10.0), (true, false));
    assert_eq!(p.vx, 1.0);

    let mut p = Particle::new(11.0, 11.0, 1.0, 1.0, 1.0);
    assert_eq!(p.reflect(10.0, 10.0), (true, true));
    assert_eq!((p.vx, p.vy), (-1.0, -1.0));
}

#[test]
fn repulsion_always_pushes_away_from_pointer() {
    let pointer = Vec2::new(500.0, 400.0);
    let velocities = [(0.2, 0.1), (-0.2, 0.15), (0.0, -0.24)];

    for ring in [5.0f32, 40.0, 100.0, 150.0, 190.0] {
        for k in 0..12 {
            let angle = k as f32 * std::f32::consts::TAU / 12.0;
            for &(vx, vy) in &velocities {
                let start = Particle::new(
                    pointer.x + ring * angle.cos(),
                    pointer.y + ring * angle.sin(),
                    vx,
                    vy,
                    1.0,
                );

                let mut baseline = single_particle_field(start);
                baseline.step();
                let base_d = baseline.particles()[0].position().distance(pointer);

                let mut pushed = single_particle_field(start);
                pushed.set_pointer(pointer.x, pointer.y);
                pushed.step();
                let pushed_d = pushed.particles()[0].position().distance(pointer);

                assert!(
                    pushed_d > base_d,
                    "ring={ring} k={k}: {pushed_d} should exceed {base_d}"
                );
            }
        }
    }
}

#[test]
fn repulsion_is_positional_and_leaves_velocity() {
    let mut field = single_particle_field(Particle::new(100.0, 100.0, 0.1, 0.1, 1.0));
    field.set_pointer(110.0, 100.0);
    field.step();
    let p = field.particles()[0];
    assert_eq!((p.vx, p.vy), (0.1, 0.1));
    assert!(p.x < 100.1);
}

#[test]
fn repulsion_force_has_linear_falloff() {
    let mut p = Particle::new(0.0, 0.0, 0.0, 0.0, 1.0);
    // d = 100 of 200 => force 0.5 * 1.5
    assert!(p.repel_from(Vec2::new(100.0, 0.0), 200.0, 1.5));
    assert!((p.x + 0.75).abs() < 1e-5);
    assert_eq!(p.y, 0.0);
}

#[test]
fn no_repulsion_at_zero_distance_or_outside_radius() {
    let mut p = Particle::new(10.0, 10.0, 0.0, 0.0, 1.0);
    assert!(!p.repel_from(Vec2::new(10.0, 10.0), 200.0, 1.5));
    assert_eq!((p.x, p.y), (10.0, 10.0));

    assert!(!p.repel_from(Vec2::new(210.0, 10.0), 200.0, 1.5));
    assert!(!p.repel_from(Vec2::new(500.0, 500.0), 200.0, 1.5));
    assert_eq!((p.x, p.y), (10.0, 10.0));
}

#[test]
fn cleared_pointer_stops_repulsion() {
    let mut field = single_particle_field(Particle::new(100.0, 100.0, 0.0, 0.0, 1.0));
    field.set_pointer(120.0, 100.0);
    field.clear_pointer();
    assert!(field.pointer().is_none());
    field.step();
    assert_eq!(field.particles()[0].position(), Vec2::new(100.0, 100.0));
}

#[test]
fn connection_opacity_endpoints_and_monotonic() {
    let field = ParticleFieldCore::new(1024, 800, 1);

    assert!((field.connection_opacity(0.0) - CONNECTION_DIMMING).abs() < 1e-6);
    assert_eq!(field.connection_opacity(CONNECTION_DISTANCE), 0.0);
    assert_eq!(field.connection_opacity(CONNECTION_DISTANCE + 10.0), 0.0);

    let mut prev = field.connection_opacity(0.0);
    let mut d = 1.0;
    while d < CONNECTION_DISTANCE {
        let o = field.connection_opacity(d);
        assert!(o < prev, "opacity at {d} should be below {prev}");
        assert!(o > 0.0);
        prev = o;
        d += 1.0;
    }
}

#[test]
fn render_buffers_hold_circles_and_close_pairs() {
    let mut field = ParticleFieldCore::new(1024, 800, 1);
    field.particles = vec![
        Particle::new(100.0, 100.0, 0.0, 0.0, 1.0),
        Particle::new(200.0, 100.0, 0.0, 0.0, 0.5),
        Particle::new(600.0, 600.0, 0.0, 0.0, 1.2),
    ];
    field.step();

    assert_eq!(field.circles().len(), 3 * CIRCLE_STRIDE);
    assert_eq!(&field.circles()[3..6], &[200.0, 100.0, 0.5]);

    // Only the first two are within 150 units
    assert_eq!(field.line_count(), 1);
    let line = &field.lines()[..LINE_STRIDE];
    assert_eq!(&line[..4], &[100.0, 100.0, 200.0, 100.0]);
    let expected = (1.0 - 100.0 / 150.0) * 0.15;
    assert!((line[4] - expected).abs() < 1e-6);
}

#[test]
fn coincident_particles_connect_at_full_opacity() {
    let mut field = ParticleFieldCore::new(1024, 800, 1);
    field.particles = vec![
        Particle::new(300.0, 300.0, 0.0, 0.0, 1.0),
        Particle::new(300.0, 300.0, 0.0, 0.0, 1.0),
    ];
    field.step();
    assert_eq!(field.line_count(), 1);
    assert!((field.lines()[4] - CONNECTION_DIMMING).abs() < 1e-6);
}

#[test]
fn perf_metrics_are_zero_when_disabled() {
    let mut field = ParticleFieldCore::new(1024, 800, 1);
    field.step();
    assert_eq!(field.last_step_ms(), 0.0);

    field.enable_perf_metrics(true);
    field.step();
    assert!(field.last_step_ms() >= 0.0);
}
