// Host-side tests for the particle field physics and display list.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod color {
    include!("../src/core/color.rs");
}
mod field {
    include!("../src/core/field.rs");
}

use color::*;
use constants::*;
use field::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const FAR_AWAY: Vec2 = Vec2::new(-10_000.0, -10_000.0);

fn make_field(width: f32, height: f32, seed: u64) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::new(width, height, FieldParams::default(), &mut rng)
}

fn still_particle(x: f32, y: f32) -> Particle {
    Particle {
        pos: Vec2::new(x, y),
        vel: Vec2::ZERO,
        origin: Vec2::new(x, y),
        radius: 2.0,
    }
}

fn input(mouse: Vec2, focal: Vec2, anchors: &[Anchor], time_ms: f64) -> FrameInput<'_> {
    FrameInput {
        mouse,
        focal,
        anchors,
        time_ms,
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn particle_count_follows_viewport_area() {
    assert_eq!(particle_count(1000.0, 1000.0, AREA_PER_PARTICLE), 86);
    assert_eq!(particle_count(1920.0, 1080.0, AREA_PER_PARTICLE), 180);
    assert_eq!(particle_count(0.0, 800.0, AREA_PER_PARTICLE), 0);
    assert_eq!(particle_count(100.0, 100.0, AREA_PER_PARTICLE), 0);

    let f = make_field(1000.0, 1000.0, 7);
    assert_eq!(f.particles.len(), 86);
}

#[test]
fn spawned_particles_respect_ranges() {
    let f = make_field(800.0, 600.0, 42);
    assert!(!f.particles.is_empty());
    for p in &f.particles {
        assert!((0.0..=800.0).contains(&p.pos.x));
        assert!((0.0..=600.0).contains(&p.pos.y));
        assert!(p.vel.x.abs() <= DRIFT_SPEED_MAX);
        assert!(p.vel.y.abs() <= DRIFT_SPEED_MAX);
        assert!((PARTICLE_RADIUS_MIN..=PARTICLE_RADIUS_MAX).contains(&p.radius));
        assert_eq!(p.origin, p.pos);
    }
}

#[test]
fn resize_replaces_every_particle() {
    let mut f = make_field(1000.0, 1000.0, 1);
    let before = f.particles.clone();

    let mut rng = StdRng::seed_from_u64(2);
    f.resize(500.0, 460.0, &mut rng);

    assert_eq!(f.width, 500.0);
    assert_eq!(f.height, 460.0);
    assert_eq!(f.particles.len(), 20);
    for p in &f.particles {
        assert!(p.pos.x <= 500.0 && p.pos.y <= 460.0);
        assert!(!before.contains(p), "stale particle survived resize");
    }
}

#[test]
fn connection_opacity_falls_off_linearly() {
    let params = FieldParams::default();
    assert!(approx(connection_opacity(0.0, &params), 0.36));
    assert!(approx(connection_opacity(60.0, &params), 0.18));
    assert!(approx(connection_opacity(90.0, &params), 0.09));
    assert_eq!(connection_opacity(120.0, &params), 0.0);
    assert_eq!(connection_opacity(500.0, &params), 0.0);
}

#[test]
fn repulsion_is_zero_outside_radius() {
    assert_eq!(repulsion(Vec2::new(150.0, 0.0), 150.0, 2.0), Vec2::ZERO);
    assert_eq!(repulsion(Vec2::new(0.0, 300.0), 150.0, 2.0), Vec2::ZERO);
}

#[test]
fn repulsion_peaks_at_zero_distance() {
    let push = repulsion(Vec2::ZERO, 150.0, 2.0);
    assert!(approx(push.length(), 2.0));
    assert!(push.x < 0.0, "pointer on top of a particle pushes along -x");
}

#[test]
fn repulsion_points_away_from_pointer() {
    // pointer 75px to the right: half force, pushed left
    let push = repulsion(Vec2::new(75.0, 0.0), 150.0, 2.0);
    assert!(approx(push.x, -1.0));
    assert!(approx(push.y, 0.0));

    // pointer below: pushed up
    let push = repulsion(Vec2::new(0.0, 30.0), 150.0, 2.0);
    assert!(push.y < 0.0);
    assert!(approx(push.length(), 120.0 / 150.0 * 2.0));
}

#[test]
fn idle_particle_eases_toward_origin() {
    let params = FieldParams::default();
    let mut p = still_particle(10.0, 10.0);
    p.origin = Vec2::new(20.0, 10.0);
    update_particle(&mut p, FAR_AWAY, Vec2::new(100.0, 100.0), &params);
    assert!(approx(p.pos.x, 10.2));
    assert!(approx(p.pos.y, 10.0));
}

#[test]
fn drift_applies_while_repelled() {
    let params = FieldParams::default();
    let mut p = still_particle(100.0, 100.0);
    p.vel = Vec2::new(0.1, 0.0);
    update_particle(&mut p, Vec2::new(100.0, 100.0), Vec2::new(400.0, 400.0), &params);
    assert!(approx(p.pos.x, 98.1));
    assert!(approx(p.pos.y, 100.0));
}

#[test]
fn wall_bounce_flips_velocity_without_clamping() {
    let params = FieldParams::default();
    let mut p = still_particle(0.1, 50.0);
    p.vel = Vec2::new(-0.25, 0.0);
    update_particle(&mut p, FAR_AWAY, Vec2::new(100.0, 100.0), &params);
    assert!(p.pos.x < 0.0);
    assert_eq!(p.vel.x, 0.25);

    let mut q = still_particle(50.0, 99.9);
    q.vel = Vec2::new(0.0, 0.25);
    update_particle(&mut q, FAR_AWAY, Vec2::new(100.0, 100.0), &params);
    assert!(q.pos.y > 100.0);
    assert_eq!(q.vel.y, -0.25);
}

#[test]
fn particles_stay_in_bounds_over_many_frames() {
    let mut f = make_field(800.0, 600.0, 99);
    let mut scene = Scene::default();
    let tolerance = DRIFT_SPEED_MAX + 1e-3;
    for frame in 0..2000 {
        f.step(&input(FAR_AWAY, Vec2::ZERO, &[], frame as f64 * 16.0), &mut scene);
        for p in &f.particles {
            assert!(
                p.pos.x >= -tolerance && p.pos.x <= 800.0 + tolerance,
                "x out of bounds at frame {frame}: {}",
                p.pos.x
            );
            assert!(
                p.pos.y >= -tolerance && p.pos.y <= 600.0 + tolerance,
                "y out of bounds at frame {frame}: {}",
                p.pos.y
            );
        }
    }
}

#[test]
fn step_draws_links_before_particles() {
    let mut f = make_field(0.0, 0.0, 0);
    f.width = 400.0;
    f.height = 400.0;
    f.particles = vec![
        still_particle(100.0, 100.0),
        still_particle(160.0, 100.0),
        still_particle(390.0, 390.0),
    ];
    let mut scene = Scene::default();
    f.step(&input(FAR_AWAY, Vec2::ZERO, &[], 0.0), &mut scene);

    assert_eq!(scene.cmds.len(), 4);
    match scene.cmds[0] {
        DrawCmd::Line {
            from, to, color, width,
        } => {
            assert_eq!(from, Vec2::new(100.0, 100.0));
            assert_eq!(to, Vec2::new(160.0, 100.0));
            assert!(approx(color.a, 0.18));
            assert_eq!((color.r, color.g, color.b), (77, 77, 77));
            assert_eq!(width, CONNECTION_LINE_WIDTH);
        }
        other => panic!("expected a link first, got {other:?}"),
    }
    assert_eq!(scene.circles().count(), 3);
    for cmd in scene.circles() {
        if let DrawCmd::Circle { color, .. } = cmd {
            assert!(approx(color.a, PARTICLE_ALPHA));
        }
    }
}

#[test]
fn links_use_positions_from_before_the_update() {
    let mut f = make_field(0.0, 0.0, 0);
    f.width = 400.0;
    f.height = 400.0;
    let mut a = still_particle(100.0, 100.0);
    a.origin = Vec2::new(0.0, 100.0);
    f.particles = vec![a, still_particle(200.0, 100.0)];

    let mut scene = Scene::default();
    f.step(&input(FAR_AWAY, Vec2::ZERO, &[], 0.0), &mut scene);

    match scene.cmds[0] {
        DrawCmd::Line { from, .. } => assert_eq!(from, Vec2::new(100.0, 100.0)),
        other => panic!("expected a link first, got {other:?}"),
    }
    assert!(approx(f.particles[0].pos.x, 98.0));
}

#[test]
fn scene_is_cleared_each_step() {
    let mut f = make_field(300.0, 300.0, 5);
    let mut scene = Scene::default();
    f.step(&input(FAR_AWAY, Vec2::ZERO, &[], 0.0), &mut scene);
    let first = scene.cmds.len();
    f.step(&input(FAR_AWAY, Vec2::ZERO, &[], 16.0), &mut scene);
    assert!(scene.circles().count() == f.particles.len());
    assert!(scene.cmds.len() <= first + f.particles.len());
}

#[test]
fn pulse_and_spoke_opacity_at_origin() {
    assert!(approx(pulse_intensity(0.0, 0.0), 0.5));
    assert!(approx(spoke_opacity(0.5, false), 0.3));
    assert!(approx(spoke_opacity(0.5, true), 0.5));
}

#[test]
fn pulse_varies_with_anchor_x() {
    let expected = 0.5 + 0.3 * (2.0f32).sin();
    assert!(approx(pulse_intensity(0.0, 200.0), expected));
    // quarter period later at x = 0
    let t = std::f64::consts::FRAC_PI_2 / PULSE_TIME_SCALE;
    assert!(approx(pulse_intensity(t, 0.0), 0.8));
}

#[test]
fn spoke_dots_cycle_along_the_segment() {
    assert!(approx(spoke_dot_progress(0.0, 0), 0.0));
    assert!(approx(spoke_dot_progress(0.0, 3), 0.6));
    // phase 2 -> 1.0 of travel, wraps back to the start
    assert!(approx(spoke_dot_progress(2.0, 0), 0.0));
    assert!(approx(spoke_dot_progress(2.0, 1), 0.2));
    assert!(approx(spoke_dot_progress(1.0, 4), 0.3));
    for i in 0..SPOKE_DOT_COUNT {
        let p = spoke_dot_progress(123.456, i);
        assert!((0.0..1.0).contains(&p));
    }
}

#[test]
fn spokes_follow_hover_state_and_skip_missing_anchors() {
    let blue = palette_for("professional").unwrap();
    let red = palette_for("about").unwrap();
    let anchors = vec![
        Anchor {
            id: "professional",
            center: Some(Vec2::new(0.0, 50.0)),
            hovered: false,
            colors: blue,
        },
        Anchor {
            id: "education",
            center: None,
            hovered: true,
            colors: palette_for("education").unwrap(),
        },
        Anchor {
            id: "about",
            center: Some(Vec2::new(200.0, 50.0)),
            hovered: true,
            colors: red,
        },
    ];
    let focal = Vec2::new(100.0, 300.0);
    let mut f = make_field(0.0, 0.0, 0);
    let mut scene = Scene::default();
    f.step(&input(FAR_AWAY, focal, &anchors, 0.0), &mut scene);

    let lines: Vec<DrawCmd> = scene.lines().copied().collect();
    assert_eq!(lines.len(), 2);

    match lines[0] {
        DrawCmd::Line {
            from, to, color, width,
        } => {
            assert_eq!(from, Vec2::new(0.0, 50.0));
            assert_eq!(to, focal);
            assert_eq!((color.r, color.g, color.b), (59, 130, 246));
            assert!(approx(color.a, 0.3));
            assert_eq!(width, SPOKE_WIDTH_IDLE);
        }
        other => panic!("unexpected {other:?}"),
    }
    match lines[1] {
        DrawCmd::Line { color, width, .. } => {
            assert_eq!(color.with_alpha(0.7), red.hover);
            assert!(approx(color.a, pulse_intensity(0.0, 200.0)));
            assert_eq!(width, SPOKE_WIDTH_HOVER);
        }
        other => panic!("unexpected {other:?}"),
    }

    let dots: Vec<DrawCmd> = scene.circles().copied().collect();
    assert_eq!(dots.len(), SPOKE_DOT_COUNT);
    match dots[1] {
        DrawCmd::Circle {
            center,
            radius,
            color,
        } => {
            // 20% of the way from (200, 50) to (100, 300)
            assert!(approx(center.x, 180.0));
            assert!(approx(center.y, 100.0));
            assert_eq!(radius, SPOKE_DOT_RADIUS);
            assert!(approx(color.a, SPOKE_DOT_ALPHA));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn spoke_dot_progress_never_reaches_the_focal_end() {
    // just short of a full lap narrows to 1.0 in f32; it must wrap to the start
    let p = spoke_dot_progress(2.0 * (1.0 - 1e-10), 0);
    assert!(p < 1.0, "progress reached 1: {p}");
    assert_eq!(p, 0.0);
    for i in 0..SPOKE_DOT_COUNT {
        let q = spoke_dot_progress(2.0 * (1.0 - 1e-12) + 0.4 * i as f64, 0);
        assert!((0.0..1.0).contains(&q));
    }
}
