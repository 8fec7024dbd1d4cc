use super::color::{ColorPair, Rgba};
use super::constants::*;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// Tunables for the particle field. `Default` mirrors the page's look.
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub area_per_particle: f32,
    pub drift_speed_max: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub return_ease: f32,
    pub connection_distance: f32,
    pub connection_opacity_max: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            area_per_particle: AREA_PER_PARTICLE,
            drift_speed_max: DRIFT_SPEED_MAX,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_max: PARTICLE_RADIUS_MAX,
            repulsion_radius: REPULSION_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            return_ease: RETURN_EASE,
            connection_distance: CONNECTION_DISTANCE,
            connection_opacity_max: CONNECTION_OPACITY_MAX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Spawn point the particle eases back to once the pointer leaves.
    pub origin: Vec2,
    pub radius: f32,
}

/// One section circle as seen this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Anchor {
    pub id: &'static str,
    /// `None` when the element is missing from the page.
    pub center: Option<Vec2>,
    pub hovered: bool,
    pub colors: ColorPair,
}

pub type Anchors = SmallVec<[Anchor; 4]>;

/// Everything the step reads from the outside world.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    pub mouse: Vec2,
    pub focal: Vec2,
    pub anchors: &'a [Anchor],
    /// Milliseconds since an arbitrary epoch; drives spoke pulses.
    pub time_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCmd {
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
}

/// Display list for one frame, painted in order over a cleared surface.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub cmds: Vec<DrawCmd>,
}

impl Scene {
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCmd> {
        self.cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCmd> {
        self.cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Circle { .. }))
    }
}

pub struct ParticleField {
    pub params: FieldParams,
    pub width: f32,
    pub height: f32,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng>(width: f32, height: f32, params: FieldParams, rng: &mut R) -> Self {
        let particles = spawn_particles(width, height, &params, rng);
        Self {
            params,
            width,
            height,
            particles,
        }
    }

    /// Drop every particle and repopulate for the new viewport.
    pub fn resize<R: Rng>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.width = width;
        self.height = height;
        self.particles = spawn_particles(width, height, &self.params, rng);
    }

    /// Advance one frame and write its display list into `scene`.
    ///
    /// Order matches the page: links between the particles as they stood at
    /// the start of the frame, then the moved particles, then the spokes.
    pub fn step(&mut self, input: &FrameInput<'_>, scene: &mut Scene) {
        scene.clear();
        push_connections(&self.particles, &self.params, scene);

        let bounds = Vec2::new(self.width, self.height);
        let fill = Rgba::gray(PARTICLE_GRAY, PARTICLE_ALPHA);
        for p in self.particles.iter_mut() {
            update_particle(p, input.mouse, bounds, &self.params);
            scene.push(DrawCmd::Circle {
                center: p.pos,
                radius: p.radius,
                color: fill,
            });
        }

        push_spokes(input.anchors, input.focal, input.time_ms, scene);
    }
}

#[inline]
pub fn particle_count(width: f32, height: f32, area_per_particle: f32) -> usize {
    if width <= 0.0 || height <= 0.0 || area_per_particle <= 0.0 {
        return 0;
    }
    ((width as f64 * height as f64) / area_per_particle as f64).floor() as usize
}

pub fn spawn_particles<R: Rng>(
    width: f32,
    height: f32,
    params: &FieldParams,
    rng: &mut R,
) -> Vec<Particle> {
    let n = particle_count(width, height, params.area_per_particle);
    let s = params.drift_speed_max;
    (0..n)
        .map(|_| {
            let pos = Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height);
            Particle {
                pos,
                vel: Vec2::new(rng.gen_range(-s..=s), rng.gen_range(-s..=s)),
                origin: pos,
                radius: rng.gen_range(params.radius_min..=params.radius_max),
            }
        })
        .collect()
}

/// Displacement applied to a particle whose offset to the pointer is
/// `to_mouse`. Zero outside `radius`; `strength` pixels at zero distance.
#[inline]
pub fn repulsion(to_mouse: Vec2, radius: f32, strength: f32) -> Vec2 {
    let distance = to_mouse.length();
    if distance >= radius {
        return Vec2::ZERO;
    }
    let force = (radius - distance) / radius;
    // atan2 keeps a defined direction (-x) when the pointer sits on the particle
    let angle = to_mouse.y.atan2(to_mouse.x);
    -Vec2::new(angle.cos(), angle.sin()) * force * strength
}

pub fn update_particle(p: &mut Particle, mouse: Vec2, bounds: Vec2, params: &FieldParams) {
    let to_mouse = mouse - p.pos;
    if to_mouse.length() < params.repulsion_radius {
        p.pos += repulsion(to_mouse, params.repulsion_radius, params.repulsion_strength);
    } else {
        p.pos += (p.origin - p.pos) * params.return_ease;
    }

    p.pos += p.vel;

    if p.pos.x < 0.0 || p.pos.x > bounds.x {
        p.vel.x = -p.vel.x;
    }
    if p.pos.y < 0.0 || p.pos.y > bounds.y {
        p.vel.y = -p.vel.y;
    }
}

/// Link opacity for two particles `distance` apart; 0 at or past the threshold.
#[inline]
pub fn connection_opacity(distance: f32, params: &FieldParams) -> f32 {
    let d = params.connection_distance;
    if distance >= d {
        return 0.0;
    }
    (d - distance) / d * params.connection_opacity_max
}

fn push_connections(particles: &[Particle], params: &FieldParams, scene: &mut Scene) {
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let distance = a.pos.distance(b.pos);
            if distance < params.connection_distance {
                scene.push(DrawCmd::Line {
                    from: a.pos,
                    to: b.pos,
                    color: Rgba::gray(PARTICLE_GRAY, connection_opacity(distance, params)),
                    width: CONNECTION_LINE_WIDTH,
                });
            }
        }
    }
}

#[inline]
pub fn pulse_phase(time_ms: f64) -> f64 {
    time_ms * PULSE_TIME_SCALE
}

#[inline]
pub fn pulse_intensity(time_ms: f64, anchor_x: f32) -> f32 {
    let phase = pulse_phase(time_ms) + (anchor_x * PULSE_PHASE_PER_PX) as f64;
    PULSE_BASE + PULSE_AMPLITUDE * phase.sin() as f32
}

#[inline]
pub fn spoke_opacity(pulse: f32, hovered: bool) -> f32 {
    pulse * if hovered { 1.0 } else { SPOKE_IDLE_OPACITY }
}

/// Position of dot `index` along a hovered spoke, in [0, 1).
#[inline]
pub fn spoke_dot_progress(phase: f64, index: usize) -> f32 {
    let p = (phase * SPOKE_DOT_SPEED as f64 + index as f64 * SPOKE_DOT_SPACING as f64)
        .rem_euclid(1.0) as f32;
    // narrowing can round 0.99999... up to 1.0, which is the start of the next lap
    if p >= 1.0 {
        0.0
    } else {
        p
    }
}

fn push_spokes(anchors: &[Anchor], focal: Vec2, time_ms: f64, scene: &mut Scene) {
    let phase = pulse_phase(time_ms);
    for anchor in anchors {
        let Some(center) = anchor.center else {
            continue;
        };
        let opacity = spoke_opacity(pulse_intensity(time_ms, center.x), anchor.hovered);
        let color = anchor.colors.pick(anchor.hovered);
        scene.push(DrawCmd::Line {
            from: center,
            to: focal,
            color: color.with_alpha(opacity),
            width: if anchor.hovered {
                SPOKE_WIDTH_HOVER
            } else {
                SPOKE_WIDTH_IDLE
            },
        });

        if anchor.hovered {
            let span = focal - center;
            let dot_color = color.with_alpha(SPOKE_DOT_ALPHA);
            for i in 0..SPOKE_DOT_COUNT {
                scene.push(DrawCmd::Circle {
                    center: center + span * spoke_dot_progress(phase, i),
                    radius: SPOKE_DOT_RADIUS,
                    color: dot_color,
                });
            }
        }
    }
}
