// Physics and drawing constants for the particle field.
// All distances are CSS pixels, all motion is per frame.

// Population
pub const AREA_PER_PARTICLE: f32 = 11_500.0; // one particle per this many square pixels
pub const DRIFT_SPEED_MAX: f32 = 0.25; // |vx|, |vy| upper bound at spawn
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 3.0;

// Pointer interaction
pub const REPULSION_RADIUS: f32 = 150.0;
pub const REPULSION_STRENGTH: f32 = 2.0; // push at zero distance, pixels per frame
pub const RETURN_EASE: f32 = 0.02; // fraction of the way home covered each frame

// Particle-to-particle links
pub const CONNECTION_DISTANCE: f32 = 120.0;
pub const CONNECTION_OPACITY_MAX: f32 = 0.36;
pub const CONNECTION_LINE_WIDTH: f32 = 0.5;

// Neutral gray shared by particles and links
pub const PARTICLE_GRAY: u8 = 77;
pub const PARTICLE_ALPHA: f32 = 0.72;

// Anchor spokes
pub const PULSE_BASE: f32 = 0.5;
pub const PULSE_AMPLITUDE: f32 = 0.3;
pub const PULSE_TIME_SCALE: f64 = 0.002; // radians per millisecond
pub const PULSE_PHASE_PER_PX: f32 = 0.01; // phase offset by anchor x
pub const SPOKE_IDLE_OPACITY: f32 = 0.6; // multiplier when not hovered
pub const SPOKE_WIDTH_IDLE: f32 = 1.0;
pub const SPOKE_WIDTH_HOVER: f32 = 2.0;

// Dots travelling along a hovered spoke
pub const SPOKE_DOT_COUNT: usize = 5;
pub const SPOKE_DOT_SPACING: f32 = 0.2; // progress offset between consecutive dots
pub const SPOKE_DOT_SPEED: f32 = 0.5; // progress per unit of pulse phase
pub const SPOKE_DOT_RADIUS: f32 = 2.0;
pub const SPOKE_DOT_ALPHA: f32 = 0.8;
