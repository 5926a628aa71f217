// Shared tuning constants for the particle field and the fireworks
// sequencer. Kept free of crate-path imports so host-side tests can
// `include!` the core modules directly.

// Viewport split between the phone-sized and desktop-sized layouts
pub const NARROW_VIEWPORT_PX: f32 = 768.0;

// Particle field
pub const PARTICLES_NARROW: usize = 80;
pub const PARTICLES_WIDE: usize = 150;
pub const SPEED_HALF_RANGE: f32 = 0.25; // per-frame velocity component bound
pub const RADIUS_MIN: f32 = 0.5;
pub const RADIUS_SPAN: f32 = 2.0;
pub const OPACITY_INIT_MIN: f32 = 0.2;
pub const OPACITY_INIT_SPAN: f32 = 0.5;
pub const OPACITY_LOW: f32 = 0.1; // oscillation reverses below this
pub const OPACITY_HIGH: f32 = 0.8; // and above this
pub const PULSE_STEP_MIN: f32 = 0.01;
pub const PULSE_STEP_SPAN: f32 = 0.02;
pub const HUE_MIN: f32 = 30.0; // warm gold..yellow-green band
pub const HUE_SPAN: f32 = 60.0;
pub const COLOR_SATURATION_PCT: f32 = 70.0;
pub const COLOR_LIGHTNESS_PCT: f32 = 70.0;

// Pairwise connection lines
pub const CONNECT_RADIUS: f32 = 100.0;
pub const CONNECT_ALPHA_SCALE: f32 = 0.1;
pub const CONNECT_LINE_WIDTH: f64 = 0.5;

// Fireworks bursts
pub const BURSTS_NARROW: usize = 10;
pub const BURSTS_WIDE: usize = 20;
pub const BURST_REGION_MIN_PCT: f32 = 10.0; // central 10%..90% of the viewport
pub const BURST_REGION_SPAN_PCT: f32 = 80.0;
pub const BURST_STAGGER_SEC: f32 = 0.15;
pub const BURST_DURATION_MIN_SEC: f32 = 2.0;
pub const BURST_DURATION_SPAN_SEC: f32 = 1.0;
pub const SPARKS_PER_BURST: usize = 8;
pub const SPARK_ANGLE_STEP_DEG: f32 = 45.0;
pub const SPARK_BASE_DELAY_SEC: f32 = 0.5;
pub const SPARK_STAGGER_SEC: f32 = 0.1;

// Fireworks tones
pub const TONE_FREQUENCIES_HZ: [f32; 4] = [440.0, 554.0, 659.0, 880.0];
pub const TONE_DURATION_SEC: f64 = 0.5;
pub const TONE_STAGGER_MS: i32 = 200;
pub const TONE_GAIN_START: f32 = 0.1;
pub const TONE_GAIN_FLOOR: f32 = 0.01;

// How long the burst layer stays armed after a trigger
pub const ACTIVE_WINDOW_MS: f64 = 4000.0;
