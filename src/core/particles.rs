// Particle field simulation: a fixed-size set of drifting point lights
// with pulsing opacity, edge reflection and proximity-based connection
// lines. Pure Rust (and plain `//` headers) so the host-side tests can
// include! and drive it directly.

use super::constants::*;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
    /// Signed per-frame opacity delta; its sign flips at the band edges.
    pub opacity_step: f32,
    pub hue: f32,
}

impl Particle {
    fn random<R: Rng>(width: f32, height: f32, rng: &mut R) -> Self {
        Self {
            position: Vec2::new(
                rng.gen_range(0.0..width.max(1.0)),
                rng.gen_range(0.0..height.max(1.0)),
            ),
            velocity: Vec2::new(
                rng.gen_range(-SPEED_HALF_RANGE..SPEED_HALF_RANGE),
                rng.gen_range(-SPEED_HALF_RANGE..SPEED_HALF_RANGE),
            ),
            radius: RADIUS_MIN + rng.gen::<f32>() * RADIUS_SPAN,
            opacity: OPACITY_INIT_MIN + rng.gen::<f32>() * OPACITY_INIT_SPAN,
            opacity_step: PULSE_STEP_MIN + rng.gen::<f32>() * PULSE_STEP_SPAN,
            hue: HUE_MIN + rng.gen::<f32>() * HUE_SPAN,
        }
    }
}

/// Number of particles for a given CSS viewport width.
#[inline]
pub fn particle_count_for(viewport_width: f32) -> usize {
    if viewport_width < NARROW_VIEWPORT_PX {
        PARTICLES_NARROW
    } else {
        PARTICLES_WIDE
    }
}

/// Alpha of the connection line between two particles at `distance`,
/// or `None` when they are too far apart to connect.
#[inline]
pub fn connection_alpha(distance: f32) -> Option<f32> {
    (distance < CONNECT_RADIUS).then(|| CONNECT_ALPHA_SCALE * (1.0 - distance / CONNECT_RADIUS))
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    /// Build a fresh field sized to the canvas. The count depends on the
    /// CSS viewport width, not the (DPR-scaled) canvas backing size.
    pub fn new<R: Rng>(width: f32, height: f32, viewport_width: f32, rng: &mut R) -> Self {
        let count = particle_count_for(viewport_width);
        let particles = (0..count)
            .map(|_| Particle::random(width, height, rng))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    /// Wholesale replacement after a resize. The new collection is
    /// assigned in one step so an in-flight frame never observes a
    /// half-rebuilt field.
    pub fn rebuild<R: Rng>(&mut self, width: f32, height: f32, viewport_width: f32, rng: &mut R) {
        *self = Self::new(width, height, viewport_width, rng);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Advance every particle by one frame: drift, opacity pulse and
    /// edge reflection.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.position += p.velocity;

            // Bounce the opacity between the band edges rather than
            // clamping; it may overshoot by at most one step.
            p.opacity += p.opacity_step;
            if p.opacity > OPACITY_HIGH || p.opacity < OPACITY_LOW {
                p.opacity_step = -p.opacity_step;
            }

            // Reflect off the canvas edges per axis. The position is left
            // where it is, so a particle can sit slightly outside for a
            // frame before drifting back in.
            if p.position.x < 0.0 || p.position.x > w {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.y < 0.0 || p.position.y > h {
                p.velocity.y = -p.velocity.y;
            }
        }
    }

    #[cfg(test)]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}
