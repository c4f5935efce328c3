use crate::core::random::next_unit;
use crate::core::Vec2;
use crate::domain::FieldConfig;

/// A single drifting point of the background field
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

impl Particle {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, radius: f32) -> Self {
        Self { x, y, vx, vy, radius }
    }

    /// Random position inside `[0,w) x [0,h)`, slow symmetric drift, small radius
    pub fn spawn(rng: &mut u32, width: f32, height: f32, config: &FieldConfig) -> Self {
        let x = next_unit(rng) * width;
        let y = next_unit(rng) * height;
        let vx = (next_unit(rng) - 0.5) * config.velocity_spread;
        let vy = (next_unit(rng) - 0.5) * config.velocity_spread;
        let radius = next_unit(rng) * config.max_radius;
        Self { x, y, vx, vy, radius }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    /// Elastic wall bounce: flips the velocity component of each crossed axis.
    /// Position is not clamped, so the particle may sit outside for a frame.
    /// Returns which axes flipped.
    #[inline]
    pub fn reflect(&mut self, width: f32, height: f32) -> (bool, bool) {
        let flip_x = self.x < 0.0 || self.x > width;
        let flip_y = self.y < 0.0 || self.y > height;
        if flip_x {
            self.vx = -self.vx;
        }
        if flip_y {
            self.vy = -self.vy;
        }
        (flip_x, flip_y)
    }

    /// Positional nudge away from the pointer with linear falloff.
    /// Velocity is untouched. Returns true if the particle moved.
    pub fn repel_from(&mut self, pointer: Vec2, interaction_radius: f32, push_strength: f32) -> bool {
        let to_pointer = pointer - self.position();
        let distance = to_pointer.length();
        if distance <= 0.0 || distance >= interaction_radius {
            return false;
        }

        let direction = to_pointer / distance;
        let force = (interaction_radius - distance) / interaction_radius;
        let push = direction * (force * push_strength);

        self.x -= push.x;
        self.y -= push.y;
        true
    }
}
