use crate::domain::FieldConfig;

use super::ParticleFieldCore;

pub const CIRCLE_STRIDE: usize = 3;
pub const LINE_STRIDE: usize = 5;

/// Linear fade from `dimming` at distance 0 down to 0 at the connection distance
#[inline]
pub fn connection_opacity(config: &FieldConfig, distance: f32) -> f32 {
    if distance >= config.connection_distance {
        return 0.0;
    }
    (1.0 - distance / config.connection_distance) * config.connection_dimming
}

/// Refill the circle and line buffers from the current particle set.
///
/// The pair scan is O(n^2); fine while counts stay in the low hundreds.
// TODO: bucket particles into a connection_distance-sized grid if the desktop tier grows past a few hundred.
pub(super) fn rebuild(field: &mut ParticleFieldCore) {
    let circles = &mut field.render.circles;
    circles.clear();
    for p in &field.particles {
        circles.extend_from_slice(&[p.x, p.y, p.radius]);
    }

    let lines = &mut field.render.lines;
    lines.clear();
    let max_d2 = field.config.connection_distance * field.config.connection_distance;
    let particles = &field.particles;

    // Self-pairs are skipped: a zero-length line draws nothing
    for a in 0..particles.len() {
        let pa = particles[a];
        for pb in &particles[a + 1..] {
            let d2 = (pa.position() - pb.position()).length_squared();
            if d2 >= max_d2 {
                continue;
            }
            let alpha = connection_opacity(&field.config, d2.sqrt());
            lines.extend_from_slice(&[pa.x, pa.y, pb.x, pb.y, alpha]);
        }
    }
}
