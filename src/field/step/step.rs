use super::ParticleFieldCore;

/// Move every particle once: drift, bounce, then pointer repulsion.
///
/// Order matters: repulsion is measured from the post-drift position, and the
/// bounce check runs before the nudge so the nudge never flips a velocity.
pub(super) fn step(field: &mut ParticleFieldCore) {
    let width = field.width as f32;
    let height = field.height as f32;
    let pointer = field.pointer;
    let radius = field.config.interaction_radius;
    let strength = field.config.push_strength;

    for p in field.particles.iter_mut() {
        p.advance();
        p.reflect(width, height);

        if let Some(pointer) = pointer {
            p.repel_from(pointer, radius, strength);
        }
    }

    field.frame += 1;
}
