use crate::core::random::normalize_seed;
use crate::domain::FieldConfig;

use super::particle::Particle;
use super::{ParticleFieldCore, RenderBuffers};

pub(super) fn create_field_core(
    viewport_width: u32,
    viewport_height: u32,
    seed: u32,
    config: FieldConfig,
) -> ParticleFieldCore {
    let capacity = config.mobile_count.max(config.desktop_count);
    let mut field = ParticleFieldCore {
        config,
        width: 0,
        height: 0,
        pointer: None,
        particles: Vec::new(),
        rng_state: normalize_seed(seed),
        frame: 0,
        reallocations: 0,
        render: RenderBuffers {
            circles: Vec::with_capacity(capacity * super::CIRCLE_STRIDE),
            // Lines are rebuilt every frame; start small and let it grow
            lines: Vec::with_capacity(capacity * super::LINE_STRIDE),
        },
        perf_enabled: false,
        last_step_ms: 0.0,
    };
    resize(&mut field, viewport_width, viewport_height);
    field
}

pub(super) fn target_count(config: &FieldConfig, width: u32) -> usize {
    if width < config.mobile_breakpoint {
        config.mobile_count
    } else {
        config.desktop_count
    }
}

/// Only rebuild when the tier changes, so ordinary resizes don't flicker.
pub(super) fn resize(field: &mut ParticleFieldCore, viewport_width: u32, viewport_height: u32) -> bool {
    field.width = viewport_width;
    // Rounded so 700 * 1.3 lands on 910, not 909.99
    field.height = (viewport_height as f32 * field.config.height_multiplier).round() as u32;

    let target = target_count(&field.config, field.width);
    if field.particles.len() == target {
        return false;
    }

    let w = field.width as f32;
    let h = field.height as f32;
    let mut particles = Vec::with_capacity(target);
    for _ in 0..target {
        particles.push(Particle::spawn(&mut field.rng_state, w, h, &field.config));
    }
    field.particles = particles;
    field.reallocations = field.reallocations.saturating_add(1);
    // Buffers would otherwise still describe the old set until the next step
    super::render_extract::rebuild(field);

    console_log!(
        "stardust: {} particles for {}x{} field",
        target,
        field.width,
        field.height
    );
    true
}
