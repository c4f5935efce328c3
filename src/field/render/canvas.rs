use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{ParticleFieldCore, CIRCLE_STRIDE, LINE_STRIDE};

/// Clear, fill every particle, then stroke every connection
pub(super) fn draw(field: &ParticleFieldCore, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width as f64, field.height as f64);

    ctx.set_fill_style_str(&field.config.particle_color);
    for c in field.render.circles.chunks_exact(CIRCLE_STRIDE) {
        ctx.begin_path();
        ctx.arc(c[0] as f64, c[1] as f64, c[2] as f64, 0.0, TAU)?;
        ctx.fill();
    }

    ctx.set_line_width(field.config.line_width as f64);
    for l in field.render.lines.chunks_exact(LINE_STRIDE) {
        ctx.set_stroke_style_str(&format!("rgba({}, {})", field.config.line_rgb, l[4]));
        ctx.begin_path();
        ctx.move_to(l[0] as f64, l[1] as f64);
        ctx.line_to(l[2] as f64, l[3] as f64);
        ctx.stroke();
    }

    Ok(())
}
