//! Canvas2D draw path for the particle field: filled circles plus the
//! O(N²) pairwise connection pass (N ≤ 150, fine for a decorative
//! background; a spatial grid is not worth it at this scale).

use crate::core::constants::{COLOR_LIGHTNESS_PCT, COLOR_SATURATION_PCT, CONNECT_LINE_WIDTH};
use crate::core::{connection_alpha, ParticleField};
use web_sys as web;

#[inline]
fn hsl_color(hue: f32) -> String {
    format!(
        "hsl({:.1}, {:.0}%, {:.0}%)",
        hue, COLOR_SATURATION_PCT, COLOR_LIGHTNESS_PCT
    )
}

/// Draw one frame of the field onto the 2d context.
pub fn draw_field(ctx: &web::CanvasRenderingContext2d, field: &ParticleField) {
    ctx.clear_rect(0.0, 0.0, field.width() as f64, field.height() as f64);

    let particles = field.particles();
    ctx.set_line_width(CONNECT_LINE_WIDTH);
    for (i, p) in particles.iter().enumerate() {
        let color = hsl_color(p.hue);

        ctx.begin_path();
        _ = ctx.arc(
            p.position.x as f64,
            p.position.y as f64,
            p.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.set_fill_style_str(&color);
        ctx.set_global_alpha(p.opacity as f64);
        ctx.fill();

        // Each unordered pair once; the line carries the first
        // particle's color.
        for q in &particles[i + 1..] {
            let distance = p.position.distance(q.position);
            if let Some(alpha) = connection_alpha(distance) {
                ctx.begin_path();
                ctx.move_to(p.position.x as f64, p.position.y as f64);
                ctx.line_to(q.position.x as f64, q.position.y as f64);
                ctx.set_stroke_style_str(&color);
                ctx.set_global_alpha(alpha as f64);
                ctx.stroke();
            }
        }
    }
    ctx.set_global_alpha(1.0);
}
