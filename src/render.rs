use crate::constants::{
    GRADIENT_END, GRADIENT_START, LINE_WIDTH, LINK_RGB, MAX_LINK_DIST, NODE_FILL,
};
use crate::grid::{link_alpha, SpatialGrid};
use crate::sim::Constellation;
use web_sys as web;

/// Gradient spanning the viewport diagonal. Built once per resize, never per
/// frame.
pub fn viewport_gradient(
    ctx: &web::CanvasRenderingContext2d,
    width: f32,
    height: f32,
) -> web::CanvasGradient {
    let g = ctx.create_linear_gradient(0.0, 0.0, width as f64, height as f64);
    _ = g.add_color_stop(0.0, GRADIENT_START);
    _ = g.add_color_stop(1.0, GRADIENT_END);
    g
}

/// Paint one frame: background, particles, then proximity links.
pub fn draw(
    ctx: &web::CanvasRenderingContext2d,
    gradient: &web::CanvasGradient,
    field: &Constellation,
    grid: &SpatialGrid,
) {
    let (w, h) = (field.width as f64, field.height as f64);
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_fill_style_canvas_gradient(gradient);
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_fill_style_str(NODE_FILL);
    for p in &field.particles {
        ctx.begin_path();
        _ = ctx.arc(
            p.pos.x as f64,
            p.pos.y as f64,
            p.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }

    ctx.set_line_width(LINE_WIDTH);
    grid.for_each_link(&field.particles, MAX_LINK_DIST, |i, j, dist| {
        ctx.set_stroke_style_str(&format!(
            "rgba({},{:.3})",
            LINK_RGB,
            link_alpha(dist, MAX_LINK_DIST)
        ));
        ctx.begin_path();
        let (p, q) = (&field.particles[i], &field.particles[j]);
        ctx.move_to(p.pos.x as f64, p.pos.y as f64);
        ctx.line_to(q.pos.x as f64, q.pos.y as f64);
        ctx.stroke();
    });
}
