use crate::core::{DrawCmd, Scene};
use std::f64::consts::TAU;
use web_sys as web;

/// Clear the whole surface and paint the display list in order.
pub fn paint(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64, scene: &Scene) {
    ctx.clear_rect(0.0, 0.0, width, height);
    for cmd in &scene.cmds {
        match cmd {
            DrawCmd::Line {
                from,
                to,
                color,
                width,
            } => {
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*width as f64);
                ctx.stroke();
            }
            DrawCmd::Circle {
                center,
                radius,
                color,
            } => {
                ctx.begin_path();
                _ = ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill();
            }
        }
    }
}
