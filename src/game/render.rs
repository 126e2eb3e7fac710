//! Canvas renderer: paints a [`GameState`] snapshot to the 2D context.
//!
//! Pure read of the state, no mutation. Drawing is best-effort: fallible
//! context calls are `.ok()`'d so a bad frame is dropped rather than crashing
//! the animation loop.

use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use super::state::{GameState, Position, Side, CANVAS_HEIGHT, CANVAS_WIDTH, STEM_X, Thorn};

/// Draw one full frame. `now` is the animation-frame timestamp in ms and only
/// drives the decorative leg/antenna wave, never gameplay.
pub fn render(ctx: &CanvasRenderingContext2d, state: &GameState, now: f64) {
    ctx.clear_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);

    draw_background(ctx);
    draw_stem(ctx);
    for thorn in &state.thorns {
        draw_thorn(ctx, thorn);
    }
    draw_ant(ctx, &state.ant, now);

    if state.paused {
        draw_pause_overlay(ctx);
    }
}

fn draw_background(ctx: &CanvasRenderingContext2d) {
    let grad = ctx.create_linear_gradient(0.0, 0.0, 0.0, CANVAS_HEIGHT);
    grad.add_color_stop(0.0, "#e8f5e8").ok();
    grad.add_color_stop(1.0, "#d5ecd5").ok();
    ctx.set_fill_style_canvas_gradient(&grad);
    ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
}

fn draw_stem(ctx: &CanvasRenderingContext2d) {
    // Central band with darker edges so the stem reads as rounded.
    let grad = ctx.create_linear_gradient(STEM_X - 5.0, 0.0, STEM_X + 5.0, 0.0);
    grad.add_color_stop(0.0, "#1a4314").ok();
    grad.add_color_stop(0.3, "#2d5a27").ok();
    grad.add_color_stop(0.7, "#2d5a27").ok();
    grad.add_color_stop(1.0, "#1a4314").ok();

    ctx.begin_path();
    ctx.set_stroke_style_canvas_gradient(&grad);
    ctx.set_line_width(14.0);
    ctx.set_line_cap("round");
    ctx.move_to(STEM_X, 0.0);
    ctx.line_to(STEM_X, CANVAS_HEIGHT);
    ctx.stroke();

    // Periodic curved texture strokes, offset by a slow sine so the surface
    // looks organic rather than ruled.
    ctx.set_stroke_style_str("#1a4314");
    ctx.set_line_width(1.0);
    let mut y = 0.0;
    while y < CANVAS_HEIGHT {
        let offset = (y * 0.1).sin() * 3.0;
        ctx.begin_path();
        ctx.move_to(STEM_X - 4.0 + offset, y);
        ctx.quadratic_curve_to(STEM_X, y + 15.0, STEM_X + 4.0 - offset, y + 30.0);
        ctx.stroke();
        y += 30.0;
    }
}

fn draw_thorn(ctx: &CanvasRenderingContext2d, thorn: &Thorn) {
    // Tip extends 25px beyond the lane x, mirrored by side.
    let tip_x = match thorn.side {
        Side::Left => thorn.x - 25.0,
        Side::Right => thorn.x + 25.0,
    };

    let grad = ctx.create_linear_gradient(STEM_X, thorn.y, tip_x, thorn.y);
    grad.add_color_stop(0.0, "#2d5a27").ok();
    grad.add_color_stop(0.4, "#8b0000").ok();
    grad.add_color_stop(1.0, "#5c0000").ok();
    ctx.set_fill_style_canvas_gradient(&grad);

    ctx.begin_path();
    match thorn.side {
        Side::Left => {
            ctx.move_to(STEM_X, thorn.y);
            ctx.bezier_curve_to(
                thorn.x - 10.0,
                thorn.y - 8.0,
                thorn.x - 15.0,
                thorn.y - 5.0,
                thorn.x - 25.0,
                thorn.y,
            );
            ctx.line_to(thorn.x - 20.0, thorn.y + 10.0);
            ctx.bezier_curve_to(
                thorn.x - 15.0,
                thorn.y + 5.0,
                thorn.x - 5.0,
                thorn.y + 3.0,
                STEM_X,
                thorn.y,
            );
        }
        Side::Right => {
            ctx.move_to(STEM_X, thorn.y);
            ctx.bezier_curve_to(
                thorn.x + 10.0,
                thorn.y - 8.0,
                thorn.x + 15.0,
                thorn.y - 5.0,
                thorn.x + 25.0,
                thorn.y,
            );
            ctx.line_to(thorn.x + 20.0, thorn.y + 10.0);
            ctx.bezier_curve_to(
                thorn.x + 15.0,
                thorn.y + 5.0,
                thorn.x + 5.0,
                thorn.y + 3.0,
                STEM_X,
                thorn.y,
            );
        }
    }
    ctx.close_path();
    ctx.fill();

    // Drop shadow on the outline pass only.
    ctx.set_shadow_color("rgba(0, 0, 0, 0.4)");
    ctx.set_shadow_blur(6.0);
    ctx.set_shadow_offset_y(3.0);
    ctx.stroke();

    ctx.set_shadow_color("transparent");
    ctx.set_shadow_blur(0.0);
    ctx.set_shadow_offset_y(0.0);

    // Faint highlight along the upper edge.
    let highlight = ctx.create_linear_gradient(STEM_X, thorn.y - 5.0, tip_x, thorn.y - 5.0);
    highlight.add_color_stop(0.0, "rgba(255, 255, 255, 0.2)").ok();
    highlight.add_color_stop(1.0, "rgba(255, 255, 255, 0)").ok();
    ctx.set_stroke_style_canvas_gradient(&highlight);
    ctx.set_line_width(1.0);
    ctx.stroke();
}

fn draw_ant(ctx: &CanvasRenderingContext2d, ant: &Position, now: f64) {
    ctx.set_shadow_color("rgba(0, 0, 0, 0.3)");
    ctx.set_shadow_blur(4.0);
    ctx.set_shadow_offset_y(2.0);

    // Body
    if let Some(grad) = radial(ctx, ant.x, ant.y, 16.0) {
        grad.add_color_stop(0.0, "#3a3a3a").ok();
        grad.add_color_stop(1.0, "#1a1a1a").ok();
        ctx.set_fill_style_canvas_gradient(&grad);
    } else {
        ctx.set_fill_style_str("#1a1a1a");
    }
    ctx.begin_path();
    ctx.ellipse(ant.x, ant.y, 12.0, 16.0, 0.0, 0.0, std::f64::consts::TAU)
        .ok();
    ctx.fill();

    // Head
    if let Some(grad) = radial(ctx, ant.x, ant.y - 12.0, 8.0) {
        grad.add_color_stop(0.0, "#2a2a2a").ok();
        grad.add_color_stop(1.0, "#1a1a1a").ok();
        ctx.set_fill_style_canvas_gradient(&grad);
    } else {
        ctx.set_fill_style_str("#1a1a1a");
    }
    ctx.begin_path();
    ctx.ellipse(ant.x, ant.y - 12.0, 8.0, 8.0, 0.0, 0.0, std::f64::consts::TAU)
        .ok();
    ctx.fill();

    ctx.set_shadow_color("transparent");
    ctx.set_shadow_blur(0.0);
    ctx.set_shadow_offset_y(0.0);

    // Three leg pairs, wave phase from the frame timestamp.
    ctx.set_stroke_style_str("#1a1a1a");
    ctx.set_line_width(2.0);
    let leg_time = now * 0.01;
    for i in -1..=1 {
        let fi = f64::from(i);
        let leg_offset = (leg_time + fi).sin() * 2.0;

        ctx.begin_path();
        ctx.move_to(ant.x - 2.0, ant.y + fi * 6.0);
        ctx.quadratic_curve_to(
            ant.x - 8.0,
            ant.y + fi * 7.0 + leg_offset,
            ant.x - 15.0,
            ant.y + fi * 8.0,
        );
        ctx.stroke();

        ctx.begin_path();
        ctx.move_to(ant.x + 2.0, ant.y + fi * 6.0);
        ctx.quadratic_curve_to(
            ant.x + 8.0,
            ant.y + fi * 7.0 + leg_offset,
            ant.x + 15.0,
            ant.y + fi * 8.0,
        );
        ctx.stroke();
    }

    // Antennae share the leg wave.
    let antenna_offset = leg_time.sin() * 2.0;
    ctx.begin_path();
    ctx.move_to(ant.x - 4.0, ant.y - 14.0);
    ctx.quadratic_curve_to(
        ant.x - 6.0,
        ant.y - 18.0 + antenna_offset,
        ant.x - 8.0,
        ant.y - 22.0,
    );
    ctx.move_to(ant.x + 4.0, ant.y - 14.0);
    ctx.quadratic_curve_to(
        ant.x + 6.0,
        ant.y - 18.0 + antenna_offset,
        ant.x + 8.0,
        ant.y - 22.0,
    );
    ctx.stroke();
}

fn draw_pause_overlay(ctx: &CanvasRenderingContext2d) {
    ctx.set_fill_style_str("rgba(0, 0, 0, 0.5)");
    ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);

    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("bold 36px 'Segoe UI', Arial, sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text("PAUSED", CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0)
        .ok();
}

/// Centered radial gradient from radius 0 to `r`; `None` if the context
/// refuses (frame is then drawn with a flat fallback fill).
fn radial(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64) -> Option<CanvasGradient> {
    ctx.create_radial_gradient(x, y, 0.0, x, y, r).ok()
}
