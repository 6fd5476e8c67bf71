use macroquad::prelude::*;

use javelin_kinematics::chart::Arrow;
use javelin_kinematics::core::window::{AxisWindow, PlotRect, lerp_point};

use crate::constants::{ARROW_HEAD_PX, X_GRID_LINES, Y_GRID_LINES};

/// World window mapped onto the plot area of the screen.
#[derive(Clone, Copy)]
pub(crate) struct Viewport {
    pub(crate) window: AxisWindow,
    pub(crate) rect: PlotRect,
}

impl Viewport {
    pub(crate) fn new(window: AxisWindow, left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            window,
            rect: PlotRect {
                left: left as f64,
                right: right as f64,
                top: top as f64,
                bottom: bottom as f64,
            },
        }
    }

    pub(crate) fn to_screen(&self, world: (f64, f64)) -> Vec2 {
        let (x, y) = self.window.to_plot(world, self.rect);
        vec2(x as f32, y as f32)
    }

    fn left(&self) -> f32 {
        self.rect.left as f32
    }

    fn right(&self) -> f32 {
        self.rect.right as f32
    }

    fn top(&self) -> f32 {
        self.rect.top as f32
    }

    fn bottom(&self) -> f32 {
        self.rect.bottom as f32
    }
}

fn format_axis_value(value: f64, axis_span: f64) -> String {
    if axis_span >= 1000.0 {
        format!("{value:.0}")
    } else if axis_span >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(view: &Viewport, color: Color) {
    let (left, right, top, bottom) = (view.left(), view.right(), view.top(), view.bottom());
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        draw_line(x, top, x, bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        draw_line(left, y, right, y, 1.0, color);
    }
    let origin = view.to_screen((0.0, 0.0));
    draw_line(left, origin.y, right, origin.y, 2.0, DARKGRAY);
    draw_line(origin.x, top, origin.x, bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(view: &Viewport, font: Option<&Font>) {
    let (left, right, top, bottom) = (view.left(), view.right(), view.top(), view.bottom());
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        let value = view.window.min_x + t as f64 * view.window.x_span();
        let label = format_axis_value(value, view.window.x_span());
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        let value = view.window.min_y + t as f64 * view.window.y_span();
        let label = format_axis_value(value, view.window.y_span());
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_ui_text("x (m)", right - 50.0, bottom + 48.0, 18, label_color, font);
    draw_ui_text("y (m)", left + 10.0, top - 8.0, 18, label_color, font);
}

pub(crate) fn draw_path(view: &Viewport, points: &[(f64, f64)], thickness: f32, color: Color) {
    if points.len() < 2 {
        return;
    }
    let mut prev = view.to_screen(points[0]);
    for point in points.iter().skip(1).copied() {
        let cur = view.to_screen(point);
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}

/// Draws `arrow` grown to `progress` of its length, head included.
pub(crate) fn draw_arrow(view: &Viewport, arrow: Arrow, progress: f32, color: Color) {
    if progress <= 0.0 {
        return;
    }
    let start = view.to_screen(arrow.from);
    let end = view.to_screen(lerp_point(arrow.from, arrow.to, progress as f64));
    draw_line(start.x, start.y, end.x, end.y, 3.0, color);

    let dir = (end - start).normalize_or_zero();
    if dir.length_squared() < 1e-8 {
        return;
    }
    let normal = vec2(-dir.y, dir.x);
    let base = end - dir * ARROW_HEAD_PX;
    draw_triangle(
        end,
        base + normal * (ARROW_HEAD_PX * 0.45),
        base - normal * (ARROW_HEAD_PX * 0.45),
        color,
    );
}

pub(crate) fn draw_label_at(
    view: &Viewport,
    world: (f64, f64),
    offset: Vec2,
    text: &str,
    color: Color,
    font: Option<&Font>,
) {
    let p = view.to_screen(world) + offset;
    draw_ui_text(text, p.x, p.y, 20, color, font);
}

pub(crate) fn draw_marker(view: &Viewport, world: (f64, f64), radius: f32, fill: Color, outline: Color) {
    let p = view.to_screen(world);
    draw_circle(p.x, p.y, radius, fill);
    draw_circle_lines(p.x, p.y, radius, 2.0, outline);
}

pub(crate) fn draw_dashed(view: &Viewport, from: (f64, f64), to: (f64, f64), color: Color) {
    const DASHES: usize = 16;
    for i in (0..DASHES).step_by(2) {
        let a = view.to_screen(lerp_point(from, to, i as f64 / DASHES as f64));
        let b = view.to_screen(lerp_point(from, to, (i + 1) as f64 / DASHES as f64));
        draw_line(a.x, a.y, b.x, b.y, 1.5, color);
    }
}
