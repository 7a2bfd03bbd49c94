//! Spiral canvas panel.
//!
//! Replays a [`DisplayList`] onto a braille [`Canvas`]. The display list is
//! sized in braille dots (two per cell across, four per cell down), so one
//! surface unit is one dot and squares stay square on screen. Surface y
//! grows downward while canvas y grows upward, hence the flip.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine, Rectangle};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use fibspiral_core::viewport::{Point, ScreenRect};
use fibspiral_render::display_list::{DisplayList, DrawOp};
use fibspiral_render::surface::{Stroke, Surface};

use crate::styles::to_color;

const DOTS_PER_CELL_X: f64 = 2.0;
const DOTS_PER_CELL_Y: f64 = 4.0;
const CURVE_SEGMENTS: usize = 16;

/// Size in surface units of a display list that fills the inside of `area`.
#[must_use]
pub fn surface_size(area: Rect) -> (f64, f64) {
    let cols = f64::from(area.width.saturating_sub(2).max(1));
    let rows = f64::from(area.height.saturating_sub(2).max(1));
    (cols * DOTS_PER_CELL_X, rows * DOTS_PER_CELL_Y)
}

/// Point on the quadratic Bezier `from`-`control`-`to` at `t` in `[0, 1]`.
#[must_use]
pub fn quadratic_point(from: Point, control: Point, to: Point, t: f64) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * from.x + 2.0 * u * t * control.x + t * t * to.x,
        u * u * from.y + 2.0 * u * t * control.y + t * t * to.y,
    )
}

/// Flatten a quadratic Bezier into `segments + 1` points.
#[must_use]
pub fn curve_points(from: Point, control: Point, to: Point, segments: usize) -> Vec<Point> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| quadratic_point(from, control, to, i as f64 / segments as f64))
        .collect()
}

/// Split a polyline into the "on" pieces of an `[on, off]` dash pattern.
///
/// A non-positive `on` length draws the polyline solid.
#[must_use]
pub fn dash_segments(points: &[Point], dash: [f64; 2]) -> Vec<(Point, Point)> {
    let [on, off] = dash;
    if on <= 0.0 || off < 0.0 {
        return points.windows(2).map(|w| (w[0], w[1])).collect();
    }

    let mut segments = Vec::new();
    let mut drawing = true;
    let mut remaining = on;
    for pair in points.windows(2) {
        let (mut a, b) = (pair[0], pair[1]);
        let mut len = (b.x - a.x).hypot(b.y - a.y);
        while len > 0.0 {
            let step = remaining.min(len);
            let t = step / len;
            let p = Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
            if drawing && step > 0.0 {
                segments.push((a, p));
            }
            a = p;
            len -= step;
            remaining -= step;
            if remaining <= 0.0 {
                drawing = !drawing;
                remaining = if drawing { on } else { off };
            }
        }
    }
    segments
}

/// Y coordinates of the horizontal lines that fill `rect`, `step` apart.
#[must_use]
pub fn scanlines(rect: ScreenRect, step: f64) -> Vec<f64> {
    if step <= 0.0 || rect.height <= 0.0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut y = rect.y + step / 2.0;
    while y < rect.y + rect.height {
        lines.push(y);
        y += step;
    }
    lines
}

/// Render the spiral canvas panel.
pub fn render_spiral(frame: &mut Frame, area: Rect, list: &DisplayList) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Spiral ");
    let inner = block.inner(area);
    let width = list.width();
    let height = list.height();
    let cell_w = width / f64::from(inner.width.max(1));
    let cell_h = height / f64::from(inner.height.max(1));
    let dot = cell_h / DOTS_PER_CELL_Y;

    let mut canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height]);
    if let Some(DrawOp::Clear(color)) = list.ops().first() {
        canvas = canvas.background_color(to_color(*color));
    }

    let canvas = canvas.paint(|ctx| {
        let mut last_square: Option<ScreenRect> = None;
        for op in list.ops() {
            match op {
                DrawOp::Clear(_) => {}
                DrawOp::FillRect { rect, color } => {
                    for y in scanlines(*rect, dot) {
                        ctx.draw(&CanvasLine::new(
                            rect.x,
                            height - y,
                            rect.x + rect.width,
                            height - y,
                            to_color(*color),
                        ));
                    }
                    last_square = Some(*rect);
                }
                DrawOp::StrokeRect { rect, stroke } => {
                    ctx.draw(&Rectangle {
                        x: rect.x,
                        y: height - rect.y - rect.height,
                        width: rect.width,
                        height: rect.height,
                        color: to_color(stroke.color),
                    });
                }
                DrawOp::Text { text, center, font } => {
                    let text_w = text.chars().count() as f64 * cell_w;
                    let fits = last_square
                        .is_some_and(|rect| text_w <= rect.width && cell_h <= rect.height);
                    if fits {
                        let mut style = Style::default().fg(to_color(font.color));
                        if font.bold {
                            style = style.add_modifier(Modifier::BOLD);
                        }
                        ctx.print(
                            center.x - text_w / 2.0,
                            height - center.y,
                            Line::styled(text.clone(), style),
                        );
                    }
                }
                DrawOp::Curve {
                    from,
                    control,
                    to,
                    stroke,
                } => draw_curve(ctx, height, *from, *control, *to, stroke),
            }
            ctx.layer();
        }
    });
    frame.render_widget(canvas, area);
}

fn draw_curve(
    ctx: &mut Context<'_>,
    height: f64,
    from: Point,
    control: Point,
    to: Point,
    stroke: &Stroke,
) {
    let points = curve_points(from, control, to, CURVE_SEGMENTS);
    let pieces = match stroke.dash {
        Some(dash) => dash_segments(&points, dash),
        None => points.windows(2).map(|w| (w[0], w[1])).collect(),
    };
    for (a, b) in pieces {
        ctx.draw(&CanvasLine::new(
            a.x,
            height - a.y,
            b.x,
            height - b.y,
            to_color(stroke.color),
        ));
    }
}
