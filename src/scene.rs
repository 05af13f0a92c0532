// The animated scene: a radius line sweeping once per second inside a circle
// centred on the anchor.
// Visual: clock-hand style line starting at 12 o'clock, turning clockwise.

use std::f32::consts::TAU;

use crate::draw::{draw_circle, draw_line};
use crate::types::{FrameBuffer, Point};

/// Colors and size of the scene.
#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub background: u32,
    pub stroke: u32,
    pub radius: f32,
}

/// What one frame drew, in unrounded pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    pub line_start: Point,
    pub line_end: Point,
    pub circle_center: Point,
    pub circle_radius: f32,
}

/// Position inside the current one-second cycle, in [0, 1).
pub fn phase(elapsed_ms: u64) -> f32 {
    (elapsed_ms % 1000) as f32 / 1000.0
}

/// Point on the circle at `phase`. Phase 0 is straight up, 0.25 is to the right.
pub fn orbit_point(anchor: Point, radius: f32, phase: f32) -> Point {
    let theta = TAU * phase;
    Point::new(anchor.x + radius * theta.sin(), anchor.y - radius * theta.cos())
}

/// Paint one full frame into `fb`: clear, then line and circle.
/// Shapes entirely outside the frame are skipped, so the raster only ever
/// sees pixel coordinates near the buffer.
pub fn render_frame(
    fb: &mut FrameBuffer,
    anchor: Point,
    elapsed_ms: u64,
    style: &Style,
) -> FrameGeometry {
    fb.clear(style.background);

    let tip = orbit_point(anchor, style.radius, phase(elapsed_ms));
    let line_min = Point::new(anchor.x.min(tip.x), anchor.y.min(tip.y));
    let line_max = Point::new(anchor.x.max(tip.x), anchor.y.max(tip.y));
    if touches(fb, line_min, line_max) {
        draw_line(fb, px(anchor.x), px(anchor.y), px(tip.x), px(tip.y), style.stroke);
    }

    let r = style.radius.abs();
    let ring_min = Point::new(anchor.x - r, anchor.y - r);
    let ring_max = Point::new(anchor.x + r, anchor.y + r);
    if touches(fb, ring_min, ring_max) {
        draw_circle(fb, px(anchor.x), px(anchor.y), px(style.radius), style.stroke);
    }

    FrameGeometry {
        line_start: anchor,
        line_end: tip,
        circle_center: anchor,
        circle_radius: style.radius,
    }
}

/// Does the box [min, max] (one pixel of slack for rounding) overlap the frame?
fn touches(fb: &FrameBuffer, min: Point, max: Point) -> bool {
    max.x >= -1.0 && max.y >= -1.0 && min.x <= fb.width as f32 && min.y <= fb.height as f32
}

// Nearest pixel. Only called for shapes that touch the frame.
#[inline]
fn px(v: f32) -> i32 {
    v.round() as i32
}
