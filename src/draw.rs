// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows whatever frame we hand it, pixel for pixel.
// 2) Thin 1-pixel lines and circle outlines drawn into a FrameBuffer.

use crate::app::Host;
use crate::config::Config;
use crate::error::Error;
use crate::present::Surface;
use crate::types::{FrameBuffer, Size};
use minifb::{Key, KeyRepeat, ScaleMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create the main window with a `cfg.width x cfg.height` client area.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(cfg: &Config) -> Result<Self, Error> {
        let opts = WindowOptions {
            resize: true,
            // 1:1 pixels pinned to the top-left; we always repaint everything
            scale_mode: ScaleMode::UpperLeft,
            ..WindowOptions::default()
        };
        let mut window = Window::new(&cfg.title, cfg.width, cfg.height, opts)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // 0 lifts minifb's limiter entirely
        window.set_target_fps(cfg.target_fps.unwrap_or(0));
        Ok(Self { window })
    }
}

impl Host for Drawer {
    /// Returns false when the user closes the window (so we can stop the loop).
    fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Keys that went down since the last update, auto-repeat included.
    fn keys_pressed(&mut self) -> Vec<Key> {
        self.window.get_keys_pressed(KeyRepeat::Yes)
    }
}

impl Surface for Drawer {
    fn client_size(&self) -> Size {
        let (width, height) = self.window.get_size();
        Size { width, height }
    }

    /// Push the pixels for this frame to the screen in one copy.
    fn blit(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Nothing to show (e.g. minimized); still pump events so input and close work.
    fn pump(&mut self) {
        self.window.update();
    }
}

/* ---------- Software drawing: pixels, lines, circles ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
/// Visual: a straight 1-pixel line; parts outside the frame are clipped.
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0, x1, y1) = (x0, y0, x1, y1);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Circle outline around (cx,cy) with the midpoint algorithm, one octant mirrored eight ways.
/// Visual: a 1-pixel ring; arcs outside the frame are clipped.
pub fn draw_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    if radius <= 0 {
        put_pixel(fb, cx, cy, color);
        return;
    }
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;
    while x >= y {
        for (px, py) in [
            (x, y), (y, x), (-y, x), (-x, y),
            (-x, -y), (-y, -x), (y, -x), (x, -y),
        ] {
            put_pixel(fb, cx + px, cy + py, color);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: u32 = 0;
    const WHITE: u32 = 0x00_FF_FF_FF;

    fn white(w: usize, h: usize) -> FrameBuffer {
        let mut fb = FrameBuffer::new(Size { width: w, height: h });
        fb.clear(WHITE);
        fb
    }

    #[test]
    fn vertical_line_covers_both_ends() {
        let mut fb = white(20, 20);
        draw_line(&mut fb, 5, 15, 5, 2, BLACK);
        for y in 2..=15 {
            assert_eq!(fb.pixel(5, y), Some(BLACK));
        }
        assert_eq!(fb.pixel(6, 10), Some(WHITE));
    }

    #[test]
    fn diagonal_line_hits_each_column_once() {
        let mut fb = white(10, 10);
        draw_line(&mut fb, 0, 0, 9, 9, BLACK);
        for i in 0..10 {
            assert_eq!(fb.pixel(i, i), Some(BLACK));
        }
        let black = fb.pixels.iter().filter(|&&p| p == BLACK).count();
        assert_eq!(black, 10);
    }

    #[test]
    fn circle_touches_its_four_extremes_and_not_the_center() {
        let mut fb = white(64, 64);
        draw_circle(&mut fb, 32, 32, 20, BLACK);
        assert_eq!(fb.pixel(52, 32), Some(BLACK));
        assert_eq!(fb.pixel(12, 32), Some(BLACK));
        assert_eq!(fb.pixel(32, 52), Some(BLACK));
        assert_eq!(fb.pixel(32, 12), Some(BLACK));
        assert_eq!(fb.pixel(32, 32), Some(WHITE));
    }

    #[test]
    fn circle_pixels_stay_near_the_radius() {
        let mut fb = white(64, 64);
        draw_circle(&mut fb, 32, 32, 20, BLACK);
        for y in 0..64 {
            for x in 0..64 {
                if fb.pixel(x, y) == Some(BLACK) {
                    let d = ((x as f32 - 32.0).powi(2) + (y as f32 - 32.0).powi(2)).sqrt();
                    assert!((d - 20.0).abs() < 1.0, "({x},{y}) at distance {d}");
                }
            }
        }
    }

    #[test]
    fn shapes_outside_the_frame_are_clipped() {
        let mut fb = white(8, 8);
        draw_line(&mut fb, -50, -50, 100, -3, BLACK);
        draw_circle(&mut fb, -1000, 4000, 100, BLACK);
        assert!(fb.pixels.iter().all(|&p| p == WHITE));
    }
}
