// Application state and the main loop.
// Each pass: service every pending key first, then draw one frame.
// The loop ends when the window reports it has been closed.

use minifb::Key;

use crate::clock::Clock;
use crate::config::Config;
use crate::error::Error;
use crate::input::InputHandler;
use crate::present::{present_frame, Surface};
use crate::scene::Style;
use crate::types::{Point, Size};

/// A window the loop can run against.
pub trait Host: Surface {
    fn is_open(&self) -> bool;
    /// Keys pressed since the previous pass.
    fn keys_pressed(&mut self) -> Vec<Key>;
}

pub struct App {
    pub anchor: Point,
    input: InputHandler,
    style: Style,
}

impl App {
    pub fn new(cfg: &Config) -> Self {
        Self {
            anchor: cfg.anchor,
            input: InputHandler::new(cfg.step),
            style: Style { background: cfg.background, stroke: cfg.stroke, radius: cfg.radius },
        }
    }

    /// Drive `host` until it closes.
    pub fn run<H, C>(&mut self, host: &mut H, clock: &C) -> Result<(), Error>
    where
        H: Host + ?Sized,
        C: Clock + ?Sized,
    {
        let mut fps = FpsCounter::new(clock.elapsed_ms());
        let mut last_size: Option<Size> = None;

        while host.is_open() {
            /* 1) Drain input. Visual: the circle jumps by one step per arrow press. */
            for key in host.keys_pressed() {
                self.input.handle_key(&mut self.anchor, key);
            }
            // Every pass redraws below, so the request needs no extra draw; it only
            // marks that this frame is the first to show the moved anchor.
            if self.input.take_redraw_request() {
                log::trace!("redraw requested at ({}, {})", self.anchor.x, self.anchor.y);
            }

            /* 2) Idle render. Happens every pass, so the sweep keeps moving without input. */
            let size = host.client_size();
            if last_size != Some(size) {
                log::debug!("client area {}x{}", size.width, size.height);
                last_size = Some(size);
            }
            present_frame(&mut *host, self.anchor, clock, &self.style)?;

            /* 3) FPS report once per second */
            if let Some(rate) = fps.tick(clock.elapsed_ms()) {
                log::info!("FPS: {rate:.1}");
            }
        }

        log::info!("window closed");
        Ok(())
    }
}

/// Counts frames and reports a rate roughly once per second.
struct FpsCounter {
    since_ms: u64,
    frames: u32,
}

impl FpsCounter {
    fn new(now_ms: u64) -> Self {
        Self { since_ms: now_ms, frames: 0 }
    }

    fn tick(&mut self, now_ms: u64) -> Option<f32> {
        self.frames += 1;
        let span = now_ms.saturating_sub(self.since_ms);
        if span < 1000 {
            return None;
        }
        let rate = self.frames as f32 * 1000.0 / span as f32;
        self.frames = 0;
        self.since_ms = now_ms;
        Some(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::present::tests::MemorySurface;
    use crate::types::FrameBuffer;
    use std::collections::VecDeque;

    /// Plays back one batch of keys per pass, then "closes".
    struct ScriptedHost {
        surface: MemorySurface,
        script: VecDeque<Vec<Key>>,
        open: bool,
    }

    impl ScriptedHost {
        fn new(script: Vec<Vec<Key>>) -> Self {
            Self { surface: MemorySurface::new(640, 480), script: script.into(), open: true }
        }
    }

    impl Surface for ScriptedHost {
        fn client_size(&self) -> Size {
            self.surface.client_size()
        }
        fn blit(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
            self.surface.blit(frame)
        }
        fn pump(&mut self) {
            self.surface.pump()
        }
    }

    impl Host for ScriptedHost {
        fn is_open(&self) -> bool {
            self.open
        }
        fn keys_pressed(&mut self) -> Vec<Key> {
            match self.script.pop_front() {
                Some(keys) => {
                    if self.script.is_empty() {
                        self.open = false;
                    }
                    keys
                }
                None => {
                    self.open = false;
                    Vec::new()
                }
            }
        }
    }

    #[test]
    fn five_rights_then_a_frame_at_the_top_of_the_cycle() {
        let mut app = App::new(&Config::default());
        let mut host = ScriptedHost::new(vec![vec![Key::Right; 5]]);
        app.run(&mut host, &FixedClock::new(0)).unwrap();

        assert_eq!(app.anchor, Point::new(345.0, 240.0));
        let shown = &host.surface.shown;
        assert_eq!(shown.len(), 1);
        let f = &shown[0];
        for y in 140..=240 {
            assert_eq!(f.pixel(345, y), Some(0));
        }
        assert_eq!(f.pixel(445, 240), Some(0));
        assert_eq!(f.pixel(245, 240), Some(0));
    }

    #[test]
    fn draws_every_pass_even_without_input() {
        let mut app = App::new(&Config::default());
        let mut host = ScriptedHost::new(vec![vec![], vec![Key::A], vec![], vec![Key::Down]]);
        app.run(&mut host, &FixedClock::new(0)).unwrap();
        assert_eq!(host.surface.shown.len(), 4);
        assert_eq!(app.anchor, Point::new(320.0, 245.0));
    }

    #[test]
    fn input_is_applied_before_the_frame_of_the_same_pass() {
        let mut app = App::new(&Config::default());
        let mut host = ScriptedHost::new(vec![vec![Key::Up; 20]]);
        app.run(&mut host, &FixedClock::new(0)).unwrap();
        // anchor (320,140): circle top sits at y = 40
        assert_eq!(host.surface.shown[0].pixel(320, 40), Some(0));
    }

    #[test]
    fn pass_without_input_still_redraws_with_no_pending_request() {
        let mut app = App::new(&Config::default());
        let mut host = ScriptedHost::new(vec![vec![Key::Left], vec![]]);
        app.run(&mut host, &FixedClock::new(0)).unwrap();
        // the request was consumed on the first pass; the second pass drew anyway
        assert!(!app.input.take_redraw_request());
        assert_eq!(host.surface.shown.len(), 2);
        assert_eq!(host.surface.shown[0].pixels, host.surface.shown[1].pixels);
    }

    #[test]
    fn present_error_stops_the_loop() {
        let mut app = App::new(&Config::default());
        let mut host = ScriptedHost::new(vec![vec![], vec![], vec![]]);
        host.surface.fail = true;
        let err = app.run(&mut host, &FixedClock::new(0)).unwrap_err();
        assert!(matches!(err, Error::WindowUpdate(_)));
        assert_eq!(host.script.len(), 2);
    }

    #[test]
    fn fps_counter_reports_once_per_second() {
        let mut c = FpsCounter::new(0);
        for ms in (0..1000).step_by(10) {
            assert!(c.tick(ms).is_none());
        }
        let rate = c.tick(1000).unwrap();
        assert!((rate - 101.0).abs() < 0.01);
        assert!(c.tick(1010).is_none());
    }
}
