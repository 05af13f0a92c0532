// Startup settings. Everything has a fixed default; only the frame-rate cap
// can be changed, through the SWEEP_TARGET_FPS environment variable.

use crate::types::Point;

pub const TARGET_FPS_ENV: &str = "SWEEP_TARGET_FPS";

#[derive(Clone, Debug)]
pub struct Config {
    pub title: String,
    pub width: usize,       // initial client width
    pub height: usize,      // initial client height
    pub anchor: Point,      // where the circle starts
    pub step: f32,          // pixels moved per arrow press
    pub radius: f32,        // circle radius and sweep length
    pub background: u32,    // 0x00RRGGBB
    pub stroke: u32,        // 0x00RRGGBB
    pub target_fps: Option<usize>, // None = redraw as fast as possible
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: String::from("Main Window"),
            width: 640,
            height: 480,
            anchor: Point::new(320.0, 240.0),
            step: 5.0,
            radius: 100.0,
            background: 0x00_FF_FF_FF,
            stroke: 0x00_00_00_00,
            target_fps: None,
        }
    }
}

impl Config {
    /// Defaults plus the environment override.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        cfg.target_fps = parse_target_fps(std::env::var(TARGET_FPS_ENV).ok().as_deref());
        cfg
    }
}

/// "60" -> Some(60). Empty, zero or garbage -> None (uncapped).
fn parse_target_fps(raw: Option<&str>) -> Option<usize> {
    let raw = raw?.trim();
    match raw.parse::<usize>() {
        Ok(0) => None,
        Ok(fps) => Some(fps),
        Err(_) => {
            log::warn!("ignoring {TARGET_FPS_ENV}={raw:?}: not a frame rate");
            None
        }
    }
}
