// What you SEE:
// • A white window with a black circle; a radius line sweeps around it once per second.
// • Arrow keys move the circle 5 pixels at a time.
// • Every frame is drawn off-screen first and shown in one copy (no flicker).
//
// Logging: RUST_LOG=debug for key/resize traces. SWEEP_TARGET_FPS=60 caps the redraw rate.

// `stdio` keeps the console attached on Windows, handy for reading the log.
#![cfg_attr(all(target_os = "windows", not(feature = "stdio")), windows_subsystem = "windows")]

mod app;
mod clock;
mod config;
mod dialog;
mod draw;
mod error;
mod input;
mod present;
mod scene;
mod types;

use std::process::ExitCode;

use app::App;
use clock::SystemClock;
use config::Config;
use draw::Drawer;
use error::Error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            dialog::show_error(&e.dialog_text());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    let cfg = Config::from_env();

    /* --- Window setup ---
       Visual: a 640x480 "Main Window" opens. */
    let mut drawer = Drawer::new(&cfg)?;
    log::info!(
        "opened \"{}\" {}x{} (frame cap: {})",
        cfg.title,
        cfg.width,
        cfg.height,
        cfg.target_fps.map_or_else(|| String::from("none"), |f| format!("{f} fps")),
    );

    /* --- Main loop ---
       Visual: the sweep runs until the window is closed. */
    let mut app = App::new(&cfg);
    app.run(&mut drawer, &SystemClock::new())
}
