// Startup failures are shown to the user before we exit.
// Visual (Windows): a modal "Error" box with a red stop icon.
// Elsewhere there is no native box to reach for, so the message goes to the log.

pub const TITLE: &str = "Error";

#[cfg(target_os = "windows")]
pub fn show_error(message: &str) {
    use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};
    use windows::core::{HSTRING, PCWSTR};

    log::error!("{TITLE}: {message}");
    let text = HSTRING::from(message);
    let caption = HSTRING::from(TITLE);
    // Blocks until dismissed; the answer doesn't matter.
    unsafe {
        let _ = MessageBoxW(
            None,
            PCWSTR(text.as_ptr()),
            PCWSTR(caption.as_ptr()),
            MB_OK | MB_ICONERROR,
        );
    }
}

#[cfg(not(target_os = "windows"))]
pub fn show_error(message: &str) {
    log::error!("{TITLE}: {message}");
}
