// Every variant states *where* things went wrong.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Creating the window failed (nothing was shown yet).
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Pushing a finished frame to the window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),
}

impl Error {
    /// Text for the modal failure dialog.
    pub fn dialog_text(&self) -> String {
        match self {
            Error::WindowInit(s) => format!("Window creation failed.\n{s}"),
            Error::WindowUpdate(s) => format!("Presenting a frame failed.\n{s}"),
        }
    }
}
