//! Per-callback context handed to [`crate::OrbisApp`] implementations.

use winit::window::Window;

/// Window access plus an exit flag, rebuilt for every callback.
pub struct AppContext<'a> {
    pub window: &'a Window,
    pub(crate) exit_requested: bool,
}

impl<'a> AppContext<'a> {
    pub(crate) fn new(window: &'a Window) -> Self {
        Self {
            window,
            exit_requested: false,
        }
    }

    /// Asks the runner to leave the event loop after this callback returns.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }
}
