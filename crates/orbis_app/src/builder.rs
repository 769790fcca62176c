//! Builder-pattern entry point and window/engine configuration.

use std::path::PathBuf;

use crate::traits::OrbisApp;

/// Initial window and engine configuration.
#[derive(Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub resizable: bool,
    /// Directory the renderer loads its GLSL files from.
    pub shader_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Orbis Application".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
            resizable: true,
            shader_dir: PathBuf::from("assets/shaders"),
        }
    }
}

/// The main entry point.  Configure with the builder methods, then `run()`.
pub struct App<A: OrbisApp> {
    config: AppConfig,
    app_state: A,
}

impl<A: OrbisApp + 'static> App<A> {
    pub fn new(app_state: A) -> Self {
        Self {
            config: AppConfig::default(),
            app_state,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.config.title = title.to_string();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.config.vsync = vsync;
        self
    }

    pub fn with_shader_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.shader_dir = dir.into();
        self
    }

    /// Runs the main event loop until the window closes or the app
    /// requests exit.
    pub fn run(self) -> anyhow::Result<()> {
        crate::runner::run_internal(self.config, self.app_state)
    }
}
