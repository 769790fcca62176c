//! Windowed application shell for the sphere demo.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use orbis_app::{App, AppContext, OrbisApp};
//! use orbis_renderer::Renderer;
//!
//! struct Demo;
//!
//! impl OrbisApp for Demo {
//!     fn setup(&mut self, _ctx: &mut AppContext, renderer: &mut Renderer) {
//!         // generate meshes, create objects
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     App::new(Demo).with_title("Demo").run()
//! }
//! ```

pub mod builder;
pub mod context;
mod graphics;
mod runner;
pub mod traits;

pub use builder::{App, AppConfig};
pub use context::AppContext;
pub use traits::OrbisApp;

// Re-export the types app implementations touch most, so a demo binary can
// depend on this crate alone for the windowing side.
pub use winit::keyboard::KeyCode;
