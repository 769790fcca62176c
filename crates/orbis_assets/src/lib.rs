//! Runtime shader text loading.
//!
//! [`load_shader_source`] reads a shader file and textually expands its
//! `#include <...>` directives; [`ShaderStage`] maps a file's extension to
//! the pipeline stage it targets.  Compilation is someone else's job — this
//! crate only produces strings.

pub mod shader_source;
pub mod stage;

pub use shader_source::load_shader_source;
pub use stage::{ShaderStage, ShaderStageError};
