//! Shader-module creation from runtime-loaded GLSL files.
//!
//! The assets crate handles the text side (include expansion, BOM, stage
//! from extension); this module is where its recoverable-by-design empty
//! output is promoted to a hard error, right before the GPU would otherwise
//! be asked to compile nothing.

use std::borrow::Cow;
use std::path::Path;

use thiserror::Error;

use orbis_assets::{load_shader_source, ShaderStage, ShaderStageError};

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("shader source {0} expanded to empty text")]
    EmptySource(String),
    #[error(transparent)]
    UnknownStage(#[from] ShaderStageError),
    #[error("shader stage {0:?} is not supported by the wgpu GLSL front-end")]
    UnsupportedStage(ShaderStage),
}

/// Loads `path`, expands its includes, and compiles it as GLSL for the
/// stage named by its extension.
pub fn load_shader_module(
    device: &wgpu::Device,
    path: &Path,
) -> Result<wgpu::ShaderModule, ShaderError> {
    let stage = naga_stage(ShaderStage::from_path(path)?)?;

    let code = load_shader_source(path);
    if code.is_empty() {
        return Err(ShaderError::EmptySource(path.display().to_string()));
    }

    let label = format!("Shader: {}", path.display());
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&label),
        source: wgpu::ShaderSource::Glsl {
            shader: Cow::Owned(code),
            stage,
            defines: Default::default(),
        },
    });

    log::info!("loaded shader module from {}", path.display());
    Ok(module)
}

/// Stages the GLSL front-end can actually compile.  Geometry and
/// tessellation files classify fine but have no wgpu pipeline slot.
fn naga_stage(stage: ShaderStage) -> Result<wgpu::naga::ShaderStage, ShaderError> {
    match stage {
        ShaderStage::Vertex => Ok(wgpu::naga::ShaderStage::Vertex),
        ShaderStage::Fragment => Ok(wgpu::naga::ShaderStage::Fragment),
        ShaderStage::Compute => Ok(wgpu::naga::ShaderStage::Compute),
        other => Err(ShaderError::UnsupportedStage(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_and_tessellation_stages_are_rejected() {
        for stage in [
            ShaderStage::Geometry,
            ShaderStage::TessellationControl,
            ShaderStage::TessellationEvaluation,
        ] {
            assert!(matches!(
                naga_stage(stage),
                Err(ShaderError::UnsupportedStage(_))
            ));
        }
    }
}
