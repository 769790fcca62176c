//! Shader stage classification from file extensions.

use std::path::Path;

use thiserror::Error;

/// Pipeline stage a shader file targets, derived purely from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
    Compute,
    TessellationControl,
    TessellationEvaluation,
}

#[derive(Debug, Error)]
pub enum ShaderStageError {
    /// Guessing a stage for an unrecognized extension would hide a mislabeled
    /// asset until the GPU rejects it, so this is a hard error.
    #[error("unknown shader extension {extension:?} in {path}")]
    UnknownShaderStage { extension: String, path: String },
}

impl ShaderStage {
    /// Maps `.vert`, `.frag`, `.geom`, `.comp`, `.tesc`, and `.tese` to
    /// their stages.
    pub fn from_path(path: &Path) -> Result<Self, ShaderStageError> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match extension {
            "vert" => Ok(Self::Vertex),
            "frag" => Ok(Self::Fragment),
            "geom" => Ok(Self::Geometry),
            "comp" => Ok(Self::Compute),
            "tesc" => Ok(Self::TessellationControl),
            "tese" => Ok(Self::TessellationEvaluation),
            other => Err(ShaderStageError::UnknownShaderStage {
                extension: other.to_string(),
                path: path.display().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_map_to_their_stages() {
        let cases = [
            ("sphere.vert", ShaderStage::Vertex),
            ("sphere.frag", ShaderStage::Fragment),
            ("extrude.geom", ShaderStage::Geometry),
            ("cull.comp", ShaderStage::Compute),
            ("patch.tesc", ShaderStage::TessellationControl),
            ("patch.tese", ShaderStage::TessellationEvaluation),
        ];
        for (name, stage) in cases {
            assert_eq!(ShaderStage::from_path(Path::new(name)).unwrap(), stage);
        }
    }

    #[test]
    fn unknown_extension_is_an_error_not_a_default() {
        assert!(ShaderStage::from_path(Path::new("sphere.wgsl")).is_err());
        assert!(ShaderStage::from_path(Path::new("no_extension")).is_err());
    }
}
