//! Include-aware shader source reading.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const INCLUDE_DIRECTIVE: &str = "#include";

/// Reads a shader file and expands every `#include <relative-path>`
/// directive in place, recursively, relative to the including file's
/// directory.
///
/// Problems are recoverable by design: an unreadable file or a repeated
/// inclusion expands to empty text with a warning, and a directive with no
/// closing `>` stops include scanning for that file while keeping its
/// remaining text.  Each file is spliced at most once per load, so shared
/// headers pulled in from two places behave like they carry an include
/// guard.  The caller decides whether empty output is fatal.
pub fn load_shader_source(path: impl AsRef<Path>) -> String {
    let mut visited = HashSet::new();
    read_expanded(path.as_ref(), &mut visited)
}

fn read_expanded(file: &Path, visited: &mut HashSet<PathBuf>) -> String {
    let absolute = std::path::absolute(file).unwrap_or_else(|_| file.to_path_buf());
    if !visited.insert(absolute) {
        warn!("circular include detected: {}", file.display());
        return String::new();
    }

    let bytes = match fs::read(file) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("failed to open shader file {}: {err}", file.display());
            return String::new();
        }
    };
    let bytes = match bytes.strip_prefix(&UTF8_BOM) {
        Some(rest) => rest,
        None => &bytes[..],
    };
    let mut code = String::from_utf8_lossy(bytes).into_owned();

    let parent = file.parent().unwrap_or_else(|| Path::new("")).to_path_buf();

    let mut pos = 0;
    while let Some(found) = code[pos..].find(INCLUDE_DIRECTIVE) {
        pos += found;

        let Some(start) = code[pos..].find('<').map(|i| pos + i) else {
            break;
        };
        let Some(end) = code[start..].find('>').map(|i| start + i) else {
            break;
        };

        let include_path = parent.join(&code[start + 1..end]);
        let included = read_expanded(&include_path, visited);
        code.replace_range(pos..=end, &included);
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    /// Fresh fixture directory under the system temp dir.
    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("orbis_shader_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn expands_an_include_in_place() {
        let dir = fixture_dir("expand");
        fs::write(dir.join("lib.glsl"), "float half_of(float x) { return x * 0.5; }\n").unwrap();
        fs::write(dir.join("main.frag"), "// prelude\n#include <lib.glsl>\nvoid main() {}\n").unwrap();

        let expanded = load_shader_source(dir.join("main.frag"));
        assert_eq!(
            expanded,
            "// prelude\nfloat half_of(float x) { return x * 0.5; }\n\nvoid main() {}\n"
        );
    }

    #[test]
    fn includes_resolve_relative_to_the_including_file() {
        let dir = fixture_dir("relative");
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("sub/inner.glsl"), "inner").unwrap();
        fs::write(dir.join("sub/mid.glsl"), "#include <inner.glsl>").unwrap();
        fs::write(dir.join("top.vert"), "#include <sub/mid.glsl>").unwrap();

        assert_eq!(load_shader_source(dir.join("top.vert")), "inner");
    }

    #[test]
    fn mutual_inclusion_terminates_with_empty_reinclusion() {
        let dir = fixture_dir("cycle");
        fs::write(dir.join("a.glsl"), "A[#include <b.glsl>]").unwrap();
        fs::write(dir.join("b.glsl"), "B[#include <a.glsl>]").unwrap();

        // The re-encountered `a.glsl` resolves to empty text; no recursion.
        assert_eq!(load_shader_source(dir.join("a.glsl")), "A[B[]]");
    }

    #[test]
    fn a_shared_header_is_spliced_once_per_load() {
        let dir = fixture_dir("guard");
        fs::write(dir.join("common.glsl"), "C").unwrap();
        fs::write(dir.join("first.glsl"), "#include <common.glsl>").unwrap();
        fs::write(
            dir.join("main.vert"),
            "#include <first.glsl>|#include <common.glsl>",
        )
        .unwrap();

        assert_eq!(load_shader_source(dir.join("main.vert")), "C|");
    }

    #[test]
    fn missing_include_expands_to_empty_text() {
        let dir = fixture_dir("missing");
        fs::write(dir.join("main.frag"), "pre/#include <gone.glsl>/post").unwrap();

        assert_eq!(load_shader_source(dir.join("main.frag")), "pre//post");
    }

    #[test]
    fn malformed_directive_stops_scanning_without_failing() {
        let dir = fixture_dir("malformed");
        let text = "start\n#include <never-closed\nrest\n";
        fs::write(dir.join("main.frag"), text).unwrap();

        assert_eq!(load_shader_source(dir.join("main.frag")), text);
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let dir = fixture_dir("bom");
        let text = "void main() {}\n";
        let mut with_bom = UTF8_BOM.to_vec();
        with_bom.extend_from_slice(text.as_bytes());
        fs::write(dir.join("bom.vert"), &with_bom).unwrap();
        fs::write(dir.join("plain.vert"), text).unwrap();

        assert_eq!(
            load_shader_source(dir.join("bom.vert")),
            load_shader_source(dir.join("plain.vert"))
        );
    }

    #[test]
    fn unopenable_top_level_file_yields_empty_text() {
        let dir = fixture_dir("unopenable");
        assert_eq!(load_shader_source(dir.join("nope.vert")), "");
    }
}
