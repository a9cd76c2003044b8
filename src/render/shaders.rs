//! GLSL sources compiled into the binary.
//!
//! Every program lives in its own directory under `src/render/shaders/`, holding a
//! `vert.glsl` and a `frag.glsl`.

use std::sync::Arc;

use include_dir::{Dir, include_dir};

use crate::abs::ShaderProgram;

static SHADERS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/render/shaders");

fn source(name: &str, stage: &str) -> Result<&'static str, String> {
    let path = format!("{name}/{stage}.glsl");
    SHADERS
        .get_file(&path)
        .ok_or_else(|| format!("no embedded shader `{path}`"))?
        .contents_utf8()
        .ok_or_else(|| format!("shader `{path}` is not valid UTF-8"))
}

/// Returns the vertex and fragment source of the named program.
pub fn sources(name: &str) -> Result<(&'static str, &'static str), String> {
    Ok((source(name, "vert")?, source(name, "frag")?))
}

/// Compiles and links the named program.
pub fn program(gl: &Arc<glow::Context>, name: &str) -> Result<ShaderProgram, String> {
    let (vert, frag) = sources(name)?;
    ShaderProgram::from_sources(gl, vert, frag).map_err(|e| format!("shader `{name}`: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAMS: &[&str] = &[
        "coordinates",
        "textured",
        "transform",
        "triangle",
        "uniform_color",
        "vertex_color",
    ];

    #[test]
    fn test_all_programs_are_embedded() {
        for name in PROGRAMS {
            let (vert, frag) = sources(name).unwrap();
            assert!(vert.starts_with("#version 330 core"), "{name}");
            assert!(frag.starts_with("#version 330 core"), "{name}");
            assert!(vert.contains("gl_Position"), "{name}");
        }
    }

    #[test]
    fn test_missing_program() {
        let err = sources("lighting").unwrap_err();
        assert!(err.contains("lighting/vert.glsl"), "{err}");
    }

    #[test]
    fn test_uniform_names_match_lessons() {
        let (vert, _) = sources("coordinates").unwrap();
        for uniform in ["model", "view", "projection"] {
            assert!(vert.contains(&format!("uniform mat4 {uniform};")), "{uniform}");
        }
        let (_, frag) = sources("textured").unwrap();
        for uniform in ["texture1", "texture2", "mixValue"] {
            assert!(frag.contains(uniform), "{uniform}");
        }
    }
}
