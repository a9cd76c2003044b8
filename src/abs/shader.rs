//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders.
//! This module also provides the [`Uniform`] trait for setting uniform variables in shader
//! programs.

use std::sync::Arc;

use glam::{Mat4, Vec4};
use glow::HasContext;

/// Returns a readable name for a shader stage.
fn stage_name(shader_type: u32) -> &'static str {
    match shader_type {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        glow::GEOMETRY_SHADER => "geometry",
        _ => "unknown",
    }
}

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(gl: &Arc<glow::Context>, shader_type: u32, source: &str) -> Result<Self, String> {
        unsafe {
            let shader = gl.create_shader(shader_type).map_err(|e| e.to_string())?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(format!(
                    "{} shader failed to compile: {}",
                    stage_name(shader_type),
                    log.trim_end()
                ));
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Represents a uniform variable in a shader program.
pub trait Uniform {
    /// Sets the value of the uniform variable at the given location.
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation);
}

impl Uniform for f32 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_1_f32(Some(location), *self);
        }
    }
}

impl Uniform for i32 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_1_i32(Some(location), *self);
        }
    }
}

impl Uniform for Vec4 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_4_f32(Some(location), self.x, self.y, self.z, self.w);
        }
    }
}

impl Uniform for Mat4 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            // glam is column-major like GLSL, no transpose needed.
            gl.uniform_matrix_4_f32_slice(Some(location), false, self.as_ref());
        }
    }
}

impl<T: Uniform> Uniform for &T {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        (*self).set_uniform(gl, location);
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, String> {
        unsafe {
            let program = gl.create_program().map_err(|e| e.to_string())?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(format!("program failed to link: {}", log.trim_end()));
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Compiles a vertex and a fragment shader and links them into a program.
    ///
    /// The intermediate shader objects are deleted once the program is linked.
    pub fn from_sources(
        gl: &Arc<glow::Context>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, String> {
        let vert = Shader::new(gl, glow::VERTEX_SHADER, vertex_source)?;
        let frag = Shader::new(gl, glow::FRAGMENT_SHADER, fragment_source)?;
        Self::new(gl, &[&vert, &frag])
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Sets a uniform variable in the shader program.
    ///
    /// The program must be in use. Uniforms the driver optimised away are skipped.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        let location = unsafe { self.gl.get_uniform_location(self.id, name) };
        match location {
            Some(loc) => value.set_uniform(&self.gl, &loc),
            None => log::trace!("uniform `{name}` is not active"),
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(stage_name(glow::VERTEX_SHADER), "vertex");
        assert_eq!(stage_name(glow::FRAGMENT_SHADER), "fragment");
        assert_eq!(stage_name(0), "unknown");
    }
}
