//! A single orange triangle drawn straight from a vertex buffer.

use std::sync::Arc;

use crate::{
    abs::{Mesh, ShaderProgram},
    other::RenderContext,
    render::{geometry::TRIANGLE, shaders},
};

pub struct HelloTriangle {
    mesh: Mesh,
    shader: ShaderProgram,
}

impl HelloTriangle {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, String> {
        Ok(Self {
            mesh: Mesh::new_arrays(gl, &TRIANGLE, glow::TRIANGLES)?,
            shader: shaders::program(gl, "triangle")?,
        })
    }
}

impl super::Lesson for HelloTriangle {
    fn render(&mut self, gl: &glow::Context, ctx: &RenderContext) {
        super::begin_frame(gl, ctx, false);
        self.shader.use_program();
        self.mesh.draw();
    }
}
