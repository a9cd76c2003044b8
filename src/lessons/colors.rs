//! A triangle with a colour per vertex, interpolated across the face.

use std::sync::Arc;

use crate::{
    abs::{Mesh, ShaderProgram},
    other::RenderContext,
    render::{geometry::COLOR_TRIANGLE, shaders},
};

pub struct VertexColors {
    mesh: Mesh,
    shader: ShaderProgram,
}

impl VertexColors {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, String> {
        Ok(Self {
            mesh: Mesh::new_arrays(gl, &COLOR_TRIANGLE, glow::TRIANGLES)?,
            shader: shaders::program(gl, "vertex_color")?,
        })
    }
}

impl super::Lesson for VertexColors {
    fn render(&mut self, gl: &glow::Context, ctx: &RenderContext) {
        super::begin_frame(gl, ctx, false);
        self.shader.use_program();
        self.mesh.draw();
    }
}
