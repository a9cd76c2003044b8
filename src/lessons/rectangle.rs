//! A rectangle built from two triangles that share vertices through an element buffer.

use std::sync::Arc;

use crate::{
    abs::{Mesh, ShaderProgram},
    other::RenderContext,
    render::{
        geometry::{RECTANGLE, RECTANGLE_INDICES},
        shaders,
    },
};

pub struct HelloRectangle {
    mesh: Mesh,
    shader: ShaderProgram,
}

impl HelloRectangle {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, String> {
        Ok(Self {
            mesh: Mesh::new(gl, &RECTANGLE, &RECTANGLE_INDICES, glow::TRIANGLES)?,
            shader: shaders::program(gl, "triangle")?,
        })
    }
}

impl super::Lesson for HelloRectangle {
    fn render(&mut self, gl: &glow::Context, ctx: &RenderContext) {
        super::begin_frame(gl, ctx, false);
        self.shader.use_program();
        self.mesh.draw();
    }
}
