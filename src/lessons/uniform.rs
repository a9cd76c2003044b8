//! A triangle whose colour is set from the host every frame through a uniform.

use std::sync::Arc;

use glam::Vec4;

use crate::{
    abs::{Mesh, ShaderProgram},
    other::RenderContext,
    render::{geometry::TRIANGLE, shaders, transform::pulse},
};

pub struct UniformColor {
    mesh: Mesh,
    shader: ShaderProgram,
}

impl UniformColor {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, String> {
        Ok(Self {
            mesh: Mesh::new_arrays(gl, &TRIANGLE, glow::TRIANGLES)?,
            shader: shaders::program(gl, "uniform_color")?,
        })
    }
}

impl super::Lesson for UniformColor {
    fn render(&mut self, gl: &glow::Context, ctx: &RenderContext) {
        super::begin_frame(gl, ctx, false);
        self.shader.use_program();
        self.shader
            .set_uniform("ourColor", Vec4::new(0.0, pulse(ctx.elapsed), 0.0, 1.0));
        self.mesh.draw();
    }
}
