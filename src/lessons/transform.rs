//! The textured rectangle moved to a corner and spun with a matrix uniform.

use std::sync::Arc;

use crate::{
    abs::{Mesh, ShaderProgram, Texture},
    other::RenderContext,
    render::{
        geometry::{RECTANGLE_INDICES, TEXTURED_RECTANGLE},
        shaders,
        transform::spinning_quad,
    },
};

pub struct Transformations {
    mesh: Mesh,
    shader: ShaderProgram,
    textures: [Texture; 2],
}

impl Transformations {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, String> {
        let shader = shaders::program(gl, "transform")?;
        shader.use_program();
        shader.set_uniform("texture1", 0);
        shader.set_uniform("texture2", 1);
        Ok(Self {
            mesh: Mesh::new(gl, &TEXTURED_RECTANGLE, &RECTANGLE_INDICES, glow::TRIANGLES)?,
            shader,
            textures: super::tutorial_textures(gl)?,
        })
    }
}

impl super::Lesson for Transformations {
    fn render(&mut self, gl: &glow::Context, ctx: &RenderContext) {
        super::begin_frame(gl, ctx, false);
        super::bind_textures(&self.textures);
        self.shader.use_program();
        self.shader.set_uniform("transform", spinning_quad(ctx.elapsed));
        self.mesh.draw();
    }
}
