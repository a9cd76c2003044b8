//! Ten textured cubes scattered in front of the camera, each tilted by its index.

use std::sync::Arc;

use crate::{
    abs::{Mesh, ShaderProgram, Texture},
    other::RenderContext,
    render::{
        geometry::{CUBE, CUBE_POSITIONS},
        shaders,
        transform::{camera_view, cube_model, projection},
    },
};

pub struct Cubes {
    mesh: Mesh,
    shader: ShaderProgram,
    textures: [Texture; 2],
}

impl Cubes {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, String> {
        let shader = shaders::program(gl, "coordinates")?;
        shader.use_program();
        shader.set_uniform("texture1", 0);
        shader.set_uniform("texture2", 1);
        Ok(Self {
            mesh: Mesh::new_arrays(gl, &CUBE, glow::TRIANGLES)?,
            shader,
            textures: super::tutorial_textures(gl)?,
        })
    }
}

impl super::Lesson for Cubes {
    fn render(&mut self, gl: &glow::Context, ctx: &RenderContext) {
        super::begin_frame(gl, ctx, true);
        super::bind_textures(&self.textures);
        self.shader.use_program();
        self.shader.set_uniform("view", camera_view());
        self.shader
            .set_uniform("projection", projection(ctx.fov_degrees, ctx.aspect));
        for (i, position) in CUBE_POSITIONS.iter().enumerate() {
            self.shader.set_uniform("model", cube_model(i, *position));
            self.mesh.draw();
        }
    }
}
