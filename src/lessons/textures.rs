//! A rectangle sampling two textures, blended by a factor the user controls with Up and Down.

use std::sync::Arc;

use sdl2::keyboard::Keycode;

use crate::{
    abs::{Mesh, ShaderProgram, Texture},
    other::{RenderContext, UpdateContext},
    render::{
        geometry::{RECTANGLE_INDICES, TEXTURED_RECTANGLE},
        shaders,
    },
};

/// How much the blend factor changes per second while a key is held.
const MIX_SPEED: f32 = 1.0;

/// Moves the blend factor towards the held direction, staying within `[0, 1]`.
fn adjust_mix(value: f32, up: bool, down: bool, delta_time: f32) -> f32 {
    let direction = up as i32 - down as i32;
    (value + direction as f32 * MIX_SPEED * delta_time).clamp(0.0, 1.0)
}

pub struct Textures {
    mesh: Mesh,
    shader: ShaderProgram,
    textures: [Texture; 2],
    mix_value: f32,
}

impl Textures {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, String> {
        let shader = shaders::program(gl, "textured")?;
        shader.use_program();
        shader.set_uniform("texture1", 0);
        shader.set_uniform("texture2", 1);
        Ok(Self {
            mesh: Mesh::new(gl, &TEXTURED_RECTANGLE, &RECTANGLE_INDICES, glow::TRIANGLES)?,
            shader,
            textures: super::tutorial_textures(gl)?,
            mix_value: 0.2,
        })
    }
}

impl super::Lesson for Textures {
    fn update(&mut self, ctx: &UpdateContext) {
        self.mix_value = adjust_mix(
            self.mix_value,
            ctx.keyboard.down.contains(&Keycode::Up),
            ctx.keyboard.down.contains(&Keycode::Down),
            ctx.delta_time,
        );
    }

    fn render(&mut self, gl: &glow::Context, ctx: &RenderContext) {
        super::begin_frame(gl, ctx, false);
        super::bind_textures(&self.textures);
        self.shader.use_program();
        self.shader.set_uniform("mixValue", self.mix_value);
        self.mesh.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_mix() {
        assert!((adjust_mix(0.2, true, false, 0.1) - 0.3).abs() < 1e-6);
        assert!((adjust_mix(0.2, false, true, 0.1) - 0.1).abs() < 1e-6);
        assert_eq!(adjust_mix(0.2, true, true, 0.1), 0.2);
        assert_eq!(adjust_mix(0.2, false, false, 0.1), 0.2);
    }

    #[test]
    fn test_adjust_mix_clamps() {
        assert_eq!(adjust_mix(0.95, true, false, 1.0), 1.0);
        assert_eq!(adjust_mix(0.05, false, true, 1.0), 0.0);
    }
}
