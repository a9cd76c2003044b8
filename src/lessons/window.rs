//! The first lesson: an empty window cleared to a solid colour.

use std::sync::Arc;

use crate::other::RenderContext;

pub struct HelloWindow;

impl HelloWindow {
    pub fn new(_gl: &Arc<glow::Context>) -> Result<Self, String> {
        Ok(Self)
    }
}

impl super::Lesson for HelloWindow {
    fn render(&mut self, gl: &glow::Context, ctx: &RenderContext) {
        super::begin_frame(gl, ctx, false);
    }
}
