//! Module providing the `Lesson` trait and all lesson implementations.
//!
//! Lessons follow the tutorial order, each one adding a single idea to the previous: clearing
//! the window, a first triangle, indexed drawing, uniforms, vertex colours, textures, matrix
//! transforms and finally perspective cubes.

use std::sync::Arc;

use glow::HasContext;
use sdl2::keyboard::Keycode;

use crate::{
    abs::{Texture, TextureOptions},
    other::{RenderContext, UpdateContext},
    render::textures::{awesome_face, container},
};

pub mod colors;
pub mod coordinates;
pub mod cubes;
pub mod rectangle;
pub mod textures;
pub mod transform;
pub mod triangle;
pub mod uniform;
pub mod window;

/// The Lesson trait defines the common interface for all lessons.
pub trait Lesson {
    /// Updates the lesson state.
    fn update(&mut self, _ctx: &UpdateContext) {}

    /// Renders the lesson.
    fn render(&mut self, gl: &glow::Context, ctx: &RenderContext);
}

/// Clears the frame with the configured colour and sets the depth test for the lesson.
fn begin_frame(gl: &glow::Context, ctx: &RenderContext, depth_test: bool) {
    unsafe {
        if depth_test {
            gl.enable(glow::DEPTH_TEST);
        } else {
            gl.disable(glow::DEPTH_TEST);
        }
        let color = ctx.clear_color;
        gl.clear_color(color.x, color.y, color.z, color.w);
        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
    }
}

/// Side length of the generated textures.
const TEXTURE_SIZE: u32 = 256;

/// Uploads the crate and face textures used from the textures lesson onwards.
fn tutorial_textures(gl: &Arc<glow::Context>) -> Result<[Texture; 2], String> {
    let options = TextureOptions::default();
    let crate_texture = Texture::new(gl, &container(TEXTURE_SIZE), &options)?;
    let face = Texture::new(gl, &awesome_face(TEXTURE_SIZE), &options)?;
    log::debug!(
        "Uploaded {}x{} and {}x{} textures",
        crate_texture.width(),
        crate_texture.height(),
        face.width(),
        face.height()
    );
    Ok([crate_texture, face])
}

/// Binds the textures to consecutive units starting at 0.
fn bind_textures(textures: &[Texture]) {
    for (unit, texture) in textures.iter().enumerate() {
        texture.bind(unit as u32);
    }
}

type BuildFn = fn(&Arc<glow::Context>) -> Result<Box<dyn Lesson>, String>;

/// A registered lesson.
pub struct LessonEntry {
    /// Short name used in the configuration.
    pub name: &'static str,
    /// Name shown in the window title.
    pub title: &'static str,
    build: BuildFn,
}

macro_rules! lesson {
    ($name:literal, $title:literal, $ty:ty) => {
        LessonEntry {
            name: $name,
            title: $title,
            build: |gl: &Arc<glow::Context>| -> Result<Box<dyn Lesson>, String> {
                Ok(Box::new(<$ty>::new(gl)?))
            },
        }
    };
}

/// All lessons, in tutorial order.
pub const LESSONS: &[LessonEntry] = &[
    lesson!("window", "Hello Window", window::HelloWindow),
    lesson!("triangle", "Hello Triangle", triangle::HelloTriangle),
    lesson!("rectangle", "Hello Rectangle", rectangle::HelloRectangle),
    lesson!("uniform", "Uniforms", uniform::UniformColor),
    lesson!("colors", "Vertex Colors", colors::VertexColors),
    lesson!("textures", "Textures", textures::Textures),
    lesson!("transform", "Transformations", transform::Transformations),
    lesson!("coordinates", "Coordinate Systems", coordinates::CoordinateSystems),
    lesson!("cubes", "Cubes", cubes::Cubes),
];

/// Returns the position of the named lesson in [`LESSONS`].
pub fn index_of(name: &str) -> Option<usize> {
    LESSONS.iter().position(|entry| entry.name == name)
}

/// A request to move to another lesson.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonSwitch {
    None,
    Next,
    Previous,
    Goto(usize),
}

impl LessonSwitch {
    /// Resolves the switch against the current lesson, `None` when nothing changes.
    ///
    /// Next and previous wrap around, out of range targets are ignored.
    pub fn target(self, current: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let target = match self {
            LessonSwitch::None => return None,
            LessonSwitch::Next => (current + 1) % len,
            LessonSwitch::Previous => (current + len - 1) % len,
            LessonSwitch::Goto(index) if index < len => index,
            LessonSwitch::Goto(_) => return None,
        };
        (target != current).then_some(target)
    }
}

/// Maps navigation keys to lesson switches.
pub fn switch_for_key(key: Keycode) -> LessonSwitch {
    match key {
        Keycode::Right | Keycode::PageDown => LessonSwitch::Next,
        Keycode::Left | Keycode::PageUp => LessonSwitch::Previous,
        Keycode::Num1 => LessonSwitch::Goto(0),
        Keycode::Num2 => LessonSwitch::Goto(1),
        Keycode::Num3 => LessonSwitch::Goto(2),
        Keycode::Num4 => LessonSwitch::Goto(3),
        Keycode::Num5 => LessonSwitch::Goto(4),
        Keycode::Num6 => LessonSwitch::Goto(5),
        Keycode::Num7 => LessonSwitch::Goto(6),
        Keycode::Num8 => LessonSwitch::Goto(7),
        Keycode::Num9 => LessonSwitch::Goto(8),
        _ => LessonSwitch::None,
    }
}

/// Resolves `switch` and replaces `current` with the lesson `build` makes for the target.
///
/// On a build error `current` and `index` are left as they were. Returns the new index when
/// the lesson changed.
fn switch_lesson<L>(
    current: &mut L,
    index: &mut usize,
    switch: LessonSwitch,
    len: usize,
    build: impl FnOnce(usize) -> Result<L, String>,
) -> Result<Option<usize>, String> {
    let Some(target) = switch.target(*index, len) else {
        return Ok(None);
    };
    // The old lesson is dropped here, releasing its GPU objects.
    *current = build(target)?;
    *index = target;
    Ok(Some(target))
}

/// Owns the lesson being shown and builds the next one on request.
pub struct LessonManager {
    gl: Arc<glow::Context>,
    index: usize,
    current: Box<dyn Lesson>,
}

impl LessonManager {
    /// Creates a new LessonManager showing the lesson at `start`.
    pub fn new(gl: &Arc<glow::Context>, start: usize) -> Result<Self, String> {
        let entry = LESSONS
            .get(start)
            .ok_or_else(|| format!("no lesson at index {start}"))?;
        let current = (entry.build)(gl).map_err(|e| format!("{}: {e}", entry.name))?;
        log::info!("Showing lesson {} ({})", start + 1, entry.title);
        Ok(Self {
            gl: Arc::clone(gl),
            index: start,
            current,
        })
    }

    /// The entry of the lesson being shown.
    pub fn entry(&self) -> &'static LessonEntry {
        &LESSONS[self.index]
    }

    /// Switches lessons. If the new lesson fails to build the current one is kept.
    pub fn apply(&mut self, switch: LessonSwitch) -> Result<(), String> {
        let gl = Arc::clone(&self.gl);
        let switched = switch_lesson(
            &mut self.current,
            &mut self.index,
            switch,
            LESSONS.len(),
            |target| {
                let entry = &LESSONS[target];
                (entry.build)(&gl).map_err(|e| format!("{}: {e}", entry.name))
            },
        )?;
        if let Some(target) = switched {
            log::info!("Showing lesson {} ({})", target + 1, LESSONS[target].title);
        }
        Ok(())
    }

    /// Updates the current lesson.
    pub fn update(&mut self, ctx: &UpdateContext) {
        self.current.update(ctx);
    }

    /// Renders the current lesson.
    pub fn render(&mut self, ctx: &RenderContext) {
        self.current.render(&self.gl, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_names_are_unique() {
        for (i, entry) in LESSONS.iter().enumerate() {
            assert_eq!(index_of(entry.name), Some(i));
        }
        assert_eq!(index_of("lighting"), None);
    }

    #[test]
    fn test_every_lesson_has_a_number_key() {
        let keys = [
            Keycode::Num1,
            Keycode::Num2,
            Keycode::Num3,
            Keycode::Num4,
            Keycode::Num5,
            Keycode::Num6,
            Keycode::Num7,
            Keycode::Num8,
            Keycode::Num9,
        ];
        assert_eq!(keys.len(), LESSONS.len());
        for (i, key) in keys.into_iter().enumerate() {
            assert_eq!(switch_for_key(key), LessonSwitch::Goto(i));
        }
        assert_eq!(switch_for_key(Keycode::Right), LessonSwitch::Next);
        assert_eq!(switch_for_key(Keycode::PageUp), LessonSwitch::Previous);
        assert_eq!(switch_for_key(Keycode::Space), LessonSwitch::None);
    }

    #[test]
    fn test_switch_wraps_around() {
        assert_eq!(LessonSwitch::Next.target(0, 9), Some(1));
        assert_eq!(LessonSwitch::Next.target(8, 9), Some(0));
        assert_eq!(LessonSwitch::Previous.target(0, 9), Some(8));
        assert_eq!(LessonSwitch::Previous.target(4, 9), Some(3));
    }

    #[test]
    fn test_switch_ignores_no_ops() {
        assert_eq!(LessonSwitch::None.target(3, 9), None);
        assert_eq!(LessonSwitch::Goto(3).target(3, 9), None);
        assert_eq!(LessonSwitch::Goto(9).target(3, 9), None);
        assert_eq!(LessonSwitch::Next.target(0, 1), None);
        assert_eq!(LessonSwitch::Next.target(0, 0), None);
    }

    #[test]
    fn test_failed_build_keeps_current_lesson() {
        let mut current = "rectangle";
        let mut index = 2;
        let result = switch_lesson(&mut current, &mut index, LessonSwitch::Next, 9, |_| {
            Err("shader failed to compile".to_string())
        });
        assert_eq!(result, Err("shader failed to compile".to_string()));
        assert_eq!(current, "rectangle");
        assert_eq!(index, 2);
    }

    #[test]
    fn test_successful_build_replaces_lesson() {
        let mut current = "rectangle".to_string();
        let mut index = 2;
        let result = switch_lesson(&mut current, &mut index, LessonSwitch::Goto(5), 9, |target| {
            Ok(LESSONS[target].name.to_string())
        });
        assert_eq!(result, Ok(Some(5)));
        assert_eq!(current, "textures");
        assert_eq!(index, 5);

        let result = switch_lesson(&mut current, &mut index, LessonSwitch::None, 9, |_| {
            panic!("nothing to build")
        });
        assert_eq!(result, Ok(None));
        assert_eq!(index, 5);
    }
}
