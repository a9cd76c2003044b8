//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use glow::HasContext;

use crate::config::WindowSettings;

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates a new [`App`] instance from the given window settings.
    /// The width and height are ignored if `fullscreen` is set to `true`.
    pub fn new(settings: &WindowSettings) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        let (width, height) = if settings.fullscreen {
            let display_mode = video_subsystem.current_display_mode(0)?;
            (display_mode.w as u32, display_mode.h as u32)
        } else {
            (settings.width, settings.height)
        };
        let mut window = video_subsystem
            .window(&settings.title, width, height)
            .opengl()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;
        window.set_fullscreen(if settings.fullscreen {
            sdl2::video::FullscreenType::Desktop
        } else {
            sdl2::video::FullscreenType::Off
        })?;
        let gl_context = window.gl_create_context()?;
        window.gl_make_current(&gl_context)?;
        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        video_subsystem.gl_set_swap_interval(if settings.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        })?;
        let event_pump = sdl.event_pump()?;
        let gl = Arc::new(gl);

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
        })
    }

    /// Returns the size of the drawable area in pixels.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }

    /// Logs the driver version and vertex attribute limit.
    pub fn log_gl_info(&self) {
        unsafe {
            log::info!(
                "OpenGL version: {}",
                self.gl.get_parameter_string(glow::VERSION)
            );
            log::info!(
                "OpenGL renderer: {}",
                self.gl.get_parameter_string(glow::RENDERER)
            );
            log::info!(
                "Maximum vertex attributes: {}",
                self.gl.get_parameter_i32(glow::MAX_VERTEX_ATTRIBS)
            );
        }
    }
}
