use std::{path::PathBuf, time::Instant};

use glam::Vec4;
use glow::HasContext;
use sdl2::{event::Event, event::WindowEvent, keyboard::Keycode};

use crate::{
    abs::App,
    config::Config,
    lessons::{LessonManager, switch_for_key},
    other::{FrameTimer, KeyboardState, RenderContext, UpdateContext, window_title},
    render::transform::aspect_ratio,
};

mod abs;
mod config;
mod lessons;
mod logging;
mod other;
mod render;

fn main() {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref());

    let (level, log_file) = match &config {
        Ok(config) => (
            config.level_filter().unwrap_or(log::LevelFilter::Info),
            config.log_file.as_deref(),
        ),
        Err(_) => (log::LevelFilter::Info, None),
    };
    if let Err(e) = logging::init(level, log_file) {
        eprintln!("Failed to initialise logging: {e}");
    }

    let result = config.and_then(run);
    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), String> {
    let mut app = App::new(&config.window)?;
    app.log_gl_info();

    let mut aspect = fit_viewport(&app);

    let start = lessons::index_of(&config.start_lesson)
        .ok_or_else(|| format!("unknown lesson `{}`", config.start_lesson))?;
    let mut lessons = LessonManager::new(&app.gl, start)?;

    let mut keyboard = KeyboardState::default();
    let mut timer = FrameTimer::new(Instant::now());
    let mut wireframe = false;

    'running: loop {
        let delta_time = timer.tick(Instant::now());

        app.window
            .set_title(&window_title(
                &config.window.title,
                lessons.entry().title,
                timer.fps(),
            ))
            .map_err(|e| e.to_string())?;

        keyboard.begin_frame();
        let mut resized = false;
        for event in app.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::Window {
                    win_event: WindowEvent::Resized(..) | WindowEvent::SizeChanged(..),
                    ..
                } => resized = true,
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat,
                    ..
                } => keyboard.key_down(keycode, repeat),
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => keyboard.key_up(keycode),
                _ => {}
            }
        }

        if resized {
            aspect = fit_viewport(&app);
        }

        if keyboard.pressed.contains(&Keycode::W) {
            wireframe = !wireframe;
            unsafe {
                app.gl.polygon_mode(
                    glow::FRONT_AND_BACK,
                    if wireframe { glow::LINE } else { glow::FILL },
                );
            }
        }
        for key in &keyboard.pressed {
            if let Err(e) = lessons.apply(switch_for_key(*key)) {
                log::warn!("Failed to switch lesson: {e}");
            }
        }

        let update_ctx = UpdateContext::new(&keyboard, delta_time);
        lessons.update(&update_ctx);

        lessons.render(&RenderContext {
            elapsed: timer.elapsed(),
            aspect,
            fov_degrees: config.fov_degrees,
            clear_color: Vec4::from_array(config.clear_color),
        });
        app.window.gl_swap_window();
    }

    Ok(())
}

/// Sets the viewport to the drawable size and returns its aspect ratio.
///
/// Resize events carry the window size in screen coordinates, not pixels.
fn fit_viewport(app: &App) -> f32 {
    let (width, height) = app.drawable_size();
    unsafe {
        app.gl.viewport(0, 0, width as i32, height as i32);
    }
    aspect_ratio(width, height)
}
