use std::{collections::HashSet, time::Instant};

use glam::Vec4;
use sdl2::keyboard::Keycode;

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
}

impl KeyboardState {
    /// Forgets last frame's presses. Keys held down stay down.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }

    /// Records a key press. Auto-repeated presses are ignored.
    pub fn key_down(&mut self, key: Keycode, repeat: bool) {
        if repeat {
            return;
        }
        self.down.insert(key);
        self.pressed.insert(key);
    }

    /// Records a key release.
    pub fn key_up(&mut self, key: Keycode) {
        self.down.remove(&key);
    }
}

/// Context provided to lessons during the update phase.
pub struct UpdateContext<'a> {
    pub keyboard: &'a KeyboardState,
    pub delta_time: f32,
}

impl<'a> UpdateContext<'a> {
    /// Creates a new `UpdateContext` from the given keyboard state and frame time.
    pub fn new(keyboard: &'a KeyboardState, delta_time: f32) -> Self {
        Self {
            keyboard,
            delta_time,
        }
    }
}

/// Context provided to lessons during the render phase.
pub struct RenderContext {
    pub elapsed: f32,
    pub aspect: f32,
    pub fov_degrees: f32,
    pub clear_color: Vec4,
}

/// Measures time between frames.
pub struct FrameTimer {
    start: Instant,
    last: Instant,
    delta: f32,
}

impl FrameTimer {
    pub fn new(now: Instant) -> Self {
        Self {
            start: now,
            last: now,
            delta: 0.0,
        }
    }

    /// Advances to the frame starting at `now` and returns the previous frame's duration.
    pub fn tick(&mut self, now: Instant) -> f32 {
        self.delta = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        self.delta
    }

    /// Seconds between the timer's creation and the last tick.
    pub fn elapsed(&self) -> f32 {
        self.last.duration_since(self.start).as_secs_f32()
    }

    /// Frames per second of the last frame, `0.0` before any time has passed.
    pub fn fps(&self) -> f32 {
        if self.delta > 0.0 { 1.0 / self.delta } else { 0.0 }
    }
}

/// Formats the window title shown while a lesson runs.
pub fn window_title(base: &str, lesson: &str, fps: f32) -> String {
    format!("{base} - {lesson} - FPS: {fps:.2}")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_keyboard_edges() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Keycode::Up, false);
        assert!(keyboard.down.contains(&Keycode::Up));
        assert!(keyboard.pressed.contains(&Keycode::Up));

        keyboard.begin_frame();
        assert!(keyboard.down.contains(&Keycode::Up));
        assert!(keyboard.pressed.is_empty());

        keyboard.key_down(Keycode::Up, true);
        assert!(keyboard.pressed.is_empty());

        keyboard.key_up(Keycode::Up);
        assert!(keyboard.down.is_empty());
    }

    #[test]
    fn test_frame_timer() {
        let start = Instant::now();
        let mut timer = FrameTimer::new(start);
        assert_eq!(timer.fps(), 0.0);

        let delta = timer.tick(start + Duration::from_millis(20));
        assert!((delta - 0.02).abs() < 1e-6);
        assert!((timer.fps() - 50.0).abs() < 1e-3);

        let delta = timer.tick(start + Duration::from_millis(45));
        assert!((delta - 0.025).abs() < 1e-6);
        assert!((timer.elapsed() - 0.045).abs() < 1e-6);
    }

    #[test]
    fn test_frame_timer_same_instant() {
        let start = Instant::now();
        let mut timer = FrameTimer::new(start);
        assert_eq!(timer.tick(start), 0.0);
        assert_eq!(timer.fps(), 0.0);
    }

    #[test]
    fn test_window_title() {
        assert_eq!(
            window_title("LearnOpenGL", "Cubes", 59.941),
            "LearnOpenGL - Cubes - FPS: 59.94"
        );
    }
}
