//! Mouse state tracker: per-frame look deltas and scroll accumulation.
//!
//! The camera consumes the cursor movement delta (mouse look) and the
//! scroll wheel total (zoom) once per frame. Both accumulate across events
//! within a frame and reset on [`MouseState::clear_transients`].

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Per-frame mouse state.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    position: Vec2,
    delta: Vec2,
    scroll: f32,
    left_held: bool,
    right_held: bool,
    saw_first_position: bool,
}

impl MouseState {
    /// A tracker with everything zeroed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a `CursorMoved` position.
    ///
    /// The very first position only seeds the tracker; otherwise the jump
    /// from (0, 0) to wherever the cursor happens to be would arrive as one
    /// huge look delta.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let new_position = Vec2::new(x as f32, y as f32);
        if self.saw_first_position {
            self.delta += new_position - self.position;
        }
        self.position = new_position;
        self.saw_first_position = true;
    }

    /// Process a raw `DeviceEvent::MouseMotion` delta.
    pub fn on_raw_motion(&mut self, dx: f64, dy: f64) {
        self.delta += Vec2::new(dx as f32, dy as f32);
    }

    /// Process a `MouseInput` event.
    pub fn on_button(&mut self, button: MouseButton, state: ElementState) {
        let held = state == ElementState::Pressed;
        match button {
            MouseButton::Left => self.left_held = held,
            MouseButton::Right => self.right_held = held,
            _ => {}
        }
    }

    /// Process a `MouseWheel` event. Pixel deltas are normalized at
    /// ~40 px per line.
    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        match delta {
            MouseScrollDelta::LineDelta(_x, y) => self.scroll += y,
            MouseScrollDelta::PixelDelta(pos) => self.scroll += (pos.y / 40.0) as f32,
        }
    }

    /// Reset the per-frame delta and scroll. Call once at the end of each
    /// frame.
    pub fn clear_transients(&mut self) {
        self.delta = Vec2::ZERO;
        self.scroll = 0.0;
    }

    /// Cursor position in window coordinates.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Cursor movement accumulated this frame.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Scroll accumulated this frame, positive up.
    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Whether the left button is held.
    #[must_use]
    pub fn left_held(&self) -> bool {
        self.left_held
    }

    /// Whether the right button is held.
    #[must_use]
    pub fn right_held(&self) -> bool {
        self.right_held
    }
}
