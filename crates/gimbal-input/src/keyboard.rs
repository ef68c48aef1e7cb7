//! Keyboard state tracker keyed by physical key codes.
//!
//! Camera bindings need two views of a key: held (continuous movement runs
//! every frame the key is down) and the release edge (a scheduled motion is
//! enqueued exactly once per press, on release, so holding a key does not
//! flood a queue). [`KeyboardState`] tracks both, plus the press edge.
//!
//! Physical keys are used throughout so movement keys sit in the same
//! physical position on every keyboard layout.

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Minimal key event, decoupled from winit for tests and scripted input.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The physical key involved.
    pub key: PhysicalKey,
    /// Pressed or released.
    pub state: ElementState,
    /// OS auto-repeat event; ignored by the tracker.
    pub repeat: bool,
}

/// Per-frame keyboard state.
///
/// Forward every event via [`process_event`](Self::process_event) (or
/// [`process_raw`](Self::process_raw) for synthetic input), query with the
/// accessors, and call [`clear_transients`](Self::clear_transients) at the
/// end of each frame.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<PhysicalKey>,
    pressed_this_frame: HashSet<PhysicalKey>,
    released_this_frame: HashSet<PhysicalKey>,
}

impl KeyboardState {
    /// A tracker with no keys down.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update state from a winit [`KeyEvent`].
    pub fn process_event(&mut self, event: &KeyEvent) {
        self.process_raw(RawKeyEvent {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        });
    }

    /// Update state from a [`RawKeyEvent`]. Repeat events are dropped so a
    /// held key produces exactly one press edge and one release edge.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                self.held.insert(event.key);
                self.pressed_this_frame.insert(event.key);
            }
            ElementState::Released => {
                self.held.remove(&event.key);
                self.released_this_frame.insert(event.key);
            }
        }
    }

    /// True while the key is held down.
    #[must_use]
    pub fn is_held(&self, key: PhysicalKey) -> bool {
        self.held.contains(&key)
    }

    /// True only during the frame the key went down.
    #[must_use]
    pub fn just_pressed(&self, key: PhysicalKey) -> bool {
        self.pressed_this_frame.contains(&key)
    }

    /// True only during the frame the key came up.
    #[must_use]
    pub fn just_released(&self, key: PhysicalKey) -> bool {
        self.released_this_frame.contains(&key)
    }

    /// Drop the per-frame edge sets. Call once at the end of each frame.
    pub fn clear_transients(&mut self) {
        self.pressed_this_frame.clear();
        self.released_this_frame.clear();
    }
}
