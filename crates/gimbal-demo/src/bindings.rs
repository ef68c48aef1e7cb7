//! Key bindings: maps input state to camera rig operations.
//!
//! Bindings are application policy, so they live here rather than in the
//! camera or input crates. Held movement keys run every frame; scheduled
//! motions are enqueued on the release edge so a held key enqueues exactly
//! one command.

use gimbal_camera::{Camera, CameraRig, MoveDirection};
use gimbal_input::{KeyboardState, MouseState};
use glam::Vec3;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Bezier demo arc: rises over the start point and descends onto the end.
const BEZIER_POINTS: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 3.0),
    Vec3::new(0.0, 8.0, 0.0),
    Vec3::new(8.0, 8.0, -3.0),
    Vec3::new(8.0, 0.0, -6.0),
];

/// Catmull-Rom demo flight through four waypoints.
const SPLINE_POINTS: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 3.0),
    Vec3::new(-5.0, 3.0, 0.0),
    Vec3::new(0.0, 6.0, -5.0),
    Vec3::new(5.0, 3.0, -10.0),
];

/// Per-application binding configuration.
pub struct CameraBindings {
    /// Flip the vertical look axis.
    pub invert_y: bool,
}

impl CameraBindings {
    /// Apply one frame of input to the rig.
    ///
    /// `spawn_camera` builds a camera from the application's configured
    /// defaults; it is only invoked when the spawn key fires.
    pub fn apply<F>(
        &self,
        keyboard: &KeyboardState,
        mouse: &MouseState,
        rig: &mut CameraRig,
        dt: f32,
        spawn_camera: F,
    ) where
        F: FnOnce() -> Camera,
    {
        // Rig management first: a spawned camera becomes the active one and
        // receives the rest of this frame's input.
        if released(keyboard, KeyCode::Enter) {
            rig.spawn(spawn_camera());
        }
        if released(keyboard, KeyCode::Tab) {
            rig.cycle();
        }

        let camera = rig.active_mut();

        // Continuous movement while held.
        if held(keyboard, KeyCode::KeyW) {
            camera.apply_movement(MoveDirection::Forward, dt);
        }
        if held(keyboard, KeyCode::KeyS) {
            camera.apply_movement(MoveDirection::Backward, dt);
        }
        if held(keyboard, KeyCode::KeyA) {
            camera.apply_movement(MoveDirection::Left, dt);
        }
        if held(keyboard, KeyCode::KeyD) {
            camera.apply_movement(MoveDirection::Right, dt);
        }

        // Mouse look and zoom.
        let delta = mouse.delta();
        if delta != glam::Vec2::ZERO {
            // Screen y grows downward; moving the mouse up pitches up.
            let dy = if self.invert_y { delta.y } else { -delta.y };
            camera.apply_mouse_look(delta.x, dy);
        }
        if mouse.scroll() != 0.0 {
            camera.apply_scroll(mouse.scroll());
        }

        // Scheduled motions, one command per release edge.
        if released(keyboard, KeyCode::KeyQ) {
            camera.enqueue_look_at(Vec3::new(0.0, 10.0, -10.0), 0.0);
        }
        if released(keyboard, KeyCode::KeyE) {
            camera.enqueue_look_at(Vec3::new(0.0, 10.0, 10.0), 5.0);
        }
        if released(keyboard, KeyCode::KeyR) {
            camera.enqueue_look_at(Vec3::new(5.0, 5.0, 5.0), 8.0);
        }
        if released(keyboard, KeyCode::KeyT) {
            camera.enqueue_translate(Vec3::new(0.0, 10.0, -10.0), 0.0);
        }
        if released(keyboard, KeyCode::KeyY) {
            camera.enqueue_translate(Vec3::new(0.0, 10.0, 10.0), 5.0);
        }
        if released(keyboard, KeyCode::KeyU) {
            camera.enqueue_translate(Vec3::new(5.0, 5.0, 5.0), 8.0);
        }
        if released(keyboard, KeyCode::KeyC) {
            camera.enqueue_orbit_point(Vec3::ZERO, std::f32::consts::PI, 6.0);
        }
        if released(keyboard, KeyCode::KeyV) {
            camera.enqueue_orbit_axis(Vec3::Y, std::f32::consts::PI, 4.0);
        }
        if released(keyboard, KeyCode::KeyB) {
            camera.enqueue_bezier(BEZIER_POINTS, 6.0);
        }
        if released(keyboard, KeyCode::KeyN) {
            camera.enqueue_spline(SPLINE_POINTS, 6.0);
        }
    }
}

fn held(keyboard: &KeyboardState, code: KeyCode) -> bool {
    keyboard.is_held(PhysicalKey::Code(code))
}

fn released(keyboard: &KeyboardState, code: KeyCode) -> bool {
    keyboard.just_released(PhysicalKey::Code(code))
}
