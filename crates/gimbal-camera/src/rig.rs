//! Multi-camera context: a collection of cameras with one active at a time.

use crate::camera::Camera;

/// Owns every camera in the application and tracks which one is active.
///
/// Input handlers and the render loop receive this explicitly instead of
/// reaching into globals. The rig always holds at least one camera.
pub struct CameraRig {
    cameras: Vec<Camera>,
    active: usize,
}

impl CameraRig {
    /// Create a rig with `initial` as the only (and active) camera.
    #[must_use]
    pub fn new(initial: Camera) -> Self {
        Self {
            cameras: vec![initial],
            active: 0,
        }
    }

    /// The active camera.
    #[must_use]
    pub fn active(&self) -> &Camera {
        &self.cameras[self.active]
    }

    /// The active camera, mutably.
    pub fn active_mut(&mut self) -> &mut Camera {
        &mut self.cameras[self.active]
    }

    /// Switch to the next camera, wrapping past the end.
    pub fn cycle(&mut self) {
        self.active = (self.active + 1) % self.cameras.len();
        tracing::debug!(active = self.active, "switched camera");
    }

    /// Add a camera and make it active. Returns its index.
    pub fn spawn(&mut self, camera: Camera) -> usize {
        self.cameras.push(camera);
        self.active = self.cameras.len() - 1;
        tracing::debug!(active = self.active, "spawned camera");
        self.active
    }

    /// Index of the active camera.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Number of cameras in the rig.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Always false; the rig holds at least one camera.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Advance every camera to time `now`. Inactive cameras keep animating
    /// so their queued flights stay on schedule.
    pub fn update_all(&mut self, now: f32) {
        for camera in &mut self.cameras {
            camera.update(now);
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_rig_starts_with_one_active_camera() {
        let rig = CameraRig::default();
        assert_eq!(rig.len(), 1);
        assert_eq!(rig.active_index(), 0);
        assert!(!rig.is_empty());
    }

    #[test]
    fn test_cycle_wraps_to_first() {
        let mut rig = CameraRig::new(Camera::at(Vec3::ZERO));
        rig.spawn(Camera::at(Vec3::X));
        rig.spawn(Camera::at(Vec3::Y));
        assert_eq!(rig.active_index(), 2);
        rig.cycle();
        assert_eq!(rig.active_index(), 0);
        rig.cycle();
        assert_eq!(rig.active_index(), 1);
    }

    #[test]
    fn test_spawn_activates_new_camera() {
        let mut rig = CameraRig::new(Camera::at(Vec3::ZERO));
        let index = rig.spawn(Camera::at(Vec3::new(0.0, 5.0, 3.0)));
        assert_eq!(index, 1);
        assert_eq!(rig.active_index(), 1);
        assert!((rig.active().position() - Vec3::new(0.0, 5.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn test_update_all_advances_inactive_cameras() {
        let mut rig = CameraRig::new(Camera::at(Vec3::ZERO));
        rig.active_mut()
            .enqueue_translate(Vec3::new(10.0, 0.0, 0.0), 1.0);
        rig.spawn(Camera::at(Vec3::ZERO)); // camera 0 is now inactive
        rig.update_all(0.0);
        rig.update_all(1.0);
        rig.cycle(); // back to camera 0
        assert!((rig.active().position().x - 10.0).abs() < 1e-5);
    }
}
