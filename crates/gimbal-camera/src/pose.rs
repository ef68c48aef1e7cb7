//! Camera pose: position plus an orthonormal front/right/up basis.

use glam::Vec3;

/// Position and orientation basis of a camera.
///
/// `front` and `up` describe where the camera looks and which way is up;
/// `right` is always derived. `world_up` is a fixed reference that never
/// rotates; the basis is rebuilt against it after every mutation, so the
/// camera cannot accumulate roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position in world space.
    pub position: Vec3,
    /// Unit vector the camera looks along.
    pub front: Vec3,
    /// Unit vector pointing up from the camera, derived from `right × front`.
    pub up: Vec3,
    /// Unit vector pointing right, derived from `front × world_up`.
    pub right: Vec3,
    /// Fixed world-up reference.
    pub world_up: Vec3,
}

impl Pose {
    /// Create a pose at `position` looking down −Z with `world_up` as the
    /// up reference.
    #[must_use]
    pub fn new(position: Vec3, world_up: Vec3) -> Self {
        let mut pose = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: world_up.normalize_or(Vec3::Y),
        };
        pose.orthonormalize();
        pose
    }

    /// Rebuild `right` and `up` from `front` and `world_up`.
    ///
    /// Invariant afterwards: `front`, `right`, `up` are mutually orthogonal
    /// unit vectors. When `front` is parallel to `world_up` the cross
    /// product vanishes; the previous `right` is kept so the basis never
    /// degenerates to NaN.
    pub fn orthonormalize(&mut self) {
        self.front = self.front.normalize_or(Vec3::NEG_Z);
        self.right = self.front.cross(self.world_up).normalize_or(self.right);
        self.up = self.right.cross(self.front).normalize_or(self.up);
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y)
    }
}
