//! Motion command value types and their interpolation math.
//!
//! A command describes a target state and a requested duration. Nothing else
//! is fixed until the command is activated by its channel: at that moment
//! [`Motion::begin`] captures the start snapshot, and every frame after that
//! [`Motion::apply`] drives the pose at a clamped progress value in [0, 1].
//!
//! Commands with degenerate parameters (look-at target at the camera
//! position, zero-length rotation axis) return `None` from `begin` and are
//! skipped as no-ops rather than propagating NaN into the pose.

use glam::{Quat, Vec3};

use crate::pose::Pose;

/// Squared-length threshold below which a direction is treated as zero.
const DEGENERATE_EPS: f32 = 1e-10;

/// Behavior shared by all six motion command kinds.
pub(crate) trait Motion {
    /// Snapshot captured once at activation.
    type Start;

    /// Requested duration in seconds.
    fn duration(&self) -> f32;

    /// Capture the start snapshot from the current pose.
    ///
    /// Returns `None` when the command is degenerate and must be skipped.
    fn begin(&self, pose: &Pose) -> Option<Self::Start>;

    /// Drive the pose at progress `t` in [0, 1].
    fn apply(&self, start: &Self::Start, pose: &mut Pose, t: f32);
}

/// Linear translation to a target position.
#[derive(Debug, Clone, Copy)]
pub struct Translate {
    /// Destination in world space.
    pub target: Vec3,
    /// Requested duration in seconds.
    pub duration: f32,
}

impl Motion for Translate {
    type Start = Vec3;

    fn duration(&self) -> f32 {
        self.duration
    }

    fn begin(&self, pose: &Pose) -> Option<Vec3> {
        Some(pose.position)
    }

    fn apply(&self, start: &Vec3, pose: &mut Pose, t: f32) {
        pose.position = start.lerp(self.target, t);
    }
}

/// Reorientation toward a target point.
///
/// The target front direction is captured once at activation and not
/// re-evaluated as the position moves; the front vector itself is
/// interpolated, not Euler angles.
#[derive(Debug, Clone, Copy)]
pub struct LookAt {
    /// Point to end up looking at.
    pub target: Vec3,
    /// Requested duration in seconds.
    pub duration: f32,
}

pub(crate) struct LookAtStart {
    from: Vec3,
    to: Vec3,
}

impl Motion for LookAt {
    type Start = LookAtStart;

    fn duration(&self) -> f32 {
        self.duration
    }

    fn begin(&self, pose: &Pose) -> Option<LookAtStart> {
        let direction = self.target - pose.position;
        if direction.length_squared() < DEGENERATE_EPS {
            // Looking at our own position has no defined direction.
            return None;
        }
        Some(LookAtStart {
            from: pose.front,
            to: direction.normalize(),
        })
    }

    fn apply(&self, start: &LookAtStart, pose: &mut Pose, t: f32) {
        // The lerp passes through zero when start and target are opposite;
        // fall back to the target direction in that case.
        pose.front = start.from.lerp(start.to, t).normalize_or(start.to);
        pose.orthonormalize();
    }
}

/// Orbit the view around a fixed pivot point.
///
/// The orbit axis is resolved at activation: the cross product of the
/// current front and the direction toward the pivot, sign-corrected to point
/// upward. The position sweeps around the pivot while the front tracks it.
/// A pivot at the camera position degenerates to a rotation in place about
/// the current up.
#[derive(Debug, Clone, Copy)]
pub struct OrbitPoint {
    /// Pivot point in world space.
    pub pivot: Vec3,
    /// Total sweep angle in radians.
    pub angle: f32,
    /// Requested duration in seconds.
    pub duration: f32,
}

pub(crate) struct OrbitPointStart {
    position: Vec3,
    front: Vec3,
    axis: Vec3,
    in_place: bool,
}

impl Motion for OrbitPoint {
    type Start = OrbitPointStart;

    fn duration(&self) -> f32 {
        self.duration
    }

    fn begin(&self, pose: &Pose) -> Option<OrbitPointStart> {
        let to_pivot = self.pivot - pose.position;
        if to_pivot.length_squared() < DEGENERATE_EPS {
            return Some(OrbitPointStart {
                position: pose.position,
                front: pose.front,
                axis: pose.up,
                in_place: true,
            });
        }
        // When front is parallel to the pivot direction the cross product
        // vanishes; the current up serves as the orbit axis instead.
        let mut axis = pose.front.cross(to_pivot.normalize()).normalize_or(pose.up);
        if axis.y < 0.0 {
            axis = -axis;
        }
        Some(OrbitPointStart {
            position: pose.position,
            front: pose.front,
            axis,
            in_place: false,
        })
    }

    fn apply(&self, start: &OrbitPointStart, pose: &mut Pose, t: f32) {
        let rotation = Quat::from_axis_angle(start.axis, self.angle * t);
        if start.in_place {
            pose.front = rotation * start.front;
        } else {
            let offset = start.position - self.pivot;
            pose.position = self.pivot + rotation * offset;
            let to_pivot = self.pivot - pose.position;
            pose.front = to_pivot.normalize_or(rotation * start.front);
        }
        pose.orthonormalize();
    }
}

/// Sweep the view direction around an arbitrary axis.
///
/// Orientation only: the position stays fixed while front rotates about the
/// axis. A zero-length axis skips the command.
#[derive(Debug, Clone, Copy)]
pub struct OrbitAxis {
    /// Rotation axis; need not be unit length.
    pub axis: Vec3,
    /// Total sweep angle in radians.
    pub angle: f32,
    /// Requested duration in seconds.
    pub duration: f32,
}

pub(crate) struct OrbitAxisStart {
    front: Vec3,
    axis: Vec3,
}

impl Motion for OrbitAxis {
    type Start = OrbitAxisStart;

    fn duration(&self) -> f32 {
        self.duration
    }

    fn begin(&self, pose: &Pose) -> Option<OrbitAxisStart> {
        if self.axis.length_squared() < DEGENERATE_EPS {
            return None;
        }
        Some(OrbitAxisStart {
            front: pose.front,
            axis: self.axis.normalize(),
        })
    }

    fn apply(&self, start: &OrbitAxisStart, pose: &mut Pose, t: f32) {
        let rotation = Quat::from_axis_angle(start.axis, self.angle * t);
        pose.front = rotation * start.front;
        pose.orthonormalize();
    }
}

/// Catmull-Rom flight path through four control points.
///
/// Position only; orientation is unaffected. The camera does not bank or
/// look along the tangent.
#[derive(Debug, Clone, Copy)]
pub struct SplinePath {
    /// Control points; the path passes through all four.
    pub points: [Vec3; 4],
    /// Requested duration in seconds.
    pub duration: f32,
}

impl Motion for SplinePath {
    type Start = ();

    fn duration(&self) -> f32 {
        self.duration
    }

    fn begin(&self, _pose: &Pose) -> Option<()> {
        Some(())
    }

    fn apply(&self, _start: &(), pose: &mut Pose, t: f32) {
        pose.position = gimbal_math::catmull_rom_path(&self.points, t);
    }
}

/// Cubic Bézier flight path. Position only, like [`SplinePath`].
#[derive(Debug, Clone, Copy)]
pub struct BezierPath {
    /// Control points; only the first and last lie on the path.
    pub points: [Vec3; 4],
    /// Requested duration in seconds.
    pub duration: f32,
}

impl Motion for BezierPath {
    type Start = ();

    fn duration(&self) -> f32 {
        self.duration
    }

    fn begin(&self, _pose: &Pose) -> Option<()> {
        Some(())
    }

    fn apply(&self, _start: &(), pose: &mut Pose, t: f32) {
        pose.position = if t >= 1.0 {
            // Snap to the final control point to avoid floating-point
            // overshoot at completion.
            self.points[3]
        } else {
            gimbal_math::cubic_bezier(&self.points, t)
        };
    }
}
