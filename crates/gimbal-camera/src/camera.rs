//! The camera facade: enqueue methods, the per-frame update entry point,
//! matrix accessors, and direct (non-animated) input handlers.

use glam::{Mat4, Quat, Vec3};

use crate::channel::MotionChannel;
use crate::command::{BezierPath, LookAt, OrbitAxis, OrbitPoint, SplinePath, Translate};
use crate::pose::Pose;

/// Default movement speed in world units per second.
pub const DEFAULT_MOVE_SPEED: f32 = 2.5;
/// Default mouse-look sensitivity in degrees per input unit.
pub const DEFAULT_LOOK_SENSITIVITY: f32 = 0.1;
/// Pitch limit keeping the view off the poles.
const PITCH_LIMIT: f32 = 89.0_f32.to_radians();
/// Narrowest allowed vertical field of view.
const FOV_MIN: f32 = 1.0_f32.to_radians();
/// Widest allowed vertical field of view.
const FOV_MAX: f32 = 45.0_f32.to_radians();

/// Projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    /// Vertical field of view in radians, clamped to [1°, 45°].
    pub fov_y: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            fov_y: FOV_MAX,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Direct movement directions for [`Camera::apply_movement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
    /// Against `right`.
    Left,
    /// Along `right`.
    Right,
}

/// A camera whose pose is animated by queued motion commands.
///
/// Six independent FIFO channels hold pending commands, one per kind; a
/// translation and a rotation can run simultaneously, but never two
/// commands of the same kind. [`update`](Self::update) must be called once
/// per frame with the current (monotonic) time before reading matrices.
pub struct Camera {
    pose: Pose,
    lens: Lens,
    /// Speed for direct keyboard movement, world units per second.
    pub move_speed: f32,
    /// Mouse-look sensitivity, degrees per input unit.
    pub look_sensitivity: f32,
    spline: MotionChannel<SplinePath>,
    bezier: MotionChannel<BezierPath>,
    translate: MotionChannel<Translate>,
    orbit_point: MotionChannel<OrbitPoint>,
    orbit_axis: MotionChannel<OrbitAxis>,
    look_at: MotionChannel<LookAt>,
}

impl Camera {
    /// Create a camera at `position` looking down −Z with +Y world-up and
    /// default lens and speeds.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self::with_pose(Pose::new(position, Vec3::Y), Lens::default())
    }

    /// Create a camera from an explicit pose and lens.
    #[must_use]
    pub fn with_pose(pose: Pose, lens: Lens) -> Self {
        Self {
            pose,
            lens: Lens {
                fov_y: lens.fov_y.clamp(FOV_MIN, FOV_MAX),
                ..lens
            },
            move_speed: DEFAULT_MOVE_SPEED,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
            spline: MotionChannel::default(),
            bezier: MotionChannel::default(),
            translate: MotionChannel::default(),
            orbit_point: MotionChannel::default(),
            orbit_axis: MotionChannel::default(),
            look_at: MotionChannel::default(),
        }
    }

    // ── Enqueue operations ──────────────────────────────────────────

    /// Schedule a linear translation to `target` over `duration` seconds.
    pub fn enqueue_translate(&mut self, target: Vec3, duration: f32) {
        self.translate.enqueue(Translate { target, duration });
    }

    /// Schedule a reorientation toward `target` over `duration` seconds.
    pub fn enqueue_look_at(&mut self, target: Vec3, duration: f32) {
        self.look_at.enqueue(LookAt { target, duration });
    }

    /// Schedule an orbit of `angle` radians around `pivot` over `duration`
    /// seconds.
    pub fn enqueue_orbit_point(&mut self, pivot: Vec3, angle: f32, duration: f32) {
        self.orbit_point.enqueue(OrbitPoint {
            pivot,
            angle,
            duration,
        });
    }

    /// Schedule a view sweep of `angle` radians about `axis` over
    /// `duration` seconds.
    pub fn enqueue_orbit_axis(&mut self, axis: Vec3, angle: f32, duration: f32) {
        self.orbit_axis.enqueue(OrbitAxis {
            axis,
            angle,
            duration,
        });
    }

    /// Schedule a Catmull-Rom flight through `points` over `duration`
    /// seconds.
    pub fn enqueue_spline(&mut self, points: [Vec3; 4], duration: f32) {
        self.spline.enqueue(SplinePath { points, duration });
    }

    /// Schedule a cubic Bézier flight along `points` over `duration`
    /// seconds.
    pub fn enqueue_bezier(&mut self, points: [Vec3; 4], duration: f32) {
        self.bezier.enqueue(BezierPath { points, duration });
    }

    // ── Per-frame update ────────────────────────────────────────────

    /// Advance all motion channels to time `now` (seconds, monotonic).
    ///
    /// Channels run in a fixed order: curve paths first, then translation,
    /// the two orbits, and look-at. Each kind writes disjoint pose fields
    /// except position, which is last-writer-wins for overlapping
    /// position-controlling kinds.
    pub fn update(&mut self, now: f32) {
        self.spline.update(&mut self.pose, now);
        self.bezier.update(&mut self.pose, now);
        self.translate.update(&mut self.pose, now);
        self.orbit_point.update(&mut self.pose, now);
        self.orbit_axis.update(&mut self.pose, now);
        self.look_at.update(&mut self.pose, now);
        self.pose.orthonormalize();
    }

    /// True when every channel is idle with an empty queue.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.spline.is_idle()
            && self.bezier.is_idle()
            && self.translate.is_idle()
            && self.orbit_point.is_idle()
            && self.orbit_axis.is_idle()
            && self.look_at.is_idle()
    }

    /// Total number of commands still waiting across all queues.
    #[must_use]
    pub fn pending_commands(&self) -> usize {
        self.spline.pending()
            + self.bezier.pending()
            + self.translate.pending()
            + self.orbit_point.pending()
            + self.orbit_axis.pending()
            + self.look_at.pending()
    }

    // ── Matrices ────────────────────────────────────────────────────

    /// View matrix from the current pose. Valid after [`update`](Self::update)
    /// has run for the current frame.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.pose.position,
            self.pose.position + self.pose.front,
            self.pose.up,
        )
    }

    /// Perspective projection matrix for a viewport of `width` × `height`.
    #[must_use]
    pub fn projection_matrix(&self, width: f32, height: f32) -> Mat4 {
        Mat4::perspective_rh(self.lens.fov_y, width / height, self.lens.near, self.lens.far)
    }

    // ── Direct input handlers ───────────────────────────────────────

    /// Immediate translation along the basis, scaled by speed and elapsed
    /// time. Not queued.
    pub fn apply_movement(&mut self, direction: MoveDirection, dt: f32) {
        let velocity = self.move_speed * dt;
        match direction {
            MoveDirection::Forward => self.pose.position += self.pose.front * velocity,
            MoveDirection::Backward => self.pose.position -= self.pose.front * velocity,
            MoveDirection::Left => self.pose.position -= self.pose.right * velocity,
            MoveDirection::Right => self.pose.position += self.pose.right * velocity,
        }
    }

    /// Immediate mouse-look: `dx` yaws about `world_up`, `dy` pitches about
    /// `right`, both scaled by sensitivity. Pitch is clamped to ±89° so the
    /// view never flips over the poles.
    pub fn apply_mouse_look(&mut self, dx: f32, dy: f32) {
        let yaw = (-dx * self.look_sensitivity).to_radians();
        let pitch_delta = (dy * self.look_sensitivity).to_radians();

        let yawed = Quat::from_axis_angle(self.pose.world_up, yaw) * self.pose.front;

        // Clamp pitch relative to the horizon plane, not the raw delta, so
        // repeated small offsets cannot creep past the limit.
        let current_pitch = yawed.dot(self.pose.world_up).clamp(-1.0, 1.0).asin();
        let target_pitch = (current_pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        let right = yawed.cross(self.pose.world_up).normalize_or(self.pose.right);

        self.pose.front = Quat::from_axis_angle(right, target_pitch - current_pitch) * yawed;
        self.pose.orthonormalize();
    }

    /// Immediate zoom: `offset` narrows the field of view by that many
    /// degrees (scroll up zooms in), clamped to [1°, 45°].
    pub fn apply_scroll(&mut self, offset: f32) {
        self.lens.fov_y = (self.lens.fov_y - offset.to_radians()).clamp(FOV_MIN, FOV_MAX);
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    /// Current front vector.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.pose.front
    }

    /// Current up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.pose.up
    }

    /// Current right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.pose.right
    }

    /// The full pose.
    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// The projection parameters.
    #[must_use]
    pub fn lens(&self) -> &Lens {
        &self.lens
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fov_y_degrees(&self) -> f32 {
        self.lens.fov_y.to_degrees()
    }

    /// One-line human-readable pose summary for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        let p = self.pose.position;
        let f = self.pose.front;
        format!(
            "pos ({:.2}, {:.2}, {:.2}) front ({:.2}, {:.2}, {:.2}) fov {:.1}°",
            p.x,
            p.y,
            p.z,
            f.x,
            f.y,
            f.z,
            self.fov_y_degrees()
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(camera: &Camera) {
        let f = camera.front();
        let r = camera.right();
        let u = camera.up();
        assert!((f.length() - 1.0).abs() < EPS);
        assert!((r.length() - 1.0).abs() < EPS);
        assert!((u.length() - 1.0).abs() < EPS);
        assert!(f.dot(r).abs() < EPS);
        assert!(f.dot(u).abs() < EPS);
        assert!(r.dot(u).abs() < EPS);
    }

    #[test]
    fn test_zero_duration_translate_jumps_on_first_update() {
        let mut camera = Camera::at(Vec3::ZERO);
        camera.enqueue_translate(Vec3::new(0.0, 10.0, -10.0), 0.0);
        camera.update(0.016);
        let p = camera.position();
        assert_eq!(p, Vec3::new(0.0, 10.0, -10.0));
        assert!(p.is_finite());
        assert!(camera.is_idle());
    }

    #[test]
    fn test_translate_halfway_at_half_duration() {
        let mut camera = Camera::at(Vec3::ZERO);
        camera.enqueue_translate(Vec3::new(10.0, 0.0, 0.0), 2.0);
        camera.update(0.0);
        camera.update(1.0);
        assert!((camera.position() - Vec3::new(5.0, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_empty_queues_leave_pose_unchanged() {
        let mut camera = Camera::at(Vec3::new(1.0, 2.0, 3.0));
        let position = camera.position();
        let front = camera.front();
        for frame in 0..10 {
            camera.update(frame as f32 * 0.016);
        }
        assert_eq!(camera.position(), position);
        assert!((camera.front() - front).length() < EPS);
    }

    #[test]
    fn test_translate_and_look_at_run_concurrently() {
        let mut camera = Camera::at(Vec3::ZERO);
        camera.enqueue_translate(Vec3::new(0.0, 0.0, -10.0), 2.0);
        camera.enqueue_look_at(Vec3::new(100.0, 0.0, 0.0), 2.0);
        camera.update(0.0);
        camera.update(1.0);
        // Both kinds progressed in the same frames.
        assert!((camera.position().z + 5.0).abs() < EPS);
        assert!(camera.front().x > 0.1);
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_same_kind_commands_are_sequential() {
        let mut camera = Camera::at(Vec3::ZERO);
        camera.enqueue_translate(Vec3::new(1.0, 0.0, 0.0), 1.0);
        camera.enqueue_translate(Vec3::new(0.0, 1.0, 0.0), 1.0);
        camera.update(0.0);
        camera.update(0.5);
        // Second command still pending while the first is in flight.
        assert_eq!(camera.pending_commands(), 1);
        assert!((camera.position().y).abs() < EPS);
    }

    #[test]
    fn test_basis_orthonormal_after_command_mix() {
        let mut camera = Camera::at(Vec3::new(5.0, 2.0, 5.0));
        camera.enqueue_look_at(Vec3::new(0.0, 10.0, -10.0), 1.0);
        camera.enqueue_orbit_axis(Vec3::new(0.3, 1.0, 0.2), 2.0, 1.5);
        camera.enqueue_orbit_point(Vec3::ZERO, 1.0, 2.0);
        camera.enqueue_bezier(
            [
                Vec3::ZERO,
                Vec3::new(0.0, 5.0, 0.0),
                Vec3::new(5.0, 5.0, 0.0),
                Vec3::new(5.0, 0.0, 0.0),
            ],
            1.0,
        );
        let mut now = 0.0;
        while now < 6.0 {
            camera.update(now);
            assert_orthonormal(&camera);
            now += 0.05;
        }
        assert!(camera.is_idle());
    }

    #[test]
    fn test_look_at_final_front_points_at_target() {
        let mut camera = Camera::at(Vec3::ZERO);
        let target = Vec3::new(0.0, 10.0, 10.0);
        camera.enqueue_look_at(target, 5.0);
        camera.update(0.0);
        camera.update(5.0);
        let expected = target.normalize();
        assert!((camera.front() - expected).length() < 1e-3);
    }

    #[test]
    fn test_degenerate_look_at_is_noop() {
        let mut camera = Camera::at(Vec3::new(3.0, 3.0, 3.0));
        let front = camera.front();
        camera.enqueue_look_at(Vec3::new(3.0, 3.0, 3.0), 2.0);
        camera.update(0.0);
        assert!((camera.front() - front).length() < EPS);
        assert!(camera.is_idle());
    }

    #[test]
    fn test_degenerate_command_does_not_block_queue() {
        let mut camera = Camera::at(Vec3::ZERO);
        camera.enqueue_orbit_axis(Vec3::ZERO, 1.0, 1.0); // degenerate, skipped
        camera.enqueue_orbit_axis(Vec3::Y, std::f32::consts::PI, 1.0);
        camera.update(0.0);
        camera.update(1.0);
        // The second command ran: front reversed from −Z to +Z.
        assert!((camera.front() - Vec3::Z).length() < 1e-3);
    }

    #[test]
    fn test_mouse_look_pitch_clamps_at_89_degrees() {
        let mut camera = Camera::at(Vec3::ZERO);
        camera.look_sensitivity = 1.0; // 1° per unit for a direct mapping
        camera.apply_mouse_look(0.0, 85.0);
        camera.apply_mouse_look(0.0, 10.0); // raw pitch would reach 95°
        let max_y = 89.0_f32.to_radians().sin();
        assert!(camera.front().y <= max_y + EPS);
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_mouse_look_yaw_turns_right_for_positive_dx() {
        let mut camera = Camera::at(Vec3::ZERO);
        camera.look_sensitivity = 1.0;
        camera.apply_mouse_look(90.0, 0.0);
        // From −Z, a 90° right turn faces +X.
        assert!((camera.front() - Vec3::X).length() < 1e-3);
    }

    #[test]
    fn test_scroll_clamps_fov_at_both_bounds() {
        let mut camera = Camera::at(Vec3::ZERO);
        camera.apply_scroll(100.0);
        assert!((camera.fov_y_degrees() - 1.0).abs() < 1e-3);
        camera.apply_scroll(-100.0);
        assert!((camera.fov_y_degrees() - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_movement_follows_basis() {
        let mut camera = Camera::at(Vec3::ZERO);
        camera.move_speed = 2.0;
        camera.apply_movement(MoveDirection::Forward, 0.5);
        assert!((camera.position() - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
        camera.apply_movement(MoveDirection::Right, 0.5);
        assert!((camera.position() - Vec3::new(1.0, 0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn test_view_matrix_places_camera_at_origin_of_view_space() {
        let mut camera = Camera::at(Vec3::new(4.0, 5.0, 6.0));
        camera.update(0.0);
        let view = camera.view_matrix();
        let eye = view * camera.position().extend(1.0);
        assert!(eye.truncate().length() < 1e-4);
    }

    #[test]
    fn test_projection_matrix_uses_aspect() {
        let camera = Camera::at(Vec3::ZERO);
        let wide = camera.projection_matrix(1920.0, 1080.0);
        let square = camera.projection_matrix(1000.0, 1000.0);
        // x scale shrinks as the viewport widens.
        assert!(wide.col(0).x < square.col(0).x);
    }

    #[test]
    fn test_stalled_clock_freezes_animation() {
        let mut camera = Camera::at(Vec3::ZERO);
        camera.enqueue_translate(Vec3::new(10.0, 0.0, 0.0), 2.0);
        camera.update(1.0);
        camera.update(1.0);
        camera.update(1.0);
        // Elapsed time, not update count, drives interpolation.
        assert!(camera.position().x < EPS);
    }
}
