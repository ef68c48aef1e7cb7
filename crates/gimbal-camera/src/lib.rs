//! Camera animation core: queued motion commands advance a camera pose over
//! time, exposed as view/projection matrices once per frame.
//!
//! Six command kinds (translate, look-at, orbit about point, orbit about
//! axis, Catmull-Rom path, Bézier path) each run through an independent FIFO
//! channel; kinds animate concurrently with each other, but never two
//! commands of the same kind. Time is injected into [`Camera::update`] so
//! callers own the clock.

pub mod camera;
mod channel;
pub mod command;
pub mod pose;
pub mod rig;

pub use camera::{Camera, Lens, MoveDirection};
pub use command::{BezierPath, LookAt, OrbitAxis, OrbitPoint, SplinePath, Translate};
pub use pose::Pose;
pub use rig::CameraRig;
