//! Parametric curve evaluation for camera paths.

mod curve;

pub use curve::{catmull_rom, catmull_rom_path, cubic_bezier};
