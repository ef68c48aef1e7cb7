//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Gimbal command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "gimbal", about = "Gimbal camera animation engine")]
pub struct CliArgs {
    /// Vertical field of view in degrees.
    #[arg(long)]
    pub fov: Option<f32>,

    /// Keyboard movement speed in world units per second.
    #[arg(long)]
    pub move_speed: Option<f32>,

    /// Mouse-look sensitivity in degrees per input unit.
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log the active camera pose every frame.
    #[arg(long)]
    pub log_poses: bool,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(fov) = args.fov {
            self.camera.fov_degrees = fov;
        }
        if let Some(speed) = args.move_speed {
            self.camera.move_speed = speed;
        }
        if let Some(sensitivity) = args.sensitivity {
            self.input.look_sensitivity = sensitivity;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if args.log_poses {
            self.debug.log_poses = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            fov: Some(30.0),
            move_speed: None,
            sensitivity: Some(0.25),
            log_level: None,
            log_poses: true,
            config: None,
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.camera.fov_degrees, 30.0);
        assert_eq!(config.input.look_sensitivity, 0.25);
        assert!(config.debug.log_poses);
        // Non-overridden fields retain defaults
        assert_eq!(config.camera.move_speed, 2.5);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }
}
