//! Configuration for the Gimbal camera engine.
//!
//! Settings persist to disk as RON, deserialize with per-field defaults for
//! forward/backward compatibility, and can be overridden from the command
//! line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CameraConfig, Config, DebugConfig, InputConfig, default_config_dir};
pub use error::ConfigError;
