//! Headless demo: a scripted camera flight on a synthetic fixed-timestep
//! clock.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. The script drives the camera the same way a windowed application
//! would: synthetic key taps flow through the binding layer, scheduled
//! motions animate over simulated time, and the view and projection
//! matrices are read back once per frame.
//!
//! Run with `cargo run -p gimbal-demo`; add `--log-poses` to print the
//! active camera pose every frame.

mod bindings;

use bindings::CameraBindings;
use clap::Parser;
use gimbal_camera::{Camera, CameraRig, Lens, Pose};
use gimbal_config::{CliArgs, Config, default_config_dir};
use gimbal_input::{KeyboardState, MouseState, RawKeyEvent};
use glam::Vec3;
use tracing::info;
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Demo arguments: the engine CLI plus simulation length.
#[derive(Parser, Debug)]
#[command(name = "gimbal-demo", about = "Headless scripted camera flight")]
struct DemoArgs {
    #[command(flatten)]
    cli: CliArgs,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 1080)]
    frames: u32,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f32,
}

/// Key taps fired at fixed frames, mirroring an interactive session.
///
/// At 60 fps: the look-at eases out by frame 360, the spline lands at 450,
/// and the orbit started at 540 keeps the first camera busy while the
/// second camera flies the Bézier arc with an axis sweep layered on top
/// (different kinds, so they animate concurrently).
const KEY_SCRIPT: &[(u32, KeyCode)] = &[
    (0, KeyCode::KeyT),    // jump to (0, 10, −10), zero duration
    (30, KeyCode::KeyQ),   // snap look-at toward (0, 10, −10)
    (60, KeyCode::KeyE),   // ease look-at toward (0, 10, 10) over 5 s
    (90, KeyCode::KeyN),   // Catmull-Rom flight through the waypoints
    (540, KeyCode::KeyC),  // half orbit around the origin
    (560, KeyCode::Enter), // spawn a second camera
    (620, KeyCode::KeyV),  // axis sweep on the new camera
    (640, KeyCode::KeyB),  // Bézier arc, concurrent with the sweep
    (1010, KeyCode::Tab),  // back to the first camera
];

fn camera_from_config(config: &Config) -> Camera {
    let [x, y, z] = config.camera.start_position;
    let mut camera = Camera::with_pose(
        Pose::new(Vec3::new(x, y, z), Vec3::Y),
        Lens {
            fov_y: config.camera.fov_degrees.to_radians(),
            near: config.camera.near,
            far: config.camera.far,
        },
    );
    camera.move_speed = config.camera.move_speed;
    camera.look_sensitivity = config.input.look_sensitivity;
    camera
}

fn tap(keyboard: &mut KeyboardState, code: KeyCode) {
    for state in [ElementState::Pressed, ElementState::Released] {
        keyboard.process_raw(RawKeyEvent {
            key: PhysicalKey::Code(code),
            state,
            repeat: false,
        });
    }
}

fn main() {
    let args = DemoArgs::parse();

    // Resolve config directory, load or create config, apply CLI overrides.
    let config_dir = args.cli.config.clone().unwrap_or_else(default_config_dir);
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args.cli);

    let log_dir = config_dir.join("logs");
    gimbal_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(
        frames = args.frames,
        fps = args.fps,
        "starting scripted camera flight"
    );

    let mut rig = CameraRig::new(camera_from_config(&config));
    let mut keyboard = KeyboardState::new();
    let mut mouse = MouseState::new();
    let camera_bindings = CameraBindings {
        invert_y: config.input.invert_y,
    };

    let dt = 1.0 / args.fps;
    for frame in 0..args.frames {
        let now = frame as f32 * dt;

        // Scripted input for this frame.
        for &(at, code) in KEY_SCRIPT {
            if at == frame {
                tap(&mut keyboard, code);
            }
        }
        // Hold W for a second of forward movement after the spline lands.
        if frame == 460 {
            keyboard.process_raw(RawKeyEvent {
                key: PhysicalKey::Code(KeyCode::KeyW),
                state: ElementState::Pressed,
                repeat: false,
            });
        }
        if frame == 520 {
            keyboard.process_raw(RawKeyEvent {
                key: PhysicalKey::Code(KeyCode::KeyW),
                state: ElementState::Released,
                repeat: false,
            });
        }
        // A short mouse sweep and a zoom nudge on the second camera.
        if (570..600).contains(&frame) {
            mouse.on_raw_motion(4.0, -1.5);
        }
        if frame == 600 {
            mouse.on_scroll(winit::event::MouseScrollDelta::LineDelta(0.0, 2.0));
        }

        camera_bindings.apply(&keyboard, &mouse, &mut rig, dt, || {
            camera_from_config(&config)
        });
        rig.update_all(now);

        // Matrices are read exactly once per frame, after update.
        let view = rig.active().view_matrix();
        let projection = rig.active().projection_matrix(1280.0, 720.0);

        if config.debug.log_poses {
            info!(frame, "{}", rig.active().describe());
        } else if frame % 60 == 0 {
            let view_projection = projection * view;
            info!(
                frame,
                camera = rig.active_index(),
                pending = rig.active().pending_commands(),
                vp_w = ?view_projection.col(3).truncate(),
                "{}",
                rig.active().describe()
            );
        }

        keyboard.clear_transients();
        mouse.clear_transients();
    }

    info!(
        cameras = rig.len(),
        "flight complete: {}",
        rig.active().describe()
    );
}
