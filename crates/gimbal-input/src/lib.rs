//! Frame-coherent input state over winit event types.
//!
//! No window is created here: the application forwards events in, queries
//! state once per frame, and clears transients at frame end. Key bindings
//! are application policy and live with the application, not here.

pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyboardState, RawKeyEvent};
pub use mouse::MouseState;
