//! BizCard Core - interaction logic for the digital business card screen.
//!
//! Everything that turns sensor samples and gestures into visible state
//! changes lives here; rendering is left to the desktop crate.

pub mod config;
pub mod error;
pub mod gesture;
pub mod interaction;
pub mod orientation;
pub mod portfolio;
pub mod refresh;

pub use config::Config;
pub use error::{CardError, CardResult};
pub use gesture::{GestureRouter, TapOutcome, DOUBLE_TAP_WINDOW};
pub use interaction::{
    InteractionCore, InteractionState, OrientationSample, TiltState, TILT_SENSITIVITY,
};
pub use orientation::{
    NullOrientation, OrientationSource, ScriptedOrientation, SimulatedOrientation,
};
pub use refresh::{RefreshController, REFRESH_DURATION};
