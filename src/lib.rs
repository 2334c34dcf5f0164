pub mod controllers;
pub mod core;

pub use crate::controllers::interactive::data::gesture_delta::GestureDelta;
pub use crate::controllers::interactive::data::session_config::SessionConfig;
pub use crate::controllers::interactive::errors::session_error::SessionError;
pub use crate::controllers::interactive::{FractalSession, FramePump, ProgressiveRenderer};
pub use crate::core::data::complex::Complex;
pub use crate::core::fractals::fractal_kinds::FractalKinds;
