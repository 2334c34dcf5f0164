//! Interactive controller for progressive fractal rendering.
//!
//! A [`FractalSession`] owns the settings of one drawing surface and the
//! [`ProgressiveRenderer`] working on them. The shell feeds it gestures and
//! settings changes, and either draws on its own timer through
//! [`FractalSession::draw_into`] or lets a [`FramePump`] push frames to a
//! [`ports::presenter_port::PresenterPort`].

pub mod data;
pub mod errors;
pub mod events;
mod frame_pump;
pub mod ports;
mod progressive_renderer;
mod session;
#[cfg(test)]
mod test_support;

pub use frame_pump::FramePump;
pub use progressive_renderer::ProgressiveRenderer;
pub use session::FractalSession;
