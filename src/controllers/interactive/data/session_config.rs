use crate::core::data::complex::Complex;
use crate::core::fractals::julia::algorithm::DEFAULT_JULIA_CONSTANT;
use crate::core::settings::render_settings::{DEFAULT_COLOUR_PERIODICITY, DEFAULT_ITERATIONS_LIMIT};
use std::time::Duration;

pub const DEFAULT_VIEW_HALF_HEIGHT: f64 = 2.0;
pub const DEFAULT_DRAW_INTERVAL: Duration = Duration::from_millis(40);

/// Tunables for a fractal session. Values are validated when the session is
/// built, and again each time the default view is restored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub iterations_limit: i32,
    pub colour_periodicity: i32,
    pub constant: Complex,
    /// Half of the imaginary extent of the default view. The real extent is
    /// scaled by the surface aspect ratio.
    pub default_view_half_height: f64,
    /// Cadence of the frame pump.
    pub draw_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            iterations_limit: DEFAULT_ITERATIONS_LIMIT,
            colour_periodicity: DEFAULT_COLOUR_PERIODICITY,
            constant: DEFAULT_JULIA_CONSTANT,
            default_view_half_height: DEFAULT_VIEW_HALF_HEIGHT,
            draw_interval: DEFAULT_DRAW_INTERVAL,
        }
    }
}
