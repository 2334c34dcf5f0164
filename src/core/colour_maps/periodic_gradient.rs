use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourParams};
use crate::core::data::colour::Colour;
use crate::core::data::colour_mode::ColourMode;

/// Blue-to-white gradient repeated `periodicity` times across the iteration
/// range. Members and uncomputed pixels get the background colour.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodicGradient;

impl PeriodicGradient {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn position(iterations: i32, params: &ColourParams) -> f64 {
        let limit = i64::from(params.iterations_limit.max(1));
        let periodicity = i64::from(params.periodicity.max(1));

        ((i64::from(iterations) * periodicity) % limit) as f64 / limit as f64
    }

    fn gradient(t: f64) -> Colour {
        let r = (9.0 * (1.0 - t) * t * t * t * 255.0) as u8;
        let g = (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8;
        let b = (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8;

        Colour { r, g, b }
    }

    fn grey(t: f64) -> Colour {
        let v = (t * 255.0) as u8;
        Colour { r: v, g: v, b: v }
    }
}

impl ColourMap for PeriodicGradient {
    fn map(&self, iterations: i32, params: &ColourParams) -> Colour {
        let background = iterations < 0 || iterations >= params.iterations_limit;

        let colour = if background {
            Colour::BLACK
        } else {
            let t = Self::position(iterations, params);
            match params.mode {
                ColourMode::Monochrome => Self::grey(t),
                ColourMode::Colour | ColourMode::ColourInverted => Self::gradient(t),
            }
        };

        match params.mode {
            ColourMode::ColourInverted => colour.inverted(),
            ColourMode::Colour | ColourMode::Monochrome => colour,
        }
    }

    fn display_name(&self) -> &str {
        "Periodic blue-white gradient"
    }
}
