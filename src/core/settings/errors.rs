use crate::core::viewport::viewport_transform::ViewportError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("iteration limit must be at least 1, got {0}")]
    NonPositiveIterationsLimit(i32),
    #[error("colour periodicity must be at least 1, got {0}")]
    NonPositiveColourPeriodicity(i32),
    #[error("fractal constant must be finite, got {real} + {imag}i")]
    NonFiniteConstant { real: f64, imag: f64 },
    #[error("orbit point must be finite, got {real} + {imag}i")]
    NonFiniteOrbitPoint { real: f64, imag: f64 },
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}
