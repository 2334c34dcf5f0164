use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_algorithm::{FractalAlgorithm, escape_time, trace_path};

pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(0.233, 0.5378);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    constant: Complex,
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(constant: Complex) -> Self {
        Self { constant }
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.constant
    }

    pub fn set_constant(&mut self, constant: Complex) {
        self.constant = constant;
    }
}

impl Default for JuliaAlgorithm {
    fn default() -> Self {
        Self::new(DEFAULT_JULIA_CONSTANT)
    }
}

impl FractalAlgorithm for JuliaAlgorithm {
    #[inline]
    fn test_point(&self, point: Complex, max_iterations: i32) -> i32 {
        escape_time(point, self.constant, max_iterations)
    }

    fn path(&self, point: Complex, path: &mut [Complex]) -> usize {
        trace_path(point, self.constant, path)
    }
}
