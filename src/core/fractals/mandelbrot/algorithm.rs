use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_algorithm::{FractalAlgorithm, escape_time, trace_path};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MandelbrotAlgorithm;

impl FractalAlgorithm for MandelbrotAlgorithm {
    #[inline]
    fn test_point(&self, point: Complex, max_iterations: i32) -> i32 {
        escape_time(point, point, max_iterations)
    }

    fn path(&self, point: Complex, path: &mut [Complex]) -> usize {
        trace_path(point, point, path)
    }
}
