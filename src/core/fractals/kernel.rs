use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_algorithm::FractalAlgorithm;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// The formula selected for one render pass, dispatched by variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalKernel {
    Mandelbrot(MandelbrotAlgorithm),
    Julia(JuliaAlgorithm),
}

impl FractalKernel {
    #[must_use]
    pub fn new(kind: FractalKinds, constant: Complex) -> Self {
        match kind {
            FractalKinds::Mandelbrot => Self::Mandelbrot(MandelbrotAlgorithm),
            FractalKinds::Julia => Self::Julia(JuliaAlgorithm::new(constant)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot(_) => FractalKinds::Mandelbrot,
            Self::Julia(_) => FractalKinds::Julia,
        }
    }

    /// No-op for formulas that do not read a constant.
    pub fn set_constant(&mut self, constant: Complex) {
        if let Self::Julia(algorithm) = self {
            algorithm.set_constant(constant);
        }
    }
}

impl FractalAlgorithm for FractalKernel {
    #[inline]
    fn test_point(&self, point: Complex, max_iterations: i32) -> i32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.test_point(point, max_iterations),
            Self::Julia(algorithm) => algorithm.test_point(point, max_iterations),
        }
    }

    fn path(&self, point: Complex, path: &mut [Complex]) -> usize {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.path(point, path),
            Self::Julia(algorithm) => algorithm.path(point, path),
        }
    }
}
