use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::fractal_algorithm::FractalAlgorithm;
use crate::core::fractals::kernel::FractalKernel;
use crate::core::settings::render_settings::RenderSettings;
use crate::core::viewport::viewport_transform::ViewportTransform;
use log::debug;

/// Capacity of the orbit path buffer.
pub const MAX_ORBIT_POINTS: usize = 400;

/// An orbit in pixel space, ready to be drawn as a polyline from `start`
/// through every entry of `points`. Pixels may lie outside the frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrbitPath {
    pub start: Point,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct OrbitKey {
    point: Complex,
    bottom_left: Complex,
    kernel: FractalKernel,
}

/// Caches the orbit of the selected point, owned by one session.
#[derive(Debug)]
pub struct OrbitTracer {
    path_buffer: Vec<Complex>,
    key: Option<OrbitKey>,
    orbit: OrbitPath,
    recomputations: u64,
}

impl Default for OrbitTracer {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitTracer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            path_buffer: vec![Complex::ZERO; MAX_ORBIT_POINTS],
            key: None,
            orbit: OrbitPath::default(),
            recomputations: 0,
        }
    }

    /// Returns the orbit of the settings' orbit point, recomputing it only
    /// when that point, the viewport's lower left corner or the formula
    /// changed since the last call.
    pub fn ensure_orbit(
        &mut self,
        settings: &RenderSettings,
        viewport: &ViewportTransform,
    ) -> &OrbitPath {
        let key = OrbitKey {
            point: settings.orbit_point(),
            bottom_left: viewport.bottom_left(),
            kernel: FractalKernel::new(settings.fractal_kind(), settings.constant()),
        };

        if self.key != Some(key) {
            self.recompute(key, viewport);
        }

        &self.orbit
    }

    /// How many times the orbit has been recomputed.
    #[must_use]
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    fn recompute(&mut self, key: OrbitKey, viewport: &ViewportTransform) {
        let written = key.kernel.path(key.point, &mut self.path_buffer);

        self.orbit.start = viewport.complex_to_pixel(key.point);
        self.orbit.points.clear();
        self.orbit.points.extend(
            self.path_buffer[..written]
                .iter()
                .map(|&z| viewport.complex_to_pixel(z)),
        );

        self.key = Some(key);
        self.recomputations += 1;

        debug!(
            "orbit recomputed: {} points from ({}, {})",
            written, key.point.real, key.point.imag
        );
    }
}
