use crate::core::data::complex::Complex;

/// Escape radius squared. A point escapes once `|z|² > 4`.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

pub trait FractalAlgorithm {
    /// Number of recurrence steps applied before `|z|²` exceeds the escape
    /// radius, or `max_iterations` if it never does.
    fn test_point(&self, point: Complex, max_iterations: i32) -> i32;

    /// Writes each visited `z` into `path`, stopping on escape or when the
    /// buffer is full. Returns the number of entries written.
    fn path(&self, point: Complex, path: &mut [Complex]) -> usize;
}

/// Shared loop for every `z ← z² + c` formula starting at `start`.
#[inline]
pub(crate) fn escape_time(start: Complex, constant: Complex, max_iterations: i32) -> i32 {
    let mut z = start;
    let mut iterations = 0;

    while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && iterations < max_iterations {
        z = z * z + constant;
        iterations += 1;
    }

    iterations
}

pub(crate) fn trace_path(start: Complex, constant: Complex, path: &mut [Complex]) -> usize {
    let mut z = start;
    let mut written = 0;

    for slot in path.iter_mut() {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            break;
        }
        z = z * z + constant;
        *slot = z;
        written += 1;
    }

    written
}
