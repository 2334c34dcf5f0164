use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive and finite: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// An axis-aligned box in the complex plane, described by its lower left and
/// upper right corners. The imaginary axis grows upwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    bottom_left: Complex,
    top_right: Complex,
}

impl ComplexRect {
    pub fn new(bottom_left: Complex, top_right: Complex) -> Result<Self, ComplexRectError> {
        let width = top_right.real - bottom_left.real;
        let height = top_right.imag - bottom_left.imag;

        let positive = width > 0.0 && height > 0.0;
        if !positive || !width.is_finite() || !height.is_finite() {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            bottom_left,
            top_right,
        })
    }

    pub fn from_bounds(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, ComplexRectError> {
        Self::new(Complex::new(x1, y1), Complex::new(x2, y2))
    }

    /// The box of the given half-height around `center`, widened by
    /// `aspect_ratio`.
    pub fn centered(
        center: Complex,
        half_height: f64,
        aspect_ratio: f64,
    ) -> Result<Self, ComplexRectError> {
        let half = Complex::new(half_height * aspect_ratio, half_height);
        Self::new(center - half, center + half)
    }

    #[must_use]
    pub fn bottom_left(&self) -> Complex {
        self.bottom_left
    }

    #[must_use]
    pub fn top_right(&self) -> Complex {
        self.top_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.top_right.real - self.bottom_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.top_right.imag - self.bottom_left.imag
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.bottom_left.real <= point.real
            && self.bottom_left.imag <= point.imag
            && self.top_right.real >= point.real
            && self.top_right.imag >= point.imag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_rect_new_valid() {
        let bottom_left = Complex::new(-2.0, -1.0);
        let top_right = Complex::new(1.0, 1.0);

        let rect = ComplexRect::new(bottom_left, top_right).unwrap();

        assert_eq!(rect.bottom_left(), bottom_left);
        assert_eq!(rect.top_right(), top_right);
        assert_eq!(rect.width(), 3.0);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_complex_rect_dimensions_must_be_positive() {
        assert_eq!(
            ComplexRect::from_bounds(0.0, 0.0, 0.0, 100.0),
            Err(ComplexRectError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            ComplexRect::from_bounds(0.0, 0.0, -100.0, 10.0),
            Err(ComplexRectError::InvalidSize {
                width: -100.0,
                height: 10.0
            })
        );
        assert_eq!(
            ComplexRect::from_bounds(0.0, 0.0, 100.0, 0.0),
            Err(ComplexRectError::InvalidSize {
                width: 100.0,
                height: 0.0
            })
        );
        assert_eq!(
            ComplexRect::from_bounds(2.0, 2.0, -2.0, -2.0),
            Err(ComplexRectError::InvalidSize {
                width: -4.0,
                height: -4.0
            })
        );
    }

    #[test]
    fn test_complex_rect_rejects_non_finite_bounds() {
        assert!(ComplexRect::from_bounds(0.0, 0.0, f64::INFINITY, 1.0).is_err());
        assert!(ComplexRect::from_bounds(0.0, f64::NAN, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_centered_uses_aspect_ratio() {
        let rect = ComplexRect::centered(Complex::ZERO, 2.0, 1.5).unwrap();

        assert_eq!(rect.bottom_left(), Complex::new(-3.0, -2.0));
        assert_eq!(rect.top_right(), Complex::new(3.0, 2.0));
    }

    #[test]
    fn test_complex_rect_contains_point() {
        let rect = ComplexRect::from_bounds(-10.0, -5.0, 100.0, 200.0).unwrap();

        assert!(rect.contains_point(Complex::new(50.0, 50.0)));
        assert!(rect.contains_point(Complex::new(-10.0, 0.0)));
        assert!(rect.contains_point(Complex::new(100.0, 200.0)));
        assert!(!rect.contains_point(Complex::new(101.0, 50.0)));
        assert!(!rect.contains_point(Complex::new(50.0, -6.0)));
    }
}
