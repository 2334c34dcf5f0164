use crate::core::data::complex::Complex;
use rayon::prelude::*;

/// A 2D affine map `p' = M·p + t` acting on points of the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AffineTransform {
    m00: f64,
    m01: f64,
    m10: f64,
    m11: f64,
    tx: f64,
    ty: f64,
}

impl AffineTransform {
    pub const IDENTITY: Self = Self {
        m00: 1.0,
        m01: 0.0,
        m10: 0.0,
        m11: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    #[must_use]
    pub fn translation(delta: Complex) -> Self {
        Self {
            tx: delta.real,
            ty: delta.imag,
            ..Self::IDENTITY
        }
    }

    /// Counter-clockwise rotation by `radians` around `pivot`.
    #[must_use]
    pub fn rotation_about(radians: f64, pivot: Complex) -> Self {
        let (sin, cos) = radians.sin_cos();
        let linear = Self {
            m00: cos,
            m01: -sin,
            m10: sin,
            m11: cos,
            tx: 0.0,
            ty: 0.0,
        };

        Self::translation(Complex::ZERO - pivot)
            .then(linear)
            .then(Self::translation(pivot))
    }

    /// Uniform scaling by `factor` around `pivot`.
    #[must_use]
    pub fn scaling_about(factor: f64, pivot: Complex) -> Self {
        let linear = Self {
            m00: factor,
            m11: factor,
            ..Self::IDENTITY
        };

        Self::translation(Complex::ZERO - pivot)
            .then(linear)
            .then(Self::translation(pivot))
    }

    /// Composes the maps so that `self` is applied first and `next` second.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            m00: next.m00 * self.m00 + next.m01 * self.m10,
            m01: next.m00 * self.m01 + next.m01 * self.m11,
            m10: next.m10 * self.m00 + next.m11 * self.m10,
            m11: next.m10 * self.m01 + next.m11 * self.m11,
            tx: next.m00 * self.tx + next.m01 * self.ty + next.tx,
            ty: next.m10 * self.tx + next.m11 * self.ty + next.ty,
        }
    }

    #[inline]
    #[must_use]
    pub fn apply(&self, point: Complex) -> Complex {
        Complex {
            real: self.m00 * point.real + self.m01 * point.imag + self.tx,
            imag: self.m10 * point.real + self.m11 * point.imag + self.ty,
        }
    }

    /// Transforms every point in place, in parallel.
    pub fn apply_all(&self, points: &mut [Complex]) {
        points
            .par_iter_mut()
            .for_each(|point| *point = self.apply(*point));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(actual: Complex, expected: Complex) {
        assert!(
            (actual - expected).magnitude_squared() < 1e-20,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_translation() {
        let at = AffineTransform::translation(Complex::new(1.0, -2.0));
        assert_eq!(at.apply(Complex::new(3.0, 3.0)), Complex::new(4.0, 1.0));
    }

    #[test]
    fn test_rotation_about_origin() {
        let at = AffineTransform::rotation_about(FRAC_PI_2, Complex::ZERO);
        assert_close(at.apply(Complex::new(1.0, 0.0)), Complex::new(0.0, 1.0));
    }

    #[test]
    fn test_rotation_keeps_pivot_fixed() {
        let pivot = Complex::new(3.0, -1.0);
        let at = AffineTransform::rotation_about(1.234, pivot);

        assert_close(at.apply(pivot), pivot);
        assert_close(
            at.apply(Complex::new(4.0, -1.0)),
            pivot + Complex::new(1.234f64.cos(), 1.234f64.sin()),
        );
    }

    #[test]
    fn test_scaling_about_pivot() {
        let at = AffineTransform::scaling_about(0.5, Complex::new(2.0, 2.0));
        assert_close(at.apply(Complex::new(4.0, 0.0)), Complex::new(3.0, 1.0));
    }

    #[test]
    fn test_then_applies_left_first() {
        let scale = AffineTransform::scaling_about(2.0, Complex::ZERO);
        let shift = AffineTransform::translation(Complex::new(1.0, 0.0));

        assert_close(scale.then(shift).apply(Complex::new(1.0, 1.0)), Complex::new(3.0, 2.0));
        assert_close(shift.then(scale).apply(Complex::new(1.0, 1.0)), Complex::new(4.0, 2.0));
    }

    #[test]
    fn test_apply_all_matches_apply() {
        let at = AffineTransform::rotation_about(0.3, Complex::new(1.0, 1.0))
            .then(AffineTransform::translation(Complex::new(-0.5, 0.25)));
        let original: Vec<Complex> = (0..64)
            .map(|i| Complex::new(f64::from(i) * 0.1, f64::from(i) * -0.2))
            .collect();
        let mut points = original.clone();

        at.apply_all(&mut points);

        for (moved, source) in points.iter().zip(&original) {
            assert_eq!(*moved, at.apply(*source));
        }
    }
}
