use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PixelToComplexCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the {}x{} pixel rect",
        .point.x, .point.y, .pixel_rect.width(), .pixel_rect.height()
    )]
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

/// Linear, unrotated mapping from a pixel to the complex plane. Pixel (0, 0)
/// lands on the upper left corner of `complex_rect` and pixel
/// (width-1, height-1) on its lower right corner.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let step_x = complex_rect.width() / f64::from(pixel_rect.width() - 1);
    let step_y = complex_rect.height() / f64::from(pixel_rect.height() - 1);

    let real = complex_rect.bottom_left().real + pixel_position.x as f64 * step_x;
    let imag = complex_rect.top_right().imag - pixel_position.y as f64 * step_y;

    Ok(Complex { real, imag })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects() -> (PixelRect, ComplexRect) {
        (
            PixelRect::new(101, 101).unwrap(),
            ComplexRect::from_bounds(-2.0, -1.0, 1.0, 1.0).unwrap(),
        )
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let (pixel_rect, complex_rect) = rects();

        let result = pixel_to_complex_coords(Point::new(0, 0), pixel_rect, complex_rect);

        assert_eq!(result, Ok(Complex::new(-2.0, 1.0)));
    }

    #[test]
    fn test_pixel_to_complex_bottom_right() {
        let (pixel_rect, complex_rect) = rects();

        let result = pixel_to_complex_coords(Point::new(100, 100), pixel_rect, complex_rect);

        assert_eq!(result, Ok(Complex::new(1.0, -1.0)));
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let pixel_rect = PixelRect::new(101, 101).unwrap();
        let complex_rect = ComplexRect::from_bounds(-1.0, -1.0, 1.0, 1.0).unwrap();

        let result = pixel_to_complex_coords(Point::new(50, 50), pixel_rect, complex_rect);

        assert_eq!(result, Ok(Complex::ZERO));
    }

    #[test]
    fn test_pixel_outside_rect_fails() {
        let (pixel_rect, complex_rect) = rects();

        for point in [Point::new(101, 0), Point::new(-1, 5), Point::new(5, 150)] {
            assert_eq!(
                pixel_to_complex_coords(point, pixel_rect, complex_rect),
                Err(PixelToComplexCoordsError::PointOutsideRect { point, pixel_rect })
            );
        }
    }
}
