use crate::core::data::point::Point;
use thiserror::Error;

pub const MIN_PIXEL_EXTENT: u32 = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect must be at least 2x2, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// The pixel grid of a drawing surface, anchored at (0, 0) in the top left
/// corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width < MIN_PIXEL_EXTENT || height < MIN_PIXEL_EXTENT {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && point.x < i64::from(self.width)
            && point.y < i64::from(self.height)
    }

    /// Row-major index of `point`, or `None` when it lies outside the grid.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        Some(point.y as usize * self.width as usize + point.x as usize)
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(0, 0)
    }

    #[must_use]
    pub fn top_right(&self) -> Point {
        Point::new(i64::from(self.width) - 1, 0)
    }

    #[must_use]
    pub fn bottom_left(&self) -> Point {
        Point::new(0, i64::from(self.height) - 1)
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(i64::from(self.width) - 1, i64::from(self.height) - 1)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(i64::from(self.width / 2), i64::from(self.height / 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::new(121, 101).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.size(), 12221);
    }

    #[test]
    fn test_pixel_rect_must_be_at_least_two_pixels_wide_and_tall() {
        assert_eq!(
            PixelRect::new(1, 1),
            Err(PixelRectError::InvalidSize {
                width: 1,
                height: 1
            })
        );
        assert_eq!(
            PixelRect::new(11, 0),
            Err(PixelRectError::InvalidSize {
                width: 11,
                height: 0
            })
        );
        assert_eq!(
            PixelRect::new(1, 11),
            Err(PixelRectError::InvalidSize {
                width: 1,
                height: 11
            })
        );
        assert!(PixelRect::new(2, 2).is_ok());
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(100, 50).unwrap();

        assert!(rect.contains_point(Point::new(0, 0)));
        assert!(rect.contains_point(Point::new(99, 49)));
        assert!(!rect.contains_point(Point::new(100, 10)));
        assert!(!rect.contains_point(Point::new(10, 50)));
        assert!(!rect.contains_point(Point::new(-1, 10)));
        assert!(!rect.contains_point(Point::new(10, -1)));
    }

    #[test]
    fn test_index_of_is_row_major() {
        let rect = PixelRect::new(10, 4).unwrap();

        assert_eq!(rect.index_of(Point::new(0, 0)), Some(0));
        assert_eq!(rect.index_of(Point::new(3, 2)), Some(23));
        assert_eq!(rect.index_of(Point::new(9, 3)), Some(39));
        assert_eq!(rect.index_of(Point::new(10, 0)), None);
    }

    #[test]
    fn test_corners_and_center() {
        let rect = PixelRect::new(8, 6).unwrap();

        assert_eq!(rect.top_right(), Point::new(7, 0));
        assert_eq!(rect.bottom_left(), Point::new(0, 5));
        assert_eq!(rect.bottom_right(), Point::new(7, 5));
        assert_eq!(rect.center(), Point::new(4, 3));
    }
}
