use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use thiserror::Error;

/// Marks a pixel whose iteration count has not been computed yet.
pub const UNCOMPUTED: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IterationBufferError {
    #[error("iteration buffer holds {source_size} values but {target_size} were expected")]
    BoundsMismatch {
        source_size: usize,
        target_size: usize,
    },
    #[error("pixel at x:{}, y:{} is outside the iteration buffer", .pixel.x, .pixel.y)]
    PixelOutsideBounds { pixel: Point },
}

/// Row-major per-pixel iteration counts for one pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationBuffer {
    pixel_rect: PixelRect,
    values: Vec<i32>,
}

impl IterationBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            values: vec![UNCOMPUTED; pixel_rect.size()],
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [i32] {
        &mut self.values
    }

    /// Re-targets the buffer to `pixel_rect` and marks every pixel as
    /// uncomputed. Storage is only reallocated when the size changes.
    pub fn reset(&mut self, pixel_rect: PixelRect) {
        if self.values.len() != pixel_rect.size() {
            self.values = vec![UNCOMPUTED; pixel_rect.size()];
        } else {
            self.values.fill(UNCOMPUTED);
        }
        self.pixel_rect = pixel_rect;
    }

    pub fn copy_from(&mut self, other: &IterationBuffer) -> Result<(), IterationBufferError> {
        if self.values.len() != other.values.len() {
            return Err(IterationBufferError::BoundsMismatch {
                source_size: other.values.len(),
                target_size: self.values.len(),
            });
        }

        self.values.copy_from_slice(&other.values);
        self.pixel_rect = other.pixel_rect;
        Ok(())
    }

    pub fn get(&self, pixel: Point) -> Result<i32, IterationBufferError> {
        self.pixel_rect
            .index_of(pixel)
            .map(|index| self.values[index])
            .ok_or(IterationBufferError::PixelOutsideBounds { pixel })
    }

    pub fn set(&mut self, pixel: Point, iterations: i32) -> Result<(), IterationBufferError> {
        let index = self
            .pixel_rect
            .index_of(pixel)
            .ok_or(IterationBufferError::PixelOutsideBounds { pixel })?;

        self.values[index] = iterations;
        Ok(())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.values.contains(&UNCOMPUTED)
    }

    #[must_use]
    pub fn computed_count(&self) -> usize {
        self.values.iter().filter(|&&v| v != UNCOMPUTED).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(width: u32, height: u32) -> PixelRect {
        PixelRect::new(width, height).unwrap()
    }

    #[test]
    fn test_new_buffer_is_uncomputed() {
        let buffer = IterationBuffer::new(rect(4, 3));

        assert_eq!(buffer.values().len(), 12);
        assert!(buffer.values().iter().all(|&v| v == UNCOMPUTED));
        assert!(!buffer.is_complete());
        assert_eq!(buffer.computed_count(), 0);
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let mut buffer = IterationBuffer::new(rect(4, 3));

        buffer.set(Point::new(2, 1), 17).unwrap();

        assert_eq!(buffer.get(Point::new(2, 1)), Ok(17));
        assert_eq!(buffer.values()[6], 17);
        assert_eq!(buffer.computed_count(), 1);
    }

    #[test]
    fn test_out_of_range_access_is_rejected() {
        let mut buffer = IterationBuffer::new(rect(4, 3));
        let pixel = Point::new(4, 0);

        assert_eq!(
            buffer.get(pixel),
            Err(IterationBufferError::PixelOutsideBounds { pixel })
        );
        assert_eq!(
            buffer.set(pixel, 1),
            Err(IterationBufferError::PixelOutsideBounds { pixel })
        );
    }

    #[test]
    fn test_reset_keeps_allocation_for_same_size() {
        let mut buffer = IterationBuffer::new(rect(4, 3));
        buffer.values_mut().fill(5);
        let before = buffer.values().as_ptr();

        buffer.reset(rect(3, 4));

        assert_eq!(buffer.values().as_ptr(), before);
        assert_eq!(buffer.pixel_rect(), rect(3, 4));
        assert!(buffer.values().iter().all(|&v| v == UNCOMPUTED));
    }

    #[test]
    fn test_reset_reallocates_for_new_size() {
        let mut buffer = IterationBuffer::new(rect(4, 3));

        buffer.reset(rect(10, 10));

        assert_eq!(buffer.values().len(), 100);
    }

    #[test]
    fn test_copy_from_requires_matching_size() {
        let mut source = IterationBuffer::new(rect(2, 2));
        source.values_mut().copy_from_slice(&[1, 2, 3, 4]);
        let mut target = IterationBuffer::new(rect(2, 2));
        let mut wrong = IterationBuffer::new(rect(3, 2));

        target.copy_from(&source).unwrap();

        assert_eq!(target.values(), &[1, 2, 3, 4]);
        assert!(target.is_complete());
        assert_eq!(
            wrong.copy_from(&source),
            Err(IterationBufferError::BoundsMismatch {
                source_size: 4,
                target_size: 6
            })
        );
    }
}
