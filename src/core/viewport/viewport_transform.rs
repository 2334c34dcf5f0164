use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::util::affine::AffineTransform;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};
use rayon::prelude::*;
use std::f64::consts::TAU;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("pixel (x: {}, y: {}) is outside the {width}x{height} viewport", .point.x, .point.y)]
    PixelOutOfRange { point: Point, width: u32, height: u32 },
    #[error("invalid viewport bounds: {0}")]
    InvalidBounds(#[from] ComplexRectError),
    #[error("scale factor must be positive and finite, got {0}")]
    InvalidScaleFactor(f64),
    #[error("rotation must be finite, got {0} degrees")]
    InvalidRotation(f64),
    #[error("translation must be finite, got ({dx}, {dy})")]
    InvalidTranslation { dx: f64, dy: f64 },
    #[error("edit would leave the viewport degenerate or outside the representable range")]
    DegenerateViewport,
    #[error(transparent)]
    Mapping(#[from] PixelToComplexCoordsError),
}

/// Cartesian coordinates of the four corner pixels of the viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportCorners {
    pub top_left: Complex,
    pub top_right: Complex,
    pub bottom_left: Complex,
    pub bottom_right: Complex,
}

impl ViewportCorners {
    #[must_use]
    pub fn center(&self) -> Complex {
        (self.top_left + self.bottom_right).scale(0.5)
    }
}

/// Maps the pixel grid of a drawing surface onto a (possibly rotated) region
/// of the complex plane.
///
/// The per-pixel coordinate cache is the source of truth: every edit applies
/// an affine map to the whole cache, so arbitrary sequences of translate,
/// scale and rotate compose without re-deriving the region from corners.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportTransform {
    pixel_rect: PixelRect,
    coords: Vec<Complex>,
}

impl ViewportTransform {
    pub fn new(pixel_rect: PixelRect, bounds: ComplexRect) -> Result<Self, ViewportError> {
        Ok(Self {
            pixel_rect,
            coords: Self::fill_coords(pixel_rect, bounds)?,
        })
    }

    fn fill_coords(
        pixel_rect: PixelRect,
        bounds: ComplexRect,
    ) -> Result<Vec<Complex>, PixelToComplexCoordsError> {
        let width = pixel_rect.width() as usize;

        (0..pixel_rect.size())
            .into_par_iter()
            .map(|index| {
                let point = Point::new((index % width) as i64, (index / width) as i64);
                pixel_to_complex_coords(point, pixel_rect, bounds)
            })
            .collect()
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    /// Row-major cached coordinates, one per pixel.
    #[must_use]
    pub fn coords(&self) -> &[Complex] {
        &self.coords
    }

    pub fn pixel_to_complex(&self, point: Point) -> Result<Complex, ViewportError> {
        self.pixel_rect
            .index_of(point)
            .map(|index| self.coords[index])
            .ok_or(ViewportError::PixelOutOfRange {
                point,
                width: self.width(),
                height: self.height(),
            })
    }

    /// Nearest pixel for `point`. Valid for points outside the visible
    /// region, in which case the returned pixel is outside the grid too.
    #[must_use]
    pub fn complex_to_pixel(&self, point: Complex) -> Point {
        let corners = self.corners();
        let origin = corners.bottom_left;

        // Undo the viewport rotation around its lower left corner so the
        // bottom edge lies parallel to the real axis.
        let derotate = AffineTransform::rotation_about(-self.rotation_radians(), origin);
        let bottom_right = derotate.apply(corners.bottom_right);
        let top_right = derotate.apply(corners.top_right);
        let point = derotate.apply(point);

        let last_column = f64::from(self.width() - 1);
        let last_row = f64::from(self.height() - 1);

        let x = (last_column / (bottom_right.real - origin.real)) * (point.real - origin.real);
        let y =
            -(last_row / (top_right.imag - origin.imag)) * (point.imag - origin.imag) + last_row;

        Point::new(x.round() as i64, y.round() as i64)
    }

    /// Pans by a pixel-space delta. The delta is expressed along the
    /// viewport's own pixel axes, so a drag moves the image with the pointer
    /// whatever the current rotation.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<(), ViewportError> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(ViewportError::InvalidTranslation { dx, dy });
        }

        let (step_x, step_y) = self.pixel_steps();
        let delta = Complex::ZERO - (step_x.scale(dx) + step_y.scale(dy));

        self.apply_checked(AffineTransform::translation(delta))
    }

    /// Zooms about the viewport center; the visible extent is divided by
    /// `factor`.
    pub fn scale(&mut self, factor: f64) -> Result<(), ViewportError> {
        if !(factor > 0.0) || !factor.is_finite() {
            return Err(ViewportError::InvalidScaleFactor(factor));
        }

        self.apply_checked(AffineTransform::scaling_about(1.0 / factor, self.center()))
    }

    /// Rotates the mapped region counter-clockwise about its center.
    pub fn rotate(&mut self, degrees: f64) -> Result<(), ViewportError> {
        if !degrees.is_finite() {
            return Err(ViewportError::InvalidRotation(degrees));
        }

        self.apply_checked(AffineTransform::rotation_about(
            degrees.to_radians(),
            self.center(),
        ))
    }

    /// Jumps to the axis-aligned box with lower left corner (x1, y1) and upper
    /// right corner (x2, y2), dropping any rotation.
    pub fn set_bounds(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), ViewportError> {
        let bounds = ComplexRect::from_bounds(x1, y1, x2, y2)?;
        self.coords = Self::fill_coords(self.pixel_rect, bounds)?;
        Ok(())
    }

    #[must_use]
    pub fn corners(&self) -> ViewportCorners {
        ViewportCorners {
            top_left: self.coord_at(self.pixel_rect.top_left()),
            top_right: self.coord_at(self.pixel_rect.top_right()),
            bottom_left: self.coord_at(self.pixel_rect.bottom_left()),
            bottom_right: self.coord_at(self.pixel_rect.bottom_right()),
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.corners().center()
    }

    #[must_use]
    pub fn bottom_left(&self) -> Complex {
        self.coord_at(self.pixel_rect.bottom_left())
    }

    /// Cartesian offsets between a pixel and its right and lower neighbours.
    #[must_use]
    pub fn pixel_steps(&self) -> (Complex, Complex) {
        let origin = self.coords[0];
        let right = self.coord_at(Point::new(1, 0));
        let below = self.coord_at(Point::new(0, 1));

        (right - origin, below - origin)
    }

    /// Angle of the viewport's bottom edge against the real axis, in
    /// `[0, 2π)`.
    #[must_use]
    pub fn rotation_radians(&self) -> f64 {
        let corners = self.corners();
        let edge = corners.bottom_right - corners.bottom_left;
        let radians = edge.imag.atan2(edge.real);

        if radians < 0.0 { radians + TAU } else { radians }
    }

    /// Applies `transform` to the whole cache unless it would make a corner
    /// non-finite or collapse the spacing between neighbouring pixels.
    fn apply_checked(&mut self, transform: AffineTransform) -> Result<(), ViewportError> {
        let ViewportCorners {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        } = self.corners();
        let corners_finite = [top_left, top_right, bottom_left, bottom_right]
            .into_iter()
            .all(|corner| transform.apply(corner).is_finite());

        let origin = transform.apply(self.coords[0]);
        let resolvable = [Point::new(1, 0), Point::new(0, 1)].into_iter().all(|neighbour| {
            let step = transform.apply(self.coord_at(neighbour)) - origin;
            step.is_finite() && (step.real != 0.0 || step.imag != 0.0)
        });

        if !corners_finite || !resolvable {
            return Err(ViewportError::DegenerateViewport);
        }

        transform.apply_all(&mut self.coords);
        Ok(())
    }

    fn coord_at(&self, point: Point) -> Complex {
        // Only called with corner and neighbour pixels of a grid that is at
        // least 2x2.
        self.coords[point.y as usize * self.width() as usize + point.x as usize]
    }
}
