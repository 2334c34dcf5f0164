use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_stage::stage::RenderStage;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::fractal_algorithm::FractalAlgorithm;
use crate::core::viewport::viewport_transform::ViewportTransform;

/// Number of samples averaged per pixel when antialiasing.
pub const ANTIALIAS_SAMPLES: i64 = 9;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateStageError {
    /// The cancel token fired. Expected control flow, not a failure.
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error(
        "working buffer is {}x{} but the viewport is {}x{}",
        .buffer.width(), .buffer.height(), .viewport.width(), .viewport.height()
    )]
    ViewportMismatch {
        buffer: PixelRect,
        viewport: PixelRect,
    },
}

/// Per-pass sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSampling {
    pub iterations_limit: i32,
    pub antialiasing: bool,
}

/// Computes every pixel that belongs to `stage` into `working`.
///
/// Rows are processed in parallel; the cancel token is polled before each
/// pixel. On cancellation the rows written so far are left in `working` and
/// must be treated as garbage by the caller.
pub fn generate_stage_cancelable<Alg, C>(
    stage: RenderStage,
    viewport: &ViewportTransform,
    algorithm: &Alg,
    sampling: StageSampling,
    working: &mut IterationBuffer,
    cancel: &C,
) -> Result<(), GenerateStageError>
where
    Alg: FractalAlgorithm + Sync,
    C: CancelToken,
{
    if working.pixel_rect() != viewport.pixel_rect() {
        return Err(GenerateStageError::ViewportMismatch {
            buffer: working.pixel_rect(),
            viewport: viewport.pixel_rect(),
        });
    }

    let width = viewport.width();
    let coords = viewport.coords();
    let sample_offsets = antialias_offsets(viewport);

    working
        .values_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .try_for_each(|(y, row)| {
            let row_coords = &coords[y * width as usize..(y + 1) * width as usize];

            for x in stage.columns_in_row(y as u32, width) {
                if cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                let x = x as usize;
                let centre = row_coords[x];
                row[x] = if sampling.antialiasing {
                    supersample(algorithm, centre, &sample_offsets, sampling.iterations_limit)
                } else {
                    algorithm.test_point(centre, sampling.iterations_limit)
                };
            }

            Ok(())
        })?;

    Ok(())
}

/// The pixel centre plus its 8 neighbours at a third of the pixel spacing,
/// following the viewport rotation.
fn antialias_offsets(viewport: &ViewportTransform) -> [Complex; 9] {
    let (step_x, step_y) = viewport.pixel_steps();
    let third_x = step_x.scale(1.0 / 3.0);
    let third_y = step_y.scale(1.0 / 3.0);

    let mut offsets = [Complex::ZERO; 9];
    for (i, offset) in offsets.iter_mut().enumerate() {
        let dx = (i % 3) as f64 - 1.0;
        let dy = (i / 3) as f64 - 1.0;
        *offset = third_x.scale(dx) + third_y.scale(dy);
    }
    offsets
}

/// Truncating integer average of the 9 samples.
fn supersample<Alg: FractalAlgorithm>(
    algorithm: &Alg,
    centre: Complex,
    offsets: &[Complex; 9],
    iterations_limit: i32,
) -> i32 {
    let sum: i64 = offsets
        .iter()
        .map(|&offset| i64::from(algorithm.test_point(centre + offset, iterations_limit)))
        .sum();

    (sum / ANTIALIAS_SAMPLES) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::iteration_buffer::UNCOMPUTED;
    use crate::core::data::point::Point;
    use crate::core::fractals::fractal_kinds::FractalKinds;
    use crate::core::fractals::kernel::FractalKernel;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn viewport(width: u32, height: u32) -> ViewportTransform {
        let pixel_rect = PixelRect::new(width, height).unwrap();
        let bounds = ComplexRect::from_bounds(-2.0, -1.5, 1.0, 1.5).unwrap();
        ViewportTransform::new(pixel_rect, bounds).unwrap()
    }

    const PLAIN: StageSampling = StageSampling {
        iterations_limit: 50,
        antialiasing: false,
    };

    /// Returns the real part of the sampled point, rounded, so tests can tell
    /// which coordinate a pixel was computed from.
    struct RealPart;

    impl FractalAlgorithm for RealPart {
        fn test_point(&self, point: Complex, _: i32) -> i32 {
            point.real.round() as i32
        }

        fn path(&self, _: Complex, _: &mut [Complex]) -> usize {
            0
        }
    }

    /// Counts calls and returns a fixed value per call index.
    struct Sequence {
        calls: AtomicUsize,
        values: Vec<i32>,
    }

    impl FractalAlgorithm for Sequence {
        fn test_point(&self, _: Complex, _: i32) -> i32 {
            let call = self.calls.fetch_add(1, Ordering::Relaxed);
            self.values[call % self.values.len()]
        }

        fn path(&self, _: Complex, _: &mut [Complex]) -> usize {
            0
        }
    }

    #[test]
    fn test_stage_writes_only_its_pixels() {
        let view = viewport(9, 7);
        let mut working = IterationBuffer::new(view.pixel_rect());
        let kernel = FractalKernel::new(FractalKinds::Mandelbrot, Complex::ZERO);

        generate_stage_cancelable(
            RenderStage::CoarseRemaining,
            &view,
            &kernel,
            PLAIN,
            &mut working,
            &NeverCancel,
        )
        .unwrap();

        for y in 0..7 {
            for x in 0..9 {
                let value = working.get(Point::new(i64::from(x), i64::from(y))).unwrap();
                if RenderStage::CoarseRemaining.contains(x, y) {
                    assert_ne!(value, UNCOMPUTED, "pixel ({x}, {y})");
                } else {
                    assert_eq!(value, UNCOMPUTED, "pixel ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_all_stages_fill_the_buffer_with_kernel_results() {
        let view = viewport(10, 6);
        let mut working = IterationBuffer::new(view.pixel_rect());
        let kernel = FractalKernel::new(FractalKinds::Mandelbrot, Complex::ZERO);

        for stage in RenderStage::ALL {
            generate_stage_cancelable(stage, &view, &kernel, PLAIN, &mut working, &NeverCancel)
                .unwrap();
        }

        assert!(working.is_complete());
        for (index, &value) in working.values().iter().enumerate() {
            assert_eq!(value, kernel.test_point(view.coords()[index], 50));
        }
    }

    #[test]
    fn test_samples_the_cached_coordinate() {
        let mut view = viewport(4, 4);
        view.set_bounds(0.0, 0.0, 30.0, 3.0).unwrap();
        let mut working = IterationBuffer::new(view.pixel_rect());

        generate_stage_cancelable(
            RenderStage::FineRemaining,
            &view,
            &RealPart,
            PLAIN,
            &mut working,
            &NeverCancel,
        )
        .unwrap();

        assert_eq!(working.get(Point::new(1, 0)), Ok(10));
        assert_eq!(working.get(Point::new(3, 0)), Ok(30));
        assert_eq!(working.get(Point::new(0, 1)), Ok(0));
        assert_eq!(working.get(Point::new(0, 0)), Ok(UNCOMPUTED));
    }

    #[test]
    fn test_antialiasing_takes_truncated_average_of_nine_samples() {
        let view = viewport(4, 4);
        let mut working = IterationBuffer::new(view.pixel_rect());
        let algorithm = Sequence {
            calls: AtomicUsize::new(0),
            values: vec![1, 1, 1, 1, 1, 1, 1, 1, 9],
        };
        let sampling = StageSampling {
            iterations_limit: 50,
            antialiasing: true,
        };

        generate_stage_cancelable(
            RenderStage::Coarse,
            &view,
            &algorithm,
            sampling,
            &mut working,
            &NeverCancel,
        )
        .unwrap();

        // One pixel, nine samples: (8 + 9) / 9 = 1.
        assert_eq!(algorithm.calls.load(Ordering::Relaxed), 9);
        assert_eq!(working.get(Point::new(0, 0)), Ok(1));
    }

    #[test]
    fn test_antialias_offsets_are_a_third_of_the_pixel_spacing() {
        let view = viewport(4, 4);
        let (step_x, step_y) = view.pixel_steps();

        let offsets = antialias_offsets(&view);

        assert_eq!(offsets[4], Complex::ZERO);
        let right = offsets[5] - step_x.scale(1.0 / 3.0);
        let below = offsets[7] - step_y.scale(1.0 / 3.0);
        assert!(right.magnitude_squared() < 1e-24);
        assert!(below.magnitude_squared() < 1e-24);
    }

    #[test]
    fn test_cancelled_stage_stops_early() {
        let view = viewport(64, 64);
        let mut working = IterationBuffer::new(view.pixel_rect());
        let kernel = FractalKernel::new(FractalKinds::Mandelbrot, Complex::ZERO);
        let cancel = || true;

        let result = generate_stage_cancelable(
            RenderStage::Coarse,
            &view,
            &kernel,
            PLAIN,
            &mut working,
            &cancel,
        );

        assert_eq!(result, Err(GenerateStageError::Cancelled(Cancelled)));
        assert_eq!(working.computed_count(), 0);
    }

    #[test]
    fn test_cancellation_mid_stage() {
        let view = viewport(64, 64);
        let mut working = IterationBuffer::new(view.pixel_rect());
        let kernel = FractalKernel::new(FractalKinds::Mandelbrot, Complex::ZERO);
        let polls = AtomicUsize::new(0);
        let cancel = || polls.fetch_add(1, Ordering::Relaxed) >= 20;

        let result = generate_stage_cancelable(
            RenderStage::Coarse,
            &view,
            &kernel,
            PLAIN,
            &mut working,
            &cancel,
        );

        assert!(matches!(result, Err(GenerateStageError::Cancelled(_))));
        assert!(working.computed_count() <= 20);
    }

    #[test]
    fn test_mismatched_buffer_is_rejected() {
        let view = viewport(8, 8);
        let mut working = IterationBuffer::new(PixelRect::new(4, 4).unwrap());
        let kernel = FractalKernel::new(FractalKinds::Mandelbrot, Complex::ZERO);

        let result = generate_stage_cancelable(
            RenderStage::Coarse,
            &view,
            &kernel,
            PLAIN,
            &mut working,
            &NeverCancel,
        );

        assert!(matches!(result, Err(GenerateStageError::ViewportMismatch { .. })));
    }
}
