use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourParams};
use crate::core::data::colour::Colour;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};

/// Colourizes every iteration count into `target`.
///
/// Runs on the calling thread. A draw must never queue behind stage work on
/// the shared rayon pool. `target` must describe the same pixel grid as
/// `iterations`; it is left untouched otherwise.
pub fn generate_pixel_buffer<CMap>(
    iterations: &IterationBuffer,
    mapper: &CMap,
    params: &ColourParams,
    target: &mut PixelBuffer,
) -> Result<(), PixelBufferError>
where
    CMap: ColourMap + ?Sized,
{
    if target.pixel_rect() != iterations.pixel_rect() {
        return Err(PixelBufferError::BoundsMismatch {
            pixel_rect_size: iterations.pixel_rect().size() * BYTES_PER_PIXEL,
            buffer_size: target.buffer().len(),
        });
    }

    target
        .buffer_mut()
        .chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(iterations.values())
        .for_each(|(rgb, &value)| {
            let Colour { r, g, b } = mapper.map(value, params);
            rgb.copy_from_slice(&[r, g, b]);
        });

    Ok(())
}
