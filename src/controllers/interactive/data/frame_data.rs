use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::orbit::orbit_tracer::OrbitPath;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    /// Number of finished passes behind this frame; the last one means the
    /// image is final.
    pub stage: usize,
    pub pixel_buffer: PixelBuffer,
    /// Present while the orbit overlay is visible.
    pub orbit: Option<OrbitPath>,
}
