use crate::core::data::pixel_buffer::PixelBufferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to start the {thread} thread")]
    Spawn {
        thread: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("draw target does not fit the rendered frame")]
    Target(#[from] PixelBufferError),
}
