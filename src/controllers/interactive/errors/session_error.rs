use crate::controllers::interactive::errors::render_error::RenderError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::settings::errors::SettingsError;
use crate::core::viewport::viewport_transform::ViewportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid drawing surface: {0}")]
    Surface(#[from] PixelRectError),
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("invalid viewport: {0}")]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
