pub mod errors;
pub mod render_settings;
pub mod shared_settings;
