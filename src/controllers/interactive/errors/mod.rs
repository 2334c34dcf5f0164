pub mod render_error;
pub mod session_error;
