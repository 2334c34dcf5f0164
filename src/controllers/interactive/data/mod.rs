pub mod frame_data;
pub mod gesture_delta;
pub mod session_config;
