pub mod colour;
pub mod colour_mode;
pub mod complex;
pub mod complex_rect;
pub mod iteration_buffer;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
