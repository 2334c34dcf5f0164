pub mod affine;
pub mod pixel_to_complex_coords;
pub mod sync;
