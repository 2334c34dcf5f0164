pub mod fractal_algorithm;
pub mod fractal_kinds;
pub mod julia;
pub mod kernel;
pub mod mandelbrot;
