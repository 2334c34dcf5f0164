pub mod actions;
pub mod colour_maps;
pub mod data;
pub mod fractals;
pub mod orbit;
pub mod settings;
pub mod util;
pub mod viewport;
