use crate::core::data::colour::Colour;
use crate::core::data::colour_mode::ColourMode;

/// Inputs a colour map needs besides the iteration count itself. Taken from
/// the settings at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourParams {
    pub iterations_limit: i32,
    pub mode: ColourMode,
    pub periodicity: i32,
}

/// Pure mapping from an iteration count to a colour. Counts below zero are
/// uncomputed pixels; a count equal to `iterations_limit` is a member.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: i32, params: &ColourParams) -> Colour;

    fn display_name(&self) -> &str;
}
