#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMode {
    #[default]
    Colour,
    ColourInverted,
    Monochrome,
}

impl ColourMode {
    pub const ALL: &'static [Self] = &[Self::Colour, Self::ColourInverted, Self::Monochrome];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Colour => "Colour",
            Self::ColourInverted => "Colour (inverted)",
            Self::Monochrome => "Monochrome",
        }
    }
}
