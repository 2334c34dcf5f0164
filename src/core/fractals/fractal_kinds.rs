/// The escape-time formulas the kernel can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    /// `z ← z² + z₀`, the tested point is also the added constant.
    #[default]
    Mandelbrot,
    /// `z ← z² + c` for a configured constant `c`.
    Julia,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }

    /// Whether the formula reads the configured constant.
    #[must_use]
    pub const fn uses_constant(self) -> bool {
        matches!(self, Self::Julia)
    }
}
