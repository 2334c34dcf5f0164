/// One pass of the progressive schedule. Each pass samples the pixels whose
/// coordinates, taken modulo `step`, equal one of its offsets. Together the
/// five passes visit every pixel exactly once, coarse grid first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RenderStage {
    Coarse,
    CoarseDiagonal,
    CoarseRemaining,
    FineDiagonal,
    FineRemaining,
}

pub const STAGE_COUNT: usize = 5;

impl RenderStage {
    pub const ALL: [Self; STAGE_COUNT] = [
        Self::Coarse,
        Self::CoarseDiagonal,
        Self::CoarseRemaining,
        Self::FineDiagonal,
        Self::FineRemaining,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Coarse => Some(Self::CoarseDiagonal),
            Self::CoarseDiagonal => Some(Self::CoarseRemaining),
            Self::CoarseRemaining => Some(Self::FineDiagonal),
            Self::FineDiagonal => Some(Self::FineRemaining),
            Self::FineRemaining => None,
        }
    }

    #[must_use]
    pub const fn step(self) -> u32 {
        match self {
            Self::Coarse | Self::CoarseDiagonal | Self::CoarseRemaining => 4,
            Self::FineDiagonal | Self::FineRemaining => 2,
        }
    }

    /// `(x, y)` offsets within one `step`×`step` cell.
    #[must_use]
    pub const fn offsets(self) -> &'static [(u32, u32)] {
        match self {
            Self::Coarse => &[(0, 0)],
            Self::CoarseDiagonal => &[(2, 2)],
            Self::CoarseRemaining => &[(0, 2), (2, 0)],
            Self::FineDiagonal => &[(1, 1)],
            Self::FineRemaining => &[(0, 1), (1, 0)],
        }
    }

    #[must_use]
    pub fn contains(self, x: u32, y: u32) -> bool {
        let step = self.step();
        self.offsets()
            .iter()
            .any(|&(ox, oy)| x % step == ox && y % step == oy)
    }

    /// Columns of row `y` sampled by this pass, ascending. No pass has more
    /// than one offset per row residue.
    pub fn columns_in_row(self, y: u32, width: u32) -> impl Iterator<Item = u32> {
        let step = self.step();
        let start = self
            .offsets()
            .iter()
            .find(|&&(_, oy)| y % step == oy)
            .map(|&(ox, _)| ox);

        start
            .into_iter()
            .flat_map(move |ox| (ox..width).step_by(step as usize))
    }
}
