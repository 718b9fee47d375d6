use std::{fmt, str::FromStr};

/// Small well-known Life patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// 2x2 still life.
    Block,
    /// 4x3 still life.
    Beehive,
    /// Period-2 oscillator, horizontal phase.
    Blinker,
    /// Period-2 oscillator.
    Toad,
    /// Moves one cell diagonally (south-east) every 4 generations.
    Glider,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Block,
        Pattern::Beehive,
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Glider,
    ];

    /// Live cells as `(dx, dy)` offsets from the pattern's top-left corner.
    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Self::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Self::Beehive => &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
            Self::Blinker => &[(0, 0), (1, 0), (2, 0)],
            Self::Toad => &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
            Self::Glider => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        }
    }

    /// Bounding box as `(width, height)`.
    pub fn size(self) -> (usize, usize) {
        self.cells().iter().fold((0, 0), |(w, h), &(dx, dy)| {
            (w.max(dx + 1), h.max(dy + 1))
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Beehive => "beehive",
            Self::Blinker => "blinker",
            Self::Toad => "toad",
            Self::Glider => "glider",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pattern `{0}`")]
pub struct UnknownPattern(pub String);

impl FromStr for Pattern {
    type Err = UnknownPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPattern(s.to_string()))
    }
}
