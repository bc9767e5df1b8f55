//! Terminal cell type representing a single character position.

use crate::color::PairId;

/// One character position on the display: an ASCII character plus the
/// color pair it is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub pair: PairId,
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl Cell {
    /// A space in the default colors.
    pub const BLANK: Self = Self {
        ch: ' ',
        pair: PairId::DEFAULT,
    };

    #[must_use]
    pub const fn new(ch: char, pair: PairId) -> Self {
        Self { ch, pair }
    }

    /// Cell drawn with the default color pair.
    #[must_use]
    pub const fn plain(ch: char) -> Self {
        Self::new(ch, PairId::DEFAULT)
    }

    /// Whether the cell shows nothing but default background.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::BLANK
    }
}
