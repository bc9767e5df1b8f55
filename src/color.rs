//! Terminal palette colors and color pairs.
//!
//! The marquee only ever needs the eight basic ANSI colors plus the
//! terminal's own default, so colors are a small enum rather than RGB
//! values. Drawing operations refer to a registered [`ColorPair`] by its
//! [`PairId`], the same way curses-style displays do.
//!
//! # Examples
//!
//! ```
//! use vmarquee::color::{Color, ColorPair};
//!
//! let pair = ColorPair::new(Color::Red, Color::Yellow);
//! assert_eq!(pair.fg.fg_code(), 31);
//! assert_eq!(pair.bg.bg_code(), 43);
//! ```

/// One of the basic ANSI palette colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Whatever the terminal uses when no color is set.
    #[default]
    Default,
}

impl Color {
    /// Palette index 0-7, or `None` for [`Color::Default`].
    #[must_use]
    pub const fn index(self) -> Option<u8> {
        match self {
            Self::Black => Some(0),
            Self::Red => Some(1),
            Self::Green => Some(2),
            Self::Yellow => Some(3),
            Self::Blue => Some(4),
            Self::Magenta => Some(5),
            Self::Cyan => Some(6),
            Self::White => Some(7),
            Self::Default => None,
        }
    }

    /// SGR parameter selecting this color as foreground (30-37, 39).
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        match self.index() {
            Some(i) => 30 + i,
            None => 39,
        }
    }

    /// SGR parameter selecting this color as background (40-47, 49).
    #[must_use]
    pub const fn bg_code(self) -> u8 {
        match self.index() {
            Some(i) => 40 + i,
            None => 49,
        }
    }
}

/// Identifier of a registered color pair. Pair 0 is always the terminal
/// default and cannot be redefined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairId(pub u8);

impl PairId {
    /// The terminal's default colors.
    pub const DEFAULT: Self = Self(0);
}

/// A foreground/background combination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Color,
}

impl ColorPair {
    /// Default foreground on default background.
    pub const DEFAULT: Self = Self {
        fg: Color::Default,
        bg: Color::Default,
    };

    #[must_use]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}

/// Registered color pairs, indexed by [`PairId`].
#[derive(Clone, Debug)]
pub struct PairTable {
    pairs: Vec<ColorPair>,
}

impl Default for PairTable {
    fn default() -> Self {
        Self {
            pairs: vec![ColorPair::DEFAULT],
        }
    }
}

impl PairTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define or redefine a pair. Registering [`PairId::DEFAULT`] is ignored.
    pub fn register(&mut self, id: PairId, pair: ColorPair) {
        if id == PairId::DEFAULT {
            return;
        }
        let idx = usize::from(id.0);
        if idx >= self.pairs.len() {
            self.pairs.resize(idx + 1, ColorPair::DEFAULT);
        }
        self.pairs[idx] = pair;
    }

    /// Look up a pair; unknown ids resolve to the default pair.
    #[must_use]
    pub fn get(&self, id: PairId) -> ColorPair {
        self.pairs
            .get(usize::from(id.0))
            .copied()
            .unwrap_or(ColorPair::DEFAULT)
    }
}
