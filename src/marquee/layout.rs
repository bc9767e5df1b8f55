//! Marquee window layout.
//!
//! [`render_window`] turns the marquee text and an unbounded scroll offset
//! into exactly `width` visible characters. Two regimes apply:
//!
//! - **Wide** (`text` shorter than `width`): the text followed by padding
//!   spaces forms a rigid block of `width` cells that the offset rotates
//!   around the window. Offsets are periodic in `width`.
//! - **Narrow** (`text` at least `width` long): the text is a ring and the
//!   window shows a rotating `width`-character slice of it. Offsets are
//!   periodic in the text length.
//!
//! [`SerpentinePlacement`] then maps the visible characters onto the screen
//! column by column: down one column, then wrap to the first row of the next.
//!
//! # Examples
//!
//! ```
//! use vmarquee::marquee::render_window;
//!
//! assert_eq!(render_window("ABC", 5, 1), " ABC ");
//! assert_eq!(render_window("ABCDE", 3, 1), "EAB");
//! assert_eq!(render_window("ABCDE", 3, -1), "BCD");
//! ```

use crate::color::{Color, ColorPair};
use crate::marquee::state::Direction;

/// Visible characters of the marquee window.
///
/// Returns exactly `width` characters for every `offset`. A `width` of zero
/// yields an empty string; callers keep width at 1 or more.
#[must_use]
pub fn render_window(text: &str, width: usize, offset: i64) -> String {
    if width == 0 {
        return String::new();
    }
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();

    if n < width {
        // Reduce the offset first so adding the cell index cannot overflow.
        let shift = offset.rem_euclid(width as i64) as usize;
        let mut visible = vec![' '; width];
        for (i, &ch) in chars.iter().enumerate() {
            visible[(i + shift) % width] = ch;
        }
        visible.into_iter().collect()
    } else {
        let shift = offset.rem_euclid(n as i64) as usize;
        (0..width).map(|i| chars[(i + n - shift) % n]).collect()
    }
}

/// Rows available to the marquee block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub first_row: u32,
    pub last_row: u32,
}

impl Region {
    /// A region whose `last_row` is raised to `first_row` if needed.
    #[must_use]
    pub fn new(first_row: u32, last_row: u32) -> Self {
        Self {
            first_row,
            last_row: last_row.max(first_row),
        }
    }

    /// Number of rows in one column of the region.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.last_row.saturating_sub(self.first_row) + 1
    }
}

/// Column-major placement cursor.
///
/// Yields `(row, col)` for successive characters, starting at
/// `(start_row, start_col)`. After `last_row` it continues at `first_row`
/// of the next column. The start row may lie outside the region (the
/// first character is still placed there).
#[derive(Clone, Debug)]
pub struct SerpentinePlacement {
    region: Region,
    row: u32,
    col: u32,
}

impl SerpentinePlacement {
    #[must_use]
    pub fn new(region: Region, start_row: u32, start_col: u32) -> Self {
        Self {
            region,
            row: start_row,
            col: start_col,
        }
    }
}

impl Iterator for SerpentinePlacement {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let here = (self.row, self.col);
        self.row = self.row.saturating_add(1);
        if self.row > self.region.last_row {
            self.row = self.region.first_row;
            self.col = self.col.saturating_add(1);
        }
        Some(here)
    }
}

/// Lay out a window of characters: each visible character with its screen
/// position.
pub fn place_window<'a>(
    visible: &'a str,
    region: Region,
    start_row: u32,
    start_col: u32,
) -> impl Iterator<Item = ((u32, u32), char)> + 'a {
    SerpentinePlacement::new(region, start_row, start_col).zip(visible.chars())
}

/// Window colors for a scroll direction.
#[must_use]
pub fn palette(direction: Direction) -> ColorPair {
    match direction {
        Direction::Negative => ColorPair::new(Color::Red, Color::Yellow),
        Direction::Positive => ColorPair::new(Color::Green, Color::Blue),
    }
}
