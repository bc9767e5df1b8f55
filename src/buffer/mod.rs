//! Cell-based frame buffer.
//!
//! [`CellBuffer`] is the drawing surface behind every display: a 2D grid
//! of [`Cell`]s addressed by `(row, col)` with the origin in the top-left
//! corner. Writes outside the grid are silently clipped, which is what lets
//! the marquee spill past the right edge of a narrow terminal without
//! callers having to bounds-check every cell.
//!
//! # Examples
//!
//! ```
//! use vmarquee::buffer::CellBuffer;
//! use vmarquee::color::PairId;
//!
//! let mut buf = CellBuffer::new(3, 10);
//! buf.draw_text(0, 2, "hi", PairId::DEFAULT);
//! buf.draw_text(1, 8, "clipped", PairId::DEFAULT);
//! assert_eq!(buf.row_text(0), "  hi      ");
//! assert_eq!(buf.row_text(1), "        cl");
//! ```

use crate::cell::Cell;
use crate::color::PairId;

/// Fixed-size grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellBuffer {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
}

impl CellBuffer {
    /// Create a blank buffer. Zero dimensions produce an empty grid that
    /// clips every write.
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        let size = usize::from(rows) * usize::from(cols);
        Self {
            rows,
            cols,
            cells: vec![Cell::BLANK; size],
        }
    }

    /// Buffer dimensions as `(rows, cols)`.
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    fn index(&self, row: u32, col: u32) -> Option<usize> {
        if row < u32::from(self.rows) && col < u32::from(self.cols) {
            Some(row as usize * usize::from(self.cols) + col as usize)
        } else {
            None
        }
    }

    /// Cell at a position, `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Replace the cell at a position. Out-of-bounds writes are ignored.
    pub fn set(&mut self, row: u32, col: u32, cell: Cell) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = cell;
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Resize, discarding contents.
    pub fn resize(&mut self, rows: u16, cols: u16) {
        *self = Self::new(rows, cols);
    }

    /// Draw a single line of text starting at `(row, col)`.
    ///
    /// Text is not wrapped; characters past the right edge are dropped.
    pub fn draw_text(&mut self, row: u32, col: u32, text: &str, pair: PairId) {
        for (i, ch) in text.chars().enumerate() {
            let Some(x) = u32::try_from(i).ok().and_then(|i| col.checked_add(i)) else {
                break;
            };
            if x >= u32::from(self.cols) {
                break;
            }
            self.set(row, x, Cell::new(ch, pair));
        }
    }

    /// Characters of one row as a string, `""` if the row does not exist.
    #[must_use]
    pub fn row_text(&self, row: u32) -> String {
        if row >= u32::from(self.rows) {
            return String::new();
        }
        let start = row as usize * usize::from(self.cols);
        self.cells[start..start + usize::from(self.cols)]
            .iter()
            .map(|c| c.ch)
            .collect()
    }

    /// Whole grid as newline-separated rows.
    #[must_use]
    pub fn to_text(&self) -> String {
        (0..u32::from(self.rows))
            .map(|r| self.row_text(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
