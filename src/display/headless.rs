//! In-memory display for tests and smoke runs.

use crate::buffer::CellBuffer;
use crate::cell::Cell;
use crate::color::{Color, ColorPair, PairId, PairTable};
use crate::display::Display;
use crate::error::Result;
use crate::input::KeyEvent;
use std::collections::VecDeque;

/// Display that composes frames into a [`CellBuffer`] and replays a
/// scripted key queue.
///
/// # Examples
///
/// ```
/// use vmarquee::display::{Display, HeadlessDisplay};
///
/// let mut display = HeadlessDisplay::new(4, 20);
/// display.draw_text(1, 2, "hello");
/// display.present().unwrap();
/// assert_eq!(display.frame().row_text(1).trim_end(), "  hello");
/// ```
#[derive(Clone, Debug)]
pub struct HeadlessDisplay {
    composing: CellBuffer,
    presented: CellBuffer,
    pairs: PairTable,
    keys: VecDeque<KeyEvent>,
    presents: u64,
}

impl HeadlessDisplay {
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            composing: CellBuffer::new(rows, cols),
            presented: CellBuffer::new(rows, cols),
            pairs: PairTable::new(),
            keys: VecDeque::new(),
            presents: 0,
        }
    }

    /// Queue keys to be returned by [`poll_key`](Display::poll_key).
    pub fn push_keys<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyEvent>,
    {
        self.keys.extend(keys.into_iter().map(Into::into));
    }

    /// Queue every character of a string as a key press.
    pub fn type_str(&mut self, text: &str) {
        self.push_keys(text.chars());
    }

    /// Keys not yet polled.
    #[must_use]
    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    /// Simulate a terminal resize. Takes effect on the next frame.
    pub fn resize(&mut self, rows: u16, cols: u16) {
        self.composing.resize(rows, cols);
    }

    /// The last presented frame.
    #[must_use]
    pub fn frame(&self) -> &CellBuffer {
        &self.presented
    }

    /// Colors of the cell at a position in the last presented frame.
    #[must_use]
    pub fn colors_at(&self, row: u32, col: u32) -> Option<ColorPair> {
        self.presented.get(row, col).map(|c| self.pairs.get(c.pair))
    }

    /// How many frames were presented.
    #[must_use]
    pub fn present_count(&self) -> u64 {
        self.presents
    }
}

impl Display for HeadlessDisplay {
    fn size(&mut self) -> Result<(u16, u16)> {
        Ok(self.composing.size())
    }

    fn clear(&mut self) {
        self.composing.clear();
    }

    fn draw_char(&mut self, row: u32, col: u32, ch: char, pair: PairId) {
        self.composing.set(row, col, Cell::new(ch, pair));
    }

    fn draw_text(&mut self, row: u32, col: u32, text: &str) {
        self.composing.draw_text(row, col, text, PairId::DEFAULT);
    }

    fn present(&mut self) -> Result<()> {
        self.presented.clone_from(&self.composing);
        self.presents += 1;
        Ok(())
    }

    fn register_color_pair(&mut self, id: PairId, fg: Color, bg: Color) {
        self.pairs.register(id, ColorPair::new(fg, bg));
    }

    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        Ok(self.keys.pop_front())
    }
}
