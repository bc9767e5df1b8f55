//! Buffered ANSI output writer with state tracking.

use crate::ansi;
use crate::cell::Cell;
use crate::color::{ColorPair, PairTable};
use std::io::{self, Write};

/// Buffered writer that tracks cursor position and active colors so that
/// consecutive cells in the same pair on the same row cost one byte each.
pub struct AnsiWriter<W: Write> {
    writer: W,
    buffer: Vec<u8>,

    current_pair: Option<ColorPair>,
    // None until the first explicit move; the real terminal cursor may be anywhere.
    cursor: Option<(u32, u32)>,
}

impl<W: Write> AnsiWriter<W> {
    /// Create a new ANSI writer wrapping the given output.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: Vec::with_capacity(4096),
            current_pair: None,
            cursor: None,
        }
    }

    /// Write a raw string to the buffer.
    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Move cursor unless it is already there.
    pub fn move_cursor(&mut self, row: u32, col: u32) {
        if self.cursor == Some((row, col)) {
            return;
        }
        let _ = ansi::write_cursor_position(&mut self.buffer, row, col);
        self.cursor = Some((row, col));
    }

    /// Switch colors unless the pair is already active.
    pub fn set_pair(&mut self, pair: ColorPair) {
        if self.current_pair == Some(pair) {
            return;
        }
        let _ = ansi::write_pair_sgr(&mut self.buffer, pair);
        self.current_pair = Some(pair);
    }

    /// Write a cell at a position.
    pub fn write_cell(&mut self, row: u32, col: u32, cell: &Cell, pairs: &PairTable) {
        self.move_cursor(row, col);
        self.set_pair(pairs.get(cell.pair));
        let mut utf8 = [0u8; 4];
        self.buffer
            .extend_from_slice(cell.ch.encode_utf8(&mut utf8).as_bytes());
        self.cursor = Some((row, col.saturating_add(1)));
    }

    /// Reset colors to the terminal default.
    pub fn reset(&mut self) {
        self.write_str(ansi::RESET);
        self.current_pair = None;
    }

    /// Bytes buffered but not yet flushed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Flush buffered output to the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        if !self.buffer.is_empty() {
            self.writer.write_all(&self.buffer)?;
            self.buffer.clear();
        }
        self.writer.flush()
    }
}
