//! Double-buffered terminal renderer with diff detection.
//!
//! [`Renderer`] owns two [`CellBuffer`]s. Drawing goes to the back buffer;
//! [`present`](Renderer::present) compares it with the front buffer (the
//! frame currently on screen) and writes ANSI output only for cells that
//! changed. The marquee redraws its whole frame on every tick, but between
//! two ticks only the scrolling block and perhaps one status line differ,
//! so the diff keeps terminal traffic small.
//!
//! The renderer is generic over its output so tests can render into a
//! `Vec<u8>` and inspect the bytes.

mod diff;

pub use diff::BufferDiff;

use crate::ansi::AnsiWriter;
use crate::buffer::CellBuffer;
use crate::cell::Cell;
use crate::color::{Color, ColorPair, PairId, PairTable};
use crate::terminal::Terminal;
use std::io::{self, Write};

/// Renderer configuration options.
#[derive(Clone, Copy, Debug)]
pub struct RendererOptions {
    /// Use the alternate screen buffer.
    pub use_alt_screen: bool,
    /// Hide the cursor on start.
    pub hide_cursor: bool,
    /// Wrap frame output in synchronized-update sequences.
    pub sync_output: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            use_alt_screen: true,
            hide_cursor: true,
            sync_output: true,
        }
    }
}

/// Rendering statistics.
#[derive(Clone, Debug, Default)]
pub struct RenderStats {
    pub frames: u64,
    pub last_frame_cells: usize,
    pub total_bytes: usize,
}

/// Terminal renderer with double buffering.
pub struct Renderer<W: Write> {
    front_buffer: CellBuffer,
    back_buffer: CellBuffer,
    pairs: PairTable,

    terminal: Terminal<W>,
    scratch_buffer: Vec<u8>,
    cached_diff: BufferDiff,

    options: RendererOptions,
    force_redraw: bool,
    stats: RenderStats,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer with default options and set up the terminal.
    pub fn new(writer: W, rows: u16, cols: u16) -> io::Result<Self> {
        Self::new_with_options(writer, rows, cols, RendererOptions::default())
    }

    /// Create a renderer with custom options.
    pub fn new_with_options(
        writer: W,
        rows: u16,
        cols: u16,
        options: RendererOptions,
    ) -> io::Result<Self> {
        let mut terminal = Terminal::new(writer);
        if options.use_alt_screen {
            terminal.enter_alt_screen()?;
        }
        if options.hide_cursor {
            terminal.hide_cursor()?;
        }
        terminal.flush()?;

        let total_cells = usize::from(rows) * usize::from(cols);
        Ok(Self {
            front_buffer: CellBuffer::new(rows, cols),
            back_buffer: CellBuffer::new(rows, cols),
            pairs: PairTable::new(),
            terminal,
            scratch_buffer: Vec::with_capacity(total_cells.saturating_mul(8)),
            cached_diff: BufferDiff::with_capacity(total_cells / 8),
            options,
            force_redraw: true,
            stats: RenderStats::default(),
        })
    }

    /// Back buffer dimensions as `(rows, cols)`.
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        self.back_buffer.size()
    }

    /// The back buffer being drawn into.
    pub fn buffer(&mut self) -> &mut CellBuffer {
        &mut self.back_buffer
    }

    /// The frame most recently presented.
    #[must_use]
    pub fn front_buffer(&self) -> &CellBuffer {
        &self.front_buffer
    }

    #[must_use]
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Define a color pair for later draws.
    ///
    /// Redefining a pair with different colors repaints the next frame;
    /// registering the same colors again is free.
    pub fn register_pair(&mut self, id: PairId, fg: Color, bg: Color) {
        let pair = ColorPair::new(fg, bg);
        if self.pairs.get(id) == pair {
            return;
        }
        self.pairs.register(id, pair);
        // Cells already on screen may use the redefined pair.
        self.force_redraw = true;
    }

    /// Clear the back buffer.
    pub fn clear(&mut self) {
        self.back_buffer.clear();
    }

    /// Resize both buffers; the next present repaints the whole screen.
    pub fn resize(&mut self, rows: u16, cols: u16) {
        if (rows, cols) == self.back_buffer.size() {
            return;
        }
        self.front_buffer.resize(rows, cols);
        self.back_buffer.resize(rows, cols);
        self.force_redraw = true;
    }

    /// Write changed cells to the terminal.
    pub fn present(&mut self) -> io::Result<()> {
        let total_cells = usize::from(self.back_buffer.rows()) * usize::from(self.back_buffer.cols());
        self.cached_diff
            .compute_into(&self.front_buffer, &self.back_buffer);

        let full = self.force_redraw || self.cached_diff.should_full_redraw(total_cells);
        if full {
            self.write_full()?;
        } else if !self.cached_diff.is_empty() {
            self.write_diff()?;
        }

        self.stats.frames += 1;
        self.stats.last_frame_cells = if full {
            total_cells
        } else {
            self.cached_diff.changed_cells.len()
        };
        self.force_redraw = false;
        self.front_buffer.clone_from(&self.back_buffer);
        Ok(())
    }

    fn write_full(&mut self) -> io::Result<()> {
        self.scratch_buffer.clear();
        let mut writer = AnsiWriter::new(&mut self.scratch_buffer);
        writer.write_str(crate::ansi::RESET);
        writer.write_str(crate::ansi::CLEAR_SCREEN);
        for row in 0..u32::from(self.back_buffer.rows()) {
            for col in 0..u32::from(self.back_buffer.cols()) {
                if let Some(cell) = self.back_buffer.get(row, col) {
                    // The screen was just cleared; blank cells need no output.
                    if !cell.is_blank() {
                        writer.write_cell(row, col, cell, &self.pairs);
                    }
                }
            }
        }
        writer.reset();
        writer.flush()?;
        self.emit()
    }

    fn write_diff(&mut self) -> io::Result<()> {
        self.scratch_buffer.clear();
        let mut writer = AnsiWriter::new(&mut self.scratch_buffer);
        for &(row, col) in &self.cached_diff.changed_cells {
            let cell = self.back_buffer.get(row, col).copied().unwrap_or(Cell::BLANK);
            writer.write_cell(row, col, &cell, &self.pairs);
        }
        writer.reset();
        writer.flush()?;
        self.emit()
    }

    /// Send the scratch buffer to the terminal.
    fn emit(&mut self) -> io::Result<()> {
        if self.options.sync_output {
            self.terminal.begin_sync()?;
        }
        self.terminal.writer().write_all(&self.scratch_buffer)?;
        if self.options.sync_output {
            self.terminal.end_sync()?;
        }
        self.stats.total_bytes += self.scratch_buffer.len();
        self.terminal.flush()
    }

    /// Restore the terminal explicitly; also happens on drop.
    pub fn cleanup(&mut self) -> io::Result<()> {
        self.terminal.cleanup()
    }
}
