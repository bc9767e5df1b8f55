//! Display backed by the process's controlling terminal.

use crate::cell::Cell;
use crate::color::{Color, PairId};
use crate::display::Display;
use crate::error::{Error, Result};
use crate::input::{KeyEvent, KeyReader};
use crate::renderer::{Renderer, RendererOptions};
use crate::terminal::{self, NonBlockingGuard, RawModeGuard};
use std::io::{self, Stdin, Stdout};

/// Real terminal: raw-mode stdin, alternate screen on stdout.
///
/// Field order matters: the renderer is dropped first so the screen is
/// restored before termios and the stdin flags are.
pub struct TerminalDisplay {
    renderer: Renderer<Stdout>,
    keys: KeyReader<Stdin>,
    _nonblocking: NonBlockingGuard,
    _raw_mode: RawModeGuard,
}

impl TerminalDisplay {
    /// Take over the terminal.
    ///
    /// Fails with [`Error::NotATerminal`] when stdout or stdin is not a TTY.
    pub fn open() -> Result<Self> {
        if !terminal::is_tty(&io::stdout()) || !terminal::is_tty(&io::stdin()) {
            return Err(Error::NotATerminal);
        }
        let (rows, cols) = terminal::terminal_size()?;
        let raw_mode = terminal::enable_raw_mode()?;
        let nonblocking = NonBlockingGuard::new(&io::stdin())?;
        let renderer =
            Renderer::new_with_options(io::stdout(), rows, cols, RendererOptions::default())?;
        tracing::info!(rows, cols, "terminal display opened");
        Ok(Self {
            renderer,
            keys: KeyReader::new(io::stdin()),
            _nonblocking: nonblocking,
            _raw_mode: raw_mode,
        })
    }
}

impl Display for TerminalDisplay {
    fn size(&mut self) -> Result<(u16, u16)> {
        let (rows, cols) = terminal::terminal_size()?;
        self.renderer.resize(rows, cols);
        Ok((rows, cols))
    }

    fn clear(&mut self) {
        self.renderer.clear();
    }

    fn draw_char(&mut self, row: u32, col: u32, ch: char, pair: PairId) {
        self.renderer.buffer().set(row, col, Cell::new(ch, pair));
    }

    fn draw_text(&mut self, row: u32, col: u32, text: &str) {
        self.renderer
            .buffer()
            .draw_text(row, col, text, PairId::DEFAULT);
    }

    fn present(&mut self) -> Result<()> {
        self.renderer.present()?;
        Ok(())
    }

    fn register_color_pair(&mut self, id: PairId, fg: Color, bg: Color) {
        self.renderer.register_pair(id, fg, bg);
    }

    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        Ok(self.keys.poll()?)
    }
}
