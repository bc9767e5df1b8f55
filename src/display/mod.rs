//! The display surface the marquee draws on.
//!
//! [`Display`] is the whole contract between the marquee and a screen:
//! size query, clear, character/text drawing with color pairs, presenting a
//! finished frame, and non-blocking key polling. [`TerminalDisplay`] drives
//! a real terminal; [`HeadlessDisplay`] keeps everything in memory and is
//! fed scripted keys, which is how the control loop is tested.

mod headless;
mod terminal;

pub use headless::HeadlessDisplay;
pub use terminal::TerminalDisplay;

use crate::color::{Color, PairId};
use crate::error::Result;
use crate::input::KeyEvent;

/// Character-cell display with color pairs and keyboard input.
///
/// Coordinates are zero-based `(row, col)`. Anything drawn outside the
/// current size is clipped.
pub trait Display {
    /// Current size as `(rows, cols)`.
    fn size(&mut self) -> Result<(u16, u16)>;

    /// Blank the frame being composed.
    fn clear(&mut self);

    /// Draw one character with a registered color pair.
    fn draw_char(&mut self, row: u32, col: u32, ch: char, pair: PairId);

    /// Draw a single line of text in the default colors.
    fn draw_text(&mut self, row: u32, col: u32, text: &str);

    /// Make the composed frame visible.
    fn present(&mut self) -> Result<()>;

    /// Define the colors of a pair.
    fn register_color_pair(&mut self, id: PairId, fg: Color, bg: Color);

    /// Next pending key, `None` if there is none. Must not block.
    fn poll_key(&mut self) -> Result<Option<KeyEvent>>;
}
