//! Mutable marquee parameters and their invariants.
//!
//! Every field that has a valid range is clamped by [`MarqueeState::clamp`],
//! which mutators call after each change. The ranges of `line` and
//! `column_offset` depend on the display size recorded in [`Geometry`];
//! the control loop refreshes it each frame through
//! [`MarqueeState::apply_geometry`].

use crate::error::{Error, Result};
use crate::marquee::layout::Region;
use std::fmt;

/// Longest marquee text, in characters.
pub const MAX_TEXT_LEN: usize = 999;

/// Rows at the bottom of the display reserved for the prompt, help and
/// status lines. `line` never exceeds `rows - RESERVED_FOOTER_ROWS`.
pub const RESERVED_FOOTER_ROWS: u16 = 10;

/// First row of the marquee block (row 0 holds the header).
pub const MARQUEE_FIRST_ROW: u32 = 1;

/// The marquee block ends this many rows above the bottom of the display.
pub const MARQUEE_BOTTOM_MARGIN: u16 = 11;

/// Text shown until the user enters something else.
pub const DEFAULT_TEXT: &str = "This is sample text for horizontal scrolling announcement. | ";

/// Default delay between automatic scroll steps.
pub const DEFAULT_DELAY_MS: f64 = 200.0;

/// Ratio applied to the delay by one speed-up or slow-down step.
pub const SPEED_FACTOR: f64 = 1.2;

/// Upper bound on the delay; repeated slow-downs stop here.
pub const MAX_DELAY_MS: f64 = 3_600_000.0;

/// Printable ASCII text of at most [`MAX_TEXT_LEN`] characters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MarqueeText(String);

impl MarqueeText {
    /// Validate and wrap a string.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.len() > MAX_TEXT_LEN {
            return Err(Error::InvalidText {
                len: text.len(),
                reason: "longer than 999 characters",
            });
        }
        if !text.bytes().all(|b| (0x20..=0x7e).contains(&b)) {
            return Err(Error::InvalidText {
                len: text.chars().count(),
                reason: "only printable ASCII is supported",
            });
        }
        Ok(Self(text))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_TEXT_LEN
    }

    /// Append a printable ASCII character. Returns `false`, leaving the
    /// text unchanged, when full or when `ch` is not printable ASCII.
    pub fn try_push(&mut self, ch: char) -> bool {
        if self.is_full() || !(ch.is_ascii_graphic() || ch == ' ') {
            return false;
        }
        self.0.push(ch);
        true
    }
}

impl fmt::Display for MarqueeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scroll direction of the automatic advance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Offset decreases each tick ("up"; red on yellow).
    #[default]
    Negative,
    /// Offset increases each tick ("down"; green on blue).
    Positive,
}

impl Direction {
    /// The other direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }

    /// Offset change of one automatic step.
    #[must_use]
    pub fn step(self) -> i64 {
        match self {
            Self::Negative => -1,
            Self::Positive => 1,
        }
    }
}

/// Whether keys are commands or text being typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    /// Collecting a replacement text; committed wholesale on confirmation.
    TextEntry { buffer: MarqueeText },
}

/// Last observed display size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Geometry {
    pub rows: u16,
    pub cols: u16,
}

impl Geometry {
    #[must_use]
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    /// Highest allowed `line`, never below 1.
    #[must_use]
    pub fn max_line(&self) -> u32 {
        u32::from(self.rows.saturating_sub(RESERVED_FOOTER_ROWS)).max(1)
    }

    /// Highest allowed column offset.
    #[must_use]
    pub fn max_column_offset(&self) -> u32 {
        u32::from(self.cols.saturating_sub(1))
    }

    /// Rows the marquee block may wrap within.
    #[must_use]
    pub fn marquee_region(&self) -> Region {
        Region::new(
            MARQUEE_FIRST_ROW,
            u32::from(self.rows.saturating_sub(MARQUEE_BOTTOM_MARGIN)),
        )
    }
}

/// Everything the user can tune, owned by the control loop.
#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeState {
    pub text: MarqueeText,
    /// Cumulative scroll displacement, resolved modulo the period at render time.
    pub offset: i64,
    pub width: usize,
    pub line: u32,
    pub column_offset: u32,
    pub speed_ms: f64,
    pub direction: Direction,
    pub mode: InputMode,
    pub geometry: Geometry,
}

impl MarqueeState {
    /// Fresh state for a display; the window starts as wide as the display.
    #[must_use]
    pub fn new(text: MarqueeText, speed_ms: f64, direction: Direction, geometry: Geometry) -> Self {
        let mut state = Self {
            text,
            offset: 0,
            width: usize::from(geometry.cols),
            line: 1,
            column_offset: 0,
            speed_ms,
            direction,
            mode: InputMode::Normal,
            geometry,
        };
        state.clamp();
        state
    }

    /// Re-establish every invariant. Idempotent.
    pub fn clamp(&mut self) {
        self.width = self.width.max(1);
        self.line = self.line.clamp(1, self.geometry.max_line());
        self.column_offset = self.column_offset.min(self.geometry.max_column_offset());
        self.speed_ms = if self.speed_ms.is_finite() && self.speed_ms > 0.0 {
            self.speed_ms.min(MAX_DELAY_MS)
        } else {
            DEFAULT_DELAY_MS
        };
    }

    /// Record the display size. On a change the window is reset to the new
    /// display width at column 0; returns whether anything changed.
    pub fn apply_geometry(&mut self, rows: u16, cols: u16) -> bool {
        let geometry = Geometry::new(rows, cols);
        if geometry == self.geometry {
            return false;
        }
        tracing::info!(rows, cols, "display resized, resetting window");
        self.geometry = geometry;
        self.width = usize::from(cols);
        self.column_offset = 0;
        self.clamp();
        true
    }

    /// Shift the window content by `delta` cells.
    pub fn scroll(&mut self, delta: i64) {
        self.offset = self.offset.wrapping_add(delta);
    }

    /// One automatic step in the current direction.
    pub fn advance(&mut self) {
        self.scroll(self.direction.step());
    }

    /// Move the block's starting row.
    pub fn move_line(&mut self, delta: i32) {
        self.line = self.line.saturating_add_signed(delta);
        self.clamp();
    }

    pub fn resize_window(&mut self, delta: isize) {
        self.width = self.width.saturating_add_signed(delta);
        self.clamp();
    }

    /// Window as tall as the rows above the footer.
    pub fn reset_width(&mut self) {
        self.width = usize::from(self.geometry.rows.saturating_sub(RESERVED_FOOTER_ROWS));
        self.clamp();
    }

    pub fn shift_column(&mut self, delta: i32) {
        self.column_offset = self.column_offset.saturating_add_signed(delta);
        self.clamp();
    }

    pub fn reset_column(&mut self) {
        self.column_offset = 0;
    }

    /// Shorten the delay by [`SPEED_FACTOR`].
    pub fn speed_up(&mut self) {
        self.speed_ms /= SPEED_FACTOR;
        self.clamp();
    }

    /// Lengthen the delay by [`SPEED_FACTOR`].
    pub fn slow_down(&mut self) {
        self.speed_ms *= SPEED_FACTOR;
        self.clamp();
    }

    /// Scroll speed in characters per second.
    #[must_use]
    pub fn chars_per_second(&self) -> f64 {
        1000.0 / self.speed_ms
    }

    /// The characters currently visible in the window.
    #[must_use]
    pub fn visible(&self) -> String {
        crate::marquee::layout::render_window(self.text.as_str(), self.width, self.offset)
    }

    #[must_use]
    pub fn is_entering_text(&self) -> bool {
        matches!(self.mode, InputMode::TextEntry { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(rows: u16, cols: u16) -> MarqueeState {
        MarqueeState::new(
            MarqueeText::new(DEFAULT_TEXT).unwrap(),
            DEFAULT_DELAY_MS,
            Direction::Negative,
            Geometry::new(rows, cols),
        )
    }

    #[test]
    fn test_new_state_starts_maximized() {
        let s = state(24, 80);
        assert_eq!(s.width, 80);
        assert_eq!(s.line, 1);
        assert_eq!(s.column_offset, 0);
        assert_eq!(s.offset, 0);
        assert_eq!(s.mode, InputMode::Normal);
    }

    #[test]
    fn test_marquee_text_validation() {
        assert!(MarqueeText::new("hello | world.").is_ok());
        assert!(MarqueeText::new("tab\there").is_err());
        assert!(MarqueeText::new("caf\u{e9}").is_err());
        assert!(MarqueeText::new("x".repeat(MAX_TEXT_LEN)).is_ok());
        assert!(MarqueeText::new("x".repeat(MAX_TEXT_LEN + 1)).is_err());
    }

    #[test]
    fn test_try_push_respects_capacity() {
        let mut text = MarqueeText::new("x".repeat(MAX_TEXT_LEN - 1)).unwrap();
        assert!(text.try_push('y'));
        assert!(text.is_full());
        assert!(!text.try_push('z'));
        assert_eq!(text.len(), MAX_TEXT_LEN);
        assert!(!MarqueeText::default().try_push('\n'));
    }

    #[test]
    fn test_line_clamped_to_footer() {
        let mut s = state(24, 80);
        s.move_line(-5);
        assert_eq!(s.line, 1);
        s.move_line(100);
        assert_eq!(s.line, 14);
    }

    #[test]
    fn test_tiny_display_keeps_line_at_one() {
        let mut s = state(5, 10);
        s.move_line(3);
        assert_eq!(s.line, 1);
        assert_eq!(s.geometry.marquee_region(), Region::new(1, 1));
    }

    #[test]
    fn test_width_never_below_one() {
        let mut s = state(24, 2);
        s.resize_window(-10);
        assert_eq!(s.width, 1);
        s.resize_window(1);
        assert_eq!(s.width, 2);
    }

    #[test]
    fn test_reset_width_uses_rows_above_footer() {
        let mut s = state(24, 80);
        s.reset_width();
        assert_eq!(s.width, 14);
        let mut tiny = state(8, 80);
        tiny.reset_width();
        assert_eq!(tiny.width, 1);
    }

    #[test]
    fn test_column_offset_bounds() {
        let mut s = state(24, 10);
        s.shift_column(-1);
        assert_eq!(s.column_offset, 0);
        s.shift_column(50);
        assert_eq!(s.column_offset, 9);
        s.reset_column();
        assert_eq!(s.column_offset, 0);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let mut s = state(24, 80);
        s.width = 0;
        s.line = 99;
        s.column_offset = 500;
        s.speed_ms = f64::INFINITY;
        s.clamp();
        let once = s.clone();
        s.clamp();
        assert_eq!(s, once);
        assert_eq!(once.speed_ms, DEFAULT_DELAY_MS);
    }

    #[test]
    fn test_resize_resets_window_only() {
        let mut s = state(24, 80);
        s.offset = -42;
        s.width = 7;
        s.column_offset = 5;
        s.line = 10;
        s.speed_ms = 90.0;
        assert!(s.apply_geometry(12, 40));
        assert_eq!(s.width, 40);
        assert_eq!(s.column_offset, 0);
        assert_eq!(s.line, 2);
        assert_eq!(s.offset, -42);
        assert_eq!(s.speed_ms, 90.0);
        assert!(!s.apply_geometry(12, 40));
    }

    #[test]
    fn test_advance_follows_direction() {
        let mut s = state(24, 80);
        s.advance();
        assert_eq!(s.offset, -1);
        s.direction = s.direction.flipped();
        s.advance();
        s.advance();
        assert_eq!(s.offset, 1);
    }

    #[test]
    fn test_speed_up_always_shortens_delay() {
        let mut s = MarqueeState::new(
            MarqueeText::new("abc").unwrap(),
            0.001,
            Direction::Negative,
            Geometry::new(24, 80),
        );
        for _ in 0..1000 {
            let old = s.speed_ms;
            s.speed_up();
            assert!(s.speed_ms < old, "delay stuck at {old}");
            assert!(s.speed_ms > 0.0);
        }
        s.slow_down();
        assert!(s.speed_ms > 0.0 && s.speed_ms.is_finite());
    }

    #[test]
    fn test_delay_capped_and_sanitized() {
        let mut s = state(24, 80);
        for _ in 0..1000 {
            s.slow_down();
        }
        assert_eq!(s.speed_ms, MAX_DELAY_MS);
        s.speed_ms = f64::NAN;
        s.clamp();
        assert_eq!(s.speed_ms, DEFAULT_DELAY_MS);
        s.speed_ms = 0.0;
        s.clamp();
        assert_eq!(s.speed_ms, DEFAULT_DELAY_MS);
    }
}
