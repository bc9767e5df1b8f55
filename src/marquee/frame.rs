//! Drawing one complete frame onto a [`Display`].
//!
//! Layout for a `rows x cols` display:
//!
//! ```text
//! row 0          header, centered
//! rows 1..       marquee block (serpentine from `line`, `column_offset`)
//! rows-10        ": " prompt while entering text
//! rows-9..rows-5 key help
//! rows-4         text entry hint
//! rows-3         column offset
//! rows-2         column size
//! rows-1         delay and speed
//! ```
//!
//! Rows that fall outside a small display are skipped.

use crate::color::PairId;
use crate::display::Display;
use crate::error::Result;
use crate::marquee::command::{Action, CONFIRM_KEY, KeyMap};
use crate::marquee::layout::{palette, place_window};
use crate::marquee::state::{InputMode, MarqueeState};

pub const HEADER: &str = "== RESPONSIVE MARQUEE MANIPULATOR ==";

/// Color pair used by the marquee block.
pub const MARQUEE_PAIR: PairId = PairId(1);

/// Shown after the prompt when the input buffer cannot grow.
pub const BUFFER_FULL: &str = " [buffer full]";

/// Actions listed on each help line, in order.
const HELP_GROUPS: [&[Action]; 5] = [
    &[
        Action::ScrollNegative,
        Action::ScrollPositive,
        Action::LineUp,
        Action::LineDown,
    ],
    &[
        Action::SpeedUp,
        Action::SlowDown,
        Action::Quit,
        Action::ToggleDirection,
    ],
    &[
        Action::WidenWindow,
        Action::NarrowWindow,
        Action::ResetWidth,
    ],
    &[Action::ShiftRight, Action::ShiftLeft, Action::ResetShift],
    &[Action::DirectionDown, Action::DirectionUp],
];

/// The five help lines for a key map. Unbound actions are left out.
#[must_use]
pub fn help_lines(keymap: &KeyMap) -> [String; 5] {
    let mut lines: [String; 5] = Default::default();
    for (i, (line, group)) in lines.iter_mut().zip(HELP_GROUPS).enumerate() {
        let entries: Vec<String> = group
            .iter()
            .filter_map(|&action| {
                keymap
                    .key_for(action)
                    .map(|key| format!("'{key}' {}", action.label()))
            })
            .collect();
        line.push_str(if i == 0 { "Keys: " } else { " " });
        line.push_str(&entries.join(", "));
        if i < 2 {
            line.push(',');
        }
    }
    lines
}

/// Status line with the delay and the resulting speed.
#[must_use]
pub fn speed_line(state: &MarqueeState) -> String {
    format!(
        "Marquee delay: {:.3} ms || Marquee Speed: {:.3} characters per second",
        state.speed_ms,
        state.chars_per_second()
    )
}

/// Draws frames for one key map.
#[derive(Clone, Debug, Default)]
pub struct FrameRenderer {
    help: [String; 5],
    entry_hint: String,
}

impl FrameRenderer {
    #[must_use]
    pub fn new(keymap: &KeyMap) -> Self {
        let entry_hint = keymap
            .key_for(Action::BeginTextEntry)
            .map(|key| format!("Type '{key}' to start entering new input"))
            .unwrap_or_default();
        Self {
            help: help_lines(keymap),
            entry_hint,
        }
    }

    /// Clear, draw and present the frame for `state`.
    ///
    /// Uses `state.geometry` as the display size; the caller refreshes it
    /// before drawing.
    pub fn draw<D: Display + ?Sized>(&self, display: &mut D, state: &MarqueeState) -> Result<()> {
        let rows = u32::from(state.geometry.rows);
        let cols = u32::from(state.geometry.cols);
        let footer = |from_bottom: u32| rows.checked_sub(from_bottom);

        let colors = palette(state.direction);
        display.register_color_pair(MARQUEE_PAIR, colors.fg, colors.bg);
        display.clear();

        let header_col = (cols / 2).saturating_sub(HEADER.len() as u32 / 2);
        display.draw_text(0, header_col, HEADER);

        let visible = state.visible();
        let region = state.geometry.marquee_region();
        for ((row, col), ch) in place_window(&visible, region, state.line, state.column_offset) {
            display.draw_char(row, col, ch, MARQUEE_PAIR);
        }

        if let InputMode::TextEntry { buffer } = &state.mode {
            if let Some(row) = footer(10) {
                let mut prompt = format!(": {buffer}");
                if buffer.is_full() {
                    prompt.push_str(BUFFER_FULL);
                }
                display.draw_text(row, 0, &prompt);
            }
        }

        for (i, line) in (0u32..).zip(&self.help) {
            if let Some(row) = footer(9 - i) {
                display.draw_text(row, 0, line);
            }
        }

        if let Some(row) = footer(4) {
            if state.is_entering_text() {
                display.draw_text(
                    row,
                    0,
                    &format!("Type '{CONFIRM_KEY}' to confirm your new input"),
                );
            } else {
                display.draw_text(row, 0, &self.entry_hint);
            }
        }
        if let Some(row) = footer(3) {
            let text = format!(
                "Column Offset: {} / {}",
                state.column_offset,
                state.geometry.max_column_offset()
            );
            display.draw_text(row, 0, &text);
        }
        if let Some(row) = footer(2) {
            let text = format!("Column Size: {} / {}", state.width, cols);
            display.draw_text(row, 0, &text);
        }
        if let Some(row) = footer(1) {
            display.draw_text(row, 0, &speed_line(state));
        }

        display.present()
    }
}
