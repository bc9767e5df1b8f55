//! Key-to-action table and state mutation per action.
//!
//! In [`InputMode::Normal`] every key is looked up in a [`KeyMap`]; unbound
//! keys are ignored. In [`InputMode::TextEntry`] letters, digits and space
//! accumulate in the staging buffer until `=` (or Enter) commits it; a
//! Ctrl chord bound to [`Action::Quit`] still quits.

use crate::input::{KeyCode, KeyEvent, KeyModifiers};
use crate::marquee::state::{Direction, InputMode, MarqueeState, MarqueeText};

/// Key that commits the text being entered.
pub const CONFIRM_KEY: char = '=';

/// Everything a bound key can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    ScrollNegative,
    ScrollPositive,
    LineUp,
    LineDown,
    SpeedUp,
    SlowDown,
    ToggleDirection,
    WidenWindow,
    NarrowWindow,
    ResetWidth,
    ShiftRight,
    ShiftLeft,
    ResetShift,
    BeginTextEntry,
    DirectionDown,
    DirectionUp,
}

impl Action {
    /// Short description used in the on-screen help.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::ScrollNegative => "scrolls negative",
            Self::ScrollPositive => "scrolls positive",
            Self::LineUp => "scrolls up",
            Self::LineDown => "scrolls down",
            Self::SpeedUp => "speeds up",
            Self::SlowDown => "speeds down",
            Self::ToggleDirection => "toggle direction",
            Self::WidenWindow => "increase column size",
            Self::NarrowWindow => "decrease column size",
            Self::ResetWidth => "reset column size",
            Self::ShiftRight => "increase offset",
            Self::ShiftLeft => "decrease offset",
            Self::ResetShift => "reset offset",
            Self::BeginTextEntry => "enter new text",
            Self::DirectionDown => "down direction",
            Self::DirectionUp => "up direction",
        }
    }

    /// Apply the action to `state`. `Quit` is handled by [`dispatch`].
    fn apply(self, state: &mut MarqueeState) {
        match self {
            Self::Quit => {}
            Self::ScrollNegative => state.scroll(-1),
            Self::ScrollPositive => state.scroll(1),
            Self::LineUp => state.move_line(-1),
            Self::LineDown => state.move_line(1),
            Self::SpeedUp => state.speed_up(),
            Self::SlowDown => state.slow_down(),
            Self::ToggleDirection => state.direction = state.direction.flipped(),
            Self::WidenWindow => state.resize_window(1),
            Self::NarrowWindow => state.resize_window(-1),
            Self::ResetWidth => state.reset_width(),
            Self::ShiftRight => state.shift_column(1),
            Self::ShiftLeft => state.shift_column(-1),
            Self::ResetShift => state.reset_column(),
            Self::BeginTextEntry => {
                state.mode = InputMode::TextEntry {
                    buffer: MarqueeText::default(),
                };
            }
            Self::DirectionDown => state.direction = Direction::Positive,
            Self::DirectionUp => state.direction = Direction::Negative,
        }
    }
}

/// Default bindings, one key per action.
const DEFAULT_BINDINGS: &[(char, Action)] = &[
    ('q', Action::Quit),
    ('h', Action::ScrollNegative),
    ('l', Action::ScrollPositive),
    ('k', Action::LineUp),
    ('j', Action::LineDown),
    ('f', Action::SpeedUp),
    ('b', Action::SlowDown),
    ('t', Action::ToggleDirection),
    (']', Action::WidenWindow),
    ('[', Action::NarrowWindow),
    ('$', Action::ResetWidth),
    ('>', Action::ShiftRight),
    ('<', Action::ShiftLeft),
    ('0', Action::ResetShift),
    ('e', Action::BeginTextEntry),
    ('d', Action::DirectionDown),
    ('u', Action::DirectionUp),
];

/// Explicit table of key bindings for normal mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    bindings: Vec<(KeyEvent, Action)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut bindings: Vec<_> = DEFAULT_BINDINGS
            .iter()
            .map(|&(ch, action)| (KeyEvent::char(ch), action))
            .collect();
        // Raw mode delivers ^C as a key.
        bindings.push((KeyEvent::with_ctrl(KeyCode::Char('c')), Action::Quit));
        Self { bindings }
    }
}

impl KeyMap {
    /// A map with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Action bound to a key, if any.
    #[must_use]
    pub fn lookup(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == key)
            .map(|&(_, action)| action)
    }

    /// Bind `key` to `action`, replacing whatever `key` did before.
    pub fn bind(&mut self, key: impl Into<KeyEvent>, action: Action) {
        let key = key.into();
        self.bindings.retain(|(bound, _)| *bound != key);
        self.bindings.push((key, action));
    }

    /// First plain key bound to `action`, for help text.
    #[must_use]
    pub fn key_for(&self, action: Action) -> Option<KeyEvent> {
        self.bindings
            .iter()
            .filter(|&&(_, bound)| bound == action)
            .map(|&(key, _)| key)
            .min_by_key(|key| !key.modifiers.is_empty())
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// What a key press did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Unbound key, or a rejected character in text entry.
    Ignored,
    /// State changed; the frame should be redrawn.
    Updated,
    /// The control loop should stop.
    Quit,
}

/// Route one key press to the state.
pub fn dispatch(state: &mut MarqueeState, keymap: &KeyMap, key: KeyEvent) -> Dispatch {
    if state.is_entering_text() {
        if key.modifiers.contains(KeyModifiers::CTRL) && keymap.lookup(&key) == Some(Action::Quit) {
            tracing::debug!("quit requested during text entry");
            return Dispatch::Quit;
        }
        return enter_text(state, key);
    }

    let Some(action) = keymap.lookup(&key) else {
        tracing::trace!(?key, "unbound key");
        return Dispatch::Ignored;
    };
    if action == Action::Quit {
        tracing::debug!("quit requested");
        return Dispatch::Quit;
    }
    action.apply(state);
    tracing::debug!(
        ?action,
        offset = state.offset,
        width = state.width,
        line = state.line,
        column_offset = state.column_offset,
        speed_ms = state.speed_ms,
        "action applied"
    );
    Dispatch::Updated
}

fn enter_text(state: &mut MarqueeState, key: KeyEvent) -> Dispatch {
    if key.is_enter() || key.plain_char() == Some(CONFIRM_KEY) {
        return commit_text(state);
    }
    let InputMode::TextEntry { buffer } = &mut state.mode else {
        return Dispatch::Ignored;
    };
    match key.plain_char() {
        Some(ch) if ch.is_ascii_alphanumeric() || ch == ' ' => {
            if buffer.try_push(ch) {
                Dispatch::Updated
            } else {
                tracing::debug!(len = buffer.len(), "input buffer full, key dropped");
                Dispatch::Ignored
            }
        }
        _ => Dispatch::Ignored,
    }
}

fn commit_text(state: &mut MarqueeState) -> Dispatch {
    if let InputMode::TextEntry { buffer } = std::mem::take(&mut state.mode) {
        tracing::info!(len = buffer.len(), "marquee text replaced");
        state.text = buffer;
    }
    Dispatch::Updated
}
