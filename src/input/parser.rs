//! Byte parser for terminal key input.
//!
//! Turns raw bytes read from a raw-mode terminal into [`KeyEvent`]s. Only
//! what the marquee can act on is decoded: printable ASCII, control keys,
//! Alt+key and the cursor keys. Any other escape sequence is consumed and
//! reported as unrecognized so one stray sequence cannot inject bogus
//! command keys.

use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Error type for input parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input buffer is empty.
    Empty,
    /// Incomplete escape sequence (need more bytes).
    Incomplete,
    /// Unrecognized sequence; the field holds its bytes, all of which were consumed.
    UnrecognizedSequence(Vec<u8>),
}

/// Result of parsing input: the event and the number of bytes consumed.
pub type ParseResult = Result<(KeyEvent, usize), ParseError>;

/// Stateless key parser.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputParser;

impl InputParser {
    /// Create a new input parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse bytes into a key event.
    ///
    /// Call repeatedly, advancing by the consumed count (or by the length of
    /// the unrecognized sequence), until `Empty` or `Incomplete`.
    pub fn parse(&self, input: &[u8]) -> ParseResult {
        let Some(&first) = input.first() else {
            return Err(ParseError::Empty);
        };

        match first {
            0x1b => self.parse_escape(input),
            b'\r' | b'\n' => Ok((KeyEvent::key(KeyCode::Enter), 1)),
            b'\t' => Ok((KeyEvent::key(KeyCode::Tab), 1)),
            0x08 | 0x7f => Ok((KeyEvent::key(KeyCode::Backspace), 1)),
            0x01..=0x1a => {
                // Ctrl+A through Ctrl+Z
                let c = (first - 1 + b'a') as char;
                Ok((KeyEvent::with_ctrl(KeyCode::Char(c)), 1))
            }
            0x20..=0x7e => Ok((KeyEvent::char(first as char), 1)),
            _ => Err(ParseError::UnrecognizedSequence(vec![first])),
        }
    }

    /// Parse an escape sequence.
    fn parse_escape(&self, input: &[u8]) -> ParseResult {
        if input.len() == 1 {
            // Could be just Escape or the start of a sequence.
            return Err(ParseError::Incomplete);
        }

        match input[1] {
            b'[' => self.parse_csi(input),
            b'O' => self.parse_ss3(input),
            0x20..=0x7e => {
                let c = input[1] as char;
                Ok((KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT), 2))
            }
            _ => Ok((KeyEvent::key(KeyCode::Esc), 1)),
        }
    }

    /// Parse a CSI sequence (ESC [ ...).
    fn parse_csi(&self, input: &[u8]) -> ParseResult {
        // Final byte is in 0x40-0x7e.
        let Some(end) = input[2..]
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
            .map(|p| p + 2)
        else {
            return Err(ParseError::Incomplete);
        };

        let modifiers = parse_modifiers(&input[2..end]);
        let code = match input[end] {
            b'A' => KeyCode::Up,
            b'B' => KeyCode::Down,
            b'C' => KeyCode::Right,
            b'D' => KeyCode::Left,
            _ => return Err(ParseError::UnrecognizedSequence(input[..=end].to_vec())),
        };
        Ok((KeyEvent::new(code, modifiers), end + 1))
    }

    /// Parse an SS3 sequence (ESC O x), sent for cursor keys in application mode.
    fn parse_ss3(&self, input: &[u8]) -> ParseResult {
        let Some(&final_byte) = input.get(2) else {
            return Err(ParseError::Incomplete);
        };
        let code = match final_byte {
            b'A' => KeyCode::Up,
            b'B' => KeyCode::Down,
            b'C' => KeyCode::Right,
            b'D' => KeyCode::Left,
            _ => return Err(ParseError::UnrecognizedSequence(input[..3].to_vec())),
        };
        Ok((KeyEvent::key(code), 3))
    }
}

/// Modifiers from CSI parameters of the form `1;N`, where
/// `N = 1 + shift + 2*alt + 4*ctrl`.
fn parse_modifiers(params: &[u8]) -> KeyModifiers {
    let Some(n) = std::str::from_utf8(params)
        .ok()
        .and_then(|s| s.split(';').nth(1))
        .and_then(|m| m.parse::<u8>().ok())
    else {
        return KeyModifiers::empty();
    };
    let n = n.saturating_sub(1);
    let mut mods = KeyModifiers::empty();
    if n & 1 != 0 {
        mods |= KeyModifiers::SHIFT;
    }
    if n & 2 != 0 {
        mods |= KeyModifiers::ALT;
    }
    if n & 4 != 0 {
        mods |= KeyModifiers::CTRL;
    }
    mods
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(bytes: &[u8]) -> ParseResult {
        InputParser::new().parse(bytes)
    }

    #[test]
    fn test_printable_ascii() {
        assert_eq!(parse(b"q"), Ok((KeyEvent::char('q'), 1)));
        assert_eq!(parse(b" x"), Ok((KeyEvent::char(' '), 1)));
        assert_eq!(parse(b"$"), Ok((KeyEvent::char('$'), 1)));
    }

    #[test]
    fn test_enter_variants() {
        assert_eq!(parse(b"\r"), Ok((KeyEvent::key(KeyCode::Enter), 1)));
        assert_eq!(parse(b"\n"), Ok((KeyEvent::key(KeyCode::Enter), 1)));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            parse(b"\x03"),
            Ok((KeyEvent::with_ctrl(KeyCode::Char('c')), 1))
        );
        assert_eq!(parse(b"\x7f"), Ok((KeyEvent::key(KeyCode::Backspace), 1)));
        assert_eq!(parse(b"\t"), Ok((KeyEvent::key(KeyCode::Tab), 1)));
    }

    #[test]
    fn test_lone_escape_is_incomplete() {
        assert_eq!(parse(b"\x1b"), Err(ParseError::Incomplete));
        assert_eq!(parse(b"\x1b\x1b"), Ok((KeyEvent::key(KeyCode::Esc), 1)));
    }

    #[test]
    fn test_alt_key() {
        assert_eq!(
            parse(b"\x1bh"),
            Ok((KeyEvent::new(KeyCode::Char('h'), KeyModifiers::ALT), 2))
        );
    }

    #[test]
    fn test_arrows() {
        assert_eq!(parse(b"\x1b[A"), Ok((KeyEvent::key(KeyCode::Up), 3)));
        assert_eq!(parse(b"\x1bOD"), Ok((KeyEvent::key(KeyCode::Left), 3)));
        assert_eq!(
            parse(b"\x1b[1;5C"),
            Ok((KeyEvent::new(KeyCode::Right, KeyModifiers::CTRL), 6))
        );
    }

    #[test]
    fn test_unknown_csi_is_consumed_whole() {
        assert_eq!(
            parse(b"\x1b[15~q"),
            Err(ParseError::UnrecognizedSequence(b"\x1b[15~".to_vec()))
        );
        assert_eq!(parse(b"\x1b[1;5"), Err(ParseError::Incomplete));
    }

    #[test]
    fn test_high_bytes_are_rejected() {
        assert_eq!(
            parse(&[0xc3, 0xa9]),
            Err(ParseError::UnrecognizedSequence(vec![0xc3]))
        );
        assert_eq!(parse(b""), Err(ParseError::Empty));
    }
}
