//! Non-blocking key reader.

use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};
use crate::input::parser::{InputParser, ParseError};
use std::collections::VecDeque;
use std::io::{self, Read};

/// Pulls whatever bytes are available from a non-blocking source and hands
/// out parsed keys one at a time.
#[derive(Debug)]
pub struct KeyReader<R: Read> {
    source: R,
    parser: InputParser,
    pending: Vec<u8>,
    keys: VecDeque<KeyEvent>,
}

impl<R: Read> KeyReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            parser: InputParser::new(),
            pending: Vec::with_capacity(64),
            keys: VecDeque::new(),
        }
    }

    /// Next key, or `None` if nothing is pending. Never blocks as long as
    /// the source is non-blocking.
    pub fn poll(&mut self) -> io::Result<Option<KeyEvent>> {
        if let Some(key) = self.keys.pop_front() {
            return Ok(Some(key));
        }

        let read = self.fill()?;
        self.drain(read == 0);
        Ok(self.keys.pop_front())
    }

    /// Read available bytes; returns how many arrived.
    fn fill(&mut self) -> io::Result<usize> {
        let mut buf = [0u8; 256];
        match self.source.read(&mut buf) {
            Ok(n) => {
                self.pending.extend_from_slice(&buf[..n]);
                Ok(n)
            }
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted) => {
                Ok(0)
            }
            Err(e) => Err(e),
        }
    }

    /// Parse as many complete keys as the pending bytes hold.
    fn drain(&mut self, source_idle: bool) {
        let mut offset = 0;
        while offset < self.pending.len() {
            match self.parser.parse(&self.pending[offset..]) {
                Ok((key, consumed)) => {
                    self.keys.push_back(key);
                    offset += consumed;
                }
                Err(ParseError::UnrecognizedSequence(seq)) => {
                    tracing::trace!(bytes = ?seq, "ignoring unrecognized input sequence");
                    offset += seq.len().max(1);
                }
                Err(ParseError::Incomplete) if source_idle => match self.pending[offset..] {
                    // A lone ESC with nothing following it is the Escape key itself.
                    [0x1b] => {
                        self.keys.push_back(KeyEvent::key(KeyCode::Esc));
                        offset += 1;
                    }
                    // An introducer that never completed was Alt plus that key.
                    [0x1b, intro @ (b'[' | b'O')] => {
                        let key = KeyEvent::new(KeyCode::Char(char::from(intro)), KeyModifiers::ALT);
                        self.keys.push_back(key);
                        offset += 2;
                    }
                    _ => break,
                },
                Err(_) => break,
            }
        }
        self.pending.drain(..offset);
    }
}
