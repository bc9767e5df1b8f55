//! Keyboard input: key types, the byte parser and a non-blocking reader.

mod keyboard;
mod parser;
mod reader;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use parser::{InputParser, ParseError, ParseResult};
pub use reader::KeyReader;
