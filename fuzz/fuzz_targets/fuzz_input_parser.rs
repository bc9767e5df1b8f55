//! Fuzz target for the key input parser.
//!
//! The parser reads untrusted terminal bytes; it must never panic, must make
//! progress on every call, and must never report more bytes than it was given.

#![no_main]

use libfuzzer_sys::fuzz_target;
use vmarquee::input::{InputParser, ParseError};

fuzz_target!(|data: &[u8]| {
    let parser = InputParser::new();

    let mut remaining = data;
    let mut iterations = 0;
    const MAX_ITERATIONS: usize = 10000;

    while !remaining.is_empty() && iterations < MAX_ITERATIONS {
        iterations += 1;

        match parser.parse(remaining) {
            Ok((_event, consumed)) => {
                assert!(consumed > 0, "parser consumed nothing");
                assert!(consumed <= remaining.len(), "parser overran its input");
                remaining = &remaining[consumed..];
            }
            Err(ParseError::UnrecognizedSequence(seq)) => {
                assert!(!seq.is_empty() && seq.len() <= remaining.len());
                remaining = &remaining[seq.len()..];
            }
            Err(ParseError::Empty | ParseError::Incomplete) => break,
        }
    }

    assert!(
        iterations < MAX_ITERATIONS,
        "Parser appears to be in an infinite loop"
    );
});
