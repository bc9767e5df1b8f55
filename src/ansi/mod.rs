//! ANSI escape sequence generation.

pub mod output;
pub mod sequences;

pub use output::AnsiWriter;
pub use sequences::*;

use crate::color::ColorPair;
use std::io::{self, Write};

/// Write a u32 as decimal digits to a writer without formatting overhead.
#[inline]
fn write_u32_decimal(w: &mut impl Write, n: u32) -> io::Result<()> {
    if n < 10 {
        return w.write_all(&[b'0' + n as u8]);
    }
    if n < 100 {
        return w.write_all(&[b'0' + (n / 10) as u8, b'0' + (n % 10) as u8]);
    }

    let mut buf = [0u8; 10]; // max u32 is 4294967295 (10 digits)
    let mut i = buf.len();
    let mut val = n;
    while val > 0 {
        i -= 1;
        buf[i] = b'0' + (val % 10) as u8;
        val /= 10;
    }
    w.write_all(&buf[i..])
}

/// Generate absolute cursor position sequence (0-based row/col).
#[must_use]
pub fn cursor_position(row: u32, col: u32) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_cursor_position(&mut buf, row, col);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write cursor position sequence to a writer.
pub fn write_cursor_position(w: &mut impl Write, row: u32, col: u32) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    write_u32_decimal(w, row.saturating_add(1))?;
    w.write_all(b";")?;
    write_u32_decimal(w, col.saturating_add(1))?;
    w.write_all(b"H")
}

/// Generate the SGR sequence selecting a color pair.
#[must_use]
pub fn pair_sgr(pair: ColorPair) -> String {
    let mut buf = Vec::new();
    let _ = write_pair_sgr(&mut buf, pair);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the SGR sequence selecting a color pair: `ESC [ fg ; bg m`.
pub fn write_pair_sgr(w: &mut impl Write, pair: ColorPair) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    write_u32_decimal(w, u32::from(pair.fg.fg_code()))?;
    w.write_all(b";")?;
    write_u32_decimal(w, u32::from(pair.bg.bg_code()))?;
    w.write_all(b"m")
}
