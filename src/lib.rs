//! `vmarquee` - responsive terminal marquee
//!
//! Scrolls a line of text through a window that wraps column by column down
//! the screen, and lets the user retune speed, direction, window size,
//! placement and text with single key presses.
//!
//! The marquee logic in [`marquee`] is independent of any terminal and
//! draws through the [`Display`](display::Display) trait. [`TerminalDisplay`](display::TerminalDisplay)
//! drives a real terminal with a double-buffered ANSI [`Renderer`];
//! [`HeadlessDisplay`](display::HeadlessDisplay) keeps frames in memory.

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Delay math on integer instants
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow marquee::MarqueeState etc
#![allow(clippy::struct_excessive_bools)] // Renderer options need multiple flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::format_push_string)] // format! with push_str is fine
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::float_cmp)] // Exact delay comparisons in tests

pub mod ansi;
pub mod app;
pub mod buffer;
pub mod cell;
pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod logging;
pub mod marquee;
pub mod renderer;
pub mod terminal;

// Re-export core types at crate root
pub use app::{App, Step};
pub use cell::Cell;
pub use color::{Color, ColorPair, PairId};
pub use config::{Config, ParseResult};
pub use error::{Error, Result};

// Re-export input types
pub use input::{InputParser, KeyCode, KeyEvent, KeyModifiers};

// Re-export commonly used types
pub use buffer::CellBuffer;
pub use display::{Display, HeadlessDisplay, TerminalDisplay};
pub use marquee::{Direction, KeyMap, MarqueeState, MarqueeText, render_window};
pub use renderer::{RenderStats, Renderer, RendererOptions};
pub use terminal::{RawModeGuard, Terminal, enable_raw_mode, is_tty, terminal_size};
