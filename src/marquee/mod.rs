//! The marquee itself: layout, state, commands, clock and frame drawing.
//!
//! Everything here is independent of the terminal. [`layout`] is a pure
//! transform; [`state`] and [`command`] own the mutable parameters; [`clock`]
//! decides when the automatic scroll advances; [`frame`] draws through the
//! [`Display`](crate::display::Display) trait.

pub mod clock;
pub mod command;
pub mod frame;
pub mod layout;
pub mod state;

pub use clock::TickScheduler;
pub use command::{Action, CONFIRM_KEY, Dispatch, KeyMap, dispatch};
pub use frame::{FrameRenderer, HEADER, MARQUEE_PAIR};
pub use layout::{Region, SerpentinePlacement, palette, place_window, render_window};
pub use state::{
    DEFAULT_DELAY_MS, DEFAULT_TEXT, Direction, Geometry, InputMode, MAX_TEXT_LEN, MarqueeState,
    MarqueeText, RESERVED_FOOTER_ROWS,
};
