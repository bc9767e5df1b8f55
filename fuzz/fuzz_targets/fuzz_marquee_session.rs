//! Fuzz target driving a whole marquee session.
//!
//! Arbitrary display sizes, key presses and tick counts go through the
//! control loop over a headless display; the state invariants must hold
//! after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::time::{Duration, Instant};
use vmarquee::display::HeadlessDisplay;
use vmarquee::marquee::{Direction, Geometry, KeyMap, MAX_TEXT_LEN, MarqueeState, MarqueeText};
use vmarquee::{App, Step};

#[derive(Arbitrary, Debug)]
enum Op {
    Key(u8),
    Wait(u16),
    Resize(u8, u8),
}

#[derive(Arbitrary, Debug)]
struct Session {
    rows: u8,
    cols: u8,
    offset: i64,
    ops: Vec<Op>,
}

fuzz_target!(|session: Session| {
    let rows = u16::from(session.rows.max(1));
    let cols = u16::from(session.cols.max(1));
    let start = Instant::now();
    let mut state = MarqueeState::new(
        MarqueeText::new("fuzz | ").unwrap(),
        200.0,
        Direction::Negative,
        Geometry::new(rows, cols),
    );
    state.offset = session.offset;
    let mut app = App::new(HeadlessDisplay::new(rows, cols), state, KeyMap::default(), start);
    let mut now = start;

    for op in session.ops.into_iter().take(500) {
        match op {
            Op::Key(byte) => app.display_mut().type_str(&char::from(byte & 0x7f).to_string()),
            Op::Wait(ms) => now += Duration::from_millis(u64::from(ms)),
            Op::Resize(r, c) => app
                .display_mut()
                .resize(u16::from(r.max(1)), u16::from(c.max(1))),
        }
        if app.step(now).unwrap() == Step::Quit {
            break;
        }

        let state = app.state();
        assert!(state.width >= 1);
        assert!(state.line >= 1 && state.line <= state.geometry.max_line());
        assert!(state.column_offset <= state.geometry.max_column_offset());
        assert!(state.speed_ms > 0.0 && state.speed_ms.is_finite());
        assert!(state.text.len() <= MAX_TEXT_LEN);
        assert_eq!(state.visible().chars().count(), state.width);
    }
});
