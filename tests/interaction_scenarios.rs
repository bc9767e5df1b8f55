//! End-to-end scenarios: scripted keys driving the control loop over a
//! headless display.

use std::sync::Once;
use std::time::{Duration, Instant};
use vmarquee::color::{Color, ColorPair};
use vmarquee::display::HeadlessDisplay;
use vmarquee::input::KeyCode;
use vmarquee::marquee::{Direction, Geometry, InputMode, KeyMap, MarqueeState, MarqueeText};
use vmarquee::{App, Step};

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

struct Harness {
    app: App<HeadlessDisplay>,
    now: Instant,
}

impl Harness {
    fn new(text: &str, rows: u16, cols: u16) -> Self {
        setup_test_logging();
        let now = Instant::now();
        let state = MarqueeState::new(
            MarqueeText::new(text).expect("valid text"),
            200.0,
            Direction::Negative,
            Geometry::new(rows, cols),
        );
        let app = App::new(HeadlessDisplay::new(rows, cols), state, KeyMap::default(), now);
        Self { app, now }
    }

    /// Feed keys and step until they are all consumed, without advancing time.
    fn keys(&mut self, keys: &str) -> Step {
        self.app.display_mut().type_str(keys);
        self.drain()
    }

    fn drain(&mut self) -> Step {
        let mut last = self.app.step(self.now).expect("step");
        while self.app.display().pending_keys() > 0 && last != Step::Quit {
            last = self.app.step(self.now).expect("step");
        }
        last
    }

    fn advance(&mut self, ms: u64) -> Step {
        self.now += Duration::from_millis(ms);
        self.app.step(self.now).expect("step")
    }

    fn row(&self, row: u32) -> String {
        self.app.display().frame().row_text(row).trim_end().to_string()
    }

    /// Characters of the marquee block in placement order.
    fn column(&self, col: u32, rows: std::ops::RangeInclusive<u32>) -> String {
        let frame = self.app.display().frame();
        rows.map(|r| frame.get(r, col).map_or('?', |c| c.ch)).collect()
    }
}

#[test]
fn scroll_keys_shift_window_content() {
    let mut h = Harness::new("ABCDE", 24, 3);
    h.drain();
    assert_eq!(h.column(0, 1..=3), "ABC");
    h.keys("l");
    assert_eq!(h.column(0, 1..=3), "EAB");
    h.keys("hh");
    assert_eq!(h.column(0, 1..=3), "BCD");
}

#[test]
fn automatic_scroll_follows_direction() {
    let mut h = Harness::new("ABCDE", 24, 3);
    h.drain();
    assert_eq!(h.advance(199), Step::Idle);
    assert_eq!(h.advance(1), Step::Busy);
    assert_eq!(h.app.state().offset, -1);
    assert_eq!(h.column(0, 1..=3), "BCD");

    h.keys("d");
    h.advance(200);
    h.advance(200);
    assert_eq!(h.app.state().offset, 1);
    assert_eq!(h.column(0, 1..=3), "EAB");
}

#[test]
fn stalled_loop_catches_up_one_step_per_iteration() {
    let mut h = Harness::new("ABCDE", 24, 3);
    h.drain();
    h.now += Duration::from_millis(1000);
    for expected in 1..=5 {
        assert_eq!(h.app.step(h.now).unwrap(), Step::Busy);
        assert_eq!(h.app.state().offset, -expected);
    }
    assert_eq!(h.app.step(h.now).unwrap(), Step::Idle);
}

#[test]
fn speed_keys_change_tick_rate() {
    let mut h = Harness::new("ABCDE", 24, 80);
    h.drain();
    h.keys("f");
    assert_eq!(h.app.state().speed_ms, 200.0 / 1.2);
    assert!(h.row(23).starts_with("Marquee delay: 166.667 ms || Marquee Speed: 6.000"));
    h.keys("bb");
    assert!(h.row(23).starts_with("Marquee delay: 240.000 ms"));
}

#[test]
fn toggle_direction_changes_palette() {
    let mut h = Harness::new("ABC", 24, 10);
    h.drain();
    assert_eq!(
        h.app.display().colors_at(1, 0),
        Some(ColorPair::new(Color::Red, Color::Yellow))
    );
    h.keys("t");
    assert_eq!(h.app.state().direction, Direction::Positive);
    assert_eq!(
        h.app.display().colors_at(1, 0),
        Some(ColorPair::new(Color::Green, Color::Blue))
    );
}

#[test]
fn text_entry_replaces_text_on_confirm() {
    let mut h = Harness::new("ABCDE", 24, 40);
    h.keys("e");
    assert!(h.app.state().is_entering_text());
    assert_eq!(h.row(14), ":");
    assert_eq!(h.row(20), "Type '=' to confirm your new input");

    h.keys("hi 2");
    assert_eq!(h.row(14), ": hi 2");
    assert_eq!(h.app.state().text.as_str(), "ABCDE");
    assert_eq!(h.app.state().offset, 0, "h was typed, not executed");

    h.keys("=");
    assert_eq!(h.app.state().text.as_str(), "hi 2");
    assert_eq!(h.app.state().mode, InputMode::Normal);
    assert_eq!(h.row(14), "");
    assert_eq!(h.row(20), "Type 'e' to start entering new input");
}

#[test]
fn enter_confirms_text_entry() {
    let mut h = Harness::new("ABCDE", 24, 40);
    h.keys("enews");
    h.app.display_mut().push_keys([KeyCode::Enter]);
    h.drain();
    assert_eq!(h.app.state().text.as_str(), "news");
}

#[test]
fn empty_entry_yields_blank_marquee() {
    let mut h = Harness::new("ABCDE", 24, 4);
    h.keys("e=");
    assert!(h.app.state().text.is_empty());
    assert_eq!(h.column(0, 1..=4), "    ");
}

#[test]
fn window_width_and_reset() {
    let mut h = Harness::new("ABC", 24, 80);
    h.keys("[[[");
    assert_eq!(h.row(22), "Column Size: 77 / 80");
    h.keys("]");
    assert_eq!(h.row(22), "Column Size: 78 / 80");
    h.keys("$");
    assert_eq!(h.row(22), "Column Size: 14 / 80");
}

#[test]
fn column_offset_keys_move_block() {
    let mut h = Harness::new("XYZ", 24, 80);
    h.keys("[");
    h.keys(">>");
    assert_eq!(h.row(21), "Column Offset: 2 / 79");
    assert_eq!(h.column(2, 1..=3), "XYZ");
    h.keys("<");
    assert_eq!(h.column(1, 1..=3), "XYZ");
    h.keys("0");
    assert_eq!(h.row(21), "Column Offset: 0 / 79");
    assert_eq!(h.column(0, 1..=3), "XYZ");
}

#[test]
fn line_keys_move_start_row() {
    let mut h = Harness::new("XY", 24, 80);
    h.keys("jj");
    assert_eq!(h.app.state().line, 3);
    assert_eq!(h.column(0, 3..=4), "XY");
    h.keys(&"j".repeat(40));
    assert_eq!(h.app.state().line, 14);
    h.keys(&"k".repeat(40));
    assert_eq!(h.app.state().line, 1);
}

#[test]
fn resize_resets_width_and_column() {
    let mut h = Harness::new("ABC", 24, 80);
    h.keys("[[>>>lf");
    let offset = h.app.state().offset;
    let speed = h.app.state().speed_ms;

    h.app.display_mut().resize(20, 50);
    h.drain();
    let state = h.app.state();
    assert_eq!(state.width, 50);
    assert_eq!(state.column_offset, 0);
    assert_eq!(state.offset, offset);
    assert_eq!(state.speed_ms, speed);
    assert_eq!(state.text.as_str(), "ABC");
    assert_eq!(h.row(18), "Column Size: 50 / 50");
}

#[test]
fn quit_stops_the_loop() {
    let mut h = Harness::new("ABC", 24, 80);
    assert_eq!(h.keys("zq"), Step::Quit);
}

#[test]
fn run_ticks_reports_quit() {
    let mut h = Harness::new("ABC", 24, 80);
    h.app.display_mut().type_str("q");
    assert!(!h.app.run_ticks(Instant::now(), 10).unwrap());
}
