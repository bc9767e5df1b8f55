//! Renderer output fed through a VT100 emulator must reproduce the frame.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use vmarquee::cell::Cell;
use vmarquee::color::{Color, PairId};
use vmarquee::display::Display;
use vmarquee::input::KeyEvent;
use vmarquee::marquee::{Direction, FrameRenderer, Geometry, KeyMap, MarqueeState, MarqueeText};
use vmarquee::{Renderer, RendererOptions};

/// Writer whose bytes stay readable while the renderer owns it.
#[derive(Clone, Default)]
struct SharedOutput(Rc<RefCell<Vec<u8>>>);

impl SharedOutput {
    fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Display over a renderer with no input.
struct RendererDisplay {
    renderer: Renderer<SharedOutput>,
}

impl Display for RendererDisplay {
    fn size(&mut self) -> vmarquee::Result<(u16, u16)> {
        Ok(self.renderer.size())
    }

    fn clear(&mut self) {
        self.renderer.clear();
    }

    fn draw_char(&mut self, row: u32, col: u32, ch: char, pair: PairId) {
        self.renderer.buffer().set(row, col, Cell::new(ch, pair));
    }

    fn draw_text(&mut self, row: u32, col: u32, text: &str) {
        self.renderer.buffer().draw_text(row, col, text, PairId::DEFAULT);
    }

    fn present(&mut self) -> vmarquee::Result<()> {
        self.renderer.present()?;
        Ok(())
    }

    fn register_color_pair(&mut self, id: PairId, fg: Color, bg: Color) {
        self.renderer.register_pair(id, fg, bg);
    }

    fn poll_key(&mut self) -> vmarquee::Result<Option<KeyEvent>> {
        Ok(None)
    }
}

fn setup(rows: u16, cols: u16) -> (RendererDisplay, SharedOutput, vt100::Parser) {
    let out = SharedOutput::default();
    let renderer =
        Renderer::new_with_options(out.clone(), rows, cols, RendererOptions::default()).unwrap();
    (
        RendererDisplay { renderer },
        out,
        vt100::Parser::new(rows, cols, 0),
    )
}

fn state(text: &str, rows: u16, cols: u16) -> MarqueeState {
    MarqueeState::new(
        MarqueeText::new(text).unwrap(),
        200.0,
        Direction::Negative,
        Geometry::new(rows, cols),
    )
}

fn assert_screen_matches(parser: &vt100::Parser, display: &RendererDisplay) {
    let front = display.renderer.front_buffer();
    let screen = parser.screen();
    for row in 0..front.rows() {
        for col in 0..front.cols() {
            let expected = front.get(u32::from(row), u32::from(col)).unwrap().ch;
            let got = screen
                .cell(row, col)
                .map(|c| c.contents().chars().next().unwrap_or(' '))
                .unwrap_or(' ');
            assert_eq!(got, expected, "mismatch at row {row}, col {col}");
        }
    }
}

#[test]
fn first_frame_round_trips_through_emulator() {
    let (mut display, out, mut parser) = setup(24, 80);
    let s = state("Hello marquee | ", 24, 80);
    FrameRenderer::new(&KeyMap::default())
        .draw(&mut display, &s)
        .unwrap();
    parser.process(&out.take());

    assert!(parser.screen().alternate_screen());
    assert!(parser.screen().hide_cursor());
    assert_screen_matches(&parser, &display);
    assert!(parser.screen().contents().contains("== RESPONSIVE MARQUEE MANIPULATOR =="));
}

#[test]
fn marquee_cells_carry_palette_colors() {
    let (mut display, out, mut parser) = setup(24, 40);
    let mut s = state("AB", 24, 40);
    let frames = FrameRenderer::new(&KeyMap::default());
    frames.draw(&mut display, &s).unwrap();
    parser.process(&out.take());

    let cell = parser.screen().cell(1, 0).unwrap();
    assert_eq!(cell.contents(), "A");
    assert_eq!(cell.fgcolor(), vt100::Color::Idx(1));
    assert_eq!(cell.bgcolor(), vt100::Color::Idx(3));
    // Status text uses the terminal defaults.
    let status = parser.screen().cell(23, 0).unwrap();
    assert_eq!(status.fgcolor(), vt100::Color::Default);

    s.direction = Direction::Positive;
    frames.draw(&mut display, &s).unwrap();
    parser.process(&out.take());
    let cell = parser.screen().cell(1, 0).unwrap();
    assert_eq!(cell.fgcolor(), vt100::Color::Idx(2));
    assert_eq!(cell.bgcolor(), vt100::Color::Idx(4));
}

#[test]
fn diff_frames_keep_screen_in_sync() {
    let (mut display, out, mut parser) = setup(24, 80);
    let mut s = state("ABCDEFGHIJ", 24, 80);
    s.width = 6;
    let frames = FrameRenderer::new(&KeyMap::default());
    frames.draw(&mut display, &s).unwrap();
    parser.process(&out.take());
    let full_bytes = display.renderer.stats().total_bytes;

    for _ in 0..12 {
        s.advance();
        frames.draw(&mut display, &s).unwrap();
        parser.process(&out.take());
        assert_screen_matches(&parser, &display);
    }
    // Twelve scroll steps cost less than repainting the screen each time.
    let stats = display.renderer.stats();
    assert!(stats.total_bytes - full_bytes < full_bytes * 12);
    assert!(stats.last_frame_cells < 80 * 24 / 2);
}

#[test]
fn resize_repaints_whole_screen() {
    let (mut display, out, _) = setup(24, 80);
    let mut s = state("ABC", 24, 80);
    let frames = FrameRenderer::new(&KeyMap::default());
    frames.draw(&mut display, &s).unwrap();
    out.take();

    display.renderer.resize(20, 50);
    s.apply_geometry(20, 50);
    frames.draw(&mut display, &s).unwrap();
    let mut parser = vt100::Parser::new(20, 50, 0);
    parser.process(&out.take());
    assert_screen_matches(&parser, &display);
    assert_eq!(display.renderer.stats().last_frame_cells, 20 * 50);
}

#[test]
fn drop_restores_terminal() {
    let (mut display, out, mut parser) = setup(10, 40);
    let s = state("ABC", 10, 40);
    FrameRenderer::new(&KeyMap::default())
        .draw(&mut display, &s)
        .unwrap();
    drop(display);
    parser.process(&out.take());
    assert!(!parser.screen().alternate_screen());
    assert!(!parser.screen().hide_cursor());
}
