//! Startup configuration and command-line parsing.

use crate::app::DEFAULT_IDLE_SLEEP;
use crate::marquee::{DEFAULT_DELAY_MS, DEFAULT_TEXT, Direction, Geometry, MarqueeState, MarqueeText};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

pub const HELP_TEXT: &str = "vmarquee - responsive terminal marquee

USAGE:
    vmarquee [OPTIONS]

OPTIONS:
    -h, --help                  Print this help message and exit
    --text <TEXT>               Initial marquee text (printable ASCII, at most 999 chars)
    --delay <MS>                Milliseconds between scroll steps (default: 200)
    --direction <up|down>       Initial scroll direction (default: up)

    --log-file <PATH>           Write diagnostics to PATH (filter with RUST_LOG)

    --headless-smoke            Render into memory and print the last frame (no TTY required)
    --headless-size <COLSxROWS> Headless display size (default: 80x24)
    --frames <N>                Scroll steps to simulate in headless mode (default: 5)

KEYS:
    q quit, h/l scroll, k/j move up/down, f/b faster/slower, t toggle direction,
    ]/[ widen/narrow, $ reset width, >/< shift, 0 reset shift, d/u direction,
    e enter new text, = or Enter to confirm

EXAMPLES:
    vmarquee                                  # Interactive mode
    vmarquee --text 'Hello there | ' --delay 50
    vmarquee --headless-smoke --headless-size 60x20 --frames 12
";

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug)]
pub struct Config {
    pub text: MarqueeText,
    pub delay_ms: f64,
    pub direction: Direction,
    pub idle_sleep: Duration,

    pub log_file: Option<PathBuf>,

    // Headless/testing
    pub headless_smoke: bool,
    /// `(cols, rows)`
    pub headless_size: (u16, u16),
    pub frames: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: MarqueeText::new(DEFAULT_TEXT).unwrap_or_default(),
            delay_ms: DEFAULT_DELAY_MS,
            direction: Direction::Negative,
            idle_sleep: DEFAULT_IDLE_SLEEP,
            log_file: None,
            headless_smoke: false,
            headless_size: (80, 24),
            frames: 5,
        }
    }
}

/// Result of CLI parsing.
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments, program name first.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--text" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--text requires a value".to_string());
                    };
                    match MarqueeText::new(value.to_string_lossy()) {
                        Ok(text) => config.text = text,
                        Err(err) => return ParseResult::Error(format!("Invalid --text: {err}")),
                    }
                }

                "--delay" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--delay requires a value".to_string());
                    };
                    let value = value.to_string_lossy();
                    match value.parse::<f64>() {
                        Ok(ms) if ms.is_finite() && ms > 0.0 => config.delay_ms = ms,
                        _ => {
                            return ParseResult::Error(format!(
                                "Invalid --delay value: {value} (must be a positive number)"
                            ));
                        }
                    }
                }

                "--direction" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--direction requires a value".to_string());
                    };
                    let value = value.to_string_lossy();
                    match parse_direction(&value) {
                        Some(direction) => config.direction = direction,
                        None => {
                            return ParseResult::Error(format!(
                                "Unknown --direction: {value} (valid: up, down)"
                            ));
                        }
                    }
                }

                "--log-file" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--log-file requires a path".to_string());
                    };
                    config.log_file = Some(PathBuf::from(value));
                }

                "--headless-smoke" => config.headless_smoke = true,

                "--headless-size" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error(
                            "--headless-size requires a value (e.g., 80x24)".to_string(),
                        );
                    };
                    let value = value.to_string_lossy();
                    match parse_size(&value) {
                        Some(size) => config.headless_size = size,
                        None => {
                            return ParseResult::Error(format!(
                                "Invalid --headless-size: {value} (use COLSxROWS format, e.g., 80x24)"
                            ));
                        }
                    }
                }

                "--frames" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--frames requires a value".to_string());
                    };
                    let value = value.to_string_lossy();
                    match value.parse::<u64>() {
                        Ok(n) => config.frames = n,
                        Err(_) => {
                            return ParseResult::Error(format!("Invalid --frames value: {value}"));
                        }
                    }
                }

                other => return ParseResult::Error(format!("Unknown option: {other}")),
            }
        }

        ParseResult::Config(config)
    }

    /// Fresh marquee state for a display of the given size.
    #[must_use]
    pub fn initial_state(&self, geometry: Geometry) -> MarqueeState {
        MarqueeState::new(self.text.clone(), self.delay_ms, self.direction, geometry)
    }

    /// Headless display size as `(rows, cols)`.
    #[must_use]
    pub fn headless_geometry(&self) -> Geometry {
        let (cols, rows) = self.headless_size;
        Geometry::new(rows, cols)
    }
}

fn parse_direction(value: &str) -> Option<Direction> {
    match value.to_ascii_lowercase().as_str() {
        "up" | "negative" => Some(Direction::Negative),
        "down" | "positive" => Some(Direction::Positive),
        _ => None,
    }
}

/// Parse `COLSxROWS`; both must be positive.
fn parse_size(value: &str) -> Option<(u16, u16)> {
    let (cols, rows) = value.split_once(['x', 'X'])?;
    let cols = cols.parse::<u16>().ok()?;
    let rows = rows.parse::<u16>().ok()?;
    (cols > 0 && rows > 0).then_some((cols, rows))
}
