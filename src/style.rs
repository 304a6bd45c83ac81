//! Terminal styling for the review loop and error reports.
//!
//! Respects `NO_COLOR` and terminal capabilities.

use std::sync::OnceLock;

use owo_colors::{AnsiColors, OwoColorize};
pub use supports_color::Stream;
use tracing::warn;

/// Highlight color used when the config names one we do not know.
pub const DEFAULT_HIGHLIGHT: AnsiColors = AnsiColors::Green;

static STDOUT_COLOR: OnceLock<bool> = OnceLock::new();
static STDERR_COLOR: OnceLock<bool> = OnceLock::new();

/// Check if colors should be used on `stream`.
pub fn colors_enabled_on(stream: Stream) -> bool {
    let cell = match stream {
        Stream::Stdout => &STDOUT_COLOR,
        Stream::Stderr => &STDERR_COLOR,
    };
    *cell.get_or_init(|| {
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }
        supports_color::on(stream).is_some_and(|level| level.has_basic)
    })
}

/// Check if colors should be used on stdout.
pub fn colors_enabled() -> bool {
    colors_enabled_on(Stream::Stdout)
}

/// Map a config color name (`"green"`, `"bright blue"`, ...) to an ANSI color.
pub fn parse_color(name: &str) -> Option<AnsiColors> {
    let normalized = name.trim().to_ascii_lowercase().replace(['_', '-'], " ");
    let color = match normalized.as_str() {
        "black" => AnsiColors::Black,
        "red" => AnsiColors::Red,
        "green" => AnsiColors::Green,
        "yellow" => AnsiColors::Yellow,
        "blue" => AnsiColors::Blue,
        "magenta" | "purple" => AnsiColors::Magenta,
        "cyan" => AnsiColors::Cyan,
        "white" => AnsiColors::White,
        "default" => AnsiColors::Default,
        "bright black" | "gray" | "grey" => AnsiColors::BrightBlack,
        "bright red" => AnsiColors::BrightRed,
        "bright green" => AnsiColors::BrightGreen,
        "bright yellow" => AnsiColors::BrightYellow,
        "bright blue" => AnsiColors::BrightBlue,
        "bright magenta" => AnsiColors::BrightMagenta,
        "bright cyan" => AnsiColors::BrightCyan,
        "bright white" => AnsiColors::BrightWhite,
        _ => return None,
    };
    Some(color)
}

/// Resolve the configured highlight color, falling back to green.
pub fn highlight_color(name: &str) -> AnsiColors {
    parse_color(name).unwrap_or_else(|| {
        warn!("Unknown highlight_color '{}', using green", name);
        DEFAULT_HIGHLIGHT
    })
}

pub fn highlight(s: &str, color: AnsiColors) -> String {
    if colors_enabled() {
        s.color(color).to_string()
    } else {
        s.to_string()
    }
}

/// Transient notices such as "Regenerating..." (yellow).
pub fn warning(s: &str) -> String {
    if colors_enabled() {
        s.yellow().to_string()
    } else {
        s.to_string()
    }
}

/// Aborts and hard errors (red), for printing on stderr.
pub fn error(s: &str) -> String {
    if colors_enabled_on(Stream::Stderr) {
        s.red().to_string()
    } else {
        s.to_string()
    }
}
