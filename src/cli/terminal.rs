//! Colour for messages written to the terminal.
//!
//! Each tone is tied to the stream it is printed on, and colour is only
//! applied when that stream supports it.

use owo_colors::{OwoColorize, colors::css};
use supports_color::Stream;

/// Styling for one-line status messages.
pub trait Tone {
    /// Green, for confirmations printed to stdout.
    fn success(&self) -> String;
    /// Orange, for recoverable problems printed to stderr.
    fn warning(&self) -> String;
    /// Dimmed, for secondary lines printed to stdout.
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Tone for T {
    fn success(&self) -> String {
        paint(self.as_ref(), colour_enabled(Stream::Stdout), |text| {
            text.fg::<css::Green>().to_string()
        })
    }

    fn warning(&self) -> String {
        paint(self.as_ref(), colour_enabled(Stream::Stderr), |text| {
            text.fg::<css::Orange>().to_string()
        })
    }

    fn dim(&self) -> String {
        paint(self.as_ref(), colour_enabled(Stream::Stdout), |text| {
            text.dimmed().to_string()
        })
    }
}

fn colour_enabled(stream: Stream) -> bool {
    supports_color::on_cached(stream).is_some()
}

fn paint(text: &str, enabled: bool, style: impl FnOnce(&str) -> String) -> String {
    if enabled {
        style(text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_when_colour_is_disabled() {
        let painted = paint("Course Number CS999 not found.", false, |text| {
            text.fg::<css::Orange>().to_string()
        });
        assert_eq!(painted, "Course Number CS999 not found.");
    }

    #[test]
    fn styled_when_colour_is_enabled() {
        let painted = paint("Loaded 3 courses.", true, |text| {
            text.fg::<css::Green>().to_string()
        });
        assert!(painted.starts_with('\u{1b}'));
        assert!(painted.contains("Loaded 3 courses."));
    }
}
