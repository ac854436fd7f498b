//! Color palette and styling for CLI output.
//!
//! Styling is applied to the wrapper's own informational output only. Output
//! from the CSS tool is never touched, and neither is the fatal error line.

use std::io::{self, IsTerminal};

use owo_colors::{OwoColorize, Style};

/// Output color handling selection.
#[derive(Debug, Clone, Copy)]
pub enum ColorChoice {
    /// Colorize only when output is a TTY.
    Auto,
    /// Always colorize output.
    Always,
    /// Never colorize output.
    Never,
}

impl ColorChoice {
    /// Determine whether color output should be enabled.
    pub(crate) fn enabled(self) -> bool {
        match self {
            Self::Auto => io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Style for the start-of-build banner.
pub fn banner() -> Style {
    Style::new().cyan().bold()
}

/// Style for labels like "root:" or "command:".
pub fn label() -> Style {
    Style::new().blue()
}

/// Style for path values.
pub fn path() -> Style {
    Style::new().white()
}

/// Apply a style when color is enabled.
fn paint(text: &str, style: Style, use_color: bool) -> String {
    if use_color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Format the banner with styling.
pub fn fmt_banner(text: &str, use_color: bool) -> String {
    paint(text, banner(), use_color)
}

/// Format a label with styling.
pub fn fmt_label(text: &str, use_color: bool) -> String {
    paint(text, label(), use_color)
}

/// Format a path with styling.
pub fn fmt_path(text: &str, use_color: bool) -> String {
    paint(text, path(), use_color)
}

#[cfg(test)]
mod tests {
    use super::{ColorChoice, fmt_banner, fmt_path};

    #[test]
    fn plain_text_without_color() {
        assert_eq!(fmt_banner("Building", false), "Building");
        assert_eq!(fmt_path("/srv/site", false), "/srv/site");
    }

    #[test]
    fn color_wraps_text_in_escapes() {
        let styled = fmt_banner("Building", true);
        assert!(styled.contains("Building"));
        assert!(styled.starts_with('\u{1b}'));
    }

    #[test]
    fn explicit_choices_ignore_terminal() {
        assert!(ColorChoice::Always.enabled());
        assert!(!ColorChoice::Never.enabled());
    }
}
