//! Verbose notes written to stderr.

use crate::palette::fmt_label;

/// Prints labelled verbose notes for a run.
#[derive(Debug, Default, Clone, Copy)]
pub struct Diagnostics {
    /// Whether notes are printed.
    verbose: bool,
    /// Whether note labels are styled.
    use_color: bool,
}

impl Diagnostics {
    /// Create a new diagnostics printer.
    pub(crate) fn new(verbose: bool, use_color: bool) -> Self {
        Self { verbose, use_color }
    }

    /// Print a labelled note when verbose output is enabled.
    pub(crate) fn note(&self, label: &str, value: impl AsRef<str>) {
        if let Some(line) = self.render(label, value.as_ref()) {
            eprintln!("{line}");
        }
    }

    /// Render a note line, or nothing when verbose output is off.
    fn render(&self, label: &str, value: &str) -> Option<String> {
        self.verbose
            .then(|| format!("{} {value}", fmt_label(label, self.use_color)))
    }
}
