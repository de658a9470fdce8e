// Terminal markup for rendered diffs.
//
// Five styling roles: dim for common output, green for the expected side,
// red for the received side, inverse for emphasized sub-spans, bold for
// headers. `Markup::plain()` returns text unchanged, for piped output and
// deterministic tests.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markup {
    enabled: bool,
}

impl Markup {
    /// Styling via ANSI escapes (still subject to the global color
    /// controls of the `colored` crate, e.g. `NO_COLOR`).
    pub const fn ansi() -> Self {
        Self { enabled: true }
    }

    /// No styling: every role returns its input unchanged.
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn expected(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn received(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn emphasis(&self, text: &str) -> String {
        if self.enabled {
            text.reversed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Markup {
    fn default() -> Self {
        Self::ansi()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
