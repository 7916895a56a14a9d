//! ANSI color directives for rendered diagnostics

use crate::diagnostics::severity::DisplayLevel;

/// Terminal reset directive appended after a colorized render.
pub const RESET: &str = "\u{1b}[0m";

/// ANSI escape table scoped to a single render session.
///
/// The `no_color` variant maps every directive to the empty string, so
/// rendering code never branches on the color flag mid-format.
#[derive(Debug, Clone, Copy)]
pub struct Colors {
    pub red: &'static str,
    pub yellow: &'static str,
    pub green: &'static str,
    pub blue: &'static str,
    pub magenta: &'static str,
    pub cyan: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub fn with_color() -> Self {
        Self {
            red: "\u{1b}[31m",
            yellow: "\u{1b}[33m",
            green: "\u{1b}[32m",
            blue: "\u{1b}[34m",
            magenta: "\u{1b}[35m",
            cyan: "\u{1b}[36m",
            reset: RESET,
        }
    }

    pub fn no_color() -> Self {
        Self {
            red: "",
            yellow: "",
            green: "",
            blue: "",
            magenta: "",
            cyan: "",
            reset: "",
        }
    }

    /// Pick the palette matching the session's color flag.
    pub fn for_session(colors_enabled: bool) -> Self {
        if colors_enabled {
            Self::with_color()
        } else {
            Self::no_color()
        }
    }

    /// Color used for a severity tag at the given display level.
    pub fn for_level(&self, level: DisplayLevel) -> &'static str {
        match level {
            DisplayLevel::Error => self.red,
            DisplayLevel::Warning => self.yellow,
            DisplayLevel::Info => self.cyan,
        }
    }
}
