//! Diagnostic severity levels

use std::fmt;

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Informational message
    Info,
    /// A potential problem that does not stop compilation
    Warning,
    /// A problem that prevents compilation
    Error,
    /// An unrecoverable problem; compilation stops immediately
    Fatal,
    /// A defect inside the compiler itself
    InternalError,
}

/// Display grouping for severities. Fatal and internal errors are shown at
/// the error level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayLevel {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Whether this severity counts toward the error total.
    pub fn is_error_like(&self) -> bool {
        matches!(
            self,
            Severity::Error | Severity::Fatal | Severity::InternalError
        )
    }

    /// The level used for display tags and coloring.
    pub fn display_level(&self) -> DisplayLevel {
        match self {
            Severity::Info => DisplayLevel::Info,
            Severity::Warning => DisplayLevel::Warning,
            Severity::Error | Severity::Fatal | Severity::InternalError => DisplayLevel::Error,
        }
    }
}

impl fmt::Display for DisplayLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            DisplayLevel::Info => "info",
            DisplayLevel::Warning => "warning",
            DisplayLevel::Error => "error",
        };
        write!(f, "{}", tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_and_internal_collapse_to_error_level() {
        assert_eq!(Severity::Error.display_level(), DisplayLevel::Error);
        assert_eq!(Severity::Fatal.display_level(), DisplayLevel::Error);
        assert_eq!(Severity::InternalError.display_level(), DisplayLevel::Error);
    }

    #[test]
    fn info_and_warning_map_directly() {
        assert_eq!(Severity::Info.display_level(), DisplayLevel::Info);
        assert_eq!(Severity::Warning.display_level(), DisplayLevel::Warning);
    }

    #[test]
    fn error_like_grouping() {
        assert!(Severity::Error.is_error_like());
        assert!(Severity::Fatal.is_error_like());
        assert!(Severity::InternalError.is_error_like());
        assert!(!Severity::Warning.is_error_like());
        assert!(!Severity::Info.is_error_like());
    }

    #[test]
    fn display_tags() {
        assert_eq!(DisplayLevel::Error.to_string(), "error");
        assert_eq!(DisplayLevel::Warning.to_string(), "warning");
        assert_eq!(DisplayLevel::Info.to_string(), "info");
    }
}
