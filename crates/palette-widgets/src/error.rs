#![forbid(unsafe_code)]

//! Error and lint types for palette configuration and templates.

use palette_core::geometry::Size;
use std::fmt;

/// Failure to load or validate a palette configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    Parse(serde_json::Error),
    /// `columns` was zero.
    ZeroColumns,
    /// The icon size has a non-positive dimension.
    EmptyIconSize(Size),
    /// `tab_width` must be at least 2 so the 1px tab overlap leaves a stride.
    TabTooNarrow(i32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid palette config: {err}"),
            Self::ZeroColumns => f.write_str("columns must be at least 1"),
            Self::EmptyIconSize(size) => {
                write!(f, "icon size {}x{} is empty", size.width, size.height)
            }
            Self::TabTooNarrow(w) => write!(f, "tab_width {w} is too narrow (minimum 2)"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// How serious a lint finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem found by the static configuration lint pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    pub severity: Severity,
    pub message: String,
}

impl LintIssue {
    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub(crate) fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{level}: {}", self.message)
    }
}

/// A named template required at construction time was not supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    Missing(String),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(name) => write!(f, "missing required template {name:?}"),
        }
    }
}

impl std::error::Error for TemplateError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn parse_error_has_source() {
        let err: ConfigError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid palette config"));
    }

    #[test]
    fn lint_issue_display() {
        assert_eq!(LintIssue::error("bad").to_string(), "error: bad");
        assert_eq!(LintIssue::warning("meh").to_string(), "warning: meh");
        assert!(Severity::Error > Severity::Warning);
    }

    #[test]
    fn template_error_names_template() {
        let err = TemplateError::Missing("ROW_TEMPLATE".into());
        assert_eq!(err.to_string(), "missing required template \"ROW_TEMPLATE\"");
    }
}
