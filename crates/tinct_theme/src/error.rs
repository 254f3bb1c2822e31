//! Theme pipeline error types

use thiserror::Error;

/// A color literal that could not be understood.
///
/// The converter and contrast evaluator never surface this as a hard failure;
/// it travels inside [`crate::Soft::Fallback`] or a `try_*` result so callers
/// can tell a real measurement from a fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input was empty after trimming
    #[error("empty color literal")]
    Empty,

    /// Hex literal with the wrong length or non-hex digits
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Functional notation that is not rgb/hsl/oklch
    #[error("unsupported color notation: {0}")]
    UnsupportedNotation(String),

    /// A component could not be read as a number
    #[error("invalid color component `{component}` in {literal}")]
    InvalidComponent { literal: String, component: String },

    /// Wrong number of components for the notation
    #[error("expected {expected} components in {literal}")]
    ComponentCount { literal: String, expected: usize },
}

/// Rejections from the CSS import path before parsing runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Please enter CSS content")]
    Empty,

    #[error("Invalid CSS format. CSS should contain variable definitions like --primary: #color")]
    NoVariables,
}

/// Errors raised by the theme pipeline
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme styles without both a light and a dark token set
    #[error("Invalid theme styles: {0}")]
    MalformedStyles(String),

    /// Token name outside the closed token schema
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    /// Value that does not name a known enum option (format, version, mode, package manager)
    #[error("Unknown {kind}: {value}")]
    UnknownOption { kind: &'static str, value: String },

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}

impl ThemeError {
    pub(crate) fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownOption {
            kind,
            value: value.into(),
        }
    }
}

/// Result type for theme pipeline operations
pub type Result<T> = std::result::Result<T, ThemeError>;
