// ABOUTME: Error types for node conversions and rendering, built from ErrorCode and NodeError.
// ABOUTME: Public accessors resolve these into zero values; the try_* variants surface them.

use std::fmt;

/// Error codes representing the categories of failures a node accessor can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Empty,
    InvalidLocale,
    InvalidTimeZone,
    InvalidPattern,
    Unparsable,
    Render,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::Empty => "empty input",
            ErrorCode::InvalidLocale => "invalid locale",
            ErrorCode::InvalidTimeZone => "invalid time zone",
            ErrorCode::InvalidPattern => "invalid date pattern",
            ErrorCode::Unparsable => "unparsable value",
            ErrorCode::Render => "render error",
        };
        write!(f, "{}", s)
    }
}

/// The error type for fallible node accessors.
#[derive(Debug, thiserror::Error)]
pub struct NodeError {
    pub code: ErrorCode,
    pub input: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "htmlnode: {} {:?}: {}", self.op, self.input, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

/// Result alias for fallible node accessors.
pub type Result<T> = std::result::Result<T, NodeError>;

impl NodeError {
    fn new(
        code: ErrorCode,
        input: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            input: input.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an Empty error.
    pub fn empty(op: impl Into<String>) -> Self {
        Self::new(ErrorCode::Empty, String::new(), op, None)
    }

    /// Create an InvalidLocale error.
    pub fn invalid_locale(input: impl Into<String>, op: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidLocale, input, op, None)
    }

    /// Create an InvalidTimeZone error.
    pub fn invalid_time_zone(input: impl Into<String>, op: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidTimeZone, input, op, None)
    }

    /// Create an InvalidPattern error.
    pub fn invalid_pattern(
        input: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::InvalidPattern, input, op, source)
    }

    /// Create an Unparsable error.
    pub fn unparsable(
        input: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Unparsable, input, op, source)
    }

    /// Create a Render error.
    pub fn render(op: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self::new(ErrorCode::Render, String::new(), op, source)
    }

    /// Returns true if this is an Empty error.
    pub fn is_empty(&self) -> bool {
        self.code == ErrorCode::Empty
    }

    /// Returns true if this is an InvalidLocale error.
    pub fn is_invalid_locale(&self) -> bool {
        self.code == ErrorCode::InvalidLocale
    }

    /// Returns true if this is an InvalidTimeZone error.
    pub fn is_invalid_time_zone(&self) -> bool {
        self.code == ErrorCode::InvalidTimeZone
    }

    /// Returns true if this is an InvalidPattern error.
    pub fn is_invalid_pattern(&self) -> bool {
        self.code == ErrorCode::InvalidPattern
    }

    /// Returns true if this is an Unparsable error.
    pub fn is_unparsable(&self) -> bool {
        self.code == ErrorCode::Unparsable
    }

    /// Returns true if this is a Render error.
    pub fn is_render(&self) -> bool {
        self.code == ErrorCode::Render
    }
}
