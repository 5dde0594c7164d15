//! Error types for mgagr.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Note that an inconsistent or unpronounceable variant is never an error:
//! those are filter outcomes and are only counted.

use std::fmt;

use thiserror::Error;

/// The main error type for mgagr operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a parse error for a lexicon line.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: usize, content: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            line,
            content: content.into(),
        })
    }

    /// Creates an unknown polarity markers error.
    #[must_use]
    pub fn unknown_markers(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownMarkers {
            prefix: prefix.into(),
            suffix: suffix.into(),
        })
    }

    /// Creates an enumeration limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: EnumerationLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A lexicon line matched none of the recognized record shapes.
    #[error("parse error at line {line}: {message}: {content}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: usize,
        /// The offending line.
        content: String,
    },

    /// The lexicon contains no start category line.
    #[error("cannot identify the start category: lexicon is empty")]
    MissingStartCategory,

    /// The start category line is not a single symbol.
    #[error("cannot identify the start category: {0:?}")]
    InvalidStartCategory(String),

    /// The prefix/suffix markers of a syntactic feature name no feature type.
    #[error("unknown feature type markers: {prefix:?} / {suffix:?}")]
    UnknownMarkers {
        /// Markers before the feature name.
        prefix: String,
        /// Markers after the feature name.
        suffix: String,
    },

    /// An enumeration limit was exceeded (kill switch triggered).
    #[error("limit exceeded: {0}")]
    LimitExceeded(EnumerationLimit),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Encoding or decoding the accepted lexicon failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Enumeration limits (kill switches) that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumerationLimit {
    /// The predicted raw variant count of one entry exceeds the configured cap.
    MaxVariants {
        /// The configured limit.
        limit: usize,
        /// The predicted count, or `None` if it overflows `usize`.
        estimated: Option<usize>,
        /// Semantic key of the offending entry.
        key: String,
    },
}

impl fmt::Display for EnumerationLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxVariants {
                limit,
                estimated,
                key,
            } => {
                write!(f, "max variants ({limit}) exceeded for entry {key}")?;
                match estimated {
                    Some(n) => write!(f, ": {n} predicted"),
                    None => write!(f, ": predicted count overflows"),
                }
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        Ok(())
    }
}
