use crate::marker::MarkerGroup;
use message_common::{Excerpt, Position};
use std::fmt;

/// Why a message could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A quote was opened and never closed.
    UnclosedString,
    /// A newline appeared before a quote was closed.
    NewlineInString,
    /// A code fence was opened and never closed.
    UnclosedCodeBlock,
    /// A flag has no name.
    NamelessFlag,
    /// A flag name appeared twice.
    DuplicateFlag,
    /// A flag value assignment is missing its value or is not allowed.
    FlagAssignmentError,
}

impl ErrorKind {
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::UnclosedString => "UnclosedString",
            ErrorKind::NewlineInString => "NewlineInString",
            ErrorKind::UnclosedCodeBlock => "UnclosedCodeBlock",
            ErrorKind::NamelessFlag => "NamelessFlag",
            ErrorKind::DuplicateFlag => "DuplicateFlag",
            ErrorKind::FlagAssignmentError => "FlagAssignmentError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A failure that aborted a parse.
///
/// The message wording is informational; match on [`ParseError::kind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} ({position}): {excerpt}")]
pub struct ParseError {
    kind: ErrorKind,
    message: String,
    position: Position,
    excerpt: Excerpt,
}

impl ParseError {
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        position: Position,
        excerpt: Excerpt,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
            excerpt,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the scan stood when it gave up.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The input with the offending span marked.
    pub fn excerpt(&self) -> &Excerpt {
        &self.excerpt
    }
}

/// A marker configuration that cannot be scanned with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkerError {
    #[error("marker of group {group:?} has an empty start")]
    EmptyStart { group: MarkerGroup },
    #[error("marker starting with {start:?} has an empty end")]
    EmptyEnd { start: String },
}
