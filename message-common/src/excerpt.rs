use serde::Serialize;
use std::fmt;

/// A copy of the input split around an offending span.
///
/// Rendering wraps the span in `**` so chat front ends show it in bold:
/// `prefix**span**suffix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Excerpt {
    prefix: String,
    highlight: String,
    suffix: String,
}

impl Excerpt {
    /// Splits `input` into the text before `start`, the span `start..end`, and
    /// the rest.
    ///
    /// Both bounds are clamped to the input length, and `end` is raised to
    /// `start` if it falls before it. Bounds must lie on char boundaries.
    pub fn new(input: &str, start: usize, end: usize) -> Self {
        let start = start.min(input.len());
        let end = end.clamp(start, input.len());
        Self {
            prefix: input[..start].to_string(),
            highlight: input[start..end].to_string(),
            suffix: input[end..].to_string(),
        }
    }

    /// Highlights everything from `start` to the end of the input.
    pub fn from_offset(input: &str, start: usize) -> Self {
        Self::new(input, start, input.len())
    }

    /// Text before the highlighted span.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The highlighted span.
    pub fn highlight(&self) -> &str {
        &self.highlight
    }

    /// Text after the highlighted span.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl fmt::Display for Excerpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}**{}**{}", self.prefix, self.highlight, self.suffix)
    }
}
