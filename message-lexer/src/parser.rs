use crate::error::{MarkerError, ParseError};
use crate::lexer::Lexer;
use crate::marker::Markers;
use crate::options::ParserOptions;
use crate::value::ParseResult;

/// Splits chat messages into arguments and flags.
///
/// The marker tables are built once and only read afterwards, so one parser
/// can serve any number of `parse` calls, from several threads if needed.
/// Every call starts from a fresh cursor and an empty result.
#[derive(Debug, Clone, Default)]
pub struct MessageParser {
    markers: Markers,
}

impl MessageParser {
    /// A parser using the built-in markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser using the built-in markers merged with `options`.
    pub fn with_options(options: &ParserOptions) -> Result<Self, MarkerError> {
        let markers = Markers::with_overrides(
            &options.markers.content_markers,
            &options.markers.segment_markers,
        )?;
        Ok(Self { markers })
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Parses one message.
    ///
    /// Empty and whitespace-only text yields an empty result without scanning.
    pub fn parse(&self, text: &str) -> Result<ParseResult, ParseError> {
        if text.trim().is_empty() {
            return Ok(ParseResult::new());
        }
        Lexer::new(text, &self.markers).tokenize()
    }
}
