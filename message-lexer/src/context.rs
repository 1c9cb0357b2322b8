use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::marker::{Marker, MarkerGroup, Markers};
use crate::value::{ParseResult, Value};
use message_common::{Excerpt, Position};

/// Cursor access shared by everything that scans a message.
///
/// Implementors only provide the cursor; the rest are conveniences over it.
pub trait LexContext<'input> {
    /// Returns a reference to the cursor.
    fn cursor(&self) -> &Cursor<'input>;

    /// Returns a mutable reference to the cursor.
    fn cursor_mut(&mut self) -> &mut Cursor<'input>;

    fn position(&self) -> Position {
        self.cursor().position()
    }

    fn offset(&self) -> usize {
        self.cursor().offset()
    }

    fn is_eof(&self) -> bool {
        self.cursor().is_eof()
    }

    /// Peeks at the next character without advancing.
    fn peek(&self) -> Option<char> {
        self.cursor().peek()
    }

    /// Advances the cursor and returns the character.
    fn advance(&mut self) -> Option<char> {
        self.cursor_mut().advance()
    }
}

/// Per-call scanning state: the cursor, the marker tables to match against,
/// and the result accumulated so far.
///
/// Rules receive it by exclusive reference and never keep it.
#[derive(Debug)]
pub struct ScanContext<'input, 'm> {
    cursor: Cursor<'input>,
    markers: &'m Markers,
    result: ParseResult,
}

impl<'input, 'm> ScanContext<'input, 'm> {
    pub fn new(input: &'input str, markers: &'m Markers) -> Self {
        Self {
            cursor: Cursor::new(input),
            markers,
            result: ParseResult::new(),
        }
    }

    pub fn markers(&self) -> &'m Markers {
        self.markers
    }

    /// First content marker, in table order, that starts at the cursor.
    pub fn match_content(&self) -> Option<&'m Marker> {
        self.match_content_where(|_| true)
    }

    /// Like [`match_content`](Self::match_content), restricted to markers
    /// accepted by `filter`.
    pub fn match_content_where<F>(&self, mut filter: F) -> Option<&'m Marker>
    where
        F: FnMut(&Marker) -> bool,
    {
        if self.cursor.is_escaped() {
            return None;
        }
        let markers = self.markers;
        markers
            .content()
            .markers()
            .iter()
            .find(|&m| filter(m) && self.cursor.starts_with(&m.start))
    }

    /// First marker of `group` that starts at the cursor, unless the cursor
    /// sits on an escaped character.
    pub fn match_group(&self, group: MarkerGroup) -> Option<&'m Marker> {
        if self.cursor.is_escaped() {
            return None;
        }
        self.match_group_raw(group)
    }

    /// Like [`match_group`](Self::match_group) but ignores escaping.
    pub fn match_group_raw(&self, group: MarkerGroup) -> Option<&'m Marker> {
        let markers = self.markers;
        markers
            .in_group(group)
            .find(|m| self.cursor.starts_with(&m.start))
    }

    /// True at the end of input or on an unescaped whitespace or newline
    /// marker.
    pub fn at_boundary(&self) -> bool {
        self.is_eof()
            || self.match_group(MarkerGroup::Whitespace).is_some()
            || self.match_group(MarkerGroup::Newline).is_some()
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.result.flags.contains_key(name)
    }

    pub fn push_argument(&mut self, value: Value) {
        self.result.args.push(value);
    }

    pub fn insert_flag(&mut self, name: String, value: Value) {
        self.result.flags.insert(name, value);
    }

    /// Builds an error at the current position, marking `start..end`.
    pub fn error(
        &self,
        kind: ErrorKind,
        message: impl Into<String>,
        start: usize,
        end: usize,
    ) -> ParseError {
        ParseError::new(
            kind,
            message,
            self.position(),
            Excerpt::new(self.cursor.input(), start, end),
        )
    }

    pub fn into_result(self) -> ParseResult {
        self.result
    }
}

impl<'input> LexContext<'input> for ScanContext<'input, '_> {
    fn cursor(&self) -> &Cursor<'input> {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor<'input> {
        &mut self.cursor
    }
}
