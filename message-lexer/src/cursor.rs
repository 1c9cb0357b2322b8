use message_common::Position;

/// A cursor for traversing a message during scanning.
///
/// The cursor only ever steps over whole characters or over marker text that
/// was just matched, so its offset always sits on a char boundary.
#[derive(Debug, Clone)]
pub struct Cursor<'input> {
    input: &'input str,
    position: Position,
    /// The character at the cursor follows an odd run of backslashes.
    escaped: bool,
}

impl<'input> Cursor<'input> {
    /// Creates a new cursor at the start of `input`.
    pub fn new(input: &'input str) -> Self {
        Self {
            input,
            position: Position::new(),
            escaped: false,
        }
    }

    /// The whole input.
    pub fn input(&self) -> &'input str {
        self.input
    }

    /// Returns the current position in the source.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current offset in bytes.
    pub fn offset(&self) -> usize {
        self.position.offset
    }

    /// Returns true if the cursor is at the end of the input.
    pub fn is_eof(&self) -> bool {
        self.position.offset >= self.input.len()
    }

    /// Returns the next character without advancing the cursor.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns the remaining input from the current position.
    pub fn remaining(&self) -> &'input str {
        self.input.get(self.position.offset..).unwrap_or("")
    }

    /// Returns true if `text` occurs literally at the cursor.
    pub fn starts_with(&self, text: &str) -> bool {
        self.remaining().starts_with(text)
    }

    /// Returns true if the character at the cursor is escaped, that is
    /// preceded by an odd-length run of backslashes.
    pub fn is_escaped(&self) -> bool {
        self.escaped
    }

    /// Advances the cursor by one character.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.escaped = ch == '\\' && !self.escaped;
        self.position.advance(ch.len_utf8());
        Some(ch)
    }

    /// Advances the cursor over `len` bytes of matched text.
    pub fn advance_by(&mut self, len: usize) {
        self.skip_escapes(len);
        self.position.advance(len);
    }

    /// Advances over a newline sequence `len` bytes wide.
    pub fn advance_line(&mut self, len: usize) {
        self.skip_escapes(len);
        self.position.advance_line(len);
    }

    /// Carries the escape state across `len` bytes about to be skipped.
    fn skip_escapes(&mut self, len: usize) {
        let end = (self.position.offset + len).min(self.input.len());
        let skipped = self.input.as_bytes().get(self.position.offset..end);
        for &b in skipped.unwrap_or_default() {
            self.escaped = b == b'\\' && !self.escaped;
        }
    }

    /// Returns the input between `start` and the cursor.
    pub fn slice_from(&self, start: usize) -> &'input str {
        self.input.get(start..self.position.offset).unwrap_or("")
    }
}
