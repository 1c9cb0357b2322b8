use serde::Serialize;
use std::fmt;

/// Tracks where a scan currently is inside the input.
///
/// `offset` is the absolute byte offset, `line` is 1-indexed and `column` is
/// 0-indexed relative to the start of the current line. Columns count bytes,
/// the same unit as `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
    /// Byte offset from the start of the input
    pub offset: usize,
}

impl Position {
    /// Creates a new position at the start of the input.
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 0,
            offset: 0,
        }
    }

    /// Creates a position with the given values.
    pub fn at(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Moves the offset and the column forward by `n` bytes.
    ///
    /// There is no bounds checking; callers own the input and decide how far
    /// they may go.
    pub fn advance(&mut self, n: usize) {
        self.offset += n;
        self.column += n;
    }

    /// Steps over a newline sequence `n` bytes wide and starts a new line.
    pub fn advance_line(&mut self, n: usize) {
        self.line += 1;
        self.offset += n;
        self.column = 0;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}, Column {}", self.line, self.column)
    }
}
