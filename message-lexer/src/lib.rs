//! Message Lexer
//!
//! Tokenizes free-form chat messages into positional arguments and named
//! flags. Users mix bare words, quoted strings, fenced code blocks and
//! CLI-like flags (`--name`, `-name`, `--name=value`) in one line of text:
//!
//! ```text
//! deploy "my app" --env=prod --!dry-run -v
//! ```
//!
//! becomes the arguments `["deploy", "my app"]` and the flags
//! `{env: "prod", dry-run: false, v: true}`.

pub mod context;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod marker;
pub mod options;
pub mod parser;
pub mod rules;
pub mod value;

pub use context::{LexContext, ScanContext};
pub use cursor::Cursor;
pub use error::{ErrorKind, MarkerError, ParseError};
pub use lexer::Lexer;
pub use marker::{
    default_content_markers, default_segment_markers, Marker, MarkerGroup, MarkerTable, Markers,
};
pub use message_common::{Excerpt, Position};
pub use options::{MarkerOverrides, ParserOptions};
pub use parser::MessageParser;
pub use value::{ParseResult, Value};
