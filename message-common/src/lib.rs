//! Message Common
//!
//! Components shared by the message lexer and the tools built on top of it:
//! the position tracker and the excerpt used to point at offending input.

pub mod excerpt;
pub mod position;

pub use excerpt::Excerpt;
pub use position::Position;
