use crate::context::{LexContext, ScanContext};
use crate::error::ParseError;
use crate::marker::{Marker, MarkerGroup, Markers};
use crate::rules::{self, FlagStyle, FlagToken};
use crate::value::{ParseResult, Value};
use log::{debug, trace};

/// A single pass over one message.
///
/// The lexer matches content markers in table order at the cursor and hands
/// control to the rule for the matched group until the input is used up.
pub struct Lexer<'input, 'm> {
    context: ScanContext<'input, 'm>,
}

impl<'input, 'm> Lexer<'input, 'm> {
    /// Creates a lexer over `input` that matches against `markers`.
    pub fn new(input: &'input str, markers: &'m Markers) -> Self {
        Self {
            context: ScanContext::new(input, markers),
        }
    }

    /// Scans the whole input.
    pub fn tokenize(mut self) -> Result<ParseResult, ParseError> {
        debug!("tokenizing {} bytes", self.context.cursor().input().len());
        while !self.context.is_eof() {
            self.next_token()?;
        }
        let result = self.context.into_result();
        debug!(
            "tokenized {} arguments and {} flags",
            result.args.len(),
            result.flags.len()
        );
        Ok(result)
    }

    /// Scans the next unit at the cursor and records what it produced.
    pub fn next_token(&mut self) -> Result<(), ParseError> {
        let ctx = &mut self.context;
        let Some(marker) = ctx.match_content() else {
            let argument = rules::scan_argument(ctx);
            ctx.push_argument(Value::Text(argument));
            return Ok(());
        };
        trace!("{:?} marker {:?} at {}", marker.group, marker.start, ctx.position());

        match marker.group {
            MarkerGroup::Whitespace => rules::scan_whitespace(ctx, marker),
            MarkerGroup::Newline => rules::scan_newline(ctx, marker),
            MarkerGroup::String => {
                let text = rules::scan_string(ctx, marker)?;
                ctx.push_argument(Value::Text(text));
            }
            MarkerGroup::Code => {
                let code = rules::scan_code(ctx, marker)?;
                ctx.push_argument(Value::Text(code));
            }
            MarkerGroup::FlagStart => flag(ctx, marker, FlagStyle::Valued)?,
            MarkerGroup::BoolFlagStart => flag(ctx, marker, FlagStyle::Boolean)?,
            MarkerGroup::FlagNegator | MarkerGroup::FlagAssignment => {
                let argument = rules::scan_argument(ctx);
                ctx.push_argument(Value::Text(argument));
            }
        }
        Ok(())
    }
}

fn flag(
    ctx: &mut ScanContext<'_, '_>,
    marker: &Marker,
    style: FlagStyle,
) -> Result<(), ParseError> {
    match rules::scan_flag(ctx, marker, style)? {
        FlagToken::Argument(text) => ctx.push_argument(Value::Text(text)),
        FlagToken::Flag { name, value } => ctx.insert_flag(name, value),
    }
    Ok(())
}
