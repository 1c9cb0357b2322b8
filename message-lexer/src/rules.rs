//! Scanning rules, one per lexical category.
//!
//! Each rule is entered with the cursor on the text it handles and leaves the
//! cursor just past it.

use crate::context::{LexContext, ScanContext};
use crate::error::{ErrorKind, ParseError};
use crate::marker::{Marker, MarkerGroup};
use crate::value::Value;
use log::trace;
use message_common::Excerpt;

/// Whether a flag may carry a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagStyle {
    /// `--name`, `--!name`, `--name=value`.
    Valued,
    /// `-name`, `-!name`. Assignment is an error.
    Boolean,
}

/// What a flag start turned out to introduce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagToken {
    /// The flag start stood alone and is kept as plain text.
    Argument(String),
    Flag { name: String, value: Value },
}

/// Consumes a run of the matched whitespace marker.
pub fn scan_whitespace(ctx: &mut ScanContext<'_, '_>, marker: &Marker) {
    let width = marker.start.len();
    while ctx.cursor().starts_with(&marker.start) {
        ctx.cursor_mut().advance_by(width);
    }
}

/// Consumes exactly one newline marker.
pub fn scan_newline(ctx: &mut ScanContext<'_, '_>, marker: &Marker) {
    ctx.cursor_mut().advance_line(marker.start.len());
}

/// Reads a bare word up to the next whitespace, newline or end of input.
///
/// A lone backslash is kept as `\` and takes the boundary after it along;
/// otherwise one leading backslash is dropped.
pub fn scan_argument(ctx: &mut ScanContext<'_, '_>) -> String {
    let start = ctx.offset();
    if ctx.advance() == Some('\\') {
        if ctx.is_eof() {
            return "\\".to_string();
        }
        if let Some(boundary) = boundary_raw(ctx) {
            skip_boundary(ctx, boundary);
            return "\\".to_string();
        }
    }
    let raw = scan_bare(ctx, start);
    raw.strip_prefix('\\').unwrap_or(raw).to_string()
}

/// Reads a quoted string and returns its unescaped, trimmed content.
pub fn scan_string(ctx: &mut ScanContext<'_, '_>, marker: &Marker) -> Result<String, ParseError> {
    let (open, close) = (marker.start.as_str(), marker.end());
    let start = ctx.offset();
    ctx.cursor_mut().advance_by(open.len());
    if ctx.is_eof() {
        return Err(unclosed(
            ctx,
            ErrorKind::UnclosedString,
            "Dangling quote found at the end of the input",
            start,
        ));
    }

    let content_start = ctx.offset();
    loop {
        if ctx.is_eof() {
            return Err(unclosed(
                ctx,
                ErrorKind::UnclosedString,
                "Unclosed quote found",
                start,
            ));
        }
        if ctx.match_group(MarkerGroup::Newline).is_some() {
            return Err(ctx.error(
                ErrorKind::NewlineInString,
                "Illegal newline found in string",
                start,
                ctx.offset(),
            ));
        }
        if ctx.cursor().starts_with(close) && !ctx.cursor().is_escaped() {
            let content = unescape(ctx.cursor().slice_from(content_start), open, close);
            ctx.cursor_mut().advance_by(close.len());
            return Ok(content.trim().to_string());
        }
        ctx.advance();
    }
}

/// Reads a code block and returns it verbatim, fences included.
pub fn scan_code(ctx: &mut ScanContext<'_, '_>, marker: &Marker) -> Result<String, ParseError> {
    let (open, close) = (marker.start.as_str(), marker.end());
    let start = ctx.offset();
    ctx.cursor_mut().advance_by(open.len());
    if ctx.is_eof() {
        return Err(unclosed(
            ctx,
            ErrorKind::UnclosedCodeBlock,
            "Dangling code block start found at the end of the input",
            start,
        ));
    }

    loop {
        if ctx.is_eof() {
            return Err(unclosed(
                ctx,
                ErrorKind::UnclosedCodeBlock,
                "Unclosed code block found",
                start,
            ));
        }
        if ctx.cursor().starts_with(close) && !ctx.cursor().is_escaped() {
            ctx.cursor_mut().advance_by(close.len());
            return Ok(unescape(ctx.cursor().slice_from(start), open, close));
        }
        match ctx.match_group(MarkerGroup::Newline) {
            Some(newline) => scan_newline(ctx, newline),
            None => {
                ctx.advance();
            }
        }
    }
}

/// Reads a flag after its start marker matched at the cursor.
pub fn scan_flag(
    ctx: &mut ScanContext<'_, '_>,
    marker: &Marker,
    style: FlagStyle,
) -> Result<FlagToken, ParseError> {
    let flag_start = ctx.offset();
    ctx.cursor_mut().advance_by(marker.start.len());
    if ctx.at_boundary() {
        return Ok(FlagToken::Argument(marker.start.clone()));
    }

    let negated = match ctx.match_group(MarkerGroup::FlagNegator) {
        Some(negator) => {
            ctx.cursor_mut().advance_by(negator.start.len());
            true
        }
        None => false,
    };
    if negated && ctx.at_boundary() {
        return Err(ctx.error(
            ErrorKind::NamelessFlag,
            "Flag without name found",
            flag_start,
            ctx.offset(),
        ));
    }

    let descriptor_start = ctx.offset();
    let mut assignment = None;
    while !ctx.at_boundary() {
        if let Some(found) = ctx.match_group(MarkerGroup::FlagAssignment) {
            assignment = Some(found);
            break;
        }
        ctx.advance();
    }
    let name = ctx.cursor().slice_from(descriptor_start).to_string();

    if ctx.has_flag(&name) {
        return Err(ctx.error(
            ErrorKind::DuplicateFlag,
            format!("Duplicate flag '{name}' found"),
            flag_start,
            ctx.offset(),
        ));
    }

    let Some(assignment) = assignment else {
        return Ok(FlagToken::Flag {
            name,
            value: Value::Bool(!negated),
        });
    };

    let assignment_end = ctx.offset() + assignment.start.len();
    if name.is_empty() {
        let message = if negated {
            "Flag without name found that also contains an illegal negator"
        } else {
            "Flag without name found"
        };
        return Err(ctx.error(ErrorKind::NamelessFlag, message, flag_start, assignment_end));
    }
    if negated {
        return Err(ctx.error(
            ErrorKind::FlagAssignmentError,
            "Illegal negator found in flag with assignment",
            flag_start,
            assignment_end,
        ));
    }
    if style == FlagStyle::Boolean {
        return Err(ctx.error(
            ErrorKind::FlagAssignmentError,
            format!("Boolean flag '{name}' cannot be assigned a value"),
            flag_start,
            assignment_end,
        ));
    }

    ctx.cursor_mut().advance_by(assignment.start.len());
    if ctx.at_boundary() {
        return Err(ctx.error(
            ErrorKind::FlagAssignmentError,
            "Incorrect flag value assignment found",
            flag_start,
            ctx.offset(),
        ));
    }

    let delimited =
        ctx.match_content_where(|m| matches!(m.group, MarkerGroup::Code | MarkerGroup::String));
    let value = match delimited {
        Some(found) if found.group == MarkerGroup::Code => Value::Text(scan_code(ctx, found)?),
        Some(found) => Value::coerce(scan_string(ctx, found)?),
        None => {
            let value_start = ctx.offset();
            Value::coerce(scan_bare(ctx, value_start))
        }
    };
    trace!("flag {name:?} = {value:?}");
    Ok(FlagToken::Flag { name, value })
}

/// Advances to the next boundary and returns the text from `start`.
fn scan_bare<'input>(ctx: &mut ScanContext<'input, '_>, start: usize) -> &'input str {
    while !ctx.at_boundary() {
        ctx.advance();
    }
    ctx.cursor().slice_from(start)
}

fn boundary_raw<'m>(ctx: &ScanContext<'_, 'm>) -> Option<&'m Marker> {
    ctx.match_group_raw(MarkerGroup::Whitespace)
        .or_else(|| ctx.match_group_raw(MarkerGroup::Newline))
}

fn skip_boundary(ctx: &mut ScanContext<'_, '_>, boundary: &Marker) {
    if boundary.group == MarkerGroup::Newline {
        scan_newline(ctx, boundary);
    } else {
        scan_whitespace(ctx, boundary);
    }
}

fn unescape(text: &str, open: &str, close: &str) -> String {
    let unescaped = text.replace(&format!("\\{close}"), close);
    if open == close {
        unescaped
    } else {
        unescaped.replace(&format!("\\{open}"), open)
    }
}

fn unclosed(
    ctx: &ScanContext<'_, '_>,
    kind: ErrorKind,
    message: &str,
    start: usize,
) -> ParseError {
    ParseError::new(
        kind,
        message,
        ctx.position(),
        Excerpt::from_offset(ctx.cursor().input(), start),
    )
}
