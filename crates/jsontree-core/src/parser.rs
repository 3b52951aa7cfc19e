//! Recursive-descent JSON parser.
//!
//! The parser walks a fully in-memory `&str` buffer with an explicit byte
//! cursor: every step is `(input, cursor) -> (Value, next_cursor)` or a
//! [`ParseError`] carrying the offset where the problem was detected. One
//! character of lookahead selects the grammar branch; arrays and objects
//! recurse into `parse_value` for their children.
//!
//! # Key design decisions
//!
//! - **Explicit failure, always progress**: malformed input is an error with
//!   an offset, never a silently returned `Null` at an unchanged cursor that
//!   a retrying caller could loop on.
//! - **Whole-token number scan**: the number lexer grabs the maximal run of
//!   literal characters and only then converts, so a malformed tail like
//!   `01x` is a [`ParseError::NumberFormat`] instead of an `Int(1)` that
//!   strands the cursor inside the token.
//! - **Uniform whitespace skipping**: whitespace is consumed before every
//!   lookahead decision — at value start, before closing delimiters, and
//!   around `,` and `:` — so `[ 1 , 2 ]` and `[1,2]` parse identically.
//! - **Bounded recursion**: stack depth mirrors document nesting, so each
//!   `[`/`{` entry checks the configured depth limit and deep adversarial
//!   input fails with [`ParseError::NestingTooDeep`] instead of exhausting
//!   the call stack.
//!
//! The grammar has no `true`/`false`/`null` keyword literals: dispatch is on
//! digits and signs, `"`, `[`, and `{` only. `Bool` values enter a tree
//! through construction, not parsing, and `Null` is what an all-whitespace
//! buffer parses to.

use crate::error::{ParseError, Result};
use crate::value::Value;

/// Default limit on container nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs for a parse run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum `[`/`{` nesting depth before the parse fails with
    /// [`ParseError::NestingTooDeep`].
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse one value from the start of `input` with default options.
///
/// Returns the value together with the cursor position immediately after it.
/// Trailing content past that position is the caller's business — an empty
/// or all-whitespace buffer yields `(Value::Null, end_of_buffer)` rather
/// than an error.
pub fn parse(input: &str) -> Result<(Value, usize)> {
    parse_with_options(input, 0, ParseOptions::default())
}

/// Parse one value starting at byte offset `start`, with default options.
///
/// Useful for resuming after a previously returned cursor, e.g. reading a
/// sequence of concatenated documents out of one buffer.
pub fn parse_from(input: &str, start: usize) -> Result<(Value, usize)> {
    parse_with_options(input, start, ParseOptions::default())
}

/// Parse one value starting at byte offset `start` with explicit options.
pub fn parse_with_options(
    input: &str,
    start: usize,
    options: ParseOptions,
) -> Result<(Value, usize)> {
    parse_value(input, start, 0, &options)
}

/// One grammar step: skip whitespace, dispatch on the lookahead character.
///
/// `depth` counts the containers already entered on this call path.
fn parse_value(
    input: &str,
    cursor: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<(Value, usize)> {
    let pos = skip_whitespace(input, cursor);

    let first = match input.as_bytes().get(pos) {
        Some(&b) => b,
        // No value present; distinct from a parse error.
        None => return Ok((Value::Null, pos)),
    };

    match first {
        b'0'..=b'9' | b'+' | b'-' => parse_number(input, pos),
        b'"' => {
            let (s, end) = parse_string(input, pos)?;
            Ok((Value::String(s), end))
        }
        b'[' => parse_list(input, pos, depth + 1, options),
        b'{' => parse_dict(input, pos, depth + 1, options),
        _ => Err(ParseError::UnexpectedChar {
            offset: pos,
            found: char_at(input, pos),
        }),
    }
}

/// Lex a numeric literal at `start` (a digit or sign).
///
/// Scans the maximal run of characters that could belong to the literal,
/// then tries `i64` conversion of the whole text and falls back to `f64`.
/// The cursor advances by the length of the matched text, never by the
/// length of a numeric re-encoding.
fn parse_number(input: &str, start: usize) -> Result<(Value, usize)> {
    let bytes = input.as_bytes();
    let mut end = start;
    while let Some(&b) = bytes.get(end) {
        if b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.') {
            end += 1;
        } else {
            break;
        }
    }

    let literal = &input[start..end];
    if let Ok(n) = literal.parse::<i64>() {
        return Ok((Value::Int(n), end));
    }
    // Covers fractions, exponents, and integers that overflow i64.
    if let Ok(d) = literal.parse::<f64>() {
        return Ok((Value::Double(d), end));
    }

    Err(ParseError::NumberFormat {
        offset: start,
        literal: literal.to_string(),
    })
}

/// Decode a string literal at `start` (the opening `"`).
///
/// Returns the decoded text and the cursor position past the closing quote.
fn parse_string(input: &str, start: usize) -> Result<(String, usize)> {
    let mut out = String::new();
    let mut chars = input[start + 1..].char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, escaped)) => out.push(unescape_char(escaped)),
                // Lone backslash at end of buffer.
                None => break,
            },
            '"' => return Ok((out, start + 1 + i + 1)),
            _ => out.push(c),
        }
    }

    Err(ParseError::UnterminatedString { offset: start })
}

/// Decode the character following a backslash.
///
/// Unknown escapes degrade to the escaped character itself, which is what
/// makes `\"`, `\\`, and `\/` work without dedicated table entries. There is
/// no `\u` code-point support.
fn unescape_char(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        '0' => '\0',
        't' => '\t',
        'v' => '\u{0B}',
        'f' => '\u{0C}',
        'b' => '\u{08}',
        'a' => '\u{07}',
        other => other,
    }
}

/// Parse an array at `open` (the `[`). `depth` includes this container.
fn parse_list(
    input: &str,
    open: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<(Value, usize)> {
    if depth > options.max_depth {
        return Err(ParseError::NestingTooDeep {
            offset: open,
            depth,
            limit: options.max_depth,
        });
    }

    let bytes = input.as_bytes();
    let mut items = Vec::new();

    let mut pos = skip_whitespace(input, open + 1);
    if bytes.get(pos) == Some(&b']') {
        return Ok((Value::List(items), pos + 1));
    }

    loop {
        let (value, next) = parse_value(input, pos, depth, options)?;
        items.push(value);

        pos = skip_whitespace(input, next);
        match bytes.get(pos) {
            Some(&b']') => return Ok((Value::List(items), pos + 1)),
            Some(&b',') => {
                let comma = pos;
                pos = skip_whitespace(input, pos + 1);
                // A closing bracket right after the separator means the
                // comma was trailing; report it at the comma.
                if bytes.get(pos) == Some(&b']') {
                    return Err(ParseError::UnexpectedChar {
                        offset: comma,
                        found: ',',
                    });
                }
            }
            Some(_) => {
                return Err(ParseError::UnexpectedChar {
                    offset: pos,
                    found: char_at(input, pos),
                })
            }
            None => return Err(ParseError::UnexpectedEnd { offset: pos }),
        }
    }
}

/// Parse an object at `open` (the `{`). `depth` includes this container.
fn parse_dict(
    input: &str,
    open: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<(Value, usize)> {
    if depth > options.max_depth {
        return Err(ParseError::NestingTooDeep {
            offset: open,
            depth,
            limit: options.max_depth,
        });
    }

    let bytes = input.as_bytes();
    let mut entries: Vec<(String, Value)> = Vec::new();

    let mut pos = skip_whitespace(input, open + 1);
    if bytes.get(pos) == Some(&b'}') {
        return Ok((Value::Dict(entries), pos + 1));
    }

    loop {
        if bytes.get(pos).is_none() {
            return Err(ParseError::UnexpectedEnd { offset: pos });
        }

        // Keys go through the ordinary value parser and must come out
        // tagged as strings.
        let key_start = pos;
        let (key_value, after_key) = parse_value(input, key_start, depth, options)?;
        let key = match key_value {
            Value::String(key) => key,
            _ => {
                return Err(ParseError::UnexpectedChar {
                    offset: key_start,
                    found: char_at(input, key_start),
                })
            }
        };

        pos = skip_whitespace(input, after_key);
        match bytes.get(pos) {
            Some(&b':') => pos += 1,
            Some(_) => {
                return Err(ParseError::UnexpectedChar {
                    offset: pos,
                    found: char_at(input, pos),
                })
            }
            None => return Err(ParseError::UnexpectedEnd { offset: pos }),
        }

        let (value, after_value) = parse_value(input, pos, depth, options)?;

        // Last assignment wins; the key keeps its first-seen position.
        if let Some(slot) = entries.iter_mut().find(|entry| entry.0 == key) {
            slot.1 = value;
        } else {
            entries.push((key, value));
        }

        pos = skip_whitespace(input, after_value);
        match bytes.get(pos) {
            Some(&b'}') => return Ok((Value::Dict(entries), pos + 1)),
            Some(&b',') => {
                let comma = pos;
                pos = skip_whitespace(input, pos + 1);
                if bytes.get(pos) == Some(&b'}') {
                    return Err(ParseError::UnexpectedChar {
                        offset: comma,
                        found: ',',
                    });
                }
            }
            Some(_) => {
                return Err(ParseError::UnexpectedChar {
                    offset: pos,
                    found: char_at(input, pos),
                })
            }
            None => return Err(ParseError::UnexpectedEnd { offset: pos }),
        }
    }
}

/// Advance past ASCII whitespace (space, tab, newline, carriage return).
fn skip_whitespace(input: &str, mut pos: usize) -> usize {
    let bytes = input.as_bytes();
    while let Some(&b) = bytes.get(pos) {
        match b {
            b' ' | b'\t' | b'\n' | b'\r' => pos += 1,
            _ => break,
        }
    }
    pos
}

/// The character at byte offset `pos`, for error reporting.
fn char_at(input: &str, pos: usize) -> char {
    input
        .get(pos..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}
