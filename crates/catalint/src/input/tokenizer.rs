//! Tokenizer for the sheet dialect: comma columns, newline rows, `""` escapes.

use crate::error::{CatalintError, Result};

/// Column separator.
pub const FIELD_SEPARATOR: char = ',';

/// Row separator.
pub const ROW_SEPARATOR: char = '\n';

const QUOTE: char = '"';

/// Scanner state while walking one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing consumed for the current field yet.
    FieldStart,
    /// Inside a field that did not open with a quote.
    Unquoted,
    /// Inside a quoted field.
    Quoted,
    /// A quote inside a quoted field: either the first half of `""` or the closing quote.
    QuoteInQuoted,
}

/// Splits raw sheet text into rows of unescaped field strings.
///
/// Records are single-line. A quoted field that reaches the end of its line
/// without a closing quote is a parse error rather than a continuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer.
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a whole sheet.
    ///
    /// Surrounding whitespace of the input is trimmed first; blank input
    /// yields no rows.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Vec<String>>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        text.split(ROW_SEPARATOR)
            .enumerate()
            .map(|(idx, line)| tokenize_line(line, idx + 1))
            .collect()
    }
}

/// Tokenize a whole sheet with the default tokenizer.
pub fn tokenize(text: &str) -> Result<Vec<Vec<String>>> {
    Tokenizer::new().tokenize(text)
}

fn tokenize_line(line: &str, row: usize) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut state = State::FieldStart;

    for (col, ch) in line.chars().enumerate() {
        state = match (state, ch) {
            (State::FieldStart, QUOTE) => State::Quoted,
            (State::FieldStart | State::Unquoted, FIELD_SEPARATOR) => {
                fields.push(std::mem::take(&mut field));
                State::FieldStart
            }
            (State::FieldStart | State::Unquoted, c) => {
                field.push(c);
                State::Unquoted
            }
            (State::Quoted, QUOTE) => State::QuoteInQuoted,
            (State::Quoted, c) => {
                field.push(c);
                State::Quoted
            }
            (State::QuoteInQuoted, QUOTE) => {
                field.push(QUOTE);
                State::Quoted
            }
            (State::QuoteInQuoted, FIELD_SEPARATOR) => {
                fields.push(std::mem::take(&mut field));
                State::FieldStart
            }
            (State::QuoteInQuoted, c) => {
                return Err(CatalintError::Parse {
                    row,
                    message: format!("unexpected '{}' after closing quote at column {}", c, col + 1),
                });
            }
        };
    }

    if state == State::Quoted {
        return Err(CatalintError::Parse {
            row,
            message: "unterminated quoted field".to_string(),
        });
    }

    fields.push(field);
    Ok(fields)
}
