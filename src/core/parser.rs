// File: src/core/parser.rs
//! Line parser for the `CODE: variant,variant  # comment` source table.

use crate::core::types::PinyinRecord;
use crate::error::LineError;
use std::any::Any;
use std::iter::Enumerate;
use std::panic::catch_unwind;
use std::str::Lines;

const COMMENT_MARKER: char = '#';
const FIELD_SEPARATOR: char = ':';
const VARIANT_SEPARATOR: char = ',';
const CODE_PREFIXES: [&str; 4] = ["U+", "u+", "0x", "0X"];
const EXCERPT_CHARS: usize = 80;

/// Parses one line. Returns `None` for empty lines and lines starting with
/// `#`, which are not data and never produce a warning. Anything else,
/// including whitespace-only or indented lines, is treated as data.
pub fn parse_line(line_number: usize, line: &str) -> Option<Result<PinyinRecord, LineError>> {
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return None;
    }
    Some(parse_data_line(line_number, line))
}

fn parse_data_line(line: usize, text: &str) -> Result<PinyinRecord, LineError> {
    let (code, pronunciation) = text
        .split_once(FIELD_SEPARATOR)
        .ok_or_else(|| LineError::MissingSeparator {
            line,
            text: excerpt(text),
        })?;

    let code = code.trim();
    if code.is_empty() {
        return Err(LineError::MissingCode {
            line,
            text: excerpt(text),
        });
    }
    let pronunciation = pronunciation.trim();
    if pronunciation.is_empty() {
        return Err(LineError::MissingPronunciation {
            line,
            text: excerpt(text),
        });
    }

    let code_point = parse_code_point(line, code)?;
    let variants = parse_variants(pronunciation);
    if variants.is_empty() {
        return Err(LineError::MissingPronunciation {
            line,
            text: excerpt(text),
        });
    }

    Ok(PinyinRecord {
        line,
        code_point,
        variants,
    })
}

/// Copy of a bad line for diagnostics, cut at `EXCERPT_CHARS` characters.
fn excerpt(text: &str) -> String {
    match text.char_indices().nth(EXCERPT_CHARS) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

fn parse_code_point(line: usize, field: &str) -> Result<u32, LineError> {
    let digits = CODE_PREFIXES
        .iter()
        .find_map(|prefix| field.strip_prefix(prefix))
        .unwrap_or(field);

    let invalid = || LineError::InvalidCodePoint {
        line,
        field: field.to_string(),
    };
    // from_str_radix would also take a leading sign.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u32::from_str_radix(digits, 16).map_err(|_| invalid())
}

/// Only the first whitespace-delimited token is kept; trailing annotations
/// are dropped. Empty variants from stray commas are skipped.
fn parse_variants(pronunciation: &str) -> Vec<String> {
    pronunciation
        .split_whitespace()
        .next()
        .unwrap_or("")
        .split(VARIANT_SEPARATOR)
        .filter(|variant| !variant.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lazily parses every line of `body`. Call again to restart.
pub fn parse_body(body: &str) -> RecordIter<'_> {
    RecordIter {
        lines: body.lines().enumerate(),
    }
}

/// Iterator over the data lines of a body, yielding one result per data line.
pub struct RecordIter<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl Iterator for RecordIter<'_> {
    type Item = Result<PinyinRecord, LineError>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, line) in self.lines.by_ref() {
            let line_number = index + 1;
            match catch_unwind(|| parse_line(line_number, line)) {
                Ok(Some(outcome)) => return Some(outcome),
                Ok(None) => continue,
                Err(payload) => {
                    return Some(Err(LineError::Unexpected {
                        line: line_number,
                        detail: panic_message(payload.as_ref()),
                    }))
                }
            }
        }
        None
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
