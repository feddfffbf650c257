// File: src/core/converter.rs
//! Code point -> character conversion.
//!
//! Values past the basic plane go through their UTF-16 surrogate pair and are
//! recombined into one `char`, so every dictionary key is a single character.

const SUPPLEMENTARY_BASE: u32 = 0x10000;
const HIGH_SURROGATE_START: u32 = 0xD800;
const LOW_SURROGATE_START: u32 = 0xDC00;
const SURROGATE_SPAN: u32 = 0x400;

/// UTF-16 code units for one code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf16Units {
    Single(u16),
    Pair { high: u16, low: u16 },
}

impl Utf16Units {
    pub fn to_vec(self) -> Vec<u16> {
        match self {
            Utf16Units::Single(unit) => vec![unit],
            Utf16Units::Pair { high, low } => vec![high, low],
        }
    }
}

/// Splits a code point into UTF-16 units. Inputs above 0x10FFFF give
/// truncated, meaningless units; callers validate via
/// [`code_point_to_char`].
pub fn utf16_units(code_point: u32) -> Utf16Units {
    if code_point < SUPPLEMENTARY_BASE {
        return Utf16Units::Single(code_point as u16);
    }
    let offset = code_point - SUPPLEMENTARY_BASE;
    let high = offset / SURROGATE_SPAN + HIGH_SURROGATE_START;
    let low = offset % SURROGATE_SPAN + LOW_SURROGATE_START;
    Utf16Units::Pair {
        high: high as u16,
        low: low as u16,
    }
}

/// Inverse of the pair decomposition in [`utf16_units`].
pub fn combine_surrogates(high: u16, low: u16) -> u32 {
    (u32::from(high) - HIGH_SURROGATE_START) * SURROGATE_SPAN
        + (u32::from(low) - LOW_SURROGATE_START)
        + SUPPLEMENTARY_BASE
}

/// Returns the character for `code_point`, or `None` if it is not a Unicode
/// scalar value (lone surrogates, anything past 0x10FFFF).
pub fn code_point_to_char(code_point: u32) -> Option<char> {
    if code_point > char::MAX as u32 {
        return None;
    }
    let units = utf16_units(code_point).to_vec();
    let mut decoded = char::decode_utf16(units);
    match (decoded.next(), decoded.next()) {
        (Some(Ok(ch)), None) => Some(ch),
        _ => None,
    }
}
