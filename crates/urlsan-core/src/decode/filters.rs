//! Control-character and whitespace-escape removal.

use std::borrow::Cow;

use super::Decoder;
use crate::patterns::{CTRL_CHARS, WHITESPACE_ESCAPE};

/// Removes C0/C1 controls, U+2000–U+200D and the byte-order mark.
pub fn strip_control_chars(input: &str) -> Cow<'_, str> {
    CTRL_CHARS.replace_all(input, "")
}

/// Removes `\n`, `%5ct`, `\%72` and the other escaped-whitespace spellings
/// used to split a scheme name (`jav\tascript:`).
pub fn strip_whitespace_escapes(input: &str) -> Cow<'_, str> {
    WHITESPACE_ESCAPE.replace_all(input, "")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ControlCharFilter;

impl Decoder for ControlCharFilter {
    fn name(&self) -> &'static str {
        "control-chars"
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        strip_control_chars(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceEscapeFilter;

impl Decoder for WhitespaceEscapeFilter {
    fn name(&self) -> &'static str {
        "whitespace-escapes"
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        strip_whitespace_escapes(input)
    }
}

/// Trims surrounding whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trim;

impl Decoder for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(input.trim())
    }
}
