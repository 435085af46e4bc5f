//! HTML character reference handling.

use regex::Captures;
use std::borrow::Cow;

use super::{strip_control_chars, Decoder};
use crate::patterns::{HTML_CTRL_ENTITY, HTML_ENTITY, NAMED_ENTITY};

/// Decodes decimal references (`&#106;`, `&#0000106`) to their character.
///
/// Control characters are removed first so that `&#\0x09;` is seen as one
/// reference. A reference whose payload is not a decimal number, or is not a
/// Unicode scalar value, is removed rather than left in place.
pub fn decode_numeric_entities(input: &str) -> Cow<'_, str> {
    let cleaned = strip_control_chars(input);
    if !HTML_ENTITY.is_match(&cleaned) {
        return cleaned;
    }
    let decoded = HTML_ENTITY
        .replace_all(&cleaned, |caps: &Captures<'_>| {
            caps[1]
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_default()
        })
        .into_owned();
    Cow::Owned(decoded)
}

/// Removes `&newline;` and `&tab;` in any case.
pub fn strip_control_entities(input: &str) -> Cow<'_, str> {
    HTML_CTRL_ENTITY.replace_all(input, "")
}

/// Removes anything still shaped like a numeric reference, including ones
/// assembled by the decode step (`&#38;#106;` decodes to `&#106;`).
pub fn strip_numeric_entities(input: &str) -> Cow<'_, str> {
    HTML_ENTITY.replace_all(input, "")
}

/// Removes every `&alnum;` token (`&colon;`, `&amp;`, `&ewLine;`).
pub fn strip_named_entities(input: &str) -> Cow<'_, str> {
    NAMED_ENTITY.replace_all(input, "")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EntityDecoder;

impl Decoder for EntityDecoder {
    fn name(&self) -> &'static str {
        "numeric-entities"
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        decode_numeric_entities(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ControlEntityStripper;

impl Decoder for ControlEntityStripper {
    fn name(&self) -> &'static str {
        "control-entities"
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        strip_control_entities(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NumericEntityStripper;

impl Decoder for NumericEntityStripper {
    fn name(&self) -> &'static str {
        "leftover-numeric-entities"
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        strip_numeric_entities(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NamedEntityStripper;

impl Decoder for NamedEntityStripper {
    fn name(&self) -> &'static str {
        "named-entities"
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        strip_named_entities(input)
    }
}
