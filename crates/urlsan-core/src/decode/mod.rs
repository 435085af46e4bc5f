//! Single-purpose string decoders and filters.
//!
//! Each decoder is a pure `&str -> Cow<str>` transform that never grows its
//! input (measured in chars). The normalizer strings them together into one
//! pass and repeats the pass until nothing changes.

mod entity;
mod filters;
mod percent;

use std::borrow::Cow;

pub use entity::{
    decode_numeric_entities, strip_control_entities, strip_named_entities,
    strip_numeric_entities, ControlEntityStripper, EntityDecoder, NamedEntityStripper,
    NumericEntityStripper,
};
pub use filters::{
    strip_control_chars, strip_whitespace_escapes, ControlCharFilter, Trim,
    WhitespaceEscapeFilter,
};
pub use percent::{percent_decode, would_percent_decode, PercentDecoder};

/// One step of a normalization pass.
pub trait Decoder: Send + Sync {
    /// Short name used in trace logs.
    fn name(&self) -> &'static str;

    /// Applies the step. Returns `Cow::Borrowed` when the input is unchanged.
    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str>;
}
