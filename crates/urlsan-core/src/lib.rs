//! URL sanitization engine.
//!
//! Decodes untrusted URLs to a fixed point (numeric entities, percent
//! escapes, control and zero-width characters, escaped whitespace), then
//! rejects script-capable schemes and canonicalizes http/https.

pub mod config;
pub mod logging;

pub mod bench;
pub mod decode;
pub mod error;
pub mod normalize;
pub mod patterns;
pub mod sanitize;
pub mod scheme;
pub mod validate;

pub use error::SanitizeError;
pub use patterns::BLANK_URL;
pub use sanitize::{sanitize, sanitize_opt, BlankReason, Report, Sanitizer};
pub use scheme::Classification;
