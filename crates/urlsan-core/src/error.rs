//! Engine error type.
//!
//! None of these escape [`crate::sanitize`]; each one turns into
//! [`crate::BLANK_URL`]. They are kept distinct so reports and logs can say why.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SanitizeError {
    /// Normalization was still changing the string when the pass cap was hit.
    #[error("normalization did not settle within {limit} passes")]
    PassLimitExceeded { limit: usize },

    /// The http/https candidate breaks URI syntax before it reaches the parser.
    #[error("not a well-formed URI: {reason}")]
    MalformedUri { reason: &'static str },

    /// The `url` crate rejected the http/https candidate.
    #[error("invalid http(s) URL: {0}")]
    UrlParse(#[from] url::ParseError),
}
