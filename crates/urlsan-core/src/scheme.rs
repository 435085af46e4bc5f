//! Scheme extraction and classification of a normalized URL.

use serde::Serialize;
use std::borrow::Cow;

use crate::patterns::{INVALID_PROTOCOL, RELATIVE_FIRST_CHARS, URL_SCHEME};

/// How a normalized URL is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Starts with `.` or `/`; no scheme to check.
    RelativeNoProtocol,
    /// Scheme is `javascript`, `data` or `vbscript` (after leading punctuation).
    Denylisted,
    Mailto,
    /// Any other `something://` scheme, e.g. app deep links.
    CustomScheme,
    /// `http:` or `https:`; needs validation and canonical casing.
    HttpLike,
    /// No scheme, or a scheme without special handling.
    Opaque,
}

/// Outcome of [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified<'a> {
    pub classification: Classification,
    /// Lowercased, trimmed scheme token including its delimiter, if any.
    pub scheme: Option<String>,
    /// The string to emit (or, for `HttpLike`, to validate). Empty for
    /// `Denylisted`.
    pub candidate: Cow<'a, str>,
}

/// Scheme token of `url`: everything from the start of the first line that
/// has a delimiter up to the last `:` or `&colon;` on it, lowercased and
/// trimmed.
pub fn scheme_token(url: &str) -> Option<String> {
    URL_SCHEME
        .find(url)
        .map(|m| m.as_str().to_lowercase().trim().to_string())
}

/// True if `token` names a script-capable scheme.
pub fn is_denylisted(token: &str) -> bool {
    INVALID_PROTOCOL.is_match(token)
}

/// Classifies a normalized (fixed-point) URL.
pub fn classify(normalized: &str) -> Classified<'_> {
    if normalized.starts_with(RELATIVE_FIRST_CHARS) {
        return Classified {
            classification: Classification::RelativeNoProtocol,
            scheme: None,
            candidate: Cow::Borrowed(normalized),
        };
    }

    let trimmed = normalized.trim_start();
    let Some(token) = scheme_token(trimmed) else {
        return Classified {
            classification: Classification::Opaque,
            scheme: None,
            candidate: Cow::Borrowed(normalized),
        };
    };

    if is_denylisted(&token) {
        return Classified {
            classification: Classification::Denylisted,
            scheme: Some(token),
            candidate: Cow::Borrowed(""),
        };
    }

    let candidate = if trimmed.contains('\\') {
        Cow::Owned(trimmed.replace('\\', "/"))
    } else {
        Cow::Borrowed(trimmed)
    };

    let classification = match token.as_str() {
        "mailto:" => Classification::Mailto,
        t if t.contains("://") => Classification::CustomScheme,
        "http:" | "https:" => Classification::HttpLike,
        _ => Classification::Opaque,
    };

    Classified {
        classification,
        scheme: Some(token),
        candidate,
    }
}
