//! Public sanitization entry points.
//!
//! Ties the normalizer, classifier and http validator together. Nothing here
//! returns an error: anything that cannot be shown safe becomes
//! [`BLANK_URL`].

use serde::Serialize;

use crate::config::UrlsanConfig;
use crate::error::SanitizeError;
use crate::normalize::normalize;
use crate::patterns::BLANK_URL;
use crate::scheme::{classify, Classification};
use crate::validate::canonicalize_http;

/// Why a report's output is [`BLANK_URL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankReason {
    /// Absent input, or nothing left after normalization.
    Empty,
    Denylisted,
    PassLimitExceeded,
    InvalidHttpUrl,
}

/// Everything the engine decided about one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub input: Option<String>,
    pub normalized: Option<String>,
    pub scheme: Option<String>,
    pub classification: Option<Classification>,
    pub blank_reason: Option<BlankReason>,
    pub passes: usize,
    pub output: String,
}

impl Report {
    fn blank(input: Option<&str>, reason: BlankReason) -> Self {
        Self {
            input: input.map(str::to_string),
            normalized: None,
            scheme: None,
            classification: None,
            blank_reason: Some(reason),
            passes: 0,
            output: BLANK_URL.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.blank_reason.is_some()
    }
}

/// URL sanitizer. Holds only configuration, so it is cheap to copy and safe to
/// share between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sanitizer {
    max_passes: Option<usize>,
}

impl Sanitizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(cfg: &UrlsanConfig) -> Self {
        Self {
            max_passes: cfg.max_passes,
        }
    }

    /// Lowers the normalization pass cap (see [`normalize`]).
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }

    /// Returns a string safe to place in a link or redirect, or [`BLANK_URL`].
    pub fn sanitize(&self, url: &str) -> String {
        self.inspect(Some(url)).output
    }

    /// Like [`Sanitizer::sanitize`], treating `None` as empty.
    pub fn sanitize_opt(&self, url: Option<&str>) -> String {
        self.inspect(url).output
    }

    /// Sanitizes `url` and records each decision along the way.
    pub fn inspect(&self, url: Option<&str>) -> Report {
        let raw = match url {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Report::blank(url, BlankReason::Empty),
        };

        let normalized = match normalize(raw, self.max_passes) {
            Ok(n) => n,
            Err(err) => {
                tracing::debug!(error = %err, "blanking url");
                return Report::blank(url, BlankReason::PassLimitExceeded);
            }
        };
        if normalized.value.is_empty() {
            return Report {
                passes: normalized.passes,
                ..Report::blank(url, BlankReason::Empty)
            };
        }

        let classified = classify(&normalized.value);
        let result = match classified.classification {
            Classification::Denylisted => {
                tracing::debug!(scheme = ?classified.scheme, "denylisted scheme");
                Err(BlankReason::Denylisted)
            }
            Classification::HttpLike => canonicalize_http(&classified.candidate)
                .map_err(|err: SanitizeError| {
                    tracing::debug!(error = %err, "http(s) url failed validation");
                    BlankReason::InvalidHttpUrl
                }),
            Classification::RelativeNoProtocol
            | Classification::Mailto
            | Classification::CustomScheme
            | Classification::Opaque => Ok(classified.candidate.into_owned()),
        };

        let (output, blank_reason) = match result {
            Ok(output) => (output, None),
            Err(reason) => (BLANK_URL.to_string(), Some(reason)),
        };

        Report {
            input: url.map(str::to_string),
            normalized: Some(normalized.value.clone()),
            scheme: classified.scheme,
            classification: Some(classified.classification),
            blank_reason,
            passes: normalized.passes,
            output,
        }
    }
}

/// Sanitizes `url` with the default engine settings.
///
/// # Examples
///
/// - `sanitize("https://EXAMPLE.com")` → `"https://example.com/"`
/// - `sanitize("jav&#x09;ascript:alert(1)")` → `"about:blank"`
/// - `sanitize("./path/to/my.json")` → `"./path/to/my.json"`
pub fn sanitize(url: &str) -> String {
    Sanitizer::default().sanitize(url)
}

/// [`sanitize`] for possibly-absent input; `None` yields [`BLANK_URL`].
pub fn sanitize_opt(url: Option<&str>) -> String {
    Sanitizer::default().sanitize_opt(url)
}
