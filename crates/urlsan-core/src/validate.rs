//! Validation and canonical casing for http/https URLs.

use url::Url;

use crate::error::SanitizeError;

/// Characters RFC 3986 never allows unescaped in a URI.
const FORBIDDEN: &[char] = &['"', '<', '>', '^', '`', '{', '|', '}'];

/// Checks `candidate` is a well-formed http(s) URI and returns it with scheme
/// and host lowercased. Userinfo, path, query and fragment are kept byte for
/// byte; an empty path becomes `/`.
pub fn canonicalize_http(candidate: &str) -> Result<String, SanitizeError> {
    check_well_formed(candidate)?;

    // Special schemes always parse with a non-empty host. The parse is only a
    // grammar check: its serialization would escape non-ASCII paths and
    // punycode the host.
    let parsed = Url::parse(candidate)?;
    Ok(recase(candidate, parsed.scheme()))
}

/// Rebuilds `candidate` from its own text with `scheme` and a lowercased host.
fn recase(candidate: &str, scheme: &str) -> String {
    let rest = candidate
        .split_once(':')
        .map_or(candidate, |(_, rest)| rest)
        .trim_start_matches(['/', '\\']);
    let (authority, tail) = rest
        .find(['/', '\\', '?', '#'])
        .map_or((rest, ""), |at| rest.split_at(at));
    let (userinfo, host) = match authority.rfind('@') {
        Some(at) => authority.split_at(at + 1),
        None => ("", authority),
    };

    let mut out = format!("{scheme}://{userinfo}{}", host.to_lowercase());
    if tail.is_empty() || tail.starts_with(['?', '#']) {
        out.push('/');
    }
    out.push_str(tail);
    out
}

/// The `url` crate quietly escapes or drops things a strict URI grammar
/// rejects; reject them here first.
fn check_well_formed(candidate: &str) -> Result<(), SanitizeError> {
    if candidate.chars().any(char::is_whitespace) {
        return Err(SanitizeError::MalformedUri {
            reason: "contains whitespace",
        });
    }
    if candidate.contains(FORBIDDEN) {
        return Err(SanitizeError::MalformedUri {
            reason: "contains a character that must be percent-encoded",
        });
    }
    if !has_valid_percent_escapes(candidate) {
        return Err(SanitizeError::MalformedUri {
            reason: "contains a malformed percent escape",
        });
    }
    Ok(())
}

/// Every `%` must be followed by two hex digits.
fn has_valid_percent_escapes(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
