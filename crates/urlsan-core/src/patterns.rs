//! Pattern tables shared by the decoders and the scheme classifier.
//!
//! Every pattern is compiled once on first use and never mutated.

use regex::Regex;
use std::sync::LazyLock;

/// Returned whenever an input cannot be shown to be safe.
pub const BLANK_URL: &str = "about:blank";

/// A normalized URL starting with one of these has no scheme to validate.
pub(crate) const RELATIVE_FIRST_CHARS: [char; 2] = ['.', '/'];

/// Leading run of non-word characters followed by a script-capable scheme name.
pub(crate) static INVALID_PROTOCOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^([^\w]*)(javascript|data|vbscript)").expect("denylist regex must compile")
});

/// Numeric character reference. The payload is any word run so that hex and
/// garbage payloads are caught too (and then stripped).
pub(crate) static HTML_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)&#(\w+);?").expect("entity regex must compile"));

pub(crate) static HTML_CTRL_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)&(newline|tab);").expect("control entity regex must compile")
});

/// Anything shaped like a named entity (`&amp;`, `&colon;`, `&NewLine;`).
pub(crate) static NAMED_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[a-zA-Z0-9]+;").expect("named entity regex must compile"));

/// C0/C1 controls, zero-width spaces and joiners, byte-order mark.
pub(crate) static CTRL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{00}-\x{1F}\x{7F}-\x{9F}\x{2000}-\x{200D}\x{FEFF}]")
        .expect("control char regex must compile")
});

/// From the start of a line to the last scheme delimiter on it.
pub(crate) static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^.+(:|&colon;)").expect("scheme regex must compile"));

/// `\n`, `\r`, `\t` written with a literal or `%5c` backslash, where the
/// letter may itself be percent-encoded.
pub(crate) static WHITESPACE_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\\|%5c)(%(6e|72|74)|[nrt])").expect("whitespace escape regex must compile")
});

/// Everything a normalization pass removes or resolves, in one scan.
pub(crate) static RESIDUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[\x{00}-\x{1F}\x{7F}-\x{9F}\x{2000}-\x{200D}\x{FEFF}]",
        r"|(?i:&#\w+)",
        r"|(?i:(\\|%5c)(%(6e|72|74)|[nrt]))",
        r"|&[a-zA-Z0-9]+;",
    ))
    .expect("residue regex must compile")
});
