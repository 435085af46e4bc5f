//! Tolerant percent-decoding.

use percent_encoding::percent_decode_str;
use std::borrow::Cow;

use super::Decoder;

/// Decodes `%XX` escapes.
///
/// A `%` that does not start a valid escape is kept as-is, so `100%` in a
/// path survives. Escaped bytes that do not form UTF-8 stay as their original
/// escape text; everything around them is still decoded.
pub fn percent_decode(input: &str) -> Cow<'_, str> {
    if !input.contains('%') {
        return Cow::Borrowed(input);
    }

    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut changed = false;
    let mut copied_up_to = 0;
    let mut i = 0;
    while i < bytes.len() {
        let run_len = escape_run_len(&bytes[i..]);
        if run_len == 0 {
            i += 1;
            continue;
        }
        out.push_str(&input[copied_up_to..i]);
        changed |= decode_run(&input[i..i + run_len], &mut out);
        i += run_len;
        copied_up_to = i;
    }

    if !changed {
        return Cow::Borrowed(input);
    }
    out.push_str(&input[copied_up_to..]);
    Cow::Owned(out)
}

/// Length in bytes of the run of consecutive `%XX` escapes at the start of
/// `bytes`.
fn escape_run_len(bytes: &[u8]) -> usize {
    let escapes = bytes
        .chunks(3)
        .take_while(|chunk| {
            matches!(chunk, [b'%', hi, lo] if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit())
        })
        .count();
    escapes * 3
}

/// Decodes one run of escapes into `out`. Returns false if none of its bytes
/// formed UTF-8 and the run was copied back verbatim.
fn decode_run(run: &str, out: &mut String) -> bool {
    let decoded: Vec<u8> = percent_decode_str(run).collect();
    let mut changed = false;
    let mut pos = 0;
    for chunk in decoded.utf8_chunks() {
        let valid = chunk.valid();
        if !valid.is_empty() {
            out.push_str(valid);
            changed = true;
        }
        pos += valid.len() * 3;

        // One escape per invalid byte.
        let invalid_end = pos + chunk.invalid().len() * 3;
        out.push_str(&run[pos..invalid_end]);
        pos = invalid_end;
    }
    changed
}

/// True when [`percent_decode`] would change `input`.
pub fn would_percent_decode(input: &str) -> bool {
    input.contains('%') && matches!(percent_decode(input), Cow::Owned(_))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PercentDecoder;

impl Decoder for PercentDecoder {
    fn name(&self) -> &'static str {
        "percent"
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        percent_decode(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_layer() {
        assert_eq!(percent_decode("%20%20javascript%3A"), "  javascript:");
        assert_eq!(percent_decode("javascrip%255Ctt"), "javascrip%5Ctt");
    }

    #[test]
    fn multibyte_utf8() {
        assert_eq!(percent_decode("%EF%BB%BF%e2%80%8b"), "\u{feff}\u{200b}");
    }

    #[test]
    fn stray_percent_passes_through() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%4"), "%4");
        assert_eq!(percent_decode("a%zzb%41"), "a%zzbA");
    }

    #[test]
    fn invalid_utf8_bytes_stay_escaped() {
        assert_eq!(percent_decode("%FF%41"), "%FFA");
        assert_eq!(percent_decode("javascript%3Aalert(1)%FF"), "javascript:alert(1)%FF");
        assert_eq!(percent_decode("%6Aava%C0"), "java%C0");
        assert_eq!(percent_decode("%e2%80%41%C3%A9"), "%e2%80A\u{e9}");
        assert!(matches!(percent_decode("%FF%c0"), Cow::Borrowed("%FF%c0")));
        assert!(!would_percent_decode("%FF"));
    }

    #[test]
    fn truncated_sequence_keeps_escape_text() {
        assert_eq!(percent_decode("a%E2%82b"), "a%E2%82b");
        assert_eq!(percent_decode("%E2%82%AC%E2%82"), "\u{20ac}%E2%82");
    }

    #[test]
    fn would_decode() {
        assert!(would_percent_decode("a%20b"));
        assert!(!would_percent_decode("a%b"));
        assert!(!would_percent_decode("plain"));
    }
}
