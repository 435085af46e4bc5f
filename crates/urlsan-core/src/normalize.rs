//! Fixed-point normalization: repeat one decoding pass until the string stops
//! changing.
//!
//! Every decoder in the pass only removes text or replaces a multi-char
//! construct with one char, and a pass only repeats if the previous one left
//! something it will remove. The pass count is therefore bounded by the input
//! length; the cap below turns a violation of that into an error instead of a
//! hang.

use std::borrow::Cow;

use crate::decode::{
    percent_decode, would_percent_decode, ControlCharFilter, ControlEntityStripper, Decoder,
    EntityDecoder, NamedEntityStripper, NumericEntityStripper, PercentDecoder, Trim,
    WhitespaceEscapeFilter,
};
use crate::error::SanitizeError;
use crate::patterns::RESIDUE;

/// Absolute pass ceiling. Each pass is linear in the input, so the
/// length-derived bound alone would allow quadratic work on long layered input.
pub const PASS_CEILING: usize = 1024;

/// Steps of one pass, in order.
static PASS: &[&dyn Decoder] = &[
    &EntityDecoder,
    &ControlEntityStripper,
    &NumericEntityStripper,
    &ControlCharFilter,
    &WhitespaceEscapeFilter,
    &NamedEntityStripper,
    &Trim,
    &PercentDecoder,
];

/// Result of [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// The fixed point. Empty when nothing survived.
    pub value: String,
    /// Number of full passes run (0 for blank input).
    pub passes: usize,
}

/// Decodes `raw` to its fixed point.
///
/// `max_passes` lowers the cap below the natural bound of `chars + 2`, itself
/// held under [`PASS_CEILING`]; it cannot raise it.
pub fn normalize(raw: &str, max_passes: Option<usize>) -> Result<Normalized, SanitizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Normalized {
            value: String::new(),
            passes: 0,
        });
    }

    let limit = pass_limit(trimmed, max_passes);
    let mut current = percent_decode(trimmed).into_owned();
    let mut passes = 0;

    loop {
        if passes >= limit {
            tracing::debug!(limit, "normalization pass cap reached");
            return Err(SanitizeError::PassLimitExceeded { limit });
        }
        current = run_pass(current);
        passes += 1;
        if !needs_another_pass(&current) {
            break;
        }
    }

    Ok(Normalized {
        value: current,
        passes,
    })
}

/// Runs every decoder once, in order.
pub fn run_pass(mut current: String) -> String {
    for step in PASS {
        let next = match step.apply(&current) {
            Cow::Borrowed(s) if s.len() == current.len() => continue,
            changed => changed.into_owned(),
        };
        tracing::trace!(step = step.name(), before = %current, after = %next, "decoder changed input");
        current = next;
    }
    current
}

/// True if another pass would still change `s`.
pub fn needs_another_pass(s: &str) -> bool {
    RESIDUE.is_match(s) || would_percent_decode(s)
}

fn pass_limit(input: &str, max_passes: Option<usize>) -> usize {
    let natural = (input.chars().count() + 2).min(PASS_CEILING);
    match max_passes {
        Some(cap) => cap.clamp(1, natural),
        None => natural,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> String {
        normalize(s, None).unwrap().value
    }

    #[test]
    fn blank_input() {
        let n = normalize("   ", None).unwrap();
        assert!(n.value.is_empty());
        assert_eq!(n.passes, 0);
    }

    #[test]
    fn clean_url_takes_one_pass() {
        let n = normalize("https://example.com/a?b=c", None).unwrap();
        assert_eq!(n.value, "https://example.com/a?b=c");
        assert_eq!(n.passes, 1);
    }

    #[test]
    fn nested_entities_resolve() {
        assert_eq!(
            norm("java&#38;&#38;&#35;78&#59;ewLine&#38;newline&#59;&#59;script&#58;alert"),
            "javascript:alert"
        );
        assert_eq!(norm("java&&#78;ewLine&newline;;script:x"), "javascript:x");
    }

    #[test]
    fn layered_percent_and_escape() {
        assert_eq!(
            norm("javascrip%25%32%35%25%33%35%25%34%33rt:alert()"),
            "javascript:alert()"
        );
        assert_eq!(norm("javascrip%255Ctt:alert()"), "javascript:alert()");
    }

    #[test]
    fn result_is_a_fixed_point() {
        for s in [
            "&#0000106&#0000097vascript:x",
            "www.example.com/\u{200d}\u{0}\u{1f}\u{feff}foo",
            "javascrip%25%35%43tt:alert()",
            "&am&amp;p;",
            "%252525",
        ] {
            let once = norm(s);
            assert!(!needs_another_pass(&once), "{s:?} -> {once:?}");
            assert_eq!(run_pass(once.clone()), once);
        }
    }

    #[test]
    fn stray_percent_is_stable() {
        assert_eq!(norm("50%off"), "50%off");
    }

    #[test]
    fn configured_cap_is_enforced() {
        let err = normalize("%252525", Some(1)).unwrap_err();
        assert!(matches!(err, SanitizeError::PassLimitExceeded { limit: 1 }));
    }

    #[test]
    fn configured_cap_cannot_exceed_natural_bound() {
        assert_eq!(pass_limit("abc", Some(1_000)), 5);
        assert_eq!(pass_limit("abc", Some(0)), 1);
        assert_eq!(pass_limit("abc", None), 5);
    }

    #[test]
    fn deep_layering_hits_the_ceiling() {
        assert_eq!(pass_limit(&"a".repeat(5_000), None), PASS_CEILING);

        let layered = "%".to_string() + &"25".repeat(1_100) + "41";
        let err = normalize(&layered, None).unwrap_err();
        assert!(matches!(
            err,
            SanitizeError::PassLimitExceeded { limit } if limit == PASS_CEILING
        ));

        let shallow = "%".to_string() + &"25".repeat(500) + "41";
        assert_eq!(normalize(&shallow, None).unwrap().value, "A");
    }

    #[test]
    fn long_entity_chain_terminates() {
        let payload = "&#38;".repeat(5_000) + "#106;avascript:alert(1)";
        let n = normalize(&payload, None).unwrap();
        assert!(n.passes < 10, "passes = {}", n.passes);
    }
}
