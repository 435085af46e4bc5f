//! Benchmark mode: time the sanitizer on generated adversarial payloads.
//!
//! Each payload family nests one obfuscation technique `depth` times around
//! `javascript:alert(1)` (or a long benign URL). Reports input size, number of
//! normalization passes, elapsed time and the final output, so regressions in
//! the pass bound or in per-pass cost show up directly.

use anyhow::{bail, Result};
use serde::Serialize;
use std::time::Instant;

use crate::sanitize::Sanitizer;

/// Default nesting depth when none is given.
pub const DEFAULT_BENCH_DEPTH: usize = 256;

/// Largest accepted depth. Layered payloads need one pass per layer, so run
/// time grows with the square of the depth until the engine's pass ceiling
/// blanks them.
const MAX_BENCH_DEPTH: usize = 4096;

const ATTACK: &str = "javascript:alert(1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayloadKind {
    /// Every attack character as a decimal reference zero-padded to `depth`.
    EntityChain,
    /// `&` re-encoded as `&#38;` on every layer.
    EntityNesting,
    /// `:` percent-encoded, then `%` re-encoded as `%25` on every layer.
    PercentLayers,
    /// Control and zero-width characters between every scheme letter.
    ControlFlood,
    /// Backslash escapes (`\t`, `%5Cn`) spliced into the scheme.
    EscapeSplice,
    /// A clean http URL with a long path, for baseline cost.
    BenignLong,
}

impl PayloadKind {
    pub const ALL: [PayloadKind; 6] = [
        PayloadKind::EntityChain,
        PayloadKind::EntityNesting,
        PayloadKind::PercentLayers,
        PayloadKind::ControlFlood,
        PayloadKind::EscapeSplice,
        PayloadKind::BenignLong,
    ];

    /// Builds the payload for this family at `depth`.
    pub fn generate(self, depth: usize) -> String {
        match self {
            PayloadKind::EntityChain => {
                let padding = "0".repeat(depth);
                ATTACK
                    .chars()
                    .map(|c| format!("&#{padding}{};", u32::from(c)))
                    .collect()
            }
            PayloadKind::EntityNesting => {
                let mut s = String::from("&#106;avascript:alert(1)");
                for _ in 0..depth {
                    s = s.replace('&', "&#38;");
                }
                s
            }
            PayloadKind::PercentLayers => {
                let mut s = ATTACK.replace(':', "%3A");
                for _ in 0..depth {
                    s = s.replace('%', "%25");
                }
                s
            }
            PayloadKind::ControlFlood => {
                let filler = "\u{0}\u{200b}\u{feff}\t".repeat(depth.max(1));
                let (scheme, rest) = ATTACK.split_at(10);
                let mut s = String::new();
                for c in scheme.chars() {
                    s.push(c);
                    s.push_str(&filler);
                }
                s.push_str(rest);
                s
            }
            PayloadKind::EscapeSplice => {
                let splice = "\\t%5Cn%5c%72".repeat(depth.max(1));
                format!("java{splice}script:alert(1)")
            }
            PayloadKind::BenignLong => {
                format!("https://EXAMPLE.com/{}?q=1", "segment/".repeat(depth))
            }
        }
    }
}

/// Result of one benchmark run (one payload family).
#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub payload: PayloadKind,
    pub input_chars: usize,
    pub passes: usize,
    pub elapsed_secs: f64,
    pub output: String,
}

/// Runs every payload family at `depth` through `sanitizer`.
pub fn run_bench(sanitizer: &Sanitizer, depth: usize) -> Result<Vec<BenchResult>> {
    if depth > MAX_BENCH_DEPTH {
        bail!("depth {depth} exceeds maximum of {MAX_BENCH_DEPTH}");
    }

    let mut results = Vec::with_capacity(PayloadKind::ALL.len());
    for payload in PayloadKind::ALL {
        let input = payload.generate(depth);
        let start = Instant::now();
        let report = sanitizer.inspect(Some(&input));
        let elapsed_secs = start.elapsed().as_secs_f64();
        tracing::debug!(?payload, passes = report.passes, elapsed_secs, "bench run");

        results.push(BenchResult {
            payload,
            input_chars: input.chars().count(),
            passes: report.passes,
            elapsed_secs,
            output: report.output,
        });
    }

    Ok(results)
}

/// The run that took longest, if any.
pub fn slowest(results: &[BenchResult]) -> Option<&BenchResult> {
    results.iter().max_by(|a, b| {
        a.elapsed_secs
            .partial_cmp(&b.elapsed_secs)
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}
