//! `urlsan sanitize [url]...` – print one sanitized URL per input.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use urlsan_core::Sanitizer;

/// Sanitizes `urls`, or each line of `input` when `urls` is empty.
pub fn run_sanitize<R: BufRead, W: Write>(
    sanitizer: &Sanitizer,
    urls: &[String],
    input: R,
    out: &mut W,
) -> Result<()> {
    if !urls.is_empty() {
        for url in urls {
            writeln!(out, "{}", sanitizer.sanitize(url))?;
        }
        return Ok(());
    }

    for line in input.lines() {
        let line = line.context("read url from stdin")?;
        writeln!(out, "{}", sanitizer.sanitize(&line))?;
    }
    Ok(())
}
