//! `urlsan demo` – sanitize a fixed set of sample URLs.

use anyhow::Result;
use std::io::Write;
use urlsan_core::Sanitizer;

const SAMPLES: &[&str] = &[
    "https://example.com",
    "http://example.com",
    "www.example.com",
    "mailto:hello@example.com",
    "&#104;&#116;&#116;&#112;&#115;&#0000058//&#101;&#120;&#97;&#109;&#112;&#108;&#101;&#46;&#99;&#111;&#109;",
    "javascript:alert(document.domain)",
    "jAvasCrIPT:alert(document.domain)",
    "JaVaScRiP%0at:alert(document.domain)",
    "&#0000106&#0000097&#0000118&#0000097&#0000115&#0000099&#0000114&#0000105&#0000112&#0000116&#0000058&#0000097&#0000108&#0000101&#0000114&#0000116&#0000040&#0000039&#0000088&#0000083&#0000083&#0000039&#0000041",
];

pub fn run_demo<W: Write>(sanitizer: &Sanitizer, out: &mut W) -> Result<()> {
    for sample in SAMPLES {
        writeln!(out, "{sample}")?;
        writeln!(out, "  -> {}", sanitizer.sanitize(sample))?;
    }
    Ok(())
}
