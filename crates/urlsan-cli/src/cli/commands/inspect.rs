//! `urlsan inspect <url>` – show each decision the engine made.

use anyhow::Result;
use std::io::Write;
use urlsan_core::config::OutputFormat;
use urlsan_core::{Report, Sanitizer};

pub fn run_inspect<W: Write>(
    sanitizer: &Sanitizer,
    url: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let report = sanitizer.inspect(Some(url));
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        OutputFormat::Plain => print_report(&report, out)?,
    }
    Ok(())
}

fn print_report<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
    writeln!(out, "{:<16}{:?}", "input:", report.input.as_deref().unwrap_or(""))?;
    writeln!(
        out,
        "{:<16}{}",
        "normalized:",
        or_dash(report.normalized.as_ref().map(|n| format!("{n:?}")))
    )?;
    writeln!(out, "{:<16}{}", "scheme:", or_dash(report.scheme.clone()))?;
    writeln!(
        out,
        "{:<16}{}",
        "classification:",
        or_dash(report.classification.map(|c| format!("{c:?}")))
    )?;
    writeln!(out, "{:<16}{}", "passes:", report.passes)?;
    if let Some(reason) = report.blank_reason {
        writeln!(out, "{:<16}{:?}", "blanked:", reason)?;
    }
    writeln!(out, "{:<16}{}", "output:", report.output)?;
    Ok(())
}
