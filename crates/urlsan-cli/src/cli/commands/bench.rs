//! `urlsan bench` – time the engine on adversarial payloads.

use anyhow::Result;
use std::io::Write;
use urlsan_core::bench::{self, BenchResult};
use urlsan_core::Sanitizer;

const OUTPUT_WIDTH: usize = 40;

fn print_bench_results<W: Write>(results: &[BenchResult], out: &mut W) -> Result<()> {
    writeln!(
        out,
        "  {:<15}  {:>8}  {:>6}  {:>10}  {}",
        "Payload", "Chars", "Passes", "Time(ms)", "Output"
    )?;
    writeln!(
        out,
        "  {}  {}  {}  {}  {}",
        "---------------", "--------", "------", "----------", "------"
    )?;
    for r in results {
        writeln!(
            out,
            "  {:<15}  {:>8}  {:>6}  {:>10.3}  {}",
            format!("{:?}", r.payload),
            r.input_chars,
            r.passes,
            r.elapsed_secs * 1000.0,
            truncate(&r.output, OUTPUT_WIDTH)
        )?;
    }
    Ok(())
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let head: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

pub fn run_bench<W: Write>(sanitizer: &Sanitizer, depth: usize, out: &mut W) -> Result<()> {
    let results = bench::run_bench(sanitizer, depth)?;
    print_bench_results(&results, out)?;
    if let Some(slowest) = bench::slowest(&results) {
        writeln!(out, "Slowest payload: {:?}", slowest.payload)?;
    }
    Ok(())
}
