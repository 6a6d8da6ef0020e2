use std::io::Write;

use anyhow::Result;
use chatreplay_core::SummaryCounters;
use clap::Args;

use crate::source::DumpSource;

#[derive(Debug, Clone, Args)]
pub struct SummaryArgs {
    /// Path or URL of a live-chat replay dump
    pub source: String,
}

pub async fn run(args: SummaryArgs) -> Result<()> {
    let raw = DumpSource::detect(&args.source).load().await?;
    let transcript = chatreplay_parser::parse_transcript(&raw)?;
    let stdout = std::io::stdout();
    write_summary(&transcript.summary, &transcript.counters, &mut stdout.lock())
}

fn write_summary(
    summary: &str,
    counters: &SummaryCounters,
    writer: &mut dyn Write,
) -> Result<()> {
    writeln!(writer, "{summary}")?;
    writeln!(writer, "{}", "─".repeat(50))?;
    let rows = [
        ("displayed", counters.displayed),
        ("ticker", counters.skipped_ticker),
        ("unhandled items", counters.skipped_unhandled_item),
        ("unhandled actions", counters.skipped_unhandled_action),
        ("total actions", counters.total_actions()),
    ];
    for (label, count) in rows {
        writeln!(writer, "  {label:<18} {count}")?;
    }
    Ok(())
}
