use std::io::{self, Write};

use crate::report::{write_indented, write_section};

use super::types::{RunOutcome, RunSummary};
use super::RunnerEvent;

pub const TITLE: &str = "Political Visualization Charts - Generation Report";

pub fn write_event<W: Write>(w: &mut W, event: &RunnerEvent) -> io::Result<()> {
    match event {
        RunnerEvent::JobStarted { name, script } => {
            writeln!(w, "🔄 GENERATING: {name}")?;
            writeln!(w, "   Script: {script}")?;
        }
        RunnerEvent::JobFinished(result) => {
            match result.outcome {
                RunOutcome::Skipped => {
                    writeln!(w, "⚠️  SKIPPED: {}", result.name)?;
                    writeln!(w, "   {}: {}", result.diagnostic, result.script)?;
                }
                outcome => {
                    writeln!(w, "{} {}: {}", outcome.symbol(), outcome.label(), result.name)?;
                    write_indented(w, &result.tail)?;
                }
            }
            writeln!(w)?;
        }
    }
    Ok(())
}

pub fn write_summary<W: Write>(w: &mut W, summary: &RunSummary) -> io::Result<()> {
    write_section(w, "SUMMARY")?;

    for r in &summary.results {
        writeln!(w, "{} {}: {}", r.outcome.symbol(), r.name, r.outcome.label())?;
    }

    writeln!(w)?;
    writeln!(
        w,
        "Total: {} | Success: {} | Failed: {} | Skipped: {}",
        summary.total(),
        summary.count(RunOutcome::Success),
        summary.count(RunOutcome::Failed),
        summary.count(RunOutcome::Skipped),
    )?;
    writeln!(w)?;

    if summary.has_failures() {
        writeln!(w, "❌ Some charts failed to generate")
    } else {
        writeln!(w, "✅ All charts generated successfully")
    }
}
