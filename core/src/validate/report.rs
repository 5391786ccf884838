use std::io::{self, Write};

use crate::report::{write_indented, write_section};

use super::chart::ValidationResult;
use super::scan::ValidationSummary;

pub const TITLE: &str = "Chart Validation Report";

pub fn write_no_files<W: Write>(w: &mut W, output_dir: &str) -> io::Result<()> {
    writeln!(w, "⚠️  No chart files found in {}/", output_dir.trim_end_matches('/'))
}

pub fn write_result<W: Write>(w: &mut W, result: &ValidationResult) -> io::Result<()> {
    let symbol = if result.valid { "✅" } else { "❌" };
    writeln!(w, "{symbol} {}", result.file)?;

    write_indented(w, result.errors.iter().map(|e| format!("ERROR: {e}")))?;
    write_indented(w, result.warnings.iter().map(|e| format!("WARNING: {e}")))?;
    if !result.colors_found.is_empty() {
        writeln!(w, "   Colors: {}", result.colors_found.join(", "))?;
    }
    writeln!(w, "   Size: {:.2}MB", result.size_mb)?;
    writeln!(w)
}

pub fn write_summary<W: Write>(w: &mut W, summary: &ValidationSummary) -> io::Result<()> {
    write_section(w, "SUMMARY")?;
    writeln!(
        w,
        "Total: {} | Valid: {} | Invalid: {}",
        summary.total(),
        summary.valid_count(),
        summary.invalid_count()
    )?;
    writeln!(w)?;

    if summary.invalid_count() > 0 {
        writeln!(w, "❌ Some charts failed validation")
    } else {
        writeln!(w, "✅ All charts passed validation")
    }
}
