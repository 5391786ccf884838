//! Console framing shared by every report.

use std::io::{self, Write};

use crate::util::time::report_stamp;

pub const RULE_WIDTH: usize = 70;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Title block with the generation timestamp.
pub fn write_banner<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    writeln!(w, "{}", rule())?;
    writeln!(w, "{title}")?;
    writeln!(w, "Generated: {}", report_stamp())?;
    writeln!(w, "{}", rule())?;
    writeln!(w)
}

pub fn write_section<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    writeln!(w, "{}", rule())?;
    writeln!(w, "{title}")?;
    writeln!(w, "{}", rule())
}

/// Indented detail lines under a report item.
pub fn write_indented<W, I, S>(w: &mut W, lines: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(w, "   {}", line.as_ref())?;
    }
    Ok(())
}
