use std::io::{self, Write};

use crate::error::StatusError;

use super::ops::{CategoryStatus, UpdateOutcome};

pub const TITLE: &str = "Chart Status Report";

pub fn write_categories<W: Write>(w: &mut W, categories: &[CategoryStatus]) -> io::Result<()> {
    for category in categories {
        match category {
            CategoryStatus::Missing { dir } => {
                writeln!(w, "⚠️  {dir}: No status file")?;
            }
            CategoryStatus::Unreadable { dir, error } => {
                writeln!(w, "❌ {dir}: {error}")?;
                writeln!(w)?;
            }
            CategoryStatus::Loaded { record, .. } => {
                let status = record.status();
                writeln!(
                    w,
                    "{} {}: {}",
                    status.symbol(),
                    record.chart_type().to_uppercase(),
                    status
                )?;
                for entry in record.entries() {
                    writeln!(w, "   - {} ({})", entry.name, entry.status)?;
                }
                writeln!(w)?;
            }
        }
    }
    Ok(())
}

pub fn write_update<W: Write>(
    w: &mut W,
    chart: &str,
    result: &Result<UpdateOutcome, StatusError>,
) -> io::Result<()> {
    match result {
        Ok(out) => writeln!(w, "✅ Updated {chart} to {}", out.status),
        Err(e) => writeln!(w, "❌ {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::types::{ChartEntry, ChartStatus, StatusRecord};
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_loaded_and_missing_categories() {
        let categories = vec![
            CategoryStatus::Loaded {
                dir: "charts/sankey".into(),
                record: StatusRecord::new("sankey")
                    .with_entry(ChartEntry::new(
                        "Unified Flow",
                        "unified.html",
                        ChartStatus::Production,
                    ))
                    .with_entry(ChartEntry::new(
                        "Outflows",
                        "outflows.html",
                        ChartStatus::Development,
                    )),
            },
            CategoryStatus::Missing {
                dir: "charts/network".into(),
            },
        ];

        let mut buf = Vec::new();
        write_categories(&mut buf, &categories).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "🟡 SANKEY: review\n   - Unified Flow (production)\n   - Outflows (development)\n\n⚠️  charts/network: No status file\n"
        );
    }

    #[test]
    fn renders_update_failure() {
        let mut buf = Vec::new();
        let result = Err(StatusError::RecordNotFound("charts/bar/.status".into()));
        write_update(&mut buf, "charts/bar/top.html", &result).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "❌ Status file not found: charts/bar/.status\n"
        );
    }
}
