use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use crate::error::StatusError;

/// Lifecycle of a chart, and of a whole category in aggregate.
///
/// Values read from disk that are not one of the four lowercase keywords are
/// kept verbatim in [`ChartStatus::Other`] and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartStatus {
    Production,
    Review,
    Development,
    Planned,
    Other(String),
}

impl ChartStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ChartStatus::Production => "production",
            ChartStatus::Review => "review",
            ChartStatus::Development => "development",
            ChartStatus::Planned => "planned",
            ChartStatus::Other(raw) => raw,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ChartStatus::Production => "🟢",
            ChartStatus::Review => "🟡",
            ChartStatus::Development => "🔵",
            ChartStatus::Planned | ChartStatus::Other(_) => "⚪",
        }
    }

    /// Aggregate of a category: production when every chart is, review when
    /// only some are, development when none are. No charts at all is planned.
    pub fn aggregate<'a, I>(statuses: I) -> ChartStatus
    where
        I: IntoIterator<Item = &'a ChartStatus>,
    {
        let mut total = 0usize;
        let mut production = 0usize;
        for s in statuses {
            total += 1;
            if *s == ChartStatus::Production {
                production += 1;
            }
        }

        match (total, production) {
            (0, _) => ChartStatus::Planned,
            (t, p) if p == t => ChartStatus::Production,
            (_, 0) => ChartStatus::Development,
            _ => ChartStatus::Review,
        }
    }
}

/// A status field absent from the document reads as `unknown`.
impl Default for ChartStatus {
    fn default() -> Self {
        ChartStatus::Other("unknown".to_string())
    }
}

/// Exact keywords only; anything else is carried as-is.
impl From<String> for ChartStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "production" => ChartStatus::Production,
            "review" => ChartStatus::Review,
            "development" => ChartStatus::Development,
            "planned" => ChartStatus::Planned,
            _ => ChartStatus::Other(raw),
        }
    }
}

impl From<ChartStatus> for String {
    fn from(status: ChartStatus) -> Self {
        match status {
            ChartStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ChartStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command-line values: the four keywords, case-insensitively.
impl FromStr for ChartStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(ChartStatus::Production),
            "review" => Ok(ChartStatus::Review),
            "development" => Ok(ChartStatus::Development),
            "planned" => Ok(ChartStatus::Planned),
            _ => Err(StatusError::InvalidStatus(s.to_string())),
        }
    }
}

fn unknown_label() -> String {
    "Unknown".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    #[serde(default = "unknown_label")]
    pub name: String,

    #[serde(default)]
    pub file: String,

    #[serde(default)]
    pub status: ChartStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    /// Keys this tool does not manage, carried through rewrites.
    #[serde(flatten)]
    pub extra: Mapping,
}

impl ChartEntry {
    pub fn new(name: impl Into<String>, file: impl Into<String>, status: ChartStatus) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            status,
            last_updated: None,
            extra: Mapping::new(),
        }
    }
}

/// On-disk shape of a `.status` document. Field order is the write order.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StatusDocument {
    #[serde(default = "unknown_label")]
    chart_type: String,

    #[serde(default)]
    status: ChartStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_updated: Option<String>,

    #[serde(default)]
    charts: Vec<ChartEntry>,

    #[serde(flatten)]
    extra: Mapping,
}

/// Status of one chart category.
///
/// The aggregate is not stored: [`StatusRecord::status`] derives it from the
/// entries, and the persisted `status` field is always written from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StatusDocument", into = "StatusDocument")]
pub struct StatusRecord {
    chart_type: String,
    last_updated: Option<String>,
    charts: Vec<ChartEntry>,
    extra: Mapping,
}

impl StatusRecord {
    pub fn new(chart_type: impl Into<String>) -> Self {
        Self {
            chart_type: chart_type.into(),
            last_updated: None,
            charts: Vec::new(),
            extra: Mapping::new(),
        }
    }

    pub fn with_entry(mut self, entry: ChartEntry) -> Self {
        self.charts.push(entry);
        self
    }

    pub fn chart_type(&self) -> &str {
        &self.chart_type
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    pub fn entries(&self) -> &[ChartEntry] {
        &self.charts
    }

    pub fn status(&self) -> ChartStatus {
        ChartStatus::aggregate(self.charts.iter().map(|c| &c.status))
    }

    pub fn find(&self, file: &str) -> Option<&ChartEntry> {
        self.charts.iter().find(|c| c.file == file)
    }

    /// Sets the status of the entry whose `file` matches and stamps both the
    /// entry and the record with `date`. Nothing changes if no entry matches.
    pub fn set_entry_status(
        &mut self,
        file: &str,
        status: ChartStatus,
        date: &str,
    ) -> Result<(), StatusError> {
        let entry = self
            .charts
            .iter_mut()
            .find(|c| c.file == file)
            .ok_or_else(|| StatusError::EntryNotFound(file.to_string()))?;
        entry.status = status;
        entry.last_updated = Some(date.to_string());
        self.last_updated = Some(date.to_string());
        Ok(())
    }
}

impl From<StatusDocument> for StatusRecord {
    fn from(doc: StatusDocument) -> Self {
        let record = Self {
            chart_type: doc.chart_type,
            last_updated: doc.last_updated,
            charts: doc.charts,
            extra: doc.extra,
        };
        if doc.status != record.status() {
            tracing::debug!(
                chart_type = %record.chart_type,
                stored = %doc.status,
                derived = %record.status(),
                "stored aggregate is stale, using derived value"
            );
        }
        record
    }
}

impl From<StatusRecord> for StatusDocument {
    fn from(record: StatusRecord) -> Self {
        Self {
            status: record.status(),
            chart_type: record.chart_type,
            last_updated: record.last_updated,
            charts: record.charts,
            extra: record.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ChartStatus::*;

    fn archived() -> ChartStatus {
        Other("archived".to_string())
    }

    #[test]
    fn aggregate_follows_production_share() {
        assert_eq!(ChartStatus::aggregate(&[Production, Production]), Production);
        assert_eq!(ChartStatus::aggregate(&[Production, Development]), Review);
        assert_eq!(ChartStatus::aggregate(&[Review, Planned, archived()]), Development);
        assert_eq!(ChartStatus::aggregate(&[Development]), Development);
        assert_eq!(ChartStatus::aggregate(std::iter::empty()), Planned);
    }

    #[test]
    fn aggregate_is_production_iff_all_production() {
        let all = [
            Production,
            Review,
            Development,
            Planned,
            archived(),
            Other("Production".to_string()),
        ];
        for a in &all {
            for b in &all {
                for c in &all {
                    let entries = [a.clone(), b.clone(), c.clone()];
                    let agg = ChartStatus::aggregate(&entries);
                    let all_prod = entries.iter().all(|s| *s == Production);
                    let none_prod = entries.iter().all(|s| *s != Production);
                    assert_eq!(agg == Production, all_prod, "{entries:?}");
                    assert_eq!(agg == Development, none_prod, "{entries:?}");
                    assert_eq!(agg == Review, !all_prod && !none_prod, "{entries:?}");
                }
            }
        }
    }

    #[test]
    fn parses_known_values_only() {
        assert_eq!("Production".parse::<ChartStatus>().unwrap(), Production);
        assert_eq!(" planned ".parse::<ChartStatus>().unwrap(), Planned);
        assert!(matches!(
            "shipped".parse::<ChartStatus>(),
            Err(StatusError::InvalidStatus(v)) if v == "shipped"
        ));
    }

    #[test]
    fn stored_aggregate_is_rederived_on_load() {
        let yaml = "\
chart_type: sankey
status: production
charts:
- name: Unified Flow
  file: unified_flow.html
  status: development
";
        let record: StatusRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.status(), Development);
    }

    #[test]
    fn written_document_keeps_field_order_and_unknown_keys() {
        let yaml = "\
chart_type: bar
status: development
owner: data-team
charts:
- name: Top Committees
  file: top_committees.html
  status: review
  notes: needs legend
";
        let mut record: StatusRecord = serde_yaml::from_str(yaml).unwrap();
        record
            .set_entry_status("top_committees.html", Production, "2024-10-01")
            .unwrap();

        let out = serde_yaml::to_string(&record).unwrap();
        let pos = |key: &str| out.find(key).unwrap_or_else(|| panic!("{key} missing in {out}"));
        assert!(out.starts_with("chart_type: bar\nstatus: production\n"));
        assert!(pos("last_updated:") < pos("charts:"));
        assert!(pos("charts:") < pos("owner: data-team"));
        assert!(out.contains("notes: needs legend"));

        let reread: StatusRecord = serde_yaml::from_str(&out).unwrap();
        assert_eq!(reread, record);
        assert_eq!(reread.last_updated(), Some("2024-10-01"));
        assert_eq!(
            reread.entries()[0].last_updated.as_deref(),
            Some("2024-10-01")
        );
    }

    #[test]
    fn unrecognised_status_is_kept_verbatim() {
        let yaml = "\
chart_type: network
charts:
- name: Graph
  file: g.html
  status: shipped
- name: Flows
  file: f.html
  status: Production
- name: Donors
  file: d.html
";
        let record: StatusRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.entries()[0].status, Other("shipped".to_string()));
        assert_eq!(record.entries()[1].status, Other("Production".to_string()));
        assert_eq!(record.entries()[2].status.as_str(), "unknown");
        assert_eq!(record.status(), Development);

        let out = serde_yaml::to_string(&record).unwrap();
        assert!(out.contains("status: shipped\n"), "{out}");
        assert!(out.contains("status: Production\n"), "{out}");
    }

    #[test]
    fn missing_entry_leaves_record_untouched() {
        let mut record = StatusRecord::new("sankey").with_entry(ChartEntry::new(
            "Flow",
            "flow.html",
            Development,
        ));
        let before = record.clone();

        let err = record
            .set_entry_status("other.html", Production, "2024-10-01")
            .unwrap_err();

        assert!(matches!(err, StatusError::EntryNotFound(f) if f == "other.html"));
        assert_eq!(record, before);
    }
}
