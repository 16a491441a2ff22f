use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Europe::London;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::NgError;

/// Column names of every snapshot table, in row order.
pub const HEADER: [&str; 9] = [
    "NTS Demand Flow",
    "Time Published",
    "Value",
    "Time Applicable",
    "Expired (Y/N)",
    "Amended (Y/N)",
    "Amended Timestamp",
    "Substituted (Y/N)",
    "Late received (Y/N)",
];

/// Format of `ScheduleTime` / `ApplicableAt`.
pub(crate) const SOURCE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
/// `SOURCE_FORMAT` as a byte layout: `d` is an ASCII digit, anything else is literal.
const SOURCE_LAYOUT: &[u8; 19] = b"dddd-dd-ddTdd:dd:dd";
/// Presentation format used in rows, e.g. `01/01/2023, 00:05`.
pub(crate) const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M";

const FLAG_NO: &str = "N";

/// A single reading of a flow series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowObservation {
    /// When the reading was published (`ScheduleTime`), UK local time.
    pub schedule_time: NaiveDateTime,
    /// The flow rate exactly as sent by the service.
    pub flow_rate: String,
    /// When the reading applies (`ApplicableAt`), UK local time.
    pub applicable_at: NaiveDateTime,
}

impl FlowObservation {
    /// `schedule_time` interpreted as Europe/London wall-clock time, in UTC.
    ///
    /// Returns `None` for local times skipped by the spring clock change.
    pub fn schedule_time_utc(&self) -> Option<DateTime<Utc>> {
        london_to_utc(&self.schedule_time)
    }

    /// `applicable_at` interpreted as Europe/London wall-clock time, in UTC.
    pub fn applicable_at_utc(&self) -> Option<DateTime<Utc>> {
        london_to_utc(&self.applicable_at)
    }
}

fn london_to_utc(local: &NaiveDateTime) -> Option<DateTime<Utc>> {
    // Ambiguous autumn times resolve to the first (BST) occurrence.
    London
        .from_local_datetime(local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// One named series and its readings, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemandRecord {
    /// `EDPObjectName` of the selected series, as sent.
    pub series_name: String,
    /// Readings in the order the service listed them.
    pub observations: Vec<FlowObservation>,
}

/// A flat output row. The trailing five columns are fixed placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowRow {
    /// Series label, e.g. `NTS Demand Flow`.
    pub series_name: String,
    /// `ScheduleTime` as `DD/MM/YYYY, HH:MM`.
    pub time_published: String,
    /// Flow rate text, unchanged.
    pub value: String,
    /// `ApplicableAt` as `DD/MM/YYYY, HH:MM`.
    pub time_applicable: String,
    /// Always `N`.
    pub expired: String,
    /// Always `N`.
    pub amended: String,
    /// Always empty.
    pub amended_timestamp: String,
    /// Always `N`.
    pub substituted: String,
    /// Always `N`.
    pub late_received: String,
}

impl FlowRow {
    pub(crate) fn from_observation(series_name: &str, obs: &FlowObservation) -> Self {
        Self {
            series_name: series_name.to_string(),
            time_published: obs.schedule_time.format(DISPLAY_FORMAT).to_string(),
            value: obs.flow_rate.clone(),
            time_applicable: obs.applicable_at.format(DISPLAY_FORMAT).to_string(),
            expired: FLAG_NO.to_string(),
            amended: FLAG_NO.to_string(),
            amended_timestamp: String::new(),
            substituted: FLAG_NO.to_string(),
            late_received: FLAG_NO.to_string(),
        }
    }

    /// The row as positional fields matching [`HEADER`].
    pub fn as_record(&self) -> [&str; 9] {
        [
            &self.series_name,
            &self.time_published,
            &self.value,
            &self.time_applicable,
            &self.expired,
            &self.amended,
            &self.amended_timestamp,
            &self.substituted,
            &self.late_received,
        ]
    }

    /// Exact decimal parse of `value`; `None` when the service sent something non-numeric.
    pub fn value_decimal(&self) -> Option<Decimal> {
        Decimal::from_str(self.value.trim()).ok()
    }
}

/// The rows of one snapshot, with the fixed [`HEADER`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowTable {
    rows: Vec<FlowRow>,
}

impl FlowTable {
    pub(crate) fn new(rows: Vec<FlowRow>) -> Self {
        Self { rows }
    }

    /// The fixed column names, same as [`HEADER`].
    pub fn header(&self) -> &'static [&'static str; 9] {
        &HEADER
    }

    /// Rows in observation order.
    pub fn rows(&self) -> &[FlowRow] {
        &self.rows
    }

    /// Consumes the table, returning its rows.
    pub fn into_rows(self) -> Vec<FlowRow> {
        self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the series had no observations.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates rows in observation order.
    pub fn iter(&self) -> std::slice::Iter<'_, FlowRow> {
        self.rows.iter()
    }

    /// Renders the whole table as CSV text, optionally preceded by the header line.
    pub fn to_csv_string(&self, with_header: bool) -> Result<String, NgError> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        if with_header {
            wtr.write_record(HEADER)?;
        }
        for row in &self.rows {
            wtr.write_record(row.as_record())?;
        }
        let bytes = wtr.into_inner().map_err(|e| NgError::Io(e.into_error()))?;
        String::from_utf8(bytes)
            .map_err(|e| NgError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}

impl<'a> IntoIterator for &'a FlowTable {
    type Item = &'a FlowRow;
    type IntoIter = std::slice::Iter<'a, FlowRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Parses a service timestamp (`YYYY-MM-DDTHH:MM:SS`, no fractional seconds, no offset).
///
/// chrono alone tolerates a leading sign, short fields and padding whitespace, so the
/// layout is checked byte by byte first and chrono only validates the field ranges.
pub(crate) fn parse_source_time(field: &'static str, raw: &str) -> Result<NaiveDateTime, NgError> {
    let bad = |source| NgError::Timestamp {
        field,
        value: raw.to_string(),
        source,
    };
    if !matches_layout(raw.as_bytes()) {
        return Err(bad(None));
    }
    NaiveDateTime::parse_from_str(raw, SOURCE_FORMAT).map_err(|e| bad(Some(e)))
}

fn matches_layout(raw: &[u8]) -> bool {
    raw.len() == SOURCE_LAYOUT.len()
        && raw.iter().zip(SOURCE_LAYOUT).all(|(&b, &want)| match want {
            b'd' => b.is_ascii_digit(),
            lit => b == lit,
        })
}
