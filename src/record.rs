use crate::parsing::line_value;
use crate::timestamp::{epoch, parse_timestamp};
use chrono::{DateTime, Local};

pub const BEGIN_EVENT: &str = "BEGIN:VEVENT";
pub const END_EVENT: &str = "END:VEVENT";
pub const START_KEY: &str = "DTSTART";
pub const END_KEY: &str = "DTEND";
pub const SUMMARY_KEY: &str = "SUMMARY";

/// The fields of a single VEVENT we care about, as found between `BEGIN:VEVENT` and `END:VEVENT`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EventRecord {
    pub start: Option<DateTime<Local>>,
    pub end: Option<DateTime<Local>>,
    pub summary: Option<String>,
}

impl EventRecord {
    /// Build a record from the matched keyed lines, any of which can be missing
    pub fn from_lines(start: Option<&str>, end: Option<&str>, summary: Option<&str>) -> Self {
        EventRecord {
            start: start.and_then(parse_timestamp),
            end: end.and_then(parse_timestamp),
            summary: summary.map(summary_text).map(String::from),
        }
    }

    pub fn start(&self) -> DateTime<Local> {
        self.start.unwrap_or_else(epoch)
    }

    pub fn end(&self) -> DateTime<Local> {
        self.end.unwrap_or_else(epoch)
    }

    /// Signed duration in hours, negative when the event ends before it starts
    pub fn duration_hours(&self) -> f64 {
        (self.end() - self.start()).num_seconds() as f64 / 3600.0
    }

    pub fn summary(&self) -> &str {
        self.summary.as_deref().unwrap_or_default()
    }
}

/// Text of a `SUMMARY` line, everything after the first `:`
fn summary_text(line: &str) -> &str {
    line_value(line)
        .or_else(|| line.strip_prefix(SUMMARY_KEY))
        .unwrap_or_default()
}
