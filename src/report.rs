use crate::record::EventRecord;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Significant digits used when printing hours
const PRECISION: usize = 6;

/// An event that passed the date window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventEntry {
    /// Local wall clock start
    pub start: NaiveDateTime,
    /// Local wall clock end
    pub end: NaiveDateTime,
    pub hours: f64,
    pub summary: String,
}

impl From<&EventRecord> for EventEntry {
    fn from(record: &EventRecord) -> Self {
        EventEntry {
            start: record.start().naive_local(),
            end: record.end().naive_local(),
            hours: record.duration_hours(),
            summary: record.summary().to_string(),
        }
    }
}

impl Display for EventEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} hrs - {}",
            self.start.format("%m/%d/%Y"),
            format_hours(self.hours),
            self.summary
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub events: Vec<EventEntry>,
    pub total_hours: f64,
}

impl ScanReport {
    pub fn push(&mut self, entry: EventEntry) {
        self.total_hours += entry.hours;
        self.events.push(entry);
    }
}

/// Format a number the way printf's `%g` does.
///
/// Six significant digits with trailing zeros removed, switching to exponent notation
/// when the exponent is below -4 or at least six.
pub fn format_hours(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    // round first, the exponent after rounding decides the notation
    let scientific = format!("{:.*e}", PRECISION - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => (mantissa, exponent),
            Err(_) => return scientific,
        },
        None => return scientific,
    };

    if exponent < -4 || exponent >= PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_case::test_case;

    #[test_case(8.0, "8" ; "integer")]
    #[test_case(2.5, "2.5" ; "fraction")]
    #[test_case(10.5, "10.5" ; "total")]
    #[test_case(-8.0, "-8" ; "negative")]
    #[test_case(0.0, "0" ; "zero")]
    #[test_case(1.0 / 3.0, "0.333333" ; "third")]
    #[test_case(2.0 / 3.0, "0.666667" ; "rounded")]
    #[test_case(123456.0, "123456" ; "six digits")]
    #[test_case(1234567.0, "1.23457e+06" ; "large")]
    #[test_case(999999.7, "1e+06" ; "rounds into exponent")]
    #[test_case(0.0001, "0.0001" ; "small")]
    #[test_case(0.00001, "1e-05" ; "tiny")]
    #[test_case(-438000.25, "-438000" ; "large negative")]
    fn test_format_hours(value: f64, expected: &str) {
        assert_eq!(expected, format_hours(value));
    }

    #[test]
    fn test_entry_display() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let entry = EventEntry {
            start,
            end: start,
            hours: 2.5,
            summary: "Review".to_string(),
        };
        assert_eq!("01/02/2020: 2.5 hrs - Review", entry.to_string());
    }

    #[test]
    fn test_push_accumulates() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut report = ScanReport::default();
        for hours in [8.0, -1.5, 2.5] {
            report.push(EventEntry {
                start,
                end: start,
                hours,
                summary: String::new(),
            });
        }
        assert_eq!(3, report.events.len());
        assert_eq!(9.0, report.total_hours);
    }
}
