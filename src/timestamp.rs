use crate::parsing::line_value;
use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};

const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%S";
const DATE_FORMAT: &str = "%Y%m%d";

/// Parse the value of a `KEY[;params]:YYYYMMDDTHHMMSS` line as local time.
///
/// Anything before the first `:` is skipped, so a `TZID` parameter is ignored instead of
/// applied, as is anything trailing the value (like a `Z` suffix).
/// A value with only a date part parses as midnight of that date.
///
/// Returns `None` when the line has no `:` or the value isn't a date.
pub fn parse_timestamp(line: &str) -> Option<DateTime<Local>> {
    let value = line_value(line)?.trim_start();
    let naive = match NaiveDateTime::parse_and_remainder(value, DATE_TIME_FORMAT) {
        Ok((date_time, _)) => date_time,
        Err(_) => NaiveDate::parse_and_remainder(value, DATE_FORMAT)
            .ok()?
            .0
            .and_hms_opt(0, 0, 0)?,
    };
    Some(resolve_local(naive))
}

/// Timestamp used in place of a missing or unparsable one
pub fn epoch() -> DateTime<Local> {
    DateTime::<Utc>::UNIX_EPOCH.with_timezone(&Local)
}

/// Interpret a wall clock time in the local time zone
pub fn resolve_local(naive: NaiveDateTime) -> DateTime<Local> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(time) => time,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // clock skipped forward over this time, move past the gap
        LocalResult::None => Local
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&naive)),
    }
}
