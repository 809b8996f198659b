use crate::cursor::LineCursor;
use crate::record::{EventRecord, BEGIN_EVENT, END_EVENT, END_KEY, START_KEY, SUMMARY_KEY};
use crate::report::{format_hours, EventEntry, ScanReport};
use crate::window::DateWindow;
use crate::{Error, Result};
use log::{debug, trace, warn};
use std::io::{BufRead, Write};

/// Scan an iCalendar stream for events, summing the hours of the ones inside `window`.
///
/// Every accepted event is written to `out` as it is found, followed by a final
/// `total hours: ..` line.
pub fn scan<R: BufRead, W: Write>(
    input: R,
    window: &DateWindow,
    mut out: W,
) -> Result<ScanReport> {
    let mut cursor = LineCursor::new(input);
    let mut report = ScanReport::default();

    while let Some(line) = cursor.next_line()? {
        if line != BEGIN_EVENT {
            continue;
        }

        trace!("event record at line {}", cursor.position());
        let record = read_record(&mut cursor)?;

        if window.accepts(record.start(), record.end()) {
            let entry = EventEntry::from(&record);
            writeln!(out, "{}", entry).map_err(Error::Write)?;
            report.push(entry);
        } else {
            debug!(
                "skipping event outside of date window starting at {}",
                record.start()
            );
        }

        skip_to_record_end(&mut cursor)?;
    }

    writeln!(out, "total hours: {}", format_hours(report.total_hours)).map_err(Error::Write)?;
    out.flush().map_err(Error::Write)?;

    debug!(
        "found {} events totaling {} hours",
        report.events.len(),
        report.total_hours
    );
    Ok(report)
}

/// Collect the keyed lines of the record the cursor is in, leaving the cursor where it started
fn read_record<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<EventRecord> {
    let start = find_keyed_line(cursor, START_KEY)?;
    let end = find_keyed_line(cursor, END_KEY)?;
    let summary = find_keyed_line(cursor, SUMMARY_KEY)?;
    if start.is_none() || end.is_none() {
        debug!(
            "event record at line {} is missing {}",
            cursor.position(),
            if start.is_none() { START_KEY } else { END_KEY }
        );
    }
    Ok(EventRecord::from_lines(
        start.as_deref(),
        end.as_deref(),
        summary.as_deref(),
    ))
}

/// Find the first line in the current record starting with `key`.
///
/// The search stops at the end of the record or the end of the input, in both cases the
/// cursor is moved back to where the search started.
pub fn find_keyed_line<R: BufRead>(
    cursor: &mut LineCursor<R>,
    key: &str,
) -> Result<Option<String>> {
    cursor.mark();
    let found = loop {
        match cursor.next_line()? {
            Some(line) if line.starts_with(key) => break Some(line),
            Some(line) if line == END_EVENT => break None,
            Some(_) => {}
            None => break None,
        }
    };
    cursor.rewind();
    Ok(found)
}

/// Consume lines up to and including the `END:VEVENT` of the current record
pub fn skip_to_record_end<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<()> {
    while let Some(line) = cursor.next_line()? {
        if line == END_EVENT {
            return Ok(());
        }
    }
    warn!("calendar ended inside an event record");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORDS: &str = "BEGIN:VCALENDAR\r\n\
        BEGIN:VEVENT\r\n\
        DTSTART:20200101T090000\r\n\
        DTEND:20200101T170000\r\n\
        END:VEVENT\r\n\
        BEGIN:VEVENT\r\n\
        SUMMARY:Second\r\n\
        END:VEVENT\r\n\
        END:VCALENDAR\r\n";

    fn cursor_in_first_record() -> LineCursor<&'static [u8]> {
        let mut cursor = LineCursor::new(RECORDS.as_bytes());
        cursor.next_line().unwrap();
        assert_eq!(Some(BEGIN_EVENT.to_string()), cursor.next_line().unwrap());
        cursor
    }

    #[test]
    fn test_find_keyed_line_rewinds() {
        let mut cursor = cursor_in_first_record();
        assert_eq!(
            Some("DTEND:20200101T170000".to_string()),
            find_keyed_line(&mut cursor, END_KEY).unwrap()
        );
        assert_eq!(2, cursor.position());
        assert_eq!(
            Some("DTSTART:20200101T090000".to_string()),
            find_keyed_line(&mut cursor, START_KEY).unwrap()
        );
        assert_eq!(2, cursor.position());
    }

    #[test]
    fn test_find_keyed_line_stays_in_record() {
        let mut cursor = cursor_in_first_record();
        assert_eq!(None, find_keyed_line(&mut cursor, SUMMARY_KEY).unwrap());
        assert_eq!(2, cursor.position());
    }

    #[test]
    fn test_find_keyed_line_prefix_match() {
        let mut cursor = LineCursor::new("DTSTARTX:1\nDTSTART:2\nEND:VEVENT\n".as_bytes());
        assert_eq!(
            Some("DTSTARTX:1".to_string()),
            find_keyed_line(&mut cursor, START_KEY).unwrap()
        );
    }

    #[test]
    fn test_find_keyed_line_end_of_input() {
        let mut cursor = LineCursor::new("DTSTART:20200101T090000\n".as_bytes());
        assert_eq!(None, find_keyed_line(&mut cursor, END_KEY).unwrap());
        assert_eq!(0, cursor.position());
    }

    #[test]
    fn test_skip_to_record_end() {
        let mut cursor = cursor_in_first_record();
        skip_to_record_end(&mut cursor).unwrap();
        assert_eq!(5, cursor.position());
        assert_eq!(Some(BEGIN_EVENT.to_string()), cursor.next_line().unwrap());
    }

    #[test]
    fn test_skip_to_record_end_of_input() {
        let mut cursor = LineCursor::new("DTSTART:20200101T090000\nSUMMARY:x\n".as_bytes());
        skip_to_record_end(&mut cursor).unwrap();
        assert_eq!(None, cursor.next_line().unwrap());
    }

    #[test]
    fn test_scan_output() {
        let mut out = Vec::new();
        let report = scan(RECORDS.as_bytes(), &DateWindow::default(), &mut out).unwrap();
        assert_eq!(2, report.events.len());
        assert_eq!(8.0, report.total_hours);
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!("01/01/2020: 8 hrs - ", lines[0]);
        assert!(lines[1].ends_with(": 0 hrs - Second"));
        assert_eq!("total hours: 8", lines[2]);
        assert_eq!(3, lines.len());
    }

    #[test]
    fn test_scan_empty() {
        let mut out = Vec::new();
        let report = scan("".as_bytes(), &DateWindow::default(), &mut out).unwrap();
        assert!(report.events.is_empty());
        assert_eq!("total hours: 0\n", String::from_utf8(out).unwrap());
    }
}
