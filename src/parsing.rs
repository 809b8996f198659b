use memchr::memchr;

/// Split `input` at the first occurrence of `delim`, dropping `offset` bytes of the delimiter
pub fn split_once(input: &str, delim: u8, offset: usize) -> Option<(&str, &str)> {
    debug_assert!(delim < 128); // only basic ascii
    debug_assert!(offset <= 1);
    let end = memchr(delim, input.as_bytes())?;
    // safety, memchr returns indices that are inside the input length and we only split on ascii
    Some(unsafe {
        (
            input.get_unchecked(..end),
            input.get_unchecked(end + offset..),
        )
    })
}

/// The value part of a `KEY[;params]:VALUE` content line, if the line has a separator
pub fn line_value(line: &str) -> Option<&str> {
    split_once(line, b':', 1).map(|(_, value)| value)
}

pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[test]
fn test_split_once() {
    assert_eq!(
        Some(("DTSTART;TZID=Europe/Berlin", "20200101T090000")),
        split_once("DTSTART;TZID=Europe/Berlin:20200101T090000", b':', 1)
    );
    assert_eq!(Some(("a", ":b:c")), split_once("a:b:c", b':', 0));
    assert_eq!(None, split_once("DTSTART20200101T090000", b':', 1));
}

#[test]
fn test_line_value() {
    assert_eq!(Some("Review: sprint 4"), line_value("SUMMARY:Review: sprint 4"));
    assert_eq!(Some("Standup"), line_value("SUMMARY;LANGUAGE=en:Standup"));
    assert_eq!(Some(""), line_value("SUMMARY:"));
    assert_eq!(None, line_value("SUMMARY"));
}

#[test]
fn test_strip_line_ending() {
    assert_eq!("END:VEVENT", strip_line_ending("END:VEVENT\r\n"));
    assert_eq!("END:VEVENT", strip_line_ending("END:VEVENT\n"));
    assert_eq!("END:VEVENT", strip_line_ending("END:VEVENT"));
    assert_eq!("END:VEVENT\r ", strip_line_ending("END:VEVENT\r \n"));
}
