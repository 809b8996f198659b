use crate::timestamp::resolve_local;
use crate::{Error, Result};
use chrono::{DateTime, Local, NaiveDate};

const BOUND_FORMAT: &str = "%m/%d/%Y";

/// Inclusive range events have to fall in, either side can be left open
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DateWindow {
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
}

impl DateWindow {
    pub fn new(start: Option<DateTime<Local>>, end: Option<DateTime<Local>>) -> Self {
        DateWindow { start, end }
    }

    pub fn start(&self) -> Option<DateTime<Local>> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Local>> {
        self.end
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// An event is accepted if it starts no earlier than the start bound and ends no later than the end bound
    pub fn accepts(&self, start: DateTime<Local>, end: DateTime<Local>) -> bool {
        self.start.map_or(true, |bound| start >= bound) && self.end.map_or(true, |bound| end <= bound)
    }

    /// Parse a `MM/DD/YYYY` bound as local midnight of that day
    pub fn parse_bound(input: &str) -> Result<DateTime<Local>> {
        let date =
            NaiveDate::parse_from_str(input.trim(), BOUND_FORMAT).map_err(|source| {
                Error::InvalidDate {
                    input: input.to_string(),
                    source,
                }
            })?;
        Ok(resolve_local(date.and_time(Default::default())))
    }
}
