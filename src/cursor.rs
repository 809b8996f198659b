use crate::parsing::strip_line_ending;
use crate::{Error, Result};
use std::collections::VecDeque;
use std::io::BufRead;

/// Forward-only line reader with a single mark that can be rewound to.
///
/// Lines read after [`mark`](LineCursor::mark) are kept in memory so that
/// [`rewind`](LineCursor::rewind) can replay them, which means the source never needs to be
/// seekable; stdin and pipes work the same as files.
///
/// Lines are returned without their `\n` or `\r\n` terminator, invalid utf8 is replaced.
pub struct LineCursor<R> {
    reader: R,
    buffer: Vec<u8>,
    replay: VecDeque<String>,
    recorded: Option<Vec<String>>,
    position: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        LineCursor {
            reader,
            buffer: Vec::new(),
            replay: VecDeque::new(),
            recorded: None,
            position: 0,
        }
    }

    /// Number of lines consumed so far, after accounting for rewinds
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn next_line(&mut self) -> Result<Option<String>> {
        let line = match self.replay.pop_front() {
            Some(line) => line,
            None => match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            },
        };
        self.position += 1;
        if let Some(recorded) = &mut self.recorded {
            recorded.push(line.clone());
        }
        Ok(Some(line))
    }

    /// Remember the current position, replacing any earlier mark
    pub fn mark(&mut self) {
        self.recorded = Some(Vec::new());
    }

    /// Move back to the last mark, the mark is consumed
    pub fn rewind(&mut self) {
        if let Some(recorded) = self.recorded.take() {
            self.position -= recorded.len();
            for line in recorded.into_iter().rev() {
                self.replay.push_front(line);
            }
        }
    }

    /// Drop the last mark, keeping the current position
    pub fn commit(&mut self) {
        self.recorded = None;
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.buffer.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buffer)
            .map_err(Error::Read)?;
        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&self.buffer);
        Ok(Some(strip_line_ending(&line).to_string()))
    }
}
