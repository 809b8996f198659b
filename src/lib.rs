pub use crate::cursor::LineCursor;
pub use crate::error::{Error, Result};
pub use crate::record::EventRecord;
pub use crate::report::{format_hours, EventEntry, ScanReport};
pub use crate::scanner::{find_keyed_line, scan, skip_to_record_end};
pub use crate::timestamp::parse_timestamp;
pub use crate::window::DateWindow;
use log::info;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

mod cursor;
mod error;
mod parsing;
pub mod record;
mod report;
mod scanner;
mod timestamp;
mod window;

/// Open the calendar at `path` and [`scan`] it.
///
/// Nothing is written to `out` if the file can't be opened.
pub fn scan_path<W: Write>(path: &Path, window: &DateWindow, out: W) -> Result<ScanReport> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    info!("scanning {}", path.display());
    scan(BufReader::new(file), window, out)
}
