use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open calendar {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read calendar: {0}")]
    Read(#[source] io::Error),
    #[error("Failed to write report: {0}")]
    Write(#[source] io::Error),
    #[error("Invalid date {input:?}, expected MM/DD/YYYY: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<O, E = Error> = std::result::Result<O, E>;
