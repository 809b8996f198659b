use chrono::{DateTime, Local};
use clap::Parser;
use ics_hours::{scan, scan_path, DateWindow, ScanReport};
use log::info;
use main_error::MainError;
use std::io::{self, stdin, stdout, Write};
use std::path::PathBuf;

/// Add up the hours of the events in an iCalendar export
#[derive(Parser, Debug)]
#[command(name = "ics-hours", version)]
struct Args {
    /// Calendar (.ics) file to scan, `-` reads from stdin
    #[arg(short = 'f', long, short_alias = 'F')]
    file: PathBuf,

    /// Only count events starting on or after this day
    #[arg(short = 's', long, short_alias = 'S', value_name = "MM/DD/YYYY", value_parser = DateWindow::parse_bound)]
    start: Option<DateTime<Local>>,

    /// Only count events ending on or before the start of this day
    #[arg(short = 'e', long, short_alias = 'E', value_name = "MM/DD/YYYY", value_parser = DateWindow::parse_bound)]
    end: Option<DateTime<Local>>,

    /// Print the events and total as json
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), MainError> {
    env_logger::init();
    let args = Args::parse();

    let window = DateWindow::new(args.start, args.end);
    if !window.is_unbounded() {
        info!(
            "limiting events to {:?} until {:?}",
            window.start(),
            window.end()
        );
    }

    let out: Box<dyn Write> = if args.json {
        Box::new(io::sink())
    } else {
        Box::new(stdout().lock())
    };

    let report: ScanReport = if args.file.as_os_str() == "-" {
        scan(stdin().lock(), &window, out)?
    } else {
        scan_path(&args.file, &window, out)?
    };

    if args.json {
        let mut stdout = stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    }

    Ok(())
}
