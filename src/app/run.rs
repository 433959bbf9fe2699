// arpsleuth - app/run.rs
//
// Pipeline orchestration: open and scan the input file, save the report,
// print the summary. Kept in the library so integration tests exercise
// the same path the binary runs.

use crate::core::filter;
use crate::core::report;
use crate::util::error::{ReportError, Result, ScanError};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

/// Open `path` and collect the lines marked incomplete.
///
/// Maps read failures to [`ScanError`] with the file path attached;
/// invalid UTF-8 content is reported as a distinct encoding error.
pub fn scan_file(path: &Path) -> std::result::Result<Vec<String>, ScanError> {
    let file = File::open(path).map_err(|e| ScanError::Io {
        file: path.to_path_buf(),
        source: e,
    })?;

    filter::collect_incomplete(BufReader::new(file)).map_err(|e| {
        if e.kind() == io::ErrorKind::InvalidData {
            ScanError::InvalidEncoding {
                file: path.to_path_buf(),
                source: e,
            }
        } else {
            ScanError::Io {
                file: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Run the full scan pipeline: read and filter `input`, overwrite the
/// report at `report_path`, and print the summary to `out`.
///
/// Returns the number of incomplete entries found. Any failure along the
/// way is terminal for the run; there is no partial-result recovery.
pub fn run<W: Write>(input: &Path, report_path: &Path, out: W) -> Result<usize> {
    tracing::info!(input = %input.display(), "Scanning ARP table");

    let matches = scan_file(input)?;
    report::save_report(&matches, report_path)?;

    let report_name = report_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report_path.display().to_string());

    report::print_summary(&matches, &report_name, out).map_err(|e| ReportError::Io {
        path: report_path.to_path_buf(),
        source: e,
    })?;

    Ok(matches.len())
}
