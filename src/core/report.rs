// arpsleuth - core/report.rs
//
// Report file writing and console summary.
// Core layer: writes to any Write trait object.

use crate::util::error::ReportError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the matched lines to `writer` in order, with no separators beyond
/// the terminator each line already carries.
///
/// Returns the number of lines written. An empty slice writes nothing,
/// which on a freshly truncated destination leaves a zero-byte report.
pub fn write_report<W: Write>(
    lines: &[String],
    mut writer: W,
    report_path: &Path,
) -> Result<usize, ReportError> {
    for line in lines {
        writer
            .write_all(line.as_bytes())
            .map_err(|e| ReportError::Io {
                path: report_path.to_path_buf(),
                source: e,
            })?;
    }
    writer.flush().map_err(|e| ReportError::Io {
        path: report_path.to_path_buf(),
        source: e,
    })?;
    Ok(lines.len())
}

/// Create or truncate the report file at `path` and write the matched lines
/// to it. The destination is fully replaced on every run; an empty result
/// still truncates it to zero bytes so the file's existence signals a
/// completed run.
pub fn save_report(lines: &[String], path: &Path) -> Result<usize, ReportError> {
    let file = File::create(path).map_err(|e| ReportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let count = write_report(lines, BufWriter::new(file), path)?;

    tracing::info!(path = %path.display(), lines = count, "Report saved");
    Ok(count)
}

/// Print a human-readable summary of the scan to `out`.
///
/// Non-empty result: a count, each matched line verbatim, and a
/// confirmation naming the report file. Empty result: a single
/// "none found" message. Purely observational; never touches the
/// result or the report file.
pub fn print_summary<W: Write>(
    lines: &[String],
    report_name: &str,
    mut out: W,
) -> io::Result<()> {
    if lines.is_empty() {
        writeln!(out, "\nNo incomplete MAC addresses found.\n")?;
        return Ok(());
    }

    writeln!(out, "\n=======================================\n")?;
    writeln!(out, "There are {} incomplete MAC Addresses\n", lines.len())?;
    for line in lines {
        // Lines carry their own terminators
        out.write_all(line.as_bytes())?;
    }
    writeln!(out, "\n-- Saved to \"{report_name}\" --\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_lines() -> Vec<String> {
        vec![
            "192.168.1.2   5  INCOMPLETE  ARPA  Gi0/2\n".to_string(),
            "10.0.0.1     15  INCOMPLETE  ARPA  Gi0/4\n".to_string(),
        ]
    }

    #[test]
    fn test_write_report_concatenates_in_order() {
        let lines = sample_lines();
        let mut buf = Vec::new();
        let count = write_report(&lines, &mut buf, &PathBuf::from("out.txt")).unwrap();
        assert_eq!(count, 2);

        let written = String::from_utf8(buf).unwrap();
        assert_eq!(written, lines.concat());
    }

    #[test]
    fn test_write_report_empty_writes_nothing() {
        let mut buf = Vec::new();
        let count = write_report(&[], &mut buf, &PathBuf::from("out.txt")).unwrap();
        assert_eq!(count, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_save_report_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "Old content\n").unwrap();

        save_report(&[], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "");
    }

    #[test]
    fn test_save_report_unwritable_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist
        let path = dir.path().join("missing").join("report.txt");
        let result = save_report(&sample_lines(), &path);
        assert!(matches!(result, Err(ReportError::Io { .. })));
    }

    #[test]
    fn test_summary_with_matches() {
        let mut out = Vec::new();
        print_summary(&sample_lines(), "Incomplete-MAC-Addresses.txt", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("There are 2 incomplete MAC Addresses"));
        assert!(text.contains("192.168.1.2"));
        assert!(text.contains("10.0.0.1"));
        assert!(text.contains("-- Saved to \"Incomplete-MAC-Addresses.txt\" --"));
    }

    #[test]
    fn test_summary_without_matches() {
        let mut out = Vec::new();
        print_summary(&[], "Incomplete-MAC-Addresses.txt", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No incomplete MAC addresses found"));
        // No confirmation of the report file on the empty path
        assert!(!text.contains("Saved to"));
    }
}
