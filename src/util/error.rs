// arpsleuth - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant carries the path it
// relates to so diagnostics name the exact file involved.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all arpsleuth operations.
/// Errors are categorised by the pipeline stage that produced them.
#[derive(Debug)]
pub enum ArpSleuthError {
    /// Input path resolution or validation failed.
    Input(InputError),

    /// Reading the ARP table file failed.
    Scan(ScanError),

    /// Writing the report file failed.
    Report(ReportError),
}

impl fmt::Display for ArpSleuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "Input error: {e}"),
            Self::Scan(e) => write!(f, "Scan error: {e}"),
            Self::Report(e) => write!(f, "Report error: {e}"),
        }
    }
}

impl std::error::Error for ArpSleuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Scan(e) => Some(e),
            Self::Report(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Input resolution errors
// ---------------------------------------------------------------------------

/// Errors related to resolving and validating the input file path.
#[derive(Debug)]
pub enum InputError {
    /// The supplied or entered path does not exist.
    NotFound { path: PathBuf },

    /// The path exists but is not a regular file (directory, socket, etc.).
    NotAFile { path: PathBuf },

    /// The interactive prompt received an empty path.
    EmptyPath,

    /// I/O error while resolving the path or reading the prompt.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "File '{}' not found", path.display())
            }
            Self::NotAFile { path } => {
                write!(f, "'{}' is not a file", path.display())
            }
            Self::EmptyPath => write!(f, "No file path provided"),
            Self::Io { path, source } => {
                write!(f, "I/O error resolving '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<InputError> for ArpSleuthError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

// ---------------------------------------------------------------------------
// Scan errors
// ---------------------------------------------------------------------------

/// Errors related to reading the ARP table file.
#[derive(Debug)]
pub enum ScanError {
    /// File content is not valid UTF-8. Invalid bytes are an error
    /// condition, never silently replaced.
    InvalidEncoding { file: PathBuf, source: io::Error },

    /// I/O error while reading the file (permissions, device error).
    Io { file: PathBuf, source: io::Error },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEncoding { file, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", file.display())
            }
            Self::Io { file, source } => {
                write!(f, "Error reading file '{}': {source}", file.display())
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEncoding { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ScanError> for ArpSleuthError {
    fn from(e: ScanError) -> Self {
        Self::Scan(e)
    }
}

// ---------------------------------------------------------------------------
// Report errors
// ---------------------------------------------------------------------------

/// Errors related to writing the report file.
#[derive(Debug)]
pub enum ReportError {
    /// I/O error creating or writing the report (permissions, disk full).
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(
                    f,
                    "Error writing to output file '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ReportError> for ArpSleuthError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}

/// Convenience type alias for arpsleuth results.
pub type Result<T> = std::result::Result<T, ArpSleuthError>;
