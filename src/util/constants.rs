// arpsleuth - util/constants.rs
//
// Single source of truth for all named constants, markers, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "arpsleuth";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// ARP table format
// =============================================================================

/// Marker the switch prints in the hardware-address column when address
/// resolution has failed. Matched case-sensitively and exactly; `incomplete`
/// or `Incomplete` must NOT match.
pub const INCOMPLETE_MARKER: &str = "INCOMPLETE";

/// Zero-based index of the hardware-address column after whitespace
/// splitting. In `show ip arp` output the columns are:
/// Address, Age, Hardware Addr, Type, Interface (so index 2).
///
/// Deliberately positional rather than field-aware: matching semantics are
/// defined as "third whitespace-delimited token equals the marker", and a
/// smarter parser would change which lines match.
pub const HARDWARE_ADDR_FIELD: usize = 2;

// =============================================================================
// Report output
// =============================================================================

/// Fixed report filename, created in the working directory and fully
/// overwritten on every run. Its existence (even empty) signals the run
/// completed.
pub const REPORT_FILE_NAME: &str = "Incomplete-MAC-Addresses.txt";

// =============================================================================
// Interactive picker limits
// =============================================================================

/// Maximum number of working-directory filenames shown in the interactive
/// prompt. Keeps the listing readable in directories with many files; the
/// user can always type a path that is not in the listing.
pub const MAX_LISTED_FILES: usize = 100;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor --debug is set.
/// "warn" rather than "info" so normal console output is not interleaved
/// with log lines.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
