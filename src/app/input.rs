// arpsleuth - app/input.rs
//
// Input file resolution: command-line argument or interactive prompt.
//
// The prompt lists regular files in the working directory as a convenience
// (walkdir, depth 1) and accepts absolute paths, relative paths, and paths
// with a leading ~. Validation distinguishes "does not exist" from "exists
// but is not a regular file" before any scanning starts.
//
// We use `fs::metadata()` rather than `Path::exists()` / `Path::is_file()`
// because those helpers map ALL errors, including PermissionDenied, to
// `false`, making it impossible to distinguish an access-denied path from
// one that genuinely does not exist.

use crate::util::constants::MAX_LISTED_FILES;
use crate::util::error::InputError;
use directories::BaseDirs;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// If the home directory cannot be determined the path is returned
/// unchanged and validation will report it as not found.
fn expand_tilde(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(base) = BaseDirs::new() {
            return base.home_dir().to_path_buf();
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(base) = BaseDirs::new() {
            return base.home_dir().join(rest);
        }
    }
    PathBuf::from(raw)
}

/// Resolve a user-supplied path string to an existing regular file.
///
/// Handles absolute paths, relative paths (including `..` components), and
/// `~` expansion. The returned path is canonicalised where possible so
/// later diagnostics name the real location.
pub fn resolve_input_path(raw: &str) -> Result<PathBuf, InputError> {
    let expanded = expand_tilde(raw);

    match fs::metadata(&expanded) {
        Ok(meta) if meta.is_file() => {
            // Canonicalisation is cosmetic here; if it fails (e.g. a
            // permission-restricted parent) the expanded path still works.
            Ok(expanded.canonicalize().unwrap_or(expanded))
        }
        Ok(_) => Err(InputError::NotAFile { path: expanded }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(InputError::NotFound { path: expanded })
        }
        Err(e) => Err(InputError::Io {
            path: expanded,
            source: e,
        }),
    }
}

/// List the names of regular files directly inside `dir`, sorted, capped
/// at [`MAX_LISTED_FILES`]. Unreadable entries are skipped with a debug
/// log rather than failing the listing; it is only a convenience.
pub fn list_files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) if e.file_type().is_file() => {
                Some(e.file_name().to_string_lossy().into_owned())
            }
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(error = %e, "Skipping unreadable directory entry");
                None
            }
        })
        .collect();

    names.sort();
    names.truncate(MAX_LISTED_FILES);
    names
}

/// Prompt the user for an input file path, listing working-directory files
/// as a convenience, and resolve the entered path.
///
/// Generic over the input/output streams so tests can drive the prompt
/// with in-memory buffers.
pub fn prompt_for_path<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
) -> Result<PathBuf, InputError> {
    let io_err = |source: io::Error| InputError::Io {
        path: PathBuf::from("<console>"),
        source,
    };

    writeln!(out, "Please select the #SH IP ARP Data text file\n").map_err(io_err)?;
    writeln!(out, "You can enter:").map_err(io_err)?;
    writeln!(out, "  - A filename in the current directory").map_err(io_err)?;
    writeln!(out, "  - A relative path (e.g., ../data/arp.txt)").map_err(io_err)?;
    writeln!(out, "  - An absolute path (e.g., /path/to/arp.txt)").map_err(io_err)?;
    writeln!(out, "  - A path with ~ (e.g., ~/Documents/arp.txt)\n").map_err(io_err)?;

    if let Ok(cwd) = std::env::current_dir() {
        let files = list_files_in(&cwd);
        if !files.is_empty() {
            writeln!(out, "Files in current directory: {files:?}\n").map_err(io_err)?;
        }
    }

    write!(out, "Please enter the file path: ").map_err(io_err)?;
    out.flush().map_err(io_err)?;

    let mut entered = String::new();
    input.read_line(&mut entered).map_err(io_err)?;

    let entered = entered.trim();
    if entered.is_empty() {
        return Err(InputError::EmptyPath);
    }

    resolve_input_path(entered)
}

/// Obtain the input file path: from the command-line argument when given,
/// otherwise interactively via stdin/stdout.
pub fn get_input_file(arg: Option<&Path>) -> Result<PathBuf, InputError> {
    match arg {
        Some(path) => resolve_input_path(&path.to_string_lossy()),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            prompt_for_path(stdin.lock(), stdout.lock())
        }
    }
}
