// arpsleuth - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Input resolution (argument or interactive prompt)
// 4. Scan pipeline execution and exit codes

use arpsleuth::app;
use arpsleuth::util;

use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// arpsleuth - incomplete MAC address finder.
///
/// Searches a text file created from the "#sh ip arp" command on a Cisco
/// switch for incomplete MAC addresses and saves any matching lines to
/// "Incomplete-MAC-Addresses.txt" in the working directory.
#[derive(Parser, Debug)]
#[command(name = "arpsleuth", version, about)]
struct Cli {
    /// Path to the ARP table output file (prompts interactively if omitted).
    input_file: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn print_banner() {
    println!(
        r##"
 ┌─────────────────────────────────────────┐
 │  This program searches a text file      │
 │  created from the "#sh ip arp" command  │
 │  from a Cisco switch for any incomplete │
 │  MAC Addresses; if there are any it     │
 │  lists the line in which it was found,  │
 │  and saves the results to a text file   │
 │  called "Incomplete-MAC-Addresses.txt"  │
 └─────────────────────────────────────────┘
"##
    );
}

/// Block until the user presses enter. Presentation only; any read error
/// (e.g. stdin closed) is ignored so the exit path never fails here.
fn pause_before_exit() {
    print!("\nPress enter to exit the program ");
    let _ = std::io::stdout().flush();
    let mut discard = String::new();
    let _ = std::io::stdin().lock().read_line(&mut discard);
}

fn run(cli: &Cli) -> util::error::Result<()> {
    let input_file = app::input::get_input_file(cli.input_file.as_deref())?;
    println!("Processing file: {}\n", input_file.display());

    let report_path = PathBuf::from(util::constants::REPORT_FILE_NAME);
    let stdout = std::io::stdout();
    app::run::run(&input_file, &report_path, stdout.lock())?;

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "arpsleuth starting"
    );

    print_banner();

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "Run failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    pause_before_exit();
}
