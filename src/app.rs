// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod header;
pub mod models;
pub mod scanner;

use anyhow::{bail, Result};
use clap::Parser;

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::SummaryFormatter;
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let config = resolve_config(args)?;

    // 3. Validate the root once, before touching anything
    if !config.root.is_dir() {
        bail!(
            "Path not found or not a directory: {}",
            config.root.display()
        );
    }

    log::info!(
        "Scanning {} for {:?} (dry run: {})",
        config.root.display(),
        config.extensions,
        config.dry_run
    );

    // 4. Scan Directory
    let scanner = Scanner::new(&config);
    let report = scanner.scan();

    // 5. Print to Stdout
    print!("{}", SummaryFormatter::render(&report, config.dry_run));

    Ok(())
}
