use crate::app::cli::Cli;
use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::{self, PathBuf};
use time::OffsetDateTime;

/// Normalizes a comma-separated extension list: trimmed, lowercased, each with a leading `.`.
pub fn parse_exts(ext_arg: &str) -> BTreeSet<String> {
    ext_arg
        .split(',')
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .map(|e| if e.starts_with('.') { e } else { format!(".{}", e) })
        .collect()
}

fn current_year() -> i32 {
    // now_local fails when the offset cannot be determined soundly.
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .year()
}

pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    // An empty path means the current directory.
    let target = if cli.path.is_empty() { "." } else { cli.path.as_str() };
    let root: PathBuf = path::absolute(target)
        .context(format!("Failed to resolve path {:?}", cli.path))?;

    let config = RuntimeConfig {
        root,
        owner: cli.owner,
        year: cli.year.unwrap_or_else(current_year),
        extensions: parse_exts(&cli.ext),
        dry_run: cli.dry_run,
    };

    Ok(config)
}
