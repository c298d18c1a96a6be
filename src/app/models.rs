use std::collections::BTreeSet;
use std::path::PathBuf;

/// Represents the final configuration after resolving CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    pub owner: String,
    pub year: i32,
    /// Lowercased, each with a leading `.`
    pub extensions: BTreeSet<String>,
    pub dry_run: bool,
}

/// What happened to a single matching file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Header written, or would be written in a dry run.
    Modified,
    /// Header already present, or the file is not valid UTF-8.
    Skipped,
    Failed(String),
}

/// Represents a single file processed during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Accumulated results of a run, in discovery order.
#[derive(Debug, Default)]
pub struct Report {
    pub total: usize,
    pub modified: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl Report {
    pub fn record(&mut self, record: FileRecord) {
        self.total += 1;
        match record.outcome {
            FileOutcome::Modified => self.modified.push(record.path),
            FileOutcome::Skipped => self.skipped.push(record.path),
            FileOutcome::Failed(err) => self.failed.push((record.path, err)),
        }
    }
}
