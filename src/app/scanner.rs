use crate::app::header::{apply_header, has_apache_header, Header};
use crate::app::models::{FileOutcome, FileRecord, Report, RuntimeConfig};
use ignore::{DirEntry, WalkBuilder};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Scanner {
    root: PathBuf,
    extensions: BTreeSet<String>,
    header: Header,
    dry_run: bool,
}

impl Scanner {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            root: config.root.clone(),
            extensions: config.extensions.clone(),
            header: Header::render(&config.owner, config.year),
            dry_run: config.dry_run,
        }
    }

    /// Walks every file under the root and processes those with a configured extension.
    pub fn scan(&self) -> Report {
        let mut report = Report::default();

        // No filtering: hidden and gitignored files are visited too.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .build();

        for result in walker {
            match result {
                Ok(entry) => {
                    let path = entry.path();
                    if is_directory(&entry) || !self.matches_extension(path) {
                        continue;
                    }
                    report.record(FileRecord {
                        path: path.to_path_buf(),
                        outcome: self.process_file(path),
                    });
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        report
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
            .map_or(false, |ext| self.extensions.contains(&ext))
    }

    fn process_file(&self, path: &Path) -> FileOutcome {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => return FileOutcome::Failed(err.to_string()),
        };

        let content = match std::str::from_utf8(&bytes) {
            Ok(content) => content,
            Err(err) => return FileOutcome::Failed(format!("not valid UTF-8: {}", err)),
        };

        if has_apache_header(content) {
            log::debug!("Header present: {}", path.display());
            return FileOutcome::Skipped;
        }

        if self.dry_run {
            log::debug!("Would modify: {}", path.display());
            return FileOutcome::Modified;
        }

        match apply_header(path, &self.header) {
            Ok(true) => {
                log::debug!("Modified: {}", path.display());
                FileOutcome::Modified
            }
            Ok(false) => FileOutcome::Skipped,
            Err(err) => FileOutcome::Failed(format!("{:#}", err)),
        }
    }
}

/// Symlinks count as directories only when their target is one, so broken links stay files.
fn is_directory(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_dir() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_dir(),
        Some(_) => false,
        None => true,
    }
}
