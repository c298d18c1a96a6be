use crate::app::models::Report;

/// Skipped paths listed before the rest are summarized as a count.
const SKIPPED_DISPLAY_LIMIT: usize = 20;

pub struct SummaryFormatter;

impl SummaryFormatter {
    pub fn render(report: &Report, dry_run: bool) -> String {
        let mut out = String::new();

        if dry_run {
            out.push_str("Dry run: no files were written.\n");
        }
        out.push_str(&format!("Scanned files: {}\n", report.total));
        out.push_str(&format!("To modify: {}\n", report.modified.len()));
        out.push_str(&format!("Already had header: {}\n", report.skipped.len()));

        if !report.modified.is_empty() {
            out.push_str("\nModified files:\n");
            for path in &report.modified {
                out.push_str(&format!("  + {}\n", path.display()));
            }
        }

        if !report.skipped.is_empty() {
            out.push_str("\nSkipped files (header already present):\n");
            for path in report.skipped.iter().take(SKIPPED_DISPLAY_LIMIT) {
                out.push_str(&format!("  - {}\n", path.display()));
            }
            if report.skipped.len() > SKIPPED_DISPLAY_LIMIT {
                out.push_str(&format!(
                    "  ...and {} more\n",
                    report.skipped.len() - SKIPPED_DISPLAY_LIMIT
                ));
            }
        }

        if !report.failed.is_empty() {
            out.push_str("\nFailed files:\n");
            for (path, err) in &report.failed {
                out.push_str(&format!("  ! {}: {}\n", path.display(), err));
            }
        }

        out
    }
}
