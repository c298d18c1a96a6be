//! The Apache 2.0 notice block: rendering, detection and insertion.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const HEADER_TEMPLATE: &str = r#"/*
Copyright {year} {owner}

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/
"#;

const MARKERS: [&str; 3] = [
    "Licensed under the Apache License, Version 2.0",
    "http://www.apache.org/licenses/LICENSE-2.0",
    "limitations under the License",
];

/// Only this many leading characters are searched for markers.
const SCAN_LIMIT_CHARS: usize = 5000;

/// A header rendered for one owner/year, reused for every file in the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    text: String,
}

impl Header {
    /// Substitutes owner and year, then ends the block with exactly one blank line.
    pub fn render(owner: &str, year: i32) -> Self {
        let body = HEADER_TEMPLATE
            .replace("{year}", &year.to_string())
            .replace("{owner}", owner);
        Self {
            text: format!("{}\n\n", body.trim_end()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn prepend_to(&self, content: &str) -> String {
        let mut out = String::with_capacity(self.text.len() + content.len());
        out.push_str(self.as_str());
        out.push_str(content);
        out
    }
}

/// True when all three Apache markers appear within the first 5000 characters.
pub fn has_apache_header(text: &str) -> bool {
    let top_chunk = match text.char_indices().nth(SCAN_LIMIT_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    };
    MARKERS.iter().all(|m| top_chunk.contains(m))
}

/// Prepends `header` to the file at `path` unless it already has one.
///
/// Returns `Ok(false)` without writing when the file is not valid UTF-8 or is
/// already headered. The write replaces the whole file in one call.
pub fn apply_header(path: &Path, header: &Header) -> Result<bool> {
    let bytes = fs::read(path).context(format!("Failed to read {}", path.display()))?;

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(_) => {
            log::debug!("Not UTF-8, leaving untouched: {}", path.display());
            return Ok(false);
        }
    };

    if has_apache_header(&content) {
        return Ok(false);
    }

    fs::write(path, header.prepend_to(&content))
        .context(format!("Failed to write {}", path.display()))?;
    Ok(true)
}
