//! Literal-substring search over a directory of XML reports.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::warn;

/// One report file containing the needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMatch {
    pub path: PathBuf,
    pub occurrences: usize,
}

/// Scan `.xml` files in a directory for a literal substring.
///
/// Files are visited in filename order; a file that cannot be read is logged
/// and skipped rather than failing the scan.
pub fn search_reports(dir: &Path, needle: &str) -> Result<Vec<ReportMatch>> {
    if needle.is_empty() {
        bail!("search string must not be empty");
    }
    if !dir.is_dir() {
        bail!("reports directory not found: {}", dir.display());
    }

    let mut files = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("read directory {}", dir.display()))?;
        let path = entry.path();
        let is_report = path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("xml"))
                .unwrap_or(false);
        if is_report {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut matches = Vec::new();
    for path in files {
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping unreadable report");
                continue;
            }
        };
        let occurrences = contents.matches(needle).count();
        if occurrences > 0 {
            matches.push(ReportMatch { path, occurrences });
        }
    }
    Ok(matches)
}
