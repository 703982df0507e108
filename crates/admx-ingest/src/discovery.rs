//! Definition-file discovery and localization-path layout.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists all definition (`.admx`) files in a directory.
///
/// Returns files sorted by filename so downstream output is deterministic.
pub fn list_definition_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_definition = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("admx"))
            .unwrap_or(false);

        if is_definition {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// The per-language subdirectory holding localization files, e.g.
/// `<templates>/en-US`.
pub fn language_dir(templates_dir: &Path, language: &str) -> PathBuf {
    templates_dir.join(language)
}

/// Path of the localization file for a given base name, e.g.
/// `<templates>/en-US/inetres.adml`.
pub fn localization_path(language_dir: &Path, base_name: &str) -> PathBuf {
    language_dir.join(format!("{base_name}.adml"))
}

/// File stem used to pair a definition file with its localization
/// counterpart.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|v| v.to_str())
        .unwrap_or("")
        .to_string()
}
