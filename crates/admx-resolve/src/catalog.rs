//! Run-scoped cache of localization string tables.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::warn;

use admx_ingest::{load_string_table, localization_path};
use admx_model::StringTable;

/// Lazily loads and caches one string table per localization base name, for
/// the single language selected at engine start.
///
/// Misses are cached too: a base name whose file is absent or unparseable is
/// recorded once (with a warning) and every later request answers from the
/// cache without touching the filesystem again.
#[derive(Debug)]
pub struct LocalizationCatalog {
    language_dir: PathBuf,
    tables: BTreeMap<String, Option<StringTable>>,
}

impl LocalizationCatalog {
    pub fn new(language_dir: impl Into<PathBuf>) -> Self {
        Self {
            language_dir: language_dir.into(),
            tables: BTreeMap::new(),
        }
    }

    /// The string table for `base_name`, loading it on first request.
    ///
    /// `None` means the localization file is unavailable; references
    /// depending on it resolve to the unresolved sentinel.
    pub fn get(&mut self, base_name: &str) -> Option<&StringTable> {
        if !self.tables.contains_key(base_name) {
            let path = localization_path(&self.language_dir, base_name);
            let loaded = match load_string_table(&path) {
                Ok(table) => Some(table),
                Err(error) => {
                    warn!(base_name, %error, "localization file unavailable");
                    None
                }
            };
            self.tables.insert(base_name.to_string(), loaded);
        }
        self.tables.get(base_name).and_then(Option::as_ref)
    }

    /// Number of cached base names, counting misses.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ADML: &str = r#"<policyDefinitionResources>
  <resources>
    <stringTable>
      <string id="X">shared text</string>
    </stringTable>
  </resources>
</policyDefinitionResources>"#;

    #[test]
    fn loads_once_and_serves_from_cache() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shared.adml");
        std::fs::write(&path, ADML).unwrap();

        let mut catalog = LocalizationCatalog::new(dir.path());
        assert_eq!(catalog.get("shared").unwrap().get("X"), Some("shared text"));

        // The cache must answer even after the backing file is gone.
        std::fs::remove_file(&path).unwrap();
        assert_eq!(catalog.get("shared").unwrap().get("X"), Some("shared text"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn misses_are_cached() {
        let dir = TempDir::new().unwrap();
        let mut catalog = LocalizationCatalog::new(dir.path());
        assert!(catalog.get("absent").is_none());

        // Creating the file later does not change the answer within a run.
        std::fs::write(dir.path().join("absent.adml"), ADML).unwrap();
        assert!(catalog.get("absent").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn starts_empty() {
        let dir = TempDir::new().unwrap();
        let catalog = LocalizationCatalog::new(dir.path());
        assert!(catalog.is_empty());
    }
}
