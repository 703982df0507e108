//! Set-difference of two exported tables by a key column.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

/// Keys present in exactly one of two tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDiff {
    pub key_column: String,
    pub left_only: Vec<String>,
    pub right_only: Vec<String>,
}

impl TableDiff {
    pub fn is_empty(&self) -> bool {
        self.left_only.is_empty() && self.right_only.is_empty()
    }
}

/// Compare two CSV tables row by row on `key_column`.
///
/// Errors if either file cannot be read or lacks the key column; rows with
/// an empty key are ignored.
pub fn diff_tables(left: &Path, right: &Path, key_column: &str) -> Result<TableDiff> {
    let left_keys = read_key_column(left, key_column)?;
    let right_keys = read_key_column(right, key_column)?;

    Ok(TableDiff {
        key_column: key_column.to_string(),
        left_only: left_keys.difference(&right_keys).cloned().collect(),
        right_only: right_keys.difference(&left_keys).cloned().collect(),
    })
}

fn read_key_column(path: &Path, key_column: &str) -> Result<BTreeSet<String>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("open {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read header of {}", path.display()))?
        .clone();
    let idx = headers
        .iter()
        .position(|h| h == key_column)
        .ok_or_else(|| anyhow!("{}: missing key column '{key_column}'", path.display()))?;

    let mut keys = BTreeSet::new();
    for result in reader.records() {
        let record = result.with_context(|| format!("read row of {}", path.display()))?;
        if let Some(value) = record.get(idx) {
            if !value.is_empty() {
                keys.insert(value.to_string());
            }
        }
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn reports_keys_on_each_side() {
        let dir = TempDir::new().unwrap();
        let left = write_csv(&dir, "left.csv", "name,class\nA,Machine\nB,User\n");
        let right = write_csv(&dir, "right.csv", "name,class\nB,User\nC,Machine\n");

        let diff = diff_tables(&left, &right, "name").unwrap();
        assert_eq!(diff.left_only, vec!["A"]);
        assert_eq!(diff.right_only, vec!["C"]);
        assert!(!diff.is_empty());
    }

    #[test]
    fn identical_tables_diff_empty() {
        let dir = TempDir::new().unwrap();
        let left = write_csv(&dir, "left.csv", "name\nA\nB\n");
        let right = write_csv(&dir, "right.csv", "name\nB\nA\n");

        let diff = diff_tables(&left, &right, "name").unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn missing_key_column_is_an_error() {
        let dir = TempDir::new().unwrap();
        let left = write_csv(&dir, "left.csv", "name\nA\n");
        let right = write_csv(&dir, "right.csv", "other\nB\n");

        let result = diff_tables(&left, &right, "name");
        assert!(result.is_err());
    }

    #[test]
    fn empty_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        let left = write_csv(&dir, "left.csv", "name,class\n,Machine\nA,User\n");
        let right = write_csv(&dir, "right.csv", "name,class\nA,User\n");

        let diff = diff_tables(&left, &right, "name").unwrap();
        assert!(diff.is_empty());
    }
}
