//! CSV output sink for resolved policy records.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use admx_model::PolicyRecord;

/// Output column order; matches the field order of [`PolicyRecord`].
pub const COLUMNS: [&str; 9] = [
    "source_file",
    "parent_category",
    "name",
    "display_name",
    "class",
    "explain_text",
    "supported_on",
    "registry_key",
    "registry_value_name",
];

/// Write records as CSV: one header row of field names, one row per record,
/// in the order given.
pub fn write_records(output_path: &Path, records: &[PolicyRecord]) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)
        .with_context(|| format!("create {}", output_path.display()))?;
    writer
        .write_record(COLUMNS)
        .with_context(|| format!("write header to {}", output_path.display()))?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("write record {}", record.name))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", output_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_record(name: &str) -> PolicyRecord {
        PolicyRecord {
            source_file: "vendor".to_string(),
            parent_category: "Updates".to_string(),
            name: name.to_string(),
            display_name: "Disable automatic updates".to_string(),
            class: "Machine".to_string(),
            explain_text: "Stops the updater".to_string(),
            supported_on: "Windows 10".to_string(),
            registry_key: "Software\\Policies\\Vendor".to_string(),
            registry_value_name: "NoAutoUpdate".to_string(),
        }
    }

    #[test]
    fn writes_header_and_one_row_per_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("policies.csv");

        write_records(&path, &[sample_record("A"), sample_record("B")]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("source_file,parent_category,name,display_name,class"));
        assert!(lines[1].contains(",A,"));
        assert!(lines[2].contains(",B,"));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("out").join("policies.csv");

        write_records(&path, &[sample_record("A")]).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn zero_records_still_produce_a_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");

        write_records(&path, &[]).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("source_file,"));
    }
}
