//! Extraction pipeline: discover definition files, parse, resolve,
//! accumulate flat records.

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use admx_ingest::{
    language_dir, list_definition_files, load_definition, load_string_table, localization_path,
};
use admx_model::{PolicyRecord, StringTable};
use admx_resolve::{LocalizationCatalog, build};

/// Outcome of one extraction run.
#[derive(Debug)]
pub struct ExtractResult {
    /// All resolved records, in file order then document order.
    pub records: Vec<PolicyRecord>,
    /// Per-file counts for the summary table.
    pub files: Vec<FileSummary>,
    /// Files that were skipped, with the reason.
    pub errors: Vec<String>,
}

#[derive(Debug)]
pub struct FileSummary {
    pub source_file: String,
    pub policies: usize,
    pub unresolved_fields: usize,
}

/// Run the pipeline over every definition file in `templates_dir`.
///
/// A file that fails to parse is logged and skipped; a missing default
/// localization file degrades that file's references to the unresolved
/// sentinel. Only an unavailable templates directory is fatal.
pub fn extract_records(templates_dir: &Path, language: &str) -> Result<ExtractResult> {
    let definition_files = list_definition_files(templates_dir)?;
    let lang_dir = language_dir(templates_dir, language);
    let mut catalog = LocalizationCatalog::new(&lang_dir);

    let mut records = Vec::new();
    let mut files = Vec::new();
    let mut errors = Vec::new();

    for path in definition_files {
        let doc = match load_definition(&path) {
            Ok(doc) => doc,
            Err(error) => {
                warn!(%error, "skipping definition file");
                errors.push(error.to_string());
                continue;
            }
        };

        let default_path = localization_path(&lang_dir, &doc.source_file);
        let default_table = match load_string_table(&default_path) {
            Ok(table) => table,
            Err(error) => {
                warn!(
                    source_file = %doc.source_file,
                    %error,
                    "default localization unavailable; references will not resolve"
                );
                StringTable::new()
            }
        };

        let file_records: Vec<PolicyRecord> = build(&doc, &default_table, &mut catalog).collect();
        let unresolved_fields = file_records
            .iter()
            .map(PolicyRecord::unresolved_count)
            .sum();
        info!(
            source_file = %doc.source_file,
            policies = file_records.len(),
            unresolved_fields,
            "resolved definition file"
        );
        files.push(FileSummary {
            source_file: doc.source_file.clone(),
            policies: file_records.len(),
            unresolved_fields,
        });
        records.extend(file_records);
    }

    Ok(ExtractResult {
        records,
        files,
        errors,
    })
}
