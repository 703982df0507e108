use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use admx_cli::pipeline::{ExtractResult, extract_records};
use admx_report::{TableDiff, diff_tables, search_reports, write_records};

use crate::cli::{DiffArgs, ExtractArgs, SearchReportsArgs};
use crate::summary::print_matches;

/// Outcome of the extract command, for the summary printer.
pub struct ExtractOutcome {
    pub result: ExtractResult,
    pub output_path: PathBuf,
}

pub fn run_extract(args: &ExtractArgs) -> Result<ExtractOutcome> {
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| args.templates_dir.join("policies.csv"));

    let span = info_span!(
        "extract",
        templates_dir = %args.templates_dir.display(),
        language = %args.language
    );
    let _guard = span.enter();

    let start = Instant::now();
    let result = extract_records(&args.templates_dir, &args.language)?;
    info!(
        file_count = result.files.len(),
        record_count = result.records.len(),
        skipped = result.errors.len(),
        duration_ms = start.elapsed().as_millis(),
        "extraction complete"
    );

    write_records(&output_path, &result.records)
        .with_context(|| format!("write {}", output_path.display()))?;

    Ok(ExtractOutcome {
        result,
        output_path,
    })
}

pub fn run_diff(args: &DiffArgs) -> Result<TableDiff> {
    diff_tables(&args.left, &args.right, &args.key)
}

pub fn run_search(args: &SearchReportsArgs) -> Result<()> {
    let matches = search_reports(&args.reports_dir, &args.needle)?;
    print_matches(&args.needle, &matches);
    Ok(())
}
