//! Flattening policies into output records.

use tracing::trace;

use admx_model::{DefinitionDocument, Policy, PolicyRecord, StringTable};

use crate::catalog::LocalizationCatalog;
use crate::resolver::resolve;

/// Build one record per policy, lazily, in document order.
///
/// Display and explain references are always simple lookups; parent category
/// and supportedOn go through the full named-definition path. A policy
/// without a parent category or supportedOn element gets an empty field, not
/// the unresolved sentinel.
pub fn build<'a>(
    doc: &'a DefinitionDocument,
    default_table: &'a StringTable,
    catalog: &'a mut LocalizationCatalog,
) -> impl Iterator<Item = PolicyRecord> + 'a {
    doc.policies
        .iter()
        .map(move |policy| build_record(policy, doc, default_table, &mut *catalog))
}

fn build_record(
    policy: &Policy,
    doc: &DefinitionDocument,
    default_table: &StringTable,
    catalog: &mut LocalizationCatalog,
) -> PolicyRecord {
    let parent_category = policy
        .parent_category
        .as_ref()
        .map(|r| resolve(r, doc, default_table, catalog))
        .unwrap_or_default();
    let supported_on = policy
        .supported_on
        .as_ref()
        .map(|r| resolve(r, doc, default_table, catalog))
        .unwrap_or_default();

    let record = PolicyRecord {
        source_file: policy.source_file.clone(),
        parent_category,
        name: policy.name.clone(),
        display_name: resolve(&policy.display_name, doc, default_table, catalog),
        class: policy.class.as_str().to_string(),
        explain_text: resolve(&policy.explain_text, doc, default_table, catalog),
        supported_on,
        registry_key: policy.registry_key.clone(),
        registry_value_name: policy.registry_value_name.clone(),
    };
    trace!(
        source_file = %record.source_file,
        policy = %record.name,
        unresolved = record.unresolved_count(),
        "built record"
    );
    record
}
