//! Reference resolution.
//!
//! Two independent indirection axes compose here: which file's string table
//! holds the text, and which named definition carries the reference. The
//! resolver keeps them orthogonal and is total: every reference resolves to
//! a string, broken links resolve to [`UNRESOLVED`].

use admx_model::{DefinitionDocument, Reference, StringTable, UNRESOLVED};

use crate::catalog::LocalizationCatalog;

/// Resolve a reference to localized text.
///
/// `Local` keys look up the document's default table; `Cross` keys look up
/// the named file's table via the catalog; `Named` references look up a
/// category or supportedOn definition in the document and resolve its
/// display reference. Any link that cannot be followed yields the sentinel.
pub fn resolve(
    reference: &Reference,
    doc: &DefinitionDocument,
    default_table: &StringTable,
    catalog: &mut LocalizationCatalog,
) -> String {
    match reference {
        Reference::Local(key) => default_table.get(key).unwrap_or(UNRESOLVED).to_string(),
        Reference::Cross { file, key } => catalog
            .get(file)
            .and_then(|table| table.get(key))
            .unwrap_or(UNRESOLVED)
            .to_string(),
        Reference::Named(name) => match doc.find_display_ref(name) {
            // Definitions do not chain; a named display reference is a
            // broken link, not a second hop.
            Some(Reference::Named(_)) | None => UNRESOLVED.to_string(),
            Some(inner) => resolve(inner, doc, default_table, catalog),
        },
    }
}
