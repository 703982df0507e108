//! Localization (`.adml`) file parsing.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

use admx_model::StringTable;

use crate::error::{IngestError, Result};
use crate::xml::attribute;

/// Load the string table of one localization file.
///
/// A file that does not exist yields `MissingLocalization`; the caller
/// decides whether that is fatal (it is not, for cross-file references).
pub fn load_string_table(path: &Path) -> Result<StringTable> {
    let xml = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::MissingLocalization {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::io(path, e)
        }
    })?;
    let table = parse_string_table(&xml, path)?;
    debug!(path = %path.display(), entries = table.len(), "loaded string table");
    Ok(table)
}

fn parse_string_table(xml: &str, path: &Path) -> Result<StringTable> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut table = StringTable::new();

    loop {
        match reader.read_event().map_err(|e| malformed(path, e))? {
            Event::Eof => break,
            Event::Start(e) if e.local_name().as_ref() == b"string" => {
                let id = attribute(&e, b"id").map_err(|m| malformed(path, m))?;
                let text = reader
                    .read_text(e.name())
                    .map_err(|e| malformed(path, e))?;
                if let Some(id) = id {
                    table.insert(id, text.into_owned());
                }
            }
            Event::Empty(e) if e.local_name().as_ref() == b"string" => {
                let id = attribute(&e, b"id").map_err(|m| malformed(path, m))?;
                if let Some(id) = id {
                    table.insert(id, String::new());
                }
            }
            _ => {}
        }
    }

    Ok(table)
}

fn malformed(path: &Path, message: impl ToString) -> IngestError {
    IngestError::MalformedLocalization {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
