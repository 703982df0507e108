//! Definition (`.admx`) file parsing.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use admx_model::{
    CategoryDefinition, DefinitionDocument, Policy, PolicyClass, Reference, SupportDefinition,
};

use crate::discovery::base_name;
use crate::error::{IngestError, Result};
use crate::xml::attribute;

/// Load and parse one definition file.
///
/// Comment nodes are not policies and produce nothing. A file whose
/// structural tree cannot be parsed at all yields `MalformedDefinition`,
/// which the caller logs and skips.
pub fn load_definition(path: &Path) -> Result<DefinitionDocument> {
    let xml = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let doc = parse_definition(&xml, path)?;
    debug!(
        path = %path.display(),
        policies = doc.policies.len(),
        categories = doc.categories.len(),
        support_definitions = doc.support_definitions.len(),
        "loaded definition file"
    );
    Ok(doc)
}

fn parse_definition(xml: &str, path: &Path) -> Result<DefinitionDocument> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let source_file = base_name(path);
    let mut doc = DefinitionDocument::new(&source_file);
    let mut saw_root = false;

    loop {
        match reader.read_event().map_err(|e| malformed(path, e))? {
            Event::Eof => break,
            Event::Start(e) => match e.local_name().as_ref() {
                b"policyDefinitions" => saw_root = true,
                b"category" => {
                    if let Some(category) = parse_category(&e, path)? {
                        doc.categories.push(category);
                    }
                }
                b"definition" => {
                    if let Some(definition) = parse_support_definition(&e, path)? {
                        doc.support_definitions.push(definition);
                    }
                }
                b"policy" => {
                    let policy = parse_policy(&mut reader, &e, &source_file, path)?;
                    doc.policies.push(policy);
                }
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"policyDefinitions" => saw_root = true,
                b"category" => {
                    if let Some(category) = parse_category(&e, path)? {
                        doc.categories.push(category);
                    }
                }
                b"definition" => {
                    if let Some(definition) = parse_support_definition(&e, path)? {
                        doc.support_definitions.push(definition);
                    }
                }
                b"policy" => {
                    doc.policies.push(policy_from_attrs(&e, &source_file, path)?);
                }
                _ => {}
            },
            _ => {}
        }
    }

    if !saw_root {
        return Err(malformed(path, "missing <policyDefinitions> root element"));
    }

    Ok(doc)
}

fn parse_category(start: &BytesStart<'_>, path: &Path) -> Result<Option<CategoryDefinition>> {
    let Some(name) = attr(start, b"name", path)? else {
        return Ok(None);
    };
    let display = attr(start, b"displayName", path)?.unwrap_or_default();
    Ok(Some(CategoryDefinition {
        name,
        display_name: Reference::display(&display),
    }))
}

fn parse_support_definition(
    start: &BytesStart<'_>,
    path: &Path,
) -> Result<Option<SupportDefinition>> {
    let Some(name) = attr(start, b"name", path)? else {
        return Ok(None);
    };
    let display = attr(start, b"displayName", path)?.unwrap_or_default();
    Ok(Some(SupportDefinition {
        name,
        display_name: Reference::display(&display),
    }))
}

/// Parse a `<policy>` element and its children up to the closing tag.
fn parse_policy(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart<'_>,
    source_file: &str,
    path: &Path,
) -> Result<Policy> {
    let mut policy = policy_from_attrs(start, source_file, path)?;

    loop {
        match reader.read_event().map_err(|e| malformed(path, e))? {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"parentCategory" => {
                    if let Some(raw) = attr(&e, b"ref", path)? {
                        policy.parent_category = Some(Reference::target(&raw));
                    }
                }
                b"supportedOn" => {
                    if let Some(raw) = attr(&e, b"ref", path)? {
                        policy.supported_on = Some(Reference::target(&raw));
                    }
                }
                _ => {}
            },
            Event::End(e) if e.local_name().as_ref() == b"policy" => break,
            Event::Eof => {
                return Err(malformed(path, "unexpected end of file inside <policy>"));
            }
            _ => {}
        }
    }

    Ok(policy)
}

fn policy_from_attrs(start: &BytesStart<'_>, source_file: &str, path: &Path) -> Result<Policy> {
    let name = attr(start, b"name", path)?.unwrap_or_default();
    let class = PolicyClass::parse(&attr(start, b"class", path)?.unwrap_or_default());
    let display_name = Reference::display(&attr(start, b"displayName", path)?.unwrap_or_default());
    let explain_text = Reference::display(&attr(start, b"explainText", path)?.unwrap_or_default());
    let registry_key = attr(start, b"key", path)?.unwrap_or_default();
    let registry_value_name = attr(start, b"valueName", path)?.unwrap_or_default();

    Ok(Policy {
        source_file: source_file.to_string(),
        name,
        display_name,
        explain_text,
        class,
        supported_on: None,
        parent_category: None,
        registry_key,
        registry_value_name,
    })
}

fn attr(start: &BytesStart<'_>, name: &[u8], path: &Path) -> Result<Option<String>> {
    attribute(start, name).map_err(|message| malformed(path, message))
}

fn malformed(path: &Path, message: impl ToString) -> IngestError {
    IngestError::MalformedDefinition {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
