//! Small helpers shared by the ADMX and ADML parsers.

use quick_xml::events::BytesStart;

/// Fetch an attribute value by local name, unescaped.
///
/// Errors are stringified here; callers wrap them with the file path.
pub(crate) fn attribute(
    start: &BytesStart<'_>,
    name: &[u8],
) -> std::result::Result<Option<String>, String> {
    for attr in start.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        if attr.key.local_name().as_ref() == name {
            let value = attr.unescape_value().map_err(|e| e.to_string())?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
