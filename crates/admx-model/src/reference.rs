//! String-indirection references.
//!
//! Every localizable field in a definition file is an indirection: either a
//! `$(string.KEY)` placeholder resolved against a string table, a
//! `file:KEY` pair resolved against a *different* file's string table, or a
//! bare name pointing at a category/supportedOn definition declared in the
//! same document (whose displayName carries the actual string reference).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A reference from a policy or definition field to localized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reference {
    /// Key in the document's own default string table.
    Local(String),
    /// Key in the string table of another localization file.
    Cross { file: String, key: String },
    /// Name of a category or supportedOn definition in the same document.
    Named(String),
}

impl Reference {
    /// Classify a `displayName`/`explainText` attribute value.
    ///
    /// Display positions never name a definition: a bare value is taken as a
    /// local string key.
    pub fn display(raw: &str) -> Self {
        match split_placeholder(raw) {
            Some(inner) => from_key(inner),
            None => from_key(raw.trim()),
        }
    }

    /// Classify a `ref` attribute value (`parentCategory`, `supportedOn`).
    ///
    /// A colon-containing value is cross-file, anything else names a
    /// definition in the current document. This precedence is a convention
    /// of the data format, not a published standard.
    pub fn target(raw: &str) -> Self {
        match split_placeholder(raw) {
            Some(inner) => from_key(inner),
            None => {
                let raw = raw.trim();
                match raw.split_once(':') {
                    Some((file, key)) => Self::Cross {
                        file: file.to_string(),
                        key: key.to_string(),
                    },
                    None => Self::Named(raw.to_string()),
                }
            }
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(key) => write!(f, "$(string.{key})"),
            Self::Cross { file, key } => write!(f, "{file}:{key}"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

/// Strip a `$(string.KEY)` wrapper, returning the inner key.
fn split_placeholder(raw: &str) -> Option<&str> {
    raw.trim()
        .strip_prefix("$(string.")
        .and_then(|rest| rest.strip_suffix(')'))
}

fn from_key(key: &str) -> Reference {
    match key.split_once(':') {
        Some((file, k)) => Reference::Cross {
            file: file.to_string(),
            key: k.to_string(),
        },
        None => Reference::Local(key.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_placeholder_is_local() {
        assert_eq!(
            Reference::display("$(string.POL_123_NAME)"),
            Reference::Local("POL_123_NAME".to_string())
        );
    }

    #[test]
    fn display_bare_value_is_local_key() {
        assert_eq!(
            Reference::display("POL_123_NAME"),
            Reference::Local("POL_123_NAME".to_string())
        );
    }

    #[test]
    fn colon_value_is_cross_file() {
        assert_eq!(
            Reference::target("en_base:SUP_WIN10_STR"),
            Reference::Cross {
                file: "en_base".to_string(),
                key: "SUP_WIN10_STR".to_string(),
            }
        );
        assert_eq!(
            Reference::display("en_base:SUP_WIN10_STR"),
            Reference::Cross {
                file: "en_base".to_string(),
                key: "SUP_WIN10_STR".to_string(),
            }
        );
    }

    #[test]
    fn target_bare_value_is_named() {
        assert_eq!(
            Reference::target("Supported_Win10"),
            Reference::Named("Supported_Win10".to_string())
        );
    }

    #[test]
    fn placeholder_with_colon_is_cross_file() {
        assert_eq!(
            Reference::target("$(string.shared_strings:X)"),
            Reference::Cross {
                file: "shared_strings".to_string(),
                key: "X".to_string(),
            }
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            Reference::target("  Supported_Win10 "),
            Reference::Named("Supported_Win10".to_string())
        );
    }
}
