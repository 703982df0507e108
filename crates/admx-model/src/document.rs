//! Parsed definition documents: policies, categories, supportedOn
//! definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::reference::Reference;

/// A category declared inside a definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub name: String,
    pub display_name: Reference,
}

/// A supportedOn definition: the platform/version grouping a policy can
/// declare applicability against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportDefinition {
    pub name: String,
    pub display_name: Reference,
}

/// Policy class: which registry hive the policy writes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyClass {
    Machine,
    User,
    Both,
    /// Unrecognized spelling, carried verbatim.
    Other(String),
}

impl PolicyClass {
    /// Parse a class attribute. Never fails; unknown values are preserved.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "machine" => Self::Machine,
            "user" => Self::User,
            "both" => Self::Both,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Machine => "Machine",
            Self::User => "User",
            Self::Both => "Both",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for PolicyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PolicyClass {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// One policy as declared in a definition file.
///
/// `supported_on` and `parent_category` are optional child elements;
/// `display_name` and `explain_text` are attributes and always present as
/// references (an absent attribute parses as an empty local key, which
/// resolves to the unresolved sentinel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub source_file: String,
    pub name: String,
    pub display_name: Reference,
    pub explain_text: Reference,
    pub class: PolicyClass,
    pub supported_on: Option<Reference>,
    pub parent_category: Option<Reference>,
    pub registry_key: String,
    pub registry_value_name: String,
}

/// The parsed structural tree of one definition file.
#[derive(Debug, Clone, Default)]
pub struct DefinitionDocument {
    /// Base name of the source file, without extension.
    pub source_file: String,
    pub policies: Vec<Policy>,
    pub categories: Vec<CategoryDefinition>,
    pub support_definitions: Vec<SupportDefinition>,
}

impl DefinitionDocument {
    pub fn new(source_file: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            ..Self::default()
        }
    }

    /// Look up the display reference of a named definition, categories
    /// first, then supportedOn definitions.
    pub fn find_display_ref(&self, name: &str) -> Option<&Reference> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.display_name)
            .or_else(|| {
                self.support_definitions
                    .iter()
                    .find(|s| s.name == name)
                    .map(|s| &s.display_name)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_class_parse_is_case_insensitive() {
        assert_eq!(PolicyClass::parse("machine"), PolicyClass::Machine);
        assert_eq!(PolicyClass::parse("USER"), PolicyClass::User);
        assert_eq!(PolicyClass::parse("Both"), PolicyClass::Both);
    }

    #[test]
    fn policy_class_preserves_unknown_spellings() {
        let class = PolicyClass::parse("Kernel");
        assert_eq!(class, PolicyClass::Other("Kernel".to_string()));
        assert_eq!(class.as_str(), "Kernel");
    }

    #[test]
    fn categories_shadow_support_definitions() {
        let mut doc = DefinitionDocument::new("base");
        doc.categories.push(CategoryDefinition {
            name: "Shared".to_string(),
            display_name: Reference::Local("CAT".to_string()),
        });
        doc.support_definitions.push(SupportDefinition {
            name: "Shared".to_string(),
            display_name: Reference::Local("SUP".to_string()),
        });
        assert_eq!(
            doc.find_display_ref("Shared"),
            Some(&Reference::Local("CAT".to_string()))
        );
    }

    #[test]
    fn unknown_name_finds_nothing() {
        let doc = DefinitionDocument::new("base");
        assert_eq!(doc.find_display_ref("Nope"), None);
    }
}
