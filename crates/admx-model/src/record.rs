//! Flat output records.

use serde::{Deserialize, Serialize};

/// Terminal resolver outcome for a key or named definition that cannot be
/// found. Surfaced verbatim in the output so incomplete translations are
/// visible to a reviewer.
pub const UNRESOLVED: &str = "unresolved";

/// The fully resolved projection of one policy. Field order is the output
/// column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub source_file: String,
    pub parent_category: String,
    pub name: String,
    pub display_name: String,
    pub class: String,
    pub explain_text: String,
    pub supported_on: String,
    pub registry_key: String,
    pub registry_value_name: String,
}

impl PolicyRecord {
    /// Number of fields that resolved to the unresolved sentinel.
    pub fn unresolved_count(&self) -> usize {
        [
            &self.parent_category,
            &self.display_name,
            &self.explain_text,
            &self.supported_on,
        ]
        .iter()
        .filter(|value| value.as_str() == UNRESOLVED)
        .count()
    }
}
