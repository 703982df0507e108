//! The reference resolution engine.
//!
//! Given a parsed definition document and its default string table, this
//! crate follows string-indirection references (local, cross-file, or via a
//! named definition) and flattens every policy into one [`PolicyRecord`].
//! Resolution is total: broken links become the `unresolved` sentinel, never
//! an error that aborts the run.

pub mod builder;
pub mod catalog;
pub mod resolver;

pub use builder::build;
pub use catalog::LocalizationCatalog;
pub use resolver::resolve;

pub use admx_model::PolicyRecord;
