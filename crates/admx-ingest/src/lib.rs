pub mod adml;
pub mod admx;
pub mod discovery;
pub mod error;
mod xml;

pub use adml::load_string_table;
pub use admx::load_definition;
pub use discovery::{base_name, language_dir, list_definition_files, localization_path};
pub use error::{IngestError, Result};
