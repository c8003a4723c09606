pub mod go;

use std::path::Path;

pub use go::Go;

/// Language-specific recognition of source documents
pub trait LanguageSupport: Send + Sync {
    /// Human readable language name, used in error messages
    fn name(&self) -> &str;

    /// Returns true if the document at `path` is a source file of this language
    fn recognizes(&self, path: &Path) -> bool;
}
