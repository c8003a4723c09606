pub mod error;
pub mod manager;

use std::fs;
use std::path::{Path, PathBuf};

use crate::editor::TextEdit;
use crate::language::LanguageSupport;
use error::DocumentError;

pub use manager::DocumentManager;

/// An open source document: its path and current text
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    text: String,
}

impl Document {
    /// Open the document at `path`, refusing files `language` does not recognize
    pub fn open(path: &Path, language: &dyn LanguageSupport) -> Result<Self, DocumentError> {
        if !path.is_file() {
            return Err(DocumentError::NoDocument(path.to_path_buf()));
        }
        if !language.recognizes(path) {
            return Err(DocumentError::NotSourceFile {
                path: path.to_path_buf(),
                language: language.name().to_string(),
            });
        }

        let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_text(path, text))
    }

    /// Wrap text that is already in memory
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply `edit` to the in-memory text
    pub fn apply(&mut self, edit: &TextEdit) -> Result<(), DocumentError> {
        self.text = edit
            .apply(&self.text)
            .ok_or_else(|| DocumentError::EditOutOfRange(self.path.clone()))?;
        Ok(())
    }

    /// Write the current text back to disk
    pub fn save(&self) -> Result<(), DocumentError> {
        fs::write(&self.path, &self.text).map_err(|source| DocumentError::Save {
            path: self.path.clone(),
            source,
        })
    }
}
