use std::path::Path;

use tracing::{debug, info};

use super::error::DocumentError;
use super::Document;
use crate::config::Config;
use crate::core::{Result, Selection};
use crate::editor::TextEdit;
use crate::generation::{generate, GeneratedCode};
use crate::language::LanguageSupport;
use crate::parser::{resolve, SourceModel};

/// Runs generation requests against documents
pub struct DocumentManager {
    config: Config,
    language: Box<dyn LanguageSupport>,
}

impl DocumentManager {
    /// Create a document manager using the language settings from `config`
    pub fn new(config: Config) -> Self {
        let language = Box::new(config.language());
        Self { config, language }
    }

    /// Load configuration for `target_path` and create a manager from it
    pub fn discover(target_path: &Path) -> Result<Self> {
        Ok(Self::new(Config::load(target_path)?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Open a document, checking that it exists and is a recognized source file
    pub fn open(&self, path: &Path) -> Result<Document> {
        Ok(Document::open(path, self.language.as_ref())?)
    }

    /// Work out what the struct under `selection` is missing.
    ///
    /// An empty result means everything already exists.
    pub fn generate(&self, document: &Document, selection: Selection) -> Result<GeneratedCode> {
        let source = document.text();

        let resolution = resolve(source, selection);
        let name = resolution
            .enclosing_struct
            .ok_or(DocumentError::OutsideStruct {
                line: selection.start_line,
            })?;

        let model = SourceModel::analyze(source);
        let target = model
            .structs
            .get(&name)
            .ok_or_else(|| DocumentError::StructNotFound(name.clone()))?;

        let code = generate(&resolution.selected, &model.functions, target);

        if code.is_empty() {
            info!(struct_name = %name, "Nothing to generate");
        } else {
            info!(
                struct_name = %name,
                generated = ?code.names(),
                "Generated declarations"
            );
        }
        Ok(code)
    }

    /// Append `code` to the end of the document and save it.
    ///
    /// Returns the edit that was applied, or None when there was nothing to add.
    pub fn apply(&self, document: &mut Document, code: &GeneratedCode) -> Result<Option<TextEdit>> {
        if code.is_empty() {
            return Ok(None);
        }

        let edit = TextEdit::append(document.text(), code.render());
        document.apply(&edit)?;
        document.save()?;

        debug!(
            path = %document.path().display(),
            line = edit.range.start.line,
            "Saved generated code"
        );
        Ok(Some(edit))
    }

    /// Serialize the extracted source model as pretty JSON
    pub fn inspect(&self, document: &Document) -> Result<String> {
        let model = SourceModel::analyze(document.text());
        Ok(serde_json::to_string_pretty(&model)?)
    }
}
