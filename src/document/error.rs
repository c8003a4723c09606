use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation request before anything is written
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("No file open: {} does not exist", .0.display())]
    NoDocument(PathBuf),

    #[error("File is not a {language} file: {}", .path.display())]
    NotSourceFile { path: PathBuf, language: String },

    #[error("Cursor is not positioned in a struct definition (line {})", .line + 1)]
    OutsideStruct { line: usize },

    #[error("Struct {0} could not be extracted from the file")]
    StructNotFound(String),

    #[error("Generated code could not be applied to {}", .0.display())]
    EditOutOfRange(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
