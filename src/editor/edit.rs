use serde::{Deserialize, Serialize};

use super::text::{end_position, offset_at};
use crate::core::{Position, Range};

/// Text edit operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub range: Range,
    #[serde(rename = "newText")]
    pub new_text: String,
}

impl TextEdit {
    pub fn new(range: Range, new_text: String) -> Self {
        Self { range, new_text }
    }

    /// Create an insertion at `position`
    pub fn insert(position: Position, new_text: String) -> Self {
        Self::new(Range::at(position), new_text)
    }

    /// Create an insertion at the end of `source`
    pub fn append(source: &str, new_text: String) -> Self {
        Self::insert(end_position(source), new_text)
    }

    /// Apply the edit to `source`. Returns None if the range does not fit.
    pub fn apply(&self, source: &str) -> Option<String> {
        let start = offset_at(source, self.range.start)?;
        let end = offset_at(source, self.range.end)?;
        if start > end {
            return None;
        }

        let mut result = source.to_string();
        result.replace_range(start..end, &self.new_text);
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append() {
        let source = "package main\n";
        let edit = TextEdit::append(source, "\nfunc main() {}\n".to_string());

        assert_eq!(edit.range, Range::at(Position::new(1, 0)));
        assert_eq!(
            edit.apply(source).as_deref(),
            Some("package main\n\nfunc main() {}\n")
        );
    }

    #[test]
    fn test_replace() {
        let source = "type A struct{}\n";
        let edit = TextEdit::new(
            Range::new(Position::new(0, 5), Position::new(0, 6)),
            "B".to_string(),
        );

        assert_eq!(edit.apply(source).as_deref(), Some("type B struct{}\n"));
    }

    #[test]
    fn test_out_of_range() {
        let edit = TextEdit::insert(Position::new(3, 0), "x".to_string());
        assert_eq!(edit.apply("one line"), None);
    }

    #[test]
    fn test_serializes_lsp_style() {
        let edit = TextEdit::insert(Position::new(0, 0), "x".to_string());
        let json = serde_json::to_value(&edit).unwrap();
        assert_eq!(json["newText"], "x");
        assert_eq!(json["range"]["start"]["line"], 0);
    }
}
