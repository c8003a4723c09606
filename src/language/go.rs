use std::path::Path;

use super::LanguageSupport;

/// Go language support implementation
pub struct Go {
    extensions: Vec<String>,
}

impl Default for Go {
    fn default() -> Self {
        Self::new()
    }
}

impl Go {
    pub fn new() -> Self {
        Self::with_extensions(vec!["go".to_string()])
    }

    /// Recognize files by a custom set of extensions (without the leading dot)
    pub fn with_extensions(extensions: Vec<String>) -> Self {
        Self { extensions }
    }
}

impl LanguageSupport for Go {
    fn name(&self) -> &str {
        "Go"
    }

    fn recognizes(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|known| known == ext))
            .unwrap_or(false)
    }
}

/// Returns true if `name` is package-private.
///
/// Only ASCII case is considered, so a name starting with `_`, a digit or a
/// non-ASCII letter counts as exported.
pub fn is_unexported(name: &str) -> bool {
    name.chars()
        .next()
        .map(|c| c != c.to_ascii_uppercase())
        .unwrap_or(false)
}

/// Accessor name for a field: first character uppercased
pub fn exported_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Receiver variable for methods on `type_name`: its first character, lowercased
pub fn receiver_name(type_name: &str) -> String {
    type_name
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default()
}
