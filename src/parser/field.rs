use super::model::Field;
use crate::language::go::is_unexported;

/// Parse one line of a struct body into the unexported fields it declares.
///
/// Handles `name Type` and the multi-name forms `a, b Type` / `a,b Type`.
/// Anything else (embedded types, tagged fields, comments) yields nothing.
pub fn parse_fields(line: &str) -> Vec<Field> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();

    if line.contains(',') {
        // The type is always the last token; names may or may not have a
        // space after their comma
        let Some((ty, names)) = tokens.split_last() else {
            return Vec::new();
        };

        names
            .iter()
            .flat_map(|token| token.split(','))
            .filter(|name| !name.is_empty() && is_unexported(name))
            .map(|name| Field::new(name, *ty))
            .collect()
    } else if let [name, ty] = tokens.as_slice() {
        if is_unexported(name) {
            vec![Field::new(*name, *ty)]
        } else {
            Vec::new()
        }
    } else {
        // Embedded type: it brings its own accessors
        Vec::new()
    }
}
