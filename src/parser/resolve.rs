use serde::Serialize;
use tracing::debug;

use super::field::parse_fields;
use super::model::SelectionFilter;
use super::structs::STRUCT_HEADER;
use crate::core::Selection;

/// A closing brace on this token does not end a scope
const EMPTY_INTERFACE: &str = "interface{}";

/// Where a selection sits in the document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    /// Struct whose declaration encloses the start of the selection
    pub enclosing_struct: Option<String>,
    /// Fields declared on the selected lines
    pub selected: SelectionFilter,
}

/// Resolve the struct enclosing `selection` and the fields it covers
pub fn resolve(source: &str, selection: Selection) -> Resolution {
    let lines: Vec<&str> = source.lines().collect();

    let resolution = Resolution {
        enclosing_struct: enclosing_struct(&lines, selection.start_line),
        selected: selected_fields(&lines, selection),
    };

    debug!(
        start_line = selection.start_line,
        end_line = selection.end_line,
        enclosing_struct = ?resolution.enclosing_struct,
        selected_fields = resolution.selected.fields().len(),
        "Resolved selection"
    );
    resolution
}

/// Parse every selected line as a field line, keeping duplicates
pub fn selected_fields(lines: &[&str], selection: Selection) -> SelectionFilter {
    let fields = lines
        .iter()
        .skip(selection.start_line)
        .take((selection.end_line - selection.start_line).saturating_add(1))
        .flat_map(|line| parse_fields(line))
        .collect::<Vec<_>>();

    SelectionFilter::new(fields)
}

/// Walk backwards from `start_line` looking for a struct header.
///
/// The walk gives up at the first closing brace, which marks the end of some
/// earlier scope.
pub fn enclosing_struct(lines: &[&str], start_line: usize) -> Option<String> {
    let last = lines.len().checked_sub(1)?;
    let start = start_line.min(last);

    for line in lines[..=start].iter().rev() {
        if line.contains('}') && !line.contains(EMPTY_INTERFACE) {
            return None;
        }
        if let Some(captures) = STRUCT_HEADER.captures(line) {
            return Some(captures[1].to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::model::Field;

    const SOURCE: &str = "type Foo struct {
    bar string
}
type Baz struct {
    qux int
}
";

    #[test]
    fn test_resolves_nearest_struct() {
        let resolution = resolve(SOURCE, Selection::cursor(4));
        assert_eq!(resolution.enclosing_struct.as_deref(), Some("Baz"));
    }

    #[test]
    fn test_header_line_resolves_to_itself() {
        let resolution = resolve(SOURCE, Selection::cursor(3));
        assert_eq!(resolution.enclosing_struct.as_deref(), Some("Baz"));
    }

    #[test]
    fn test_closing_brace_ends_walk() {
        let resolution = resolve(SOURCE, Selection::cursor(2));
        assert_eq!(resolution.enclosing_struct, None);
    }

    #[test]
    fn test_outside_any_struct() {
        let source = "package main\n\nfunc main() {\n\tprintln(1)\n}\n";
        let resolution = resolve(source, Selection::cursor(3));
        assert_eq!(resolution.enclosing_struct, None);
    }

    #[test]
    fn test_empty_interface_does_not_end_walk() {
        let source = "type Bag struct {\n\titems []interface{}\n\tcount int\n}\n";
        let resolution = resolve(source, Selection::cursor(2));
        assert_eq!(resolution.enclosing_struct.as_deref(), Some("Bag"));
    }

    #[test]
    fn test_start_line_past_end_is_clamped() {
        let source = "type Open struct {\n\tv int";
        assert_eq!(
            resolve(source, Selection::cursor(40)).enclosing_struct.as_deref(),
            Some("Open")
        );
        assert_eq!(resolve("", Selection::cursor(0)).enclosing_struct, None);
    }

    #[test]
    fn test_selected_fields_in_order() {
        let source = "type Point struct {\n\tx, y int\n\tName string\n\tz int\n}\n";
        let resolution = resolve(source, Selection::new(0, 4));

        assert_eq!(
            resolution.selected.fields(),
            &[
                Field::new("x", "int"),
                Field::new("y", "int"),
                Field::new("z", "int"),
            ]
        );
    }

    #[test]
    fn test_cursor_on_field_selects_it() {
        let resolution = resolve(SOURCE, Selection::cursor(1));
        assert_eq!(resolution.selected.fields(), &[Field::new("bar", "string")]);
        assert_eq!(resolution.enclosing_struct.as_deref(), Some("Foo"));
    }

    #[test]
    fn test_selection_end_far_past_document() {
        let source = "type Point struct {\n\tx int\n\ty int\n}\n";
        let resolution = resolve(source, Selection::new(1, u32::MAX as usize));

        assert_eq!(resolution.enclosing_struct.as_deref(), Some("Point"));
        assert_eq!(
            resolution.selected.fields(),
            &[Field::new("x", "int"), Field::new("y", "int")]
        );
        assert_eq!(
            resolve(source, Selection::new(0, usize::MAX)).selected.fields().len(),
            2
        );
        assert!(resolve(source, Selection::new(usize::MAX - 1, usize::MAX))
            .selected
            .is_empty());
    }

    #[test]
    fn test_selection_keeps_duplicates_across_lines() {
        let source = "type D struct {\n\tv int\n\tv int\n}\n";
        let resolution = resolve(source, Selection::new(1, 2));
        assert_eq!(resolution.selected.fields().len(), 2);
    }
}
