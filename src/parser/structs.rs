use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::field::parse_fields;
use super::model::{Struct, Structs};

/// Opening line of a struct declaration: `type Name struct {`
pub(crate) static STRUCT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"type +(\S+) +struct \{").expect("struct header pattern is valid"));

/// Whole struct declaration; the body stops at the first closing brace, so
/// nested braces truncate it
static STRUCT_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"type +(\S+) +struct \{([^}]*)\}").expect("struct declaration pattern is valid")
});

/// Extract every struct declared in `source`, keyed by name.
///
/// Structs come back without methods; see [`super::methods::enrich`].
pub fn extract_structs(source: &str) -> Structs {
    let mut structs = Structs::new();

    for captures in STRUCT_DECLARATION.captures_iter(source) {
        let name = &captures[1];
        let body = &captures[2];

        let mut item = Struct::new(name);
        for field in body.lines().flat_map(parse_fields) {
            item.add_field(field);
        }

        debug!(
            struct_name = %name,
            fields = item.fields.len(),
            "Extracted struct"
        );
        structs.insert(name, item);
    }

    structs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_struct() {
        let source = r#"package domain

type Point struct {
	x int
	y int
}
"#;

        let structs = extract_structs(source);
        assert_eq!(structs.len(), 1);

        let point = structs.get("Point").unwrap();
        assert_eq!(point.fields.keys().collect::<Vec<_>>(), vec!["x", "y"]);
        assert!(point.methods.is_empty());
    }

    #[test]
    fn test_extract_keeps_source_order() {
        let source = r#"
type Order struct {
	id      string
	Status  string
	lines   []Line
	created, updated time.Time
	sync.Mutex
}
"#;

        let structs = extract_structs(source);
        let order = structs.get("Order").unwrap();

        assert_eq!(
            order.fields.keys().collect::<Vec<_>>(),
            vec!["id", "lines", "created", "updated"]
        );
        assert_eq!(order.fields.get("created").unwrap().ty, "time.Time");
    }

    #[test]
    fn test_struct_without_private_fields_is_recorded() {
        let source = "type Empty struct {}\n\ntype Public struct {\n\tName string\n}\n";

        let structs = extract_structs(source);
        assert_eq!(structs.keys().collect::<Vec<_>>(), vec!["Empty", "Public"]);
        assert!(structs.get("Empty").unwrap().fields.is_empty());
        assert!(structs.get("Public").unwrap().fields.is_empty());
    }

    #[test]
    fn test_duplicate_field_last_wins() {
        let source = "type Dup struct {\n\tv int\n\tv string\n}\n";

        let structs = extract_structs(source);
        let dup = structs.get("Dup").unwrap();
        assert_eq!(dup.fields.len(), 1);
        assert_eq!(dup.fields.get("v").unwrap().ty, "string");
    }

    #[test]
    fn test_nested_braces_truncate_body() {
        let source = r#"
type Outer struct {
	before int
	inner struct {
		deep int
	}
	after int
}
"#;

        let structs = extract_structs(source);
        let outer = structs.get("Outer").unwrap();
        assert_eq!(outer.fields.keys().collect::<Vec<_>>(), vec!["before", "deep"]);
    }

    #[test]
    fn test_multiple_structs() {
        let source = r#"
type Foo struct {
	bar string
}

type Baz struct {
	qux int
}
"#;

        let structs = extract_structs(source);
        assert_eq!(structs.keys().collect::<Vec<_>>(), vec!["Foo", "Baz"]);
        assert!(structs.get("Baz").unwrap().fields.contains_key("qux"));
    }
}
