pub mod field;
pub mod methods;
pub mod model;
pub mod ordered;
pub mod resolve;
pub mod structs;

use serde::Serialize;
use tracing::debug;

pub use field::parse_fields;
pub use methods::{enrich, scan_functions, scan_methods};
pub use model::{Field, Func, Functions, Method, Methods, SelectionFilter, Struct, Structs};
pub use ordered::OrderedMap;
pub use resolve::{resolve, Resolution};
pub use structs::extract_structs;

/// Everything the generator needs to know about a Go source file
#[derive(Debug, Clone, Serialize)]
pub struct SourceModel {
    /// Structs with their unexported fields and methods attached
    pub structs: Structs,
    /// Top-level functions
    pub functions: Functions,
}

impl SourceModel {
    /// Extract structs, methods and functions from Go source text
    pub fn analyze(source: &str) -> Self {
        let structs = extract_structs(source);
        let methods = scan_methods(source);
        let functions = scan_functions(source);

        debug!(
            structs = structs.len(),
            functions = functions.len(),
            "Analyzed source"
        );

        Self {
            structs: enrich(structs, methods),
            functions,
        }
    }
}
