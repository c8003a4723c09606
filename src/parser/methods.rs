use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use super::model::{Func, Functions, Method, Methods, Structs};
use super::ordered::OrderedMap;

/// `func (r *Type) Name(...)` on a single line
static METHOD_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"func +\(\w+ +\*?(\w+)\) +(\w+)\(.*\)").expect("method pattern is valid")
});

/// `func Name(...)`; a receiver-bound declaration has `(` right after `func`
/// and can never match
static FUNCTION_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"func +(\w+)\(.*\)").expect("function pattern is valid"));

/// Methods grouped by receiver type name
pub type MethodsByType = OrderedMap<Methods>;

/// Scan `source` for method declarations, grouped by receiver type
pub fn scan_methods(source: &str) -> MethodsByType {
    let mut by_type = MethodsByType::new();

    for captures in METHOD_DECLARATION.captures_iter(source) {
        let receiver = &captures[1];
        let method = Method::new(&captures[2], &captures[0]);

        trace!(receiver = %receiver, method = %method.name, "Found method");
        by_type
            .get_or_insert_with(receiver, Methods::new)
            .insert(method.name.clone(), method);
    }

    debug!(types = by_type.len(), "Scanned methods");
    by_type
}

/// Scan `source` for top-level function declarations
pub fn scan_functions(source: &str) -> Functions {
    let mut functions = Functions::new();

    for captures in FUNCTION_DECLARATION.captures_iter(source) {
        let func = Func::new(&captures[1], &captures[0]);
        functions.insert(func.name.clone(), func);
    }

    debug!(functions = functions.len(), "Scanned functions");
    functions
}

/// Attach discovered methods to the structs they belong to.
///
/// Methods on types that are not extracted structs are dropped.
pub fn enrich(mut structs: Structs, methods_by_type: MethodsByType) -> Structs {
    for (type_name, methods) in methods_by_type {
        match structs.get_mut(&type_name) {
            Some(item) => item.methods = methods,
            None => trace!(type_name = %type_name, "Methods bound to a non-struct type"),
        }
    }
    structs
}
