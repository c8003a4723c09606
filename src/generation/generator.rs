use serde::Serialize;
use tracing::debug;

use super::template;
use crate::language::go::exported_name;
use crate::parser::{Field, Functions, SelectionFilter, Struct};

const CONSTRUCTOR_PREFIX: &str = "New";
const HYDRATOR_PREFIX: &str = "Hydrate";
const ZERO_CHECK: &str = "IsZero";

/// Kind of generated declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    Constructor,
    Getter,
    ZeroCheck,
    Hydrator,
}

/// One generated declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub kind: FragmentKind,
    /// Name of the generated function or method
    pub name: String,
    pub text: String,
}

/// Declarations missing from a struct, in emission order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedCode {
    fragments: Vec<Fragment>,
}

impl GeneratedCode {
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Names of the generated declarations, in order
    pub fn names(&self) -> Vec<&str> {
        self.fragments.iter().map(|f| f.name.as_str()).collect()
    }

    /// Concatenated text of every fragment
    pub fn render(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    fn push(&mut self, kind: FragmentKind, name: String, text: String) {
        self.fragments.push(Fragment { kind, name, text });
    }
}

/// Generate the constructor, getters, `IsZero` and hydrator that `target`
/// does not have yet.
///
/// `functions` is the file's function inventory; methods come from the
/// enriched `target`. A non-empty `selected` limits constructor and hydrator
/// parameters and getters to the selected field names.
pub fn generate(selected: &SelectionFilter, functions: &Functions, target: &Struct) -> GeneratedCode {
    let mut code = GeneratedCode::default();

    let fields: Vec<&Field> = target
        .fields
        .values()
        .filter(|field| selected.includes(&field.name))
        .collect();

    let constructor = format!("{CONSTRUCTOR_PREFIX}{}", target.name);
    if functions.contains_key(&constructor) {
        debug!(function = %constructor, "Constructor already exists");
    } else {
        let text = template::constructor(CONSTRUCTOR_PREFIX, target, &fields);
        code.push(FragmentKind::Constructor, constructor, text);
    }

    for field in &fields {
        let method = exported_name(&field.name);
        if target.has_method(&method) {
            debug!(method = %method, "Getter already exists");
            continue;
        }
        let text = template::getter(target, field);
        code.push(FragmentKind::Getter, method, text);
    }

    if target.has_method(ZERO_CHECK) {
        debug!("IsZero already exists");
    } else {
        code.push(
            FragmentKind::ZeroCheck,
            ZERO_CHECK.to_string(),
            template::is_zero(target),
        );
    }

    let hydrator = format!("{HYDRATOR_PREFIX}{}", target.name);
    if functions.contains_key(&hydrator) {
        debug!(function = %hydrator, "Hydrator already exists");
    } else {
        let text = template::constructor(HYDRATOR_PREFIX, target, &fields);
        code.push(FragmentKind::Hydrator, hydrator, text);
    }

    code
}
