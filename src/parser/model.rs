use serde::Serialize;

use super::ordered::OrderedMap;

/// Unexported struct field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Method bound to a receiver type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub name: String,
    pub signature: String,
}

impl Method {
    pub fn new(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
        }
    }
}

/// Top-level function
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Func {
    pub name: String,
    pub signature: String,
}

impl Func {
    pub fn new(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
        }
    }
}

pub type Fields = OrderedMap<Field>;
pub type Methods = OrderedMap<Method>;
pub type Functions = OrderedMap<Func>;
pub type Structs = OrderedMap<Struct>;

/// Struct declaration with its unexported fields and known methods
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Struct {
    pub name: String,
    pub fields: Fields,
    pub methods: Methods,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: OrderedMap::new(),
            methods: OrderedMap::new(),
        }
    }

    /// Add a field, replacing any earlier field with the same name
    pub fn add_field(&mut self, field: Field) {
        self.fields.insert(field.name.clone(), field);
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }
}

/// Fields picked out by the user's selection. Empty means every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionFilter {
    fields: Vec<Field>,
}

impl SelectionFilter {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Filter that lets every field through
    pub fn all() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Matches by name only; the selected field's type is ignored
    pub fn includes(&self, name: &str) -> bool {
        self.fields.is_empty() || self.fields.iter().any(|field| field.name == name)
    }
}

impl From<Vec<Field>> for SelectionFilter {
    fn from(fields: Vec<Field>) -> Self {
        Self::new(fields)
    }
}
