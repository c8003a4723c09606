use crate::language::go::{exported_name, receiver_name};
use crate::parser::{Field, Struct};

/// Render a constructor-style function, `{prefix}{Struct}`, taking one
/// parameter per field and returning a pointer to a new instance
pub fn constructor(prefix: &str, target: &Struct, fields: &[&Field]) -> String {
    let name = &target.name;
    let params = fields
        .iter()
        .map(|field| format!("{} {}", field.name, field.ty))
        .collect::<Vec<_>>()
        .join(", ");
    let inits: String = fields
        .iter()
        .map(|field| format!("\t\t{}: {},\n", field.name, field.name))
        .collect();

    format!(
        "\nfunc {prefix}{name}({params}) *{name} {{\n\
         \treturn &{name}{{\n\
         {inits}\
         \t}}\n\
         }}\n"
    )
}

/// Render a getter for `field` on a pointer receiver
pub fn getter(target: &Struct, field: &Field) -> String {
    let receiver = receiver_name(&target.name);
    format!(
        "\nfunc ({receiver} *{name}) {method}() {ty} {{\n\
         \treturn {receiver}.{field}\n\
         }}\n",
        name = target.name,
        method = exported_name(&field.name),
        ty = field.ty,
        field = field.name,
    )
}

/// Render `IsZero`, true for a nil receiver or a zero value
pub fn is_zero(target: &Struct) -> String {
    let receiver = receiver_name(&target.name);
    format!(
        "\nfunc ({receiver} *{name}) IsZero() bool {{\n\
         \treturn {receiver} == nil || *{receiver} == {name}{{}}\n\
         }}\n",
        name = target.name,
    )
}
