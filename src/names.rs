//! Identifier casing rules shared by the rendered accessors, visitor
//! methods, and visitor parameters. The generated C# relies on these
//! being stable: hand-written visitor implementations name-match
//! against their output.

/// Upper-cases the first character of a field name, preserving the
/// rest, e.g. `left` -> `Left`, `loxExpression` -> `LoxExpression`.
///
/// An empty name stays empty; a name that is already capitalized or
/// starts with a digit comes back unchanged.
pub(crate) fn to_accessor_name(field: &str) -> String {
    let mut chars = field.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(field.len());
    out.extend(first.to_uppercase());
    out.push_str(chars.as_str());
    out
}

/// Lower-cases the first character of a node name to form the visit
/// method's parameter name, e.g. `Binary` -> `binary`.
pub(crate) fn to_parameter_name(node: &str) -> String {
    let mut chars = node.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(node.len());
    out.extend(first.to_lowercase());
    out.push_str(chars.as_str());
    out
}

/// `("Binary", "Expr")` -> `VisitBinaryExpr`.
pub(crate) fn to_visit_method_name(node: &str, group: &str) -> String {
    format!("Visit{node}{group}")
}
