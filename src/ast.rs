/// The full literal configuration that one generation run consumes.
#[derive(Debug)]
pub(crate) struct AstConfig {
    /// Emitted verbatim at the head of every generated file.
    pub(crate) namespace: &'static str,
    pub(crate) groups: Vec<Group>,
}

/// A family of node kinds sharing one abstract base class and one
/// visitor interface. Rendered to `<name>.cs`.
#[derive(Debug)]
pub(crate) struct Group {
    pub(crate) name: &'static str,
    pub(crate) members: Vec<Node>,
}

/// One node kind. Field order is significant: it fixes the accessor
/// declaration order, the constructor parameter order, and the
/// assignment order of the generated class.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) name: &'static str,
    pub(crate) fields: Vec<Field>,
}

#[derive(Debug)]
pub(crate) struct Field {
    /// Opaque C# type token, e.g. `Expr`, `Token`, `object?`.
    pub(crate) ty: &'static str,
    pub(crate) name: &'static str,
}
