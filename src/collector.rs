use crate::ast::{AstConfig, Field, Group, Node};

macro_rules! fields {
    ($(($ty:literal, $name:literal)),* $(,)?) => {
        vec![$(Field { ty: $ty, name: $name }),*]
    };
}

/// Returns the built-in node lists for the Lox interpreter's AST.
///
/// Changing anything here and re-running the generator is the whole
/// workflow for evolving the interpreter's type hierarchy.
pub(crate) fn collect() -> AstConfig {
    let expr = Group {
        name: "Expr",
        members: vec![
            Node {
                name: "Binary",
                fields: fields![("Expr", "left"), ("Token", "token"), ("Expr", "right")],
            },
            Node {
                name: "Unary",
                fields: fields![("Expr", "expression"), ("Token", "token")],
            },
            Node {
                name: "Literal",
                fields: fields![("object?", "value")],
            },
            Node {
                name: "Grouping",
                fields: fields![("Expr", "expression")],
            },
            Node {
                name: "Variable",
                fields: fields![("Token", "name")],
            },
        ],
    };
    let stmt = Group {
        name: "Stmt",
        members: vec![
            Node {
                name: "Print",
                fields: fields![("Expr", "expression")],
            },
            Node {
                name: "Expression",
                fields: fields![("Expr", "loxExpression")],
            },
            Node {
                name: "Var",
                fields: fields![("Token", "name"), ("Expr", "initialiser")],
            },
        ],
    };
    AstConfig {
        namespace: "Lox",
        groups: vec![expr, stmt],
    }
}
