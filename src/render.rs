use crate::{
    ast::{Group, Node},
    names::{to_accessor_name, to_parameter_name, to_visit_method_name},
};

/// Structured form of one generated file, before formatting. Tests
/// assert against these models instead of diffing source text.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct GroupModel {
    pub(crate) namespace: String,
    pub(crate) base: String,
    pub(crate) visitor: VisitorModel,
    pub(crate) classes: Vec<ClassModel>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct VisitorModel {
    pub(crate) methods: Vec<VisitMethod>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct VisitMethod {
    pub(crate) name: String,
    /// The node type the method receives.
    pub(crate) node: String,
    pub(crate) parameter: String,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ClassModel {
    pub(crate) name: String,
    pub(crate) base: String,
    pub(crate) fields: Vec<FieldModel>,
    /// The visitor method the accept override dispatches to.
    pub(crate) visit_method: String,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FieldModel {
    pub(crate) ty: String,
    /// Raw field name, used verbatim as the constructor parameter.
    pub(crate) name: String,
    pub(crate) accessor: String,
}

pub(crate) fn render_group(namespace: &str, group: &Group) -> GroupModel {
    GroupModel {
        namespace: namespace.to_string(),
        base: group.name.to_string(),
        visitor: render_visitor(group),
        classes: group
            .members
            .iter()
            .map(|node| render_class(group, node))
            .collect(),
    }
}

/// One visit method per member, in member order.
pub(crate) fn render_visitor(group: &Group) -> VisitorModel {
    VisitorModel {
        methods: group
            .members
            .iter()
            .map(|node| VisitMethod {
                name: to_visit_method_name(node.name, group.name),
                node: node.name.to_string(),
                parameter: to_parameter_name(node.name),
            })
            .collect(),
    }
}

/// Field order flows unchanged from the node definition into the
/// model; accessor declarations, constructor parameters, and
/// assignments all derive from the same `fields` sequence.
pub(crate) fn render_class(group: &Group, node: &Node) -> ClassModel {
    ClassModel {
        name: node.name.to_string(),
        base: group.name.to_string(),
        fields: node
            .fields
            .iter()
            .map(|field| FieldModel {
                ty: field.ty.to_string(),
                name: field.name.to_string(),
                accessor: to_accessor_name(field.name),
            })
            .collect(),
        visit_method: to_visit_method_name(node.name, group.name),
    }
}

/// Formats a model into the final C# source. The layout matches the
/// files already checked in to the interpreter byte for byte,
/// including the missing trailing newline.
pub(crate) fn format_group(model: &GroupModel) -> String {
    let mut text = Vec::new();
    text.push(format!("namespace {};", model.namespace));
    text.push(String::new());
    text.push(format!("internal abstract class {} {{", model.base));
    text.push(format_visitor(&model.visitor));
    for class in &model.classes {
        text.push(format_class(class));
    }
    text.push("    public abstract T Accept<T>(IVisitor<T> visitor);".to_string());
    text.push("}".to_string());
    text.join("\n")
}

fn format_visitor(visitor: &VisitorModel) -> String {
    let mut out = String::new();
    out.push_str("    public interface IVisitor<T> {\n");
    for method in &visitor.methods {
        out.push_str(&format!(
            "        T {}({} {});\n",
            method.name, method.node, method.parameter,
        ));
    }
    out.push_str("    }\n");
    out
}

fn format_class(class: &ClassModel) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "    public class {} : {} {{\n",
        class.name, class.base,
    ));
    for field in &class.fields {
        out.push_str(&format!(
            "        public {} {} {{ get; private set; }}\n",
            field.ty, field.accessor,
        ));
    }
    out.push_str(&format!("\n        public {}(", class.name));
    let params: Vec<String> = class
        .fields
        .iter()
        .map(|field| format!("{} {}", field.ty, field.name))
        .collect();
    out.push_str(&params.join(", "));
    out.push_str(") {\n");
    for field in &class.fields {
        out.push_str(&format!("            {} = {};\n", field.accessor, field.name));
    }
    out.push_str("        }\n\n");
    out.push_str("        public override T Accept<T>(IVisitor<T> visitor) {\n");
    out.push_str(&format!(
        "            return visitor.{}(this);\n",
        class.visit_method,
    ));
    out.push_str("        }\n");
    out.push_str("    }\n");
    out
}
