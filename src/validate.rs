use {crate::ast::Group, indexmap::IndexSet, thiserror::Error};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("group {0} does not have any members")]
    EmptyGroup(String),
    #[error("two groups are named {0}")]
    DuplicateGroup(String),
    #[error("group {0} contains two nodes named {1}")]
    DuplicateNode(String, String),
    #[error("node {1} in group {0} contains two fields named {2}")]
    DuplicateField(String, String, String),
}

/// Checks every configuration invariant before anything is rendered
/// or written. Node and field names become identifiers and visitor
/// method names in the generated code, so duplicates would produce
/// source that does not compile; duplicate group names would fight
/// over one output file.
pub(crate) fn validate(groups: &[Group]) -> Result<(), ConfigError> {
    let mut group_names = IndexSet::new();
    for group in groups {
        if !group_names.insert(group.name) {
            return Err(ConfigError::DuplicateGroup(group.name.to_string()));
        }
        if group.members.is_empty() {
            return Err(ConfigError::EmptyGroup(group.name.to_string()));
        }
        let mut node_names = IndexSet::new();
        for node in &group.members {
            if !node_names.insert(node.name) {
                return Err(ConfigError::DuplicateNode(
                    group.name.to_string(),
                    node.name.to_string(),
                ));
            }
            let mut field_names = IndexSet::new();
            for field in &node.fields {
                if !field_names.insert(field.name) {
                    return Err(ConfigError::DuplicateField(
                        group.name.to_string(),
                        node.name.to_string(),
                        field.name.to_string(),
                    ));
                }
            }
        }
    }
    Ok(())
}
