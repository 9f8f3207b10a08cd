use std::collections::HashSet;

use crate::graph_spec::GraphSpec;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("graph spec is missing")]
    MissingSpec,

    #[error("graph spec must contain at least one node")]
    EmptyNodes,

    #[error("duplicate node id: \"{id}\"")]
    DuplicateNodeId { id: String },

    #[error("edge {index} references unknown source node \"{id}\"")]
    DanglingEdgeSource { index: usize, id: String },

    #[error("edge {index} references unknown target node \"{id}\"")]
    DanglingEdgeTarget { index: usize, id: String },

    #[error("group \"{group}\" references unknown node \"{id}\"")]
    DanglingGroupMember { group: String, id: String },
}

/// Every rule runs; a missing spec is the only short-circuit.
pub fn validate(spec: Option<&GraphSpec>) -> Vec<ValidationError> {
    let Some(spec) = spec else {
        return vec![ValidationError::MissingSpec];
    };

    let mut errors = Vec::new();

    if spec.nodes.is_empty() {
        errors.push(ValidationError::EmptyNodes);
    }

    let mut ids: HashSet<&str> = HashSet::with_capacity(spec.nodes.len());
    for node in &spec.nodes {
        if !ids.insert(node.id.as_str()) {
            errors.push(ValidationError::DuplicateNodeId {
                id: node.id.clone(),
            });
        }
    }

    for (index, edge) in spec.edges.iter().enumerate() {
        if !ids.contains(edge.from.as_str()) {
            errors.push(ValidationError::DanglingEdgeSource {
                index,
                id: edge.from.clone(),
            });
        }
        if !ids.contains(edge.to.as_str()) {
            errors.push(ValidationError::DanglingEdgeTarget {
                index,
                id: edge.to.clone(),
            });
        }
    }

    for group in spec.groups.iter().flatten() {
        for id in &group.member_node_ids {
            if !ids.contains(id.as_str()) {
                errors.push(ValidationError::DanglingGroupMember {
                    group: group.label.clone(),
                    id: id.clone(),
                });
            }
        }
    }

    if !errors.is_empty() {
        tracing::debug!(defects = errors.len(), "graph spec failed validation");
    }
    errors
}

impl GraphSpec {
    pub fn validate(&self) -> Vec<ValidationError> {
        validate(Some(self))
    }
}
