//! Advisory structural validation for graphs.
//!
//! The graph model accepts any node ID and any edge endpoint; consumer
//! tools differ in how they treat duplicate node IDs and dangling edges.
//! Callers that want to reject those before encoding can run
//! [`validate_graph`]. The encoder never calls it.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::error::ValidationError;
use crate::model::Graph;

/// Checks node ID uniqueness and edge endpoints.
///
/// Returns the first problem found, nodes before edges, in insertion
/// order.
pub fn validate_graph<F: Eq + Hash>(graph: &Graph<F>) -> Result<(), ValidationError> {
    let mut ids: FxHashSet<&str> =
        FxHashSet::with_capacity_and_hasher(graph.nodes().len(), Default::default());
    for node in graph.nodes() {
        if !ids.insert(node.id.as_str()) {
            return Err(ValidationError::DuplicateNode {
                id: node.id.clone(),
            });
        }
    }

    for edge in graph.edges() {
        for endpoint in [&edge.source, &edge.target] {
            if !ids.contains(endpoint.as_str()) {
                return Err(ValidationError::DanglingEdge {
                    edge: edge.id.clone(),
                    node: endpoint.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    const NO_VALUES: [(&str, Value); 0] = [];

    #[test]
    fn test_valid_graph() {
        let mut g = Graph::new();
        g.add_node("a", "A", NO_VALUES).unwrap();
        g.add_node("b", "B", NO_VALUES).unwrap();
        g.add_edge("a", "b", NO_VALUES).unwrap();
        g.add_edge("b", "b", NO_VALUES).unwrap();

        assert_eq!(validate_graph(&g), Ok(()));
        assert_eq!(validate_graph(&Graph::new()), Ok(()));
    }

    #[test]
    fn test_duplicate_node() {
        let mut g = Graph::new();
        g.add_node("a", "first", NO_VALUES).unwrap();
        g.add_node("a", "second", NO_VALUES).unwrap();

        assert_eq!(
            validate_graph(&g),
            Err(ValidationError::DuplicateNode {
                id: "a".to_string()
            })
        );
    }

    #[test]
    fn test_dangling_target() {
        let mut g = Graph::new();
        g.add_node("a", "A", NO_VALUES).unwrap();
        g.add_edge("a", "a", NO_VALUES).unwrap();
        g.add_edge("a", "ghost", NO_VALUES).unwrap();

        assert_eq!(
            validate_graph(&g),
            Err(ValidationError::DanglingEdge {
                edge: "1".to_string(),
                node: "ghost".to_string(),
            })
        );
    }
}
