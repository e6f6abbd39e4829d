//! Visualization graph returned by `/get-graph`

use serde::{Deserialize, Serialize};

pub type NodeId = String;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
}

/// An undirected friendship, kept in the direction it was first seen
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub source: NodeId,
    pub target: NodeId,
}

/// Direction-insensitive key: `(A, B)` and `(B, A)` map to the same pair
pub(crate) fn canonical_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Deduplicated nodes and links, built fresh for every request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl Graph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_client_field_names() {
        let graph = Graph {
            nodes: vec![
                Node {
                    id: "Alice".to_string(),
                },
                Node {
                    id: "Bob".to_string(),
                },
            ],
            links: vec![Link {
                source: "Alice".to_string(),
                target: "Bob".to_string(),
            }],
        };

        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nodes": [{"id": "Alice"}, {"id": "Bob"}],
                "links": [{"source": "Alice", "target": "Bob"}]
            })
        );
    }

    #[test]
    fn test_empty_graph_serializes_to_empty_arrays() {
        let json = serde_json::to_string(&Graph::default()).unwrap();
        assert_eq!(json, r#"{"nodes":[],"links":[]}"#);
    }

    #[test]
    fn test_canonical_pair_ignores_direction() {
        assert_eq!(canonical_pair("Bob", "Alice"), canonical_pair("Alice", "Bob"));
        assert_eq!(canonical_pair("Bob", "Alice"), ("Alice", "Bob"));
        assert_eq!(canonical_pair("Alice", "Alice"), ("Alice", "Alice"));
    }
}
