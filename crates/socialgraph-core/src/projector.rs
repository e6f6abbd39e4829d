//! Graph projection
//!
//! Turns raw friendship rows into the minimal graph the visualization needs:
//! every person once, every friendship once regardless of the direction the
//! query matched it in.
//!
//! Self-referencing rows (`from == to`) are kept as self-loops.

use crate::error::ProjectionError;
use crate::graph::{canonical_pair, Graph, Link, Node};
use crate::query::RawRow;
use std::collections::HashSet;

pub fn project(rows: &[RawRow]) -> Result<Graph, ProjectionError> {
    let mut graph = Graph::default();
    let mut seen_nodes: HashSet<&str> = HashSet::new();
    let mut seen_pairs: HashSet<(&str, &str)> = HashSet::new();

    for (row, raw) in rows.iter().enumerate() {
        let source = raw
            .from
            .name()
            .ok_or(ProjectionError::MissingName { row, column: "from" })?;
        let target = raw
            .to
            .name()
            .ok_or(ProjectionError::MissingName { row, column: "to" })?;

        for id in [source, target] {
            if seen_nodes.insert(id) {
                graph.nodes.push(Node { id: id.to_string() });
            }
        }

        if seen_pairs.insert(canonical_pair(source, target)) {
            graph.links.push(Link {
                source: source.to_string(),
                target: target.to_string(),
            });
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Entity;

    fn row(from: &str, to: &str) -> RawRow {
        RawRow::new(Entity::person(0, from), Entity::person(1, to))
    }

    fn node_ids(graph: &Graph) -> Vec<&str> {
        let mut ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_empty_rows_give_empty_graph() {
        let graph = project(&[]).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_reverse_duplicate_keeps_first_direction() {
        let rows = vec![row("Alice", "Bob"), row("Bob", "Alice"), row("Alice", "Carl")];

        let graph = project(&rows).unwrap();

        assert_eq!(node_ids(&graph), vec!["Alice", "Bob", "Carl"]);
        assert_eq!(graph.links.len(), 2);
        assert!(graph.links.contains(&Link {
            source: "Alice".to_string(),
            target: "Bob".to_string(),
        }));
        assert!(graph.links.contains(&Link {
            source: "Alice".to_string(),
            target: "Carl".to_string(),
        }));
    }

    #[test]
    fn test_first_seen_direction_wins_when_reverse_comes_first() {
        let graph = project(&[row("Bob", "Alice"), row("Alice", "Bob")]).unwrap();

        assert_eq!(
            graph.links,
            vec![Link {
                source: "Bob".to_string(),
                target: "Alice".to_string(),
            }]
        );
    }

    #[test]
    fn test_self_loop_is_preserved() {
        let graph = project(&[row("Narcissus", "Narcissus")]).unwrap();

        assert_eq!(node_ids(&graph), vec!["Narcissus"]);
        assert_eq!(
            graph.links,
            vec![Link {
                source: "Narcissus".to_string(),
                target: "Narcissus".to_string(),
            }]
        );
    }

    #[test]
    fn test_entity_without_name_is_rejected() {
        let nameless = RawRow::new(Entity::person(0, "Alice"), Entity::default());

        let err = project(&[row("Alice", "Bob"), nameless]).unwrap_err();
        assert_eq!(err, ProjectionError::MissingName { row: 1, column: "to" });
    }
}
