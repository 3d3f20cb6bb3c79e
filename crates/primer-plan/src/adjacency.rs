//! Traversal adjacency shared by the planning queries.
//!
//! # Edge Direction
//!
//! A [`ConceptGraph`] stores edges as `from → to` meaning "`from`
//! requires `to`". Every query here walks the *reverse* of that: a
//! prerequisite must be studied before its dependent, so the traversal
//! graph orients edges `prerequisite → dependent`. For each stored
//! edge `(from, to)` we insert traversal edge `to → from`.
//!
//! Duplicate stored edges collapse to one traversal edge, so graphs
//! assembled outside the builder still query correctly.

#![allow(clippy::module_name_repetitions)]

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use primer_core::{ConceptGraph, ConceptNode};

/// Directed traversal graph over node ids, edges oriented
/// prerequisite → dependent.
#[derive(Debug)]
pub struct TraversalGraph {
    /// Nodes are concept-graph ids in insertion order.
    pub graph: DiGraph<String, ()>,
    /// Mapping from node id to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
}

impl TraversalGraph {
    /// Build the traversal adjacency for `concept_graph`.
    #[must_use]
    pub fn from_concept_graph(concept_graph: &ConceptGraph) -> Self {
        let mut graph = DiGraph::<String, ()>::new();
        let mut node_map: HashMap<String, NodeIndex> =
            HashMap::with_capacity(concept_graph.nodes.len());

        for node in &concept_graph.nodes {
            let idx = graph.add_node(node.id.clone());
            node_map.insert(node.id.clone(), idx);
        }

        for edge in &concept_graph.edges {
            // Stored: edge.from requires edge.to. Traversal: study
            // edge.to first, then edge.from becomes reachable.
            let (Some(&prerequisite), Some(&dependent)) =
                (node_map.get(&edge.to), node_map.get(&edge.from))
            else {
                // Dangling endpoint from a hand-built graph; nothing to
                // traverse through.
                continue;
            };

            if !graph.contains_edge(prerequisite, dependent) {
                graph.add_edge(prerequisite, dependent, ());
            }
        }

        Self { graph, node_map }
    }

    /// Look up the `NodeIndex` for a node id.
    #[must_use]
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    /// Return the node id label for an index.
    #[must_use]
    pub fn node_id(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }
}

/// Admissible path sources, in node insertion order: every non-target
/// node that is explicitly foundational or has no prerequisites of its
/// own (no outgoing `requires` edge).
///
/// The target node is never a candidate, so a graph with no concepts
/// has no candidates at all.
#[must_use]
pub fn starting_candidates(concept_graph: &ConceptGraph) -> Vec<&ConceptNode> {
    let has_prerequisites: HashSet<&str> = concept_graph
        .edges
        .iter()
        .map(|edge| edge.from.as_str())
        .collect();

    concept_graph
        .nodes
        .iter()
        .filter(|node| !node.is_target())
        .filter(|node| node.is_foundational || !has_prerequisites.contains(node.id.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_core::{DependencyEdge, Difficulty, NodeKind};

    fn concept(id: &str, foundational: bool) -> ConceptNode {
        ConceptNode {
            id: id.to_string(),
            name: id.to_string(),
            kind: NodeKind::Concept,
            difficulty: Difficulty::Undergraduate,
            description: String::new(),
            study_hours: 1.0,
            depth: 1,
            is_foundational: foundational,
        }
    }

    fn graph(nodes: Vec<ConceptNode>, edges: &[(&str, &str)]) -> ConceptGraph {
        ConceptGraph {
            nodes,
            edges: edges
                .iter()
                .map(|(from, to)| DependencyEdge::requires(*from, *to))
                .collect(),
        }
    }

    #[test]
    fn traversal_edges_are_reversed() {
        let g = graph(
            vec![
                ConceptNode::target("t"),
                concept("a", false),
                concept("b", false),
            ],
            &[("target", "a"), ("a", "b")],
        );
        let tg = TraversalGraph::from_concept_graph(&g);

        let target = tg.node_index("target").expect("target");
        let a = tg.node_index("a").expect("a");
        let b = tg.node_index("b").expect("b");

        assert!(tg.graph.contains_edge(a, target), "a → target traversal");
        assert!(tg.graph.contains_edge(b, a), "b → a traversal");
        assert!(!tg.graph.contains_edge(target, a));
    }

    #[test]
    fn duplicate_stored_edges_collapse() {
        let g = graph(
            vec![ConceptNode::target("t"), concept("a", false)],
            &[("target", "a"), ("target", "a")],
        );
        let tg = TraversalGraph::from_concept_graph(&g);
        assert_eq!(tg.graph.edge_count(), 1);
    }

    #[test]
    fn dangling_edge_endpoints_are_ignored() {
        let g = graph(
            vec![ConceptNode::target("t")],
            &[("target", "ghost"), ("ghost", "target")],
        );
        let tg = TraversalGraph::from_concept_graph(&g);
        assert_eq!(tg.graph.edge_count(), 0);
    }

    #[test]
    fn candidates_are_foundational_or_leaf_non_target() {
        // c requires d, so c is not a leaf; d is a leaf; f is marked
        // foundational despite requiring something.
        let g = graph(
            vec![
                ConceptNode::target("t"),
                concept("c", false),
                concept("d", false),
                concept("f", true),
            ],
            &[("target", "c"), ("c", "d"), ("f", "d")],
        );

        let ids: Vec<&str> = starting_candidates(&g)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, ["d", "f"]);
    }

    #[test]
    fn target_only_graph_has_no_candidates() {
        let g = graph(vec![ConceptNode::target("t")], &[]);
        assert!(starting_candidates(&g).is_empty());
    }
}
