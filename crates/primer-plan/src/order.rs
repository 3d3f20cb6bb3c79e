//! Full study order via Kahn's algorithm.
//!
//! In-degree counts traversal edges (prerequisite → dependent), so a
//! zero-in-degree node has no unstudied prerequisites left. Among
//! simultaneously ready nodes the order is FIFO discovery order,
//! which makes the output deterministic for a given graph.
//!
//! Nodes trapped in a cycle never reach zero in-degree and are
//! silently omitted — the result is a best-effort partial order, not
//! an error. The hierarchy source is untrusted, so a malformed graph
//! must degrade rather than fail at query time.

use std::collections::VecDeque;

use primer_core::{ConceptGraph, ConceptNode};
use tracing::warn;

use crate::adjacency::TraversalGraph;

/// Order every concept so that each prerequisite appears before all of
/// its dependents; the target (if present) comes last.
///
/// Cycle members are omitted from the result.
#[must_use]
pub fn topological_study_order(graph: &ConceptGraph) -> Vec<ConceptNode> {
    let traversal = TraversalGraph::from_concept_graph(graph);

    let mut in_degree: Vec<usize> = vec![0; traversal.graph.node_count()];
    for edge in traversal.graph.raw_edges() {
        in_degree[edge.target().index()] += 1;
    }

    // Seed with ready nodes in insertion order (node_indices is
    // insertion order for a freshly built DiGraph).
    let mut queue: VecDeque<_> = traversal
        .graph
        .node_indices()
        .filter(|idx| in_degree[idx.index()] == 0)
        .collect();

    let mut order: Vec<ConceptNode> = Vec::with_capacity(graph.nodes.len());
    while let Some(current) = queue.pop_front() {
        if let Some(node) = traversal
            .node_id(current)
            .and_then(|id| graph.node(id))
            .cloned()
        {
            order.push(node);
        }

        for dependent in traversal.graph.neighbors(current) {
            let degree = &mut in_degree[dependent.index()];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(dependent);
            }
        }
    }

    if order.len() < graph.nodes.len() {
        warn!(
            ordered = order.len(),
            total = graph.nodes.len(),
            "cycle detected, omitting unresolvable nodes from study order"
        );
    }

    order
}
