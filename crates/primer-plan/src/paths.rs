//! Exhaustive enumeration of simple study paths.
//!
//! Diagnostic counterpart to [`crate::shortest::shortest_study_path`]:
//! every simple path (no repeated node) from every starting candidate
//! to the target, each with its total hours. The visited set with
//! rollback keeps one DFS branch from revisiting a node, so cyclic
//! graphs terminate.
//!
//! Intended for comparison and debugging, not the user-facing
//! recommendation — path counts grow fast on dense graphs.

use std::collections::{HashMap, HashSet};

use petgraph::graph::NodeIndex;
use primer_core::{ConceptGraph, ConceptNode};

use crate::adjacency::{starting_candidates, TraversalGraph};
use crate::shortest::StudyPath;

/// Enumerate every simple path from each starting candidate to the
/// target, candidates in insertion order.
#[must_use]
pub fn all_study_paths(graph: &ConceptGraph) -> Vec<StudyPath> {
    let Some(target) = graph.target() else {
        return Vec::new();
    };

    let traversal = TraversalGraph::from_concept_graph(graph);
    let Some(target_idx) = traversal.node_index(&target.id) else {
        return Vec::new();
    };

    let by_id: HashMap<&str, &ConceptNode> = graph
        .nodes
        .iter()
        .map(|node| (node.id.as_str(), node))
        .collect();

    let mut results: Vec<StudyPath> = Vec::new();
    for candidate in starting_candidates(graph) {
        let Some(start) = traversal.node_index(&candidate.id) else {
            continue;
        };

        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut trail: Vec<NodeIndex> = Vec::new();
        collect_paths(
            &traversal,
            start,
            target_idx,
            &mut visited,
            &mut trail,
            &mut |indices| {
                let path: Vec<ConceptNode> = indices
                    .iter()
                    .filter_map(|&idx| traversal.node_id(idx))
                    .filter_map(|id| by_id.get(id).copied())
                    .cloned()
                    .collect();
                let total_hours = path.iter().map(|node| node.study_hours).sum();
                results.push(StudyPath { path, total_hours });
            },
        );
    }

    results
}

/// DFS with visited-set rollback; invokes `found` for every trail that
/// reaches `target`.
fn collect_paths(
    traversal: &TraversalGraph,
    current: NodeIndex,
    target: NodeIndex,
    visited: &mut HashSet<NodeIndex>,
    trail: &mut Vec<NodeIndex>,
    found: &mut impl FnMut(&[NodeIndex]),
) {
    visited.insert(current);
    trail.push(current);

    if current == target {
        found(trail);
    } else {
        for neighbor in traversal.graph.neighbors(current) {
            if !visited.contains(&neighbor) {
                collect_paths(traversal, neighbor, target, visited, trail, found);
            }
        }
    }

    trail.pop();
    visited.remove(&current);
}
