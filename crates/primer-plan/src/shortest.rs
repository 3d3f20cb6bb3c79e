//! Minimum-cost study path from a foundational concept to the target.
//!
//! # Weight model
//!
//! Weights are per-node, not per-edge: moving from node `u` to a
//! dependent `v` costs `u.study_hours` — the cost of having studied
//! the node being left. Entering a node costs nothing extra, so the
//! Dijkstra distance to the target equals the summed hours of every
//! path node except the target, and the target itself contributes 0.
//!
//! # Candidate selection
//!
//! One Dijkstra run per starting candidate (foundational or leaf
//! nodes, in insertion order — see
//! [`crate::adjacency::starting_candidates`]). The candidate with the
//! strictly smallest distance wins; an exact tie keeps the earlier
//! candidate. Cycles are harmless: each node is settled at most once.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use petgraph::graph::NodeIndex;
use primer_core::{ConceptGraph, ConceptNode};
use tracing::debug;

use crate::adjacency::{starting_candidates, TraversalGraph};

/// An ordered study path with its total cost in hours.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyPath {
    /// Full node objects from the starting concept to the target,
    /// inclusive. Empty when no candidate reaches the target.
    pub path: Vec<ConceptNode>,
    /// Sum of `study_hours` over every node on the path.
    pub total_hours: f64,
}

impl StudyPath {
    /// The explicit no-path result.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            path: Vec::new(),
            total_hours: 0.0,
        }
    }

    /// `true` when no path to the target exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Compute the cheapest study path from any starting candidate to the
/// target node.
///
/// Returns [`StudyPath::empty`] when the graph has no target, no
/// candidates, or no candidate reaches the target.
#[must_use]
pub fn shortest_study_path(graph: &ConceptGraph) -> StudyPath {
    let Some(target) = graph.target() else {
        return StudyPath::empty();
    };

    let traversal = TraversalGraph::from_concept_graph(graph);
    let Some(target_idx) = traversal.node_index(&target.id) else {
        return StudyPath::empty();
    };

    let hours: HashMap<NodeIndex, f64> = graph
        .nodes
        .iter()
        .filter_map(|node| {
            traversal
                .node_index(&node.id)
                .map(|idx| (idx, node.study_hours))
        })
        .collect();

    let mut best: Option<(f64, Vec<NodeIndex>)> = None;
    for candidate in starting_candidates(graph) {
        let Some(start_idx) = traversal.node_index(&candidate.id) else {
            continue;
        };
        let Some((distance, indices)) =
            dijkstra_to_target(&traversal, &hours, start_idx, target_idx)
        else {
            continue;
        };

        debug!(candidate = %candidate.id, distance, "candidate reached target");

        // Strictly-less keeps the first-found candidate on exact ties.
        if best.as_ref().map_or(true, |(b, _)| distance < *b) {
            best = Some((distance, indices));
        }
    }

    let Some((_, indices)) = best else {
        return StudyPath::empty();
    };

    let by_id: HashMap<&str, &ConceptNode> = graph
        .nodes
        .iter()
        .map(|node| (node.id.as_str(), node))
        .collect();

    let path: Vec<ConceptNode> = indices
        .iter()
        .filter_map(|&idx| traversal.node_id(idx))
        .filter_map(|id| by_id.get(id).copied())
        .cloned()
        .collect();
    let total_hours = path.iter().map(|node| node.study_hours).sum();

    StudyPath { path, total_hours }
}

// ---------------------------------------------------------------------------
// Dijkstra core
// ---------------------------------------------------------------------------

/// Min-heap entry ordered by distance (ties by node index for
/// determinism).
#[derive(Debug, Clone, Copy)]
struct Visit {
    distance: f64,
    node: NodeIndex,
}

impl PartialEq for Visit {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Visit {}

impl Ord for Visit {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the smallest distance first.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for Visit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source Dijkstra over the traversal graph.
///
/// Returns the distance to `target` and the node sequence from `start`
/// to `target`, or `None` when `target` is unreachable. Each node is
/// settled at most once, so cyclic graphs terminate.
fn dijkstra_to_target(
    traversal: &TraversalGraph,
    hours: &HashMap<NodeIndex, f64>,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<(f64, Vec<NodeIndex>)> {
    let mut distances: HashMap<NodeIndex, f64> = HashMap::new();
    let mut previous: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut settled: HashSet<NodeIndex> = HashSet::new();
    let mut heap: BinaryHeap<Visit> = BinaryHeap::new();

    distances.insert(start, 0.0);
    heap.push(Visit {
        distance: 0.0,
        node: start,
    });

    while let Some(Visit { distance, node }) = heap.pop() {
        if !settled.insert(node) {
            continue; // stale heap entry
        }
        if node == target {
            break;
        }

        let leave_cost = hours.get(&node).copied().unwrap_or(0.0);
        for neighbor in traversal.graph.neighbors(node) {
            if settled.contains(&neighbor) {
                continue;
            }
            let alternative = distance + leave_cost;
            if distances
                .get(&neighbor)
                .map_or(true, |&known| alternative < known)
            {
                distances.insert(neighbor, alternative);
                previous.insert(neighbor, node);
                heap.push(Visit {
                    distance: alternative,
                    node: neighbor,
                });
            }
        }
    }

    if !settled.contains(&target) {
        return None;
    }

    let mut indices = vec![target];
    let mut cursor = target;
    while let Some(&prev) = previous.get(&cursor) {
        cursor = prev;
        indices.push(cursor);
    }
    indices.reverse();

    if indices.first() != Some(&start) {
        return None;
    }

    let distance = distances.get(&target).copied()?;
    Some((distance, indices))
}
