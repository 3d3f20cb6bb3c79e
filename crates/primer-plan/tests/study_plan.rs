//! End-to-end tests: build a graph through `primer-core`'s builder,
//! then run every planning query against it.
//!
//! Each test uses a hand-crafted hierarchy with analytically known
//! answers, so any change to dedup policy, weight attribution, or
//! tie-breaking shows up as a concrete value mismatch.

use std::collections::{HashMap, HashSet};

use primer_core::{
    ConceptHierarchy, ConceptItem, GraphBuilder, HierarchyProvider, ProviderError,
};
use primer_plan::{all_study_paths, shortest_study_path, topological_study_order};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct StaticProvider {
    hierarchy: ConceptHierarchy,
}

impl HierarchyProvider for StaticProvider {
    fn fetch_hierarchy(&self, _: &str, _: &str) -> Result<ConceptHierarchy, ProviderError> {
        Ok(self.hierarchy.clone())
    }

    fn fetch_requirements(&self, _: &str, _: &str) -> Result<Vec<ConceptItem>, ProviderError> {
        Ok(self.hierarchy.concepts.clone())
    }

    fn fetch_prerequisites(&self, _: &str, _: &str) -> Result<Vec<ConceptItem>, ProviderError> {
        Ok(Vec::new())
    }
}

fn item(name: &str, hours: f64, foundational: bool, prerequisites: Vec<ConceptItem>) -> ConceptItem {
    ConceptItem {
        name: name.to_string(),
        estimated_study_hours: Some(hours),
        is_foundational: foundational,
        prerequisites,
        ..ConceptItem::default()
    }
}

fn build(concepts: Vec<ConceptItem>) -> primer_core::ConceptGraph {
    GraphBuilder::new()
        .build(
            "Attention Is All You Need",
            "We propose the Transformer.",
            &StaticProvider {
                hierarchy: ConceptHierarchy { concepts },
            },
        )
        .expect("build graph")
}

// ===========================================================================
// Topology: transformer-ish hierarchy with a shared prerequisite
//
//   target ── Attention Mechanisms (12h) ── Neural Networks (20h) ── Linear Algebra (15h, foundational)
//        └─── Sequence Models (10h) ──────── Neural Networks (dedup: edge only)
//
// Linear Algebra is the only explicit foundational concept.
// ===========================================================================

fn transformer_graph() -> primer_core::ConceptGraph {
    build(vec![
        item(
            "Attention Mechanisms",
            12.0,
            false,
            vec![item(
                "Neural Networks",
                20.0,
                false,
                vec![item("Linear Algebra", 15.0, true, Vec::new())],
            )],
        ),
        item(
            "Sequence Models",
            10.0,
            false,
            vec![item("Neural Networks", 20.0, false, Vec::new())],
        ),
    ])
}

#[test]
fn shared_prerequisite_dedups_to_one_node() {
    let graph = transformer_graph();

    // target + attention + nn + la + sequence = 5 nodes.
    assert_eq!(graph.node_count(), 5);

    let nn_incoming: Vec<_> = graph
        .edges
        .iter()
        .filter(|e| e.to == "neural-networks-2")
        .collect();
    assert_eq!(nn_incoming.len(), 2, "both parents point at the one node");
}

#[test]
fn shortest_path_goes_through_cheapest_branch() {
    let graph = transformer_graph();
    let result = shortest_study_path(&graph);

    // Candidates: linear-algebra (foundational + leaf).
    // la(15) → nn(20) → sequence-models(10) → target = 45
    // la(15) → nn(20) → attention(12) → target = 47
    let ids: Vec<&str> = result.path.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "linear-algebra-3",
            "neural-networks-2",
            "sequence-models-1",
            "target"
        ]
    );
    assert_eq!(result.total_hours, 45.0);
}

#[test]
fn study_order_respects_every_edge() {
    let graph = transformer_graph();
    let order = topological_study_order(&graph);

    assert_eq!(order.len(), graph.node_count(), "acyclic graph orders fully");

    let pos: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();
    for edge in &graph.edges {
        assert!(
            pos[edge.to.as_str()] < pos[edge.from.as_str()],
            "{} must be studied before {}",
            edge.to,
            edge.from
        );
    }
    assert!(order.last().expect("non-empty").is_target());
}

#[test]
fn all_paths_contains_the_shortest() {
    let graph = transformer_graph();
    let shortest = shortest_study_path(&graph);
    let all = all_study_paths(&graph);

    assert_eq!(all.len(), 2, "two routes through the shared prerequisite");
    let min = all
        .iter()
        .map(|p| p.total_hours)
        .fold(f64::INFINITY, f64::min);
    assert_eq!(min, shortest.total_hours);
    assert!(all.iter().any(|p| p.path == shortest.path));
}

// ===========================================================================
// Degenerate and adversarial inputs
// ===========================================================================

#[test]
fn empty_hierarchy_yields_empty_plan() {
    let graph = build(Vec::new());

    let shortest = shortest_study_path(&graph);
    assert!(shortest.is_empty());
    assert_eq!(shortest.total_hours, 0.0);

    let order = topological_study_order(&graph);
    assert_eq!(order.len(), 1, "just the target");

    assert!(all_study_paths(&graph).is_empty());
}

#[test]
fn malformed_items_get_defaults_and_still_plan() {
    let graph = build(vec![ConceptItem {
        name: "Mystery Topic".to_string(),
        estimated_study_hours: Some(-3.0),
        difficulty: Some("wizard".to_string()),
        ..ConceptItem::default()
    }]);

    let node = graph.node("mystery-topic-1").expect("node exists");
    assert_eq!(node.study_hours, 10.0);

    let result = shortest_study_path(&graph);
    assert_eq!(result.total_hours, 10.0);
}

#[test]
fn self_referential_concept_is_tolerated() {
    // A concept listing itself as a prerequisite produces a self-loop
    // edge; queries must degrade, not hang or panic.
    let graph = build(vec![item(
        "Recursion",
        5.0,
        false,
        vec![item("Recursion", 5.0, false, Vec::new())],
    )]);

    let order = topological_study_order(&graph);
    let ordered: HashSet<&str> = order.iter().map(|n| n.id.as_str()).collect();
    assert!(
        !ordered.contains("recursion-1"),
        "self-loop node cannot resolve"
    );

    let shortest = shortest_study_path(&graph);
    assert!(shortest.is_empty(), "no foundational entry point exists");
}
