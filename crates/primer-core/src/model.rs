//! Concept graph data model.
//!
//! A [`ConceptGraph`] is the immutable hand-off between the graph
//! builder and the planning queries in `primer-plan`: a flat node list
//! in insertion order plus a directed edge list. Edge direction is
//! `from → to` meaning "`from` **requires** `to`" — the prerequisite
//! sits at the `to` end.

use serde::{Deserialize, Serialize};

/// Fixed id of the synthetic target node seeded into every graph.
pub const TARGET_NODE_ID: &str = "target";

/// The two kinds of graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The synthetic root representing the paper/topic being studied
    /// toward. Exactly one per graph.
    Target,
    /// A prerequisite concept supplied by the hierarchy source.
    Concept,
}

impl NodeKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Target => "target",
            Self::Concept => "concept",
        }
    }
}

/// Difficulty tier of a concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Undergraduate,
    Graduate,
    Advanced,
    Research,
}

impl Difficulty {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Undergraduate => "undergraduate",
            Self::Graduate => "graduate",
            Self::Advanced => "advanced",
            Self::Research => "research",
        }
    }

    /// Parse a source-supplied tier string, falling back to
    /// [`Difficulty::Undergraduate`] for anything unrecognized.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "graduate" => Self::Graduate,
            "advanced" => Self::Advanced,
            "research" => Self::Research,
            _ => Self::Undergraduate,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Undergraduate
    }
}

/// The single dependency edge type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Requires,
}

impl EdgeKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Requires => "requires",
        }
    }
}

/// One node of the concept graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptNode {
    /// Stable key, unique within the graph (slug + depth for concepts,
    /// [`TARGET_NODE_ID`] for the target).
    pub id: String,
    /// Display label, case-preserved as supplied by the source.
    pub name: String,
    pub kind: NodeKind,
    pub difficulty: Difficulty,
    /// Free text, may be empty.
    pub description: String,
    /// Estimated effort to study this concept. Never negative; the
    /// target node is always 0.
    pub study_hours: f64,
    /// Hierarchy levels from the target along the edge that first
    /// introduced this node (0 for the target).
    pub depth: u32,
    /// The source asserts this concept needs no further breakdown.
    pub is_foundational: bool,
}

impl ConceptNode {
    /// Construct the synthetic target node for `title`.
    #[must_use]
    pub fn target(title: &str) -> Self {
        Self {
            id: TARGET_NODE_ID.to_string(),
            name: title.to_string(),
            kind: NodeKind::Target,
            difficulty: Difficulty::Research,
            description: "Target research paper".to_string(),
            study_hours: 0.0,
            depth: 0,
            is_foundational: false,
        }
    }

    /// `true` for the synthetic target node.
    #[must_use]
    pub const fn is_target(&self) -> bool {
        matches!(self.kind, NodeKind::Target)
    }
}

/// A directed `requires` edge: `from` requires `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
}

impl DependencyEdge {
    /// Build a `requires` edge.
    #[must_use]
    pub fn requires(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: EdgeKind::Requires,
        }
    }
}

/// An assembled concept graph: nodes in insertion order plus edges.
///
/// Built once per (title, abstract) pair by the graph builder and
/// treated as an immutable snapshot by all planning queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptGraph {
    pub nodes: Vec<ConceptNode>,
    pub edges: Vec<DependencyEdge>,
}

impl ConceptGraph {
    /// Number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&ConceptNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The single target node, if the graph has one.
    #[must_use]
    pub fn target(&self) -> Option<&ConceptNode> {
        self.nodes.iter().find(|n| n.is_target())
    }

    /// `true` when the graph already holds an edge `from → to`.
    #[must_use]
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to)
    }
}
