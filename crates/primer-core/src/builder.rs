//! Graph construction from a concept hierarchy.
//!
//! # Overview
//!
//! [`GraphBuilder`] turns the nested concept forest supplied by a
//! [`HierarchyProvider`] into a deduplicated [`ConceptGraph`] rooted at
//! the synthetic target node. Two ingestion strategies exist:
//!
//! - [`GraphBuilder::build`] — one bulk hierarchy call, then a pure
//!   recursive walk. `isFoundational` is informational only and does
//!   not stop the walk.
//! - [`GraphBuilder::build_incremental`] — one provider call per newly
//!   registered concept, driven by an explicit FIFO worklist. Here
//!   `isFoundational` halts expansion and absolute depth is capped at
//!   [`MAX_INCREMENTAL_DEPTH`] to bound request volume.
//!
//! ## Dedup policy
//!
//! Node identity is decided by the lowercase-trimmed name, not the id:
//! the first registration wins, at whatever depth it happened, and all
//! later references (any depth, any parent) resolve to that node and
//! add only an edge. Ids are minted as `slug-depth` so distinct names
//! colliding after slugification at different depths stay distinct.
//!
//! A provider failure at any point aborts the build; no partial graph
//! is returned.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, instrument, warn};

use crate::error::BuildError;
use crate::hierarchy::{ConceptItem, DEFAULT_STUDY_HOURS};
use crate::ident::{concept_id, lookup_key};
use crate::model::{ConceptGraph, ConceptNode, DependencyEdge, NodeKind, TARGET_NODE_ID};
use crate::provider::HierarchyProvider;

/// Expansion depth cap for the incremental build. Top-level concepts
/// sit at depth 1; nodes at this depth are registered but not expanded.
pub const MAX_INCREMENTAL_DEPTH: u32 = 3;

/// Accumulates nodes and edges for one build invocation.
///
/// Owns all mutable state during assembly (the node list, the edge
/// list, and the seen-name registry) and is consumed by the build
/// methods, so the returned [`ConceptGraph`] is a final snapshot.
#[derive(Debug)]
pub struct GraphBuilder {
    nodes: Vec<ConceptNode>,
    edges: Vec<DependencyEdge>,
    /// lookup key (lowercased trimmed name) → node id of the first
    /// registration.
    seen: HashMap<String, String>,
    default_hours: f64,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_hours(DEFAULT_STUDY_HOURS)
    }

    /// Builder with a custom fallback for unspecified study hours.
    #[must_use]
    pub fn with_default_hours(default_hours: f64) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            seen: HashMap::new(),
            default_hours,
        }
    }

    /// Build a graph from one bulk hierarchy call.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyTitle`] for a blank title and
    /// [`BuildError::Provider`] when the hierarchy fetch fails; no
    /// partial graph is returned in either case.
    #[instrument(skip(self, provider, abstract_text))]
    pub fn build<P>(
        mut self,
        title: &str,
        abstract_text: &str,
        provider: &P,
    ) -> Result<ConceptGraph, BuildError>
    where
        P: HierarchyProvider + ?Sized,
    {
        if title.trim().is_empty() {
            return Err(BuildError::EmptyTitle);
        }

        self.push_target(title);
        let hierarchy = provider.fetch_hierarchy(title, abstract_text)?;

        self.walk(&hierarchy.concepts, TARGET_NODE_ID, 1);

        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "graph assembled"
        );
        Ok(ConceptGraph {
            nodes: self.nodes,
            edges: self.edges,
        })
    }

    /// Build a graph by expanding concepts one provider call at a time.
    ///
    /// Top-level concepts come from `fetch_requirements`; each newly
    /// registered, non-foundational concept below the depth cap then
    /// gets its own `fetch_prerequisites` call. Calls are strictly
    /// sequential — dedup decisions depend on what earlier calls
    /// registered.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`GraphBuilder::build`]; a provider error
    /// mid-expansion aborts the whole build.
    #[instrument(skip(self, provider, abstract_text))]
    pub fn build_incremental<P>(
        mut self,
        title: &str,
        abstract_text: &str,
        provider: &P,
    ) -> Result<ConceptGraph, BuildError>
    where
        P: HierarchyProvider + ?Sized,
    {
        if title.trim().is_empty() {
            return Err(BuildError::EmptyTitle);
        }

        self.push_target(title);

        let top_level = provider.fetch_requirements(title, abstract_text)?;
        let mut worklist: VecDeque<(ConceptItem, String, u32)> = top_level
            .into_iter()
            .map(|item| (item, TARGET_NODE_ID.to_string(), 1))
            .collect();

        while let Some((item, parent_id, depth)) = worklist.pop_front() {
            let Some(id) = self.register(&item, &parent_id, depth) else {
                continue;
            };

            if item.is_foundational || depth >= MAX_INCREMENTAL_DEPTH {
                continue;
            }

            let name = item.display_name().unwrap_or_default();
            let prerequisites =
                provider.fetch_prerequisites(name, &item.sanitized_description())?;
            for prerequisite in prerequisites {
                worklist.push_back((prerequisite, id.clone(), depth + 1));
            }
        }

        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "graph assembled incrementally"
        );
        Ok(ConceptGraph {
            nodes: self.nodes,
            edges: self.edges,
        })
    }

    fn push_target(&mut self, title: &str) {
        self.nodes.push(ConceptNode::target(title));
    }

    /// Recursive walk for the bulk build.
    fn walk(&mut self, items: &[ConceptItem], parent_id: &str, depth: u32) {
        for item in items {
            let Some(id) = self.register(item, parent_id, depth) else {
                continue;
            };
            if !item.prerequisites.is_empty() {
                self.walk(&item.prerequisites, &id, depth + 1);
            }
        }
    }

    /// Register one item under `parent_id`.
    ///
    /// Returns the new node id when the item was actually registered,
    /// and `None` when it was skipped (blank name) or deduplicated
    /// onto an existing node — callers must not recurse into the
    /// item's children in either case.
    fn register(&mut self, item: &ConceptItem, parent_id: &str, depth: u32) -> Option<String> {
        let Some(name) = item.display_name() else {
            warn!(parent = parent_id, depth, "skipping concept item without a name");
            return None;
        };

        let key = lookup_key(name);
        if let Some(existing_id) = self.seen.get(&key) {
            let existing_id = existing_id.clone();
            debug!(name, existing = %existing_id, "duplicate concept, adding edge only");
            self.add_edge(parent_id, &existing_id);
            return None;
        }

        let id = concept_id(name, depth);
        self.seen.insert(key, id.clone());
        self.nodes.push(ConceptNode {
            id: id.clone(),
            name: name.to_string(),
            kind: NodeKind::Concept,
            difficulty: item.sanitized_difficulty(),
            description: item.sanitized_description(),
            study_hours: item.sanitized_hours(self.default_hours),
            depth,
            is_foundational: item.is_foundational,
        });
        self.add_edge(parent_id, &id);

        Some(id)
    }

    /// Idempotent edge insertion: duplicate `(from, to)` submissions
    /// are absorbed silently.
    fn add_edge(&mut self, from: &str, to: &str) {
        if self.edges.iter().any(|e| e.from == from && e.to == to) {
            return;
        }
        self.edges.push(DependencyEdge::requires(from, to));
    }
}
