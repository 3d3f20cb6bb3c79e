#![forbid(unsafe_code)]
//! primer-plan library.
//!
//! Read-only planning queries over a finished
//! [`primer_core::ConceptGraph`]:
//!
//! - [`shortest_study_path`] — cheapest path from the best foundational
//!   concept to the target (Dijkstra, per-node weights).
//! - [`topological_study_order`] — full study order (Kahn, FIFO),
//!   cycle members omitted.
//! - [`all_study_paths`] — exhaustive simple-path enumeration for
//!   diagnostics.
//!
//! All queries are pure and infallible: any well-formed graph value
//! yields a result, degraded but never an error on cyclic or
//! disconnected input.
//!
//! # Conventions
//!
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `error!`,
//!   `debug!`, `trace!`).

pub mod adjacency;
pub mod order;
pub mod paths;
pub mod shortest;

pub use adjacency::{starting_candidates, TraversalGraph};
pub use order::topological_study_order;
pub use paths::all_study_paths;
pub use shortest::{shortest_study_path, StudyPath};
