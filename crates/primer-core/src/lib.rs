#![forbid(unsafe_code)]
//! primer-core library.
//!
//! Concept graph model, hierarchy provider abstraction, and the graph
//! builder that turns an externally supplied prerequisite hierarchy
//! into a deduplicated [`model::ConceptGraph`].
//!
//! # Conventions
//!
//! - **Errors**: `thiserror` enums ([`error::ProviderError`],
//!   [`error::BuildError`]); `anyhow::Result` at config seams.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `error!`,
//!   `debug!`, `trace!`).

pub mod builder;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod ident;
pub mod model;
pub mod provider;

pub use builder::GraphBuilder;
pub use config::ProviderConfig;
pub use error::{BuildError, ProviderError};
pub use hierarchy::{ConceptHierarchy, ConceptItem};
pub use model::{
    ConceptGraph, ConceptNode, DependencyEdge, Difficulty, EdgeKind, NodeKind, TARGET_NODE_ID,
};
pub use provider::{HierarchyProvider, OllamaProvider};
