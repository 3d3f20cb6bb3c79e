//! Hierarchy provider abstraction and the Ollama-backed implementation.
//!
//! The builder only ever talks to [`HierarchyProvider`]; tests supply
//! in-memory implementations and production uses [`OllamaProvider`],
//! a blocking JSON client against an Ollama `/api/generate` endpoint.
//! Every request asks the model for strict JSON (`format: "json"`) and
//! the returned text is parsed into the wire types in
//! [`crate::hierarchy`]. Any transport or parse failure is surfaced as
//! a [`ProviderError`] — the provider never fabricates an empty result
//! to paper over a failure.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::hierarchy::{ConceptHierarchy, ConceptItem};

/// Source of prerequisite-concept data for the graph builder.
pub trait HierarchyProvider {
    /// Fetch the full nested concept hierarchy for a paper in one call.
    fn fetch_hierarchy(
        &self,
        title: &str,
        abstract_text: &str,
    ) -> Result<ConceptHierarchy, ProviderError>;

    /// Fetch only the top-level prerequisite concepts for a paper.
    ///
    /// Used by the incremental build, which expands concepts one at a
    /// time via [`HierarchyProvider::fetch_prerequisites`].
    fn fetch_requirements(
        &self,
        title: &str,
        abstract_text: &str,
    ) -> Result<Vec<ConceptItem>, ProviderError>;

    /// Fetch the direct prerequisites of a single concept.
    fn fetch_prerequisites(
        &self,
        name: &str,
        description: &str,
    ) -> Result<Vec<ConceptItem>, ProviderError>;
}

/// Blocking Ollama client implementing [`HierarchyProvider`].
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    config: ProviderConfig,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Deserialize)]
struct PrerequisitesPayload {
    #[serde(default)]
    prerequisites: Vec<ConceptItem>,
}

impl OllamaProvider {
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    /// POST `prompt` to `/api/generate` and return the model's raw
    /// response text.
    fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/api/generate", self.config.host);
        debug!(model = %self.config.model, prompt_len = prompt.len(), "ollama generate request");

        let response = ureq::post(&url)
            .send_json(json!({
                "model": self.config.model,
                "prompt": prompt,
                "stream": false,
                "format": "json",
            }))
            .map_err(|err| ProviderError::Request(format!("POST {url}: {err}")))?;

        let body: GenerateResponse = response
            .into_json()
            .map_err(|err| ProviderError::Request(format!("decoding {url} response: {err}")))?;

        debug!(response_len = body.response.len(), "ollama generate response");
        Ok(body.response)
    }
}

impl HierarchyProvider for OllamaProvider {
    fn fetch_hierarchy(
        &self,
        title: &str,
        abstract_text: &str,
    ) -> Result<ConceptHierarchy, ProviderError> {
        let prompt = hierarchy_prompt(title, abstract_text);
        let text = self.generate(&prompt)?;
        let hierarchy: ConceptHierarchy = serde_json::from_str(text.trim())?;
        Ok(hierarchy)
    }

    fn fetch_requirements(
        &self,
        title: &str,
        abstract_text: &str,
    ) -> Result<Vec<ConceptItem>, ProviderError> {
        let prompt = requirements_prompt(title, abstract_text);
        let text = self.generate(&prompt)?;
        let payload: ConceptHierarchy = serde_json::from_str(text.trim())?;
        Ok(payload.concepts)
    }

    fn fetch_prerequisites(
        &self,
        name: &str,
        description: &str,
    ) -> Result<Vec<ConceptItem>, ProviderError> {
        let prompt = prerequisites_prompt(name, description);
        let text = self.generate(&prompt)?;
        let payload: PrerequisitesPayload = serde_json::from_str(text.trim())?;
        Ok(payload.prerequisites)
    }
}

fn hierarchy_prompt(title: &str, abstract_text: &str) -> String {
    format!(
        "You are an expert at analyzing academic research papers and creating \
         comprehensive prerequisite knowledge maps.\n\n\
         Given the following research paper:\n\
         Title: {title}\n\
         Abstract: {abstract_text}\n\n\
         Create a COMPLETE hierarchical prerequisite knowledge graph for an \
         undergraduate student to understand this paper. Aim for 8-15 total \
         concepts in at most 2-3 levels, and mark basic concepts with \
         \"isFoundational\": true.\n\n\
         Return ONLY a JSON object of the shape:\n\
         {{\"concepts\": [{{\"name\": \"...\", \"difficulty\": \
         \"undergraduate\" | \"graduate\" | \"advanced\", \"description\": \
         \"...\", \"estimatedStudyHours\": 10, \"isFoundational\": false, \
         \"prerequisites\": [...]}}]}}\n\
         No markdown, no code fences."
    )
}

fn requirements_prompt(title: &str, abstract_text: &str) -> String {
    format!(
        "You are an expert at analyzing academic research papers and \
         identifying prerequisite knowledge.\n\n\
         Given the following research paper:\n\
         Title: {title}\n\
         Abstract: {abstract_text}\n\n\
         Identify the key prerequisite concepts an undergraduate student \
         would need to understand this paper. Focus on prerequisites, not \
         the concepts the paper itself introduces.\n\n\
         Return ONLY a JSON object of the shape:\n\
         {{\"concepts\": [{{\"name\": \"...\", \"difficulty\": \
         \"undergraduate\" | \"graduate\" | \"advanced\", \"description\": \
         \"...\", \"estimatedStudyHours\": 10}}]}}\n\
         No markdown, no code fences."
    )
}

fn prerequisites_prompt(name: &str, description: &str) -> String {
    format!(
        "You are an expert at breaking down complex concepts into \
         prerequisite knowledge.\n\n\
         Given the concept:\n\
         Name: {name}\n\
         Description: {description}\n\n\
         What are the fundamental prerequisites an undergraduate student \
         needs before this concept? Mark \"isFoundational\": true for basic \
         concepts that need no further breakdown. If the concept is already \
         foundational, return an empty prerequisites array.\n\n\
         Return ONLY a JSON object of the shape:\n\
         {{\"prerequisites\": [{{\"name\": \"...\", \"difficulty\": \
         \"undergraduate\" | \"graduate\" | \"advanced\", \"description\": \
         \"...\", \"estimatedStudyHours\": 10, \"isFoundational\": false}}]}}\n\
         No markdown, no code fences."
    )
}
