//! Wire-format types for the concept hierarchy returned by the
//! generative collaborator.
//!
//! The collaborator is prompted for JSON of the shape:
//!
//! ```json
//! {
//!   "concepts": [
//!     {
//!       "name": "Linear Algebra",
//!       "difficulty": "undergraduate",
//!       "description": "Vectors and matrices",
//!       "estimatedStudyHours": 15,
//!       "isFoundational": true,
//!       "prerequisites": []
//!     }
//!   ]
//! }
//! ```
//!
//! Nothing about that payload can be trusted: fields go missing, hours
//! come back negative or as `NaN`-producing garbage, difficulty tiers
//! are invented. The accessors here absorb all of that with documented
//! defaults so the builder never has to escalate a malformed item.

use serde::{Deserialize, Serialize};

use crate::model::Difficulty;

/// Default study-hours estimate when the source omits or mangles the
/// number.
pub const DEFAULT_STUDY_HOURS: f64 = 10.0;

/// Top-level hierarchy payload: a forest of concept items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptHierarchy {
    #[serde(default)]
    pub concepts: Vec<ConceptItem>,
}

/// One concept item as supplied by the collaborator, possibly with
/// nested prerequisites.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConceptItem {
    pub name: String,
    pub difficulty: Option<String>,
    pub description: Option<String>,
    pub estimated_study_hours: Option<f64>,
    pub is_foundational: bool,
    pub prerequisites: Vec<ConceptItem>,
}

impl ConceptItem {
    /// The trimmed display name, or `None` when the item has no usable
    /// name and must be skipped.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    /// Difficulty tier with the undergraduate fallback.
    #[must_use]
    pub fn sanitized_difficulty(&self) -> Difficulty {
        self.difficulty
            .as_deref()
            .map_or_else(Difficulty::default, Difficulty::parse_or_default)
    }

    /// Study hours with `default_hours` substituted for missing,
    /// negative, or non-finite values.
    #[must_use]
    pub fn sanitized_hours(&self, default_hours: f64) -> f64 {
        match self.estimated_study_hours {
            Some(hours) if hours.is_finite() && hours >= 0.0 => hours,
            _ => default_hours,
        }
    }

    /// Description with the empty-string fallback.
    #[must_use]
    pub fn sanitized_description(&self) -> String {
        self.description.clone().unwrap_or_default()
    }
}
