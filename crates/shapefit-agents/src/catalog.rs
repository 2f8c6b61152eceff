//! Built-in outfit catalog that stands in for a hosted model.

use async_trait::async_trait;
use shapefit_body::BodyShape;
use std::collections::HashMap;

use crate::agent::{AgentConfig, AgentError, AgentResult, LlmBackend};
use crate::recommendations::Recommendations;

/// Catalog entries keyed by body-type name
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Serves fixed recommendations per body type.
///
/// The body type is read from the prompt's `Type:` line. Unknown or absent
/// types get the Rectangle entry.
#[derive(Debug, Clone)]
pub struct CatalogBackend {
    catalog: HashMap<String, Recommendations>,
}

impl CatalogBackend {
    pub fn new() -> AgentResult<Self> {
        let catalog: HashMap<String, Recommendations> = serde_json::from_str(CATALOG_JSON)?;
        Ok(Self { catalog })
    }

    /// Entry for a body-type name, falling back to Rectangle
    pub fn recommendations_for(&self, type_name: &str) -> AgentResult<&Recommendations> {
        self.catalog
            .get(type_name)
            .or_else(|| self.catalog.get(BodyShape::Rectangle.name()))
            .ok_or_else(|| AgentError::LlmError("Catalog has no Rectangle entry".to_string()))
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

/// Body-type name from the `Type:` line of a recommendation prompt
fn prompt_type_name(prompt: &str) -> Option<&str> {
    prompt
        .lines()
        .find_map(|line| line.trim().strip_prefix("Type:"))
        .map(str::trim)
}

#[async_trait]
impl LlmBackend for CatalogBackend {
    async fn generate(&self, prompt: &str, config: &AgentConfig) -> AgentResult<String> {
        let type_name = prompt_type_name(prompt).unwrap_or_default();
        let recommendations = self.recommendations_for(type_name)?;

        tracing::debug!(
            "Serving catalog entry for {:?} in place of {}",
            type_name,
            config.model
        );

        Ok(serde_json::to_string(recommendations)?)
    }
}
