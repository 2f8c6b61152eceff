//! Base agent traits and common types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for agent operations
pub type AgentResult<T> = Result<T, AgentError>;

/// Agent error types
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("LLM inference error: {0}")]
    LlmError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Response parse error: {0}")]
    ParseError(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),
}

impl From<serde_json::Error> for AgentError {
    fn from(e: serde_json::Error) -> Self {
        AgentError::ParseError(e.to_string())
    }
}

/// Text-generation backend (e.g. a hosted Gemini model)
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Generate a completion for a single prompt.
    ///
    /// `config` carries the model name and sampling limits for this request.
    async fn generate(&self, prompt: &str, config: &AgentConfig) -> AgentResult<String>;
}

/// Base trait for all agents
#[async_trait]
pub trait Agent: Send + Sync {
    /// Agent name/identifier
    fn name(&self) -> &str;

    /// Process input and generate output
    async fn process(&self, input: &str) -> AgentResult<String>;

    /// Optional: validate input before processing
    fn validate_input(&self, input: &str) -> AgentResult<()> {
        if input.trim().is_empty() {
            Err(AgentError::InvalidInput("Empty input".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Agent configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Model to request from the backend
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: usize,
    /// Timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            temperature: 0.7,
            max_tokens: 2048,
            timeout_ms: 30_000,
        }
    }
}

/// Agent response with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Agent that generated the response
    pub agent_name: String,
    /// Generated content
    pub content: String,
    /// Generation time in milliseconds
    pub generation_time_ms: u64,
    /// Model used
    pub model: String,
}

impl fmt::Display for AgentResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}, {}ms)",
            self.agent_name, self.content, self.model, self.generation_time_ms
        )
    }
}
