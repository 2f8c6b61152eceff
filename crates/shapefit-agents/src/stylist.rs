//! Stylist agent: body shape + gender → outfit recommendations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shapefit_body::{AnalysisResult, BodyShape};
use shapefit_core::{SessionId, Timestamp};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::agent::{Agent, AgentConfig, AgentError, AgentResponse, AgentResult, LlmBackend};
use crate::prompts::format_recommendation_prompt;
use crate::recommendations::{parse_recommendations, Recommendations};

/// Everything produced for one analysis session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylingReport {
    pub session_id: SessionId,
    pub timestamp: Timestamp,
    pub gender: String,
    pub body_type: BodyShape,
    pub styling_tips: Vec<String>,
    pub recommendations: Recommendations,
}

/// Stylist Agent implementation
pub struct StylistAgent {
    config: AgentConfig,
    name: String,
    backend: Arc<dyn LlmBackend>,

    /// Reports by session, dropped when the user restarts analysis
    cache: RwLock<HashMap<SessionId, StylingReport>>,
}

impl StylistAgent {
    pub fn new(config: AgentConfig, backend: Arc<dyn LlmBackend>) -> Self {
        Self {
            config,
            name: "Stylist".to_string(),
            backend,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Generate recommendations for an analysis.
    ///
    /// The session's cached report is reused only while gender and body type
    /// are unchanged; otherwise it is replaced.
    pub async fn recommend(
        &self,
        session_id: SessionId,
        analysis: &AnalysisResult,
        gender: &str,
    ) -> AgentResult<StylingReport> {
        if gender.trim().is_empty() {
            return Err(AgentError::InvalidInput("Gender is required".to_string()));
        }

        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.get(&session_id) {
                if cached.gender == gender && cached.body_type == analysis.body_type {
                    return Ok(cached.clone());
                }
                tracing::debug!("Session {:?} changed inputs, regenerating", session_id);
            }
        }

        tracing::info!(
            "Generating recommendations for session {:?} ({}, {})",
            session_id,
            analysis.body_type,
            gender
        );

        let prompt = format_recommendation_prompt(gender, &analysis.body_type);
        let response = self.generate(&prompt).await?;

        tracing::debug!("{}", response);

        let recommendations = parse_recommendations(&response.content)?;
        let short = recommendations.short_categories();
        if !short.is_empty() {
            tracing::warn!("Model returned too few items for {:?}", short);
        }

        let report = StylingReport {
            session_id,
            timestamp: Timestamp::now(),
            gender: gender.to_string(),
            body_type: analysis.body_type,
            styling_tips: analysis.styling_tips().iter().map(|t| t.to_string()).collect(),
            recommendations,
        };

        {
            let mut cache = self.cache.write().await;
            cache.insert(session_id, report.clone());
        }

        Ok(report)
    }

    /// Single backend call bounded by the configured timeout. No retries.
    pub async fn generate(&self, prompt: &str) -> AgentResult<AgentResponse> {
        self.validate_input(prompt)?;

        let started = Instant::now();
        let timeout = Duration::from_millis(self.config.timeout_ms);
        let content = tokio::time::timeout(timeout, self.backend.generate(prompt, &self.config))
            .await
            .map_err(|_| AgentError::Timeout(self.config.timeout_ms))??;

        Ok(AgentResponse {
            agent_name: self.name.clone(),
            content,
            generation_time_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            model: self.config.model.clone(),
        })
    }

    /// Get cached report for a session
    pub async fn get_report(&self, session_id: SessionId) -> Option<StylingReport> {
        let cache = self.cache.read().await;
        cache.get(&session_id).cloned()
    }

    /// Clear cache entry
    pub async fn clear_session(&self, session_id: SessionId) {
        let mut cache = self.cache.write().await;
        cache.remove(&session_id);
    }

    /// Clear all cached reports
    pub async fn clear_all(&self) {
        let mut cache = self.cache.write().await;
        cache.clear();
    }

    pub async fn cached_sessions(&self) -> usize {
        let cache = self.cache.read().await;
        cache.len()
    }
}

#[async_trait]
impl Agent for StylistAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn process(&self, input: &str) -> AgentResult<String> {
        Ok(self.generate(input).await?.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapefit_body::BodyMeasurements;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const REPLY: &str = r#"```json
{"casual": [{"name": "Wrap Dress", "description": "d", "image": "https://example.com/w.jpg",
  "tags": ["Wrap"], "reasonText": "Follows your curves."}],
 "formal": [], "workwear": [], "accessories": []}
```"#;

    struct CannedBackend {
        calls: AtomicUsize,
        last_prompt: std::sync::Mutex<String>,
        last_config: std::sync::Mutex<Option<AgentConfig>>,
    }

    impl CannedBackend {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_prompt: std::sync::Mutex::new(String::new()),
                last_config: std::sync::Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl LlmBackend for CannedBackend {
        async fn generate(&self, prompt: &str, config: &AgentConfig) -> AgentResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = prompt.to_string();
            *self.last_config.lock().unwrap() = Some(config.clone());
            Ok(REPLY.to_string())
        }
    }

    struct SlowBackend;

    #[async_trait]
    impl LlmBackend for SlowBackend {
        async fn generate(&self, _prompt: &str, _config: &AgentConfig) -> AgentResult<String> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(REPLY.to_string())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl LlmBackend for FailingBackend {
        async fn generate(&self, _prompt: &str, _config: &AgentConfig) -> AgentResult<String> {
            Err(AgentError::LlmError("quota exhausted".to_string()))
        }
    }

    fn hourglass_analysis() -> AnalysisResult {
        AnalysisResult {
            measurements: BodyMeasurements::from_widths(100.0, 70.0, 100.0, 600.0),
            body_type: BodyShape::Hourglass,
        }
    }

    #[tokio::test]
    async fn test_recommend_and_cache() {
        let backend = Arc::new(CannedBackend::new());
        let agent = StylistAgent::new(AgentConfig::default(), backend.clone());
        let session_id = SessionId::new();

        let report = agent
            .recommend(session_id, &hourglass_analysis(), "female")
            .await
            .unwrap();

        assert_eq!(report.body_type, BodyShape::Hourglass);
        assert_eq!(report.recommendations.casual[0].name, "Wrap Dress");
        assert_eq!(report.styling_tips.len(), 4);
        assert!(backend.last_prompt.lock().unwrap().contains("Type: Hourglass"));

        // Second call is served from cache
        agent
            .recommend(session_id, &hourglass_analysis(), "female")
            .await
            .unwrap();
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert_eq!(agent.cached_sessions().await, 1);

        agent.clear_session(session_id).await;
        assert!(agent.get_report(session_id).await.is_none());
    }

    #[tokio::test]
    async fn test_changed_inputs_regenerate() {
        let backend = Arc::new(CannedBackend::new());
        let agent = StylistAgent::new(AgentConfig::default(), backend.clone());
        let session_id = SessionId::new();

        agent
            .recommend(session_id, &hourglass_analysis(), "female")
            .await
            .unwrap();

        let triangle = AnalysisResult {
            measurements: BodyMeasurements::from_widths(80.0, 75.0, 100.0, 600.0),
            body_type: BodyShape::Triangle,
        };
        let report = agent.recommend(session_id, &triangle, "male").await.unwrap();

        assert_eq!(report.gender, "male");
        assert_eq!(report.body_type, BodyShape::Triangle);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
        assert!(backend.last_prompt.lock().unwrap().contains("Type: Triangle (Pear)"));
        assert_eq!(agent.cached_sessions().await, 1);

        // Same body type, different gender
        let report = agent.recommend(session_id, &triangle, "female").await.unwrap();
        assert_eq!(report.gender, "female");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 3);

        // A cached session does not bypass validation
        let result = agent.recommend(session_id, &triangle, "").await;
        assert!(matches!(result, Err(AgentError::InvalidInput(_))));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_backend_receives_config() {
        let backend = Arc::new(CannedBackend::new());
        let config = AgentConfig {
            model: "test-model".to_string(),
            temperature: 0.2,
            max_tokens: 512,
            ..AgentConfig::default()
        };
        let agent = StylistAgent::new(config, backend.clone());

        let response = agent.generate("hello").await.unwrap();
        assert_eq!(response.model, "test-model");

        let seen = backend.last_config.lock().unwrap().clone().unwrap();
        assert_eq!(seen.model, "test-model");
        assert_eq!(seen.max_tokens, 512);
        assert!((seen.temperature - 0.2).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_recommend_from_catalog() {
        let backend = Arc::new(crate::catalog::CatalogBackend::new().unwrap());
        let agent = StylistAgent::new(AgentConfig::default(), backend);

        let report = agent
            .recommend(SessionId::new(), &hourglass_analysis(), "female")
            .await
            .unwrap();

        assert_eq!(report.recommendations.casual[0].name, "Wrap Dress");
        assert!(report.recommendations.short_categories().is_empty());
    }

    #[tokio::test]
    async fn test_empty_gender_rejected() {
        let agent = StylistAgent::new(AgentConfig::default(), Arc::new(CannedBackend::new()));
        let result = agent
            .recommend(SessionId::new(), &hourglass_analysis(), "  ")
            .await;
        assert!(matches!(result, Err(AgentError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_timeout() {
        let config = AgentConfig {
            timeout_ms: 10,
            ..AgentConfig::default()
        };
        let agent = StylistAgent::new(config, Arc::new(SlowBackend));

        let result = agent
            .recommend(SessionId::new(), &hourglass_analysis(), "male")
            .await;
        assert!(matches!(result, Err(AgentError::Timeout(10))));
        assert_eq!(agent.cached_sessions().await, 0);
    }

    #[tokio::test]
    async fn test_backend_error_propagates() {
        let agent = StylistAgent::new(AgentConfig::default(), Arc::new(FailingBackend));
        let result = agent
            .recommend(SessionId::new(), &hourglass_analysis(), "male")
            .await;
        assert!(matches!(result, Err(AgentError::LlmError(_))));
    }

    #[tokio::test]
    async fn test_process_returns_raw_text() {
        let agent = StylistAgent::new(AgentConfig::default(), Arc::new(CannedBackend::new()));
        assert_eq!(agent.name(), "Stylist");
        assert_eq!(agent.process("hello").await.unwrap(), REPLY);
        assert!(agent.process("").await.is_err());
    }
}
