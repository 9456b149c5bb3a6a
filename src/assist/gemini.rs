use std::time::Duration;

use tracing::debug;
use ureq::Agent;

use super::{AssistError, Assistant};
use crate::settings::settings;

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Blocking client for the generative-language `generateContent` API.
pub struct GeminiClient {
    agent: Agent,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Client with the model and timeout from settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        let cfg = &settings().assist;
        Self::with_model(api_key, cfg.model.clone())
    }

    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(settings().assist.timeout_secs)))
            .build()
            .into();
        Self {
            agent,
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

impl Assistant for GeminiClient {
    fn assist(&self, prompt: &str) -> Result<String, AssistError> {
        let url = format!("{ENDPOINT}/{}:generateContent", self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let mut response = self
            .agent
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .send_json(&body)
            .map_err(|e| match e {
                ureq::Error::StatusCode(429) => AssistError::RateLimited,
                other => AssistError::Http(other.to_string()),
            })?;

        let json: serde_json::Value = response
            .body_mut()
            .read_json()
            .map_err(|e| AssistError::InvalidResponse(e.to_string()))?;

        let text = extract_text(&json)?;
        debug!(model = %self.model, out_len = text.len(), "assist call completed");
        Ok(text)
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a generateContent
/// response.
fn extract_text(json: &serde_json::Value) -> Result<String, AssistError> {
    let text = json["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or_else(|| {
            AssistError::InvalidResponse("missing candidates[0].content.parts[0].text".to_string())
        })?;
    let text = text.trim();
    if text.is_empty() {
        return Err(AssistError::Empty);
    }
    Ok(text.to_string())
}
