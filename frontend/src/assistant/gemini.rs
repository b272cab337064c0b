use gloo_net::http::Request;
use log::info;
use serde::{Deserialize, Serialize};

use crate::assistant::provider::{GenerationRequest, ProviderError, TextGenerator};
use crate::config::ProviderConfig;

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentRequest {
    pub fn from_request(request: &GenerationRequest) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: Some(request.system_instruction.clone()) }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(request.prompt.clone()) }],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate. A prompt blocked before
    /// any candidate was produced is an error; a candidate with no text is not.
    pub fn into_text(self) -> Result<String, ProviderError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(ProviderError::Blocked(reason));
            }
            return Ok(String::new());
        };

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();
        if text.is_empty() {
            if let Some(reason) = candidate.finish_reason {
                info!("Candidate finished without text: {}", reason);
            }
        }
        Ok(text)
    }
}

/// Request-scoped client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    config: ProviderConfig,
}

impl GeminiClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    pub fn from_current_config() -> Self {
        Self::new(ProviderConfig::load())
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey)?;
        let url = self.config.endpoint_url(api_key);
        let body = GenerateContentRequest::from_request(request);

        info!("Sending prompt to {}", self.config.model);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| ProviderError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status, body));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?
            .into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn request_body_carries_prompt_and_system_instruction() {
        let request = GenerationRequest {
            prompt: "How much does it cost?".to_string(),
            system_instruction: "Be brief.".to_string(),
        };
        let body = serde_json::to_value(GenerateContentRequest::from_request(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "systemInstruction": { "parts": [{ "text": "Be brief." }] },
                "contents": [{ "role": "user", "parts": [{ "text": "How much does it cost?" }] }]
            })
        );
    }

    #[test]
    fn text_parts_of_first_candidate_are_joined() {
        let response = parse(json!({
            "candidates": [
                {
                    "content": { "role": "model", "parts": [{ "text": "Plans start " }, { "text": "at $2,500/mo" }] },
                    "finishReason": "STOP"
                },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }));
        assert_eq!(response.into_text().unwrap(), "Plans start at $2,500/mo");
    }

    #[test]
    fn candidate_without_text_yields_empty_string() {
        let response = parse(json!({
            "candidates": [{ "finishReason": "MAX_TOKENS" }]
        }));
        assert_eq!(response.into_text().unwrap(), "");
        assert_eq!(parse(json!({})).into_text().unwrap(), "");
    }

    #[test]
    fn blocked_prompt_is_an_error() {
        let response = parse(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }));
        assert_eq!(response.into_text(), Err(ProviderError::Blocked("SAFETY".to_string())));
    }

    #[test]
    fn missing_key_fails_before_any_request() {
        let client = GeminiClient::new(ProviderConfig {
            base_url: "http://localhost".to_string(),
            model: "test-model".to_string(),
            api_key: None,
        });
        let request = GenerationRequest {
            prompt: "hi".to_string(),
            system_instruction: String::new(),
        };
        let result = futures::executor::block_on(client.generate(&request));
        assert_eq!(result, Err(ProviderError::MissingApiKey));
    }
}
