use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    domain::generation::{errors::GenerationError, value_objects::CompletionOptions},
    infrastructure::llm::transport::send_json,
};

const PROVIDER: &str = "Gemini";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    base_url: String,
    api_key: String,
    model_name: String,
    temperature: f32,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiLLMClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: String,
        model_name: String,
        temperature: f32,
        client: Client,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            model_name,
            temperature,
            client,
        }
    }

    #[instrument(skip(self, prompt), fields(provider = PROVIDER, model = %self.model_name))]
    pub async fn complete(
        &self,
        prompt: String,
        options: CompletionOptions,
    ) -> Result<String, GenerationError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model_name,
            urlencoding::encode(&self.api_key)
        );

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: options.max_output_tokens,
            },
        };

        let response: GeminiResponse =
            send_json(PROVIDER, self.client.post(&url).json(&request)).await?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| GenerationError::MalformedResponse {
                provider: PROVIDER.to_string(),
                reason: "missing candidates[0].content.parts[0].text".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, method, path, query_param},
    };

    use super::*;

    fn client(base_url: String) -> GeminiLLMClient {
        GeminiLLMClient::new(
            base_url,
            "g-key".to_string(),
            "gemini-1.5-flash".to_string(),
            0.7,
            Client::new(),
        )
    }

    fn options() -> CompletionOptions {
        CompletionOptions {
            max_output_tokens: 8000,
        }
    }

    #[tokio::test]
    async fn test_complete_reads_first_candidate_part() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-1.5-flash:generateContent"))
            .and(query_param("key", "g-key"))
            .and(body_partial_json(json!({
                "contents": [{"parts": [{"text": "plan"}]}],
                "generationConfig": {"maxOutputTokens": 8000}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "{\"mealPlan\": []}"}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client(server.uri())
            .complete("plan".to_string(), options())
            .await
            .unwrap();

        assert_eq!(text, "{\"mealPlan\": []}");
    }

    #[tokio::test]
    async fn test_forbidden_is_classified_as_bad_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let err = client(server.uri())
            .complete("plan".to_string(), options())
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("Gemini API error: 403 - API key not valid"));
        assert!(message.contains("invalid or expired"));
    }

    #[tokio::test]
    async fn test_blocked_candidate_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"finishReason": "SAFETY"}]
            })))
            .mount(&server)
            .await;

        let err = client(server.uri())
            .complete("plan".to_string(), options())
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::MalformedResponse { .. }));
    }
}
