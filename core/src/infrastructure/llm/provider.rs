use reqwest::Client;
use tracing::{info, warn};

use crate::{
    domain::{
        common::LLMConfig,
        generation::{errors::GenerationError, ports::LLMClient, value_objects::CompletionOptions},
    },
    infrastructure::llm::{gemini_client::GeminiLLMClient, openai_compatible::OpenAICompatibleClient},
};

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_OPENROUTER_MODEL: &str = "meta-llama/llama-3.3-70b-instruct";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Groq,
    Gemini,
    OpenRouter,
}

impl ProviderKind {
    /// Selection order when several keys are configured.
    pub const PRIORITY: [ProviderKind; 3] =
        [ProviderKind::Groq, ProviderKind::Gemini, ProviderKind::OpenRouter];

    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "Groq",
            ProviderKind::Gemini => "Gemini",
            ProviderKind::OpenRouter => "OpenRouter",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::Groq => GROQ_BASE_URL,
            ProviderKind::Gemini => GEMINI_BASE_URL,
            ProviderKind::OpenRouter => OPENROUTER_BASE_URL,
        }
    }

    fn api_key<'a>(&self, config: &'a LLMConfig) -> Option<&'a str> {
        let key = match self {
            ProviderKind::Groq => config.groq_api_key.as_deref(),
            ProviderKind::Gemini => config.gemini_api_key.as_deref(),
            ProviderKind::OpenRouter => config.openrouter_api_key.as_deref(),
        };

        key.map(str::trim).filter(|k| !k.is_empty())
    }

    fn model<'a>(&self, config: &'a LLMConfig) -> &'a str {
        match self {
            ProviderKind::Groq => &config.groq_model,
            ProviderKind::Gemini => &config.gemini_model,
            ProviderKind::OpenRouter => &config.openrouter_model,
        }
    }

    /// First provider, in [`Self::PRIORITY`] order, with a non-empty key.
    pub fn select(config: &LLMConfig) -> Option<ProviderKind> {
        Self::PRIORITY
            .into_iter()
            .find(|kind| kind.api_key(config).is_some())
    }
}

/// One configured provider, able to build its request and read its envelope.
#[derive(Debug, Clone)]
pub enum ProviderAdapter {
    OpenAICompatible(OpenAICompatibleClient),
    Gemini(GeminiLLMClient),
}

impl ProviderAdapter {
    pub fn new(kind: ProviderKind, config: &LLMConfig, base_url: &str, client: Client) -> Option<Self> {
        let api_key = kind.api_key(config)?.to_string();
        let model = kind.model(config).to_string();

        let adapter = match kind {
            ProviderKind::Groq | ProviderKind::OpenRouter => {
                ProviderAdapter::OpenAICompatible(OpenAICompatibleClient::new(
                    kind.name(),
                    base_url,
                    api_key,
                    model,
                    config.temperature,
                    client,
                ))
            }
            ProviderKind::Gemini => ProviderAdapter::Gemini(GeminiLLMClient::new(
                base_url,
                api_key,
                model,
                config.temperature,
                client,
            )),
        };

        Some(adapter)
    }

    pub async fn complete(
        &self,
        prompt: String,
        options: CompletionOptions,
    ) -> Result<String, GenerationError> {
        match self {
            ProviderAdapter::OpenAICompatible(client) => client.complete(prompt, options).await,
            ProviderAdapter::Gemini(client) => client.complete(prompt, options).await,
        }
    }
}

/// The [`LLMClient`] wired into the service.
///
/// Built once at startup from [`LLMConfig`]. When no provider key is set the
/// client still exists and every completion fails with
/// [`GenerationError::Configuration`].
#[derive(Debug, Clone)]
pub struct ProviderClient {
    kind: Option<ProviderKind>,
    adapter: Option<ProviderAdapter>,
}

impl ProviderClient {
    pub fn from_config(config: &LLMConfig) -> Self {
        let kind = ProviderKind::select(config);
        Self::build(kind, config, kind.map(|k| k.default_base_url()))
    }

    /// Same selection as [`Self::from_config`] against a custom endpoint.
    pub fn with_base_url(config: &LLMConfig, base_url: &str) -> Self {
        Self::build(ProviderKind::select(config), config, Some(base_url))
    }

    fn build(kind: Option<ProviderKind>, config: &LLMConfig, base_url: Option<&str>) -> Self {
        let adapter = kind.zip(base_url).and_then(|(kind, base_url)| {
            ProviderAdapter::new(kind, config, base_url, Client::new())
        });

        match kind {
            Some(kind) => info!(provider = kind.name(), "LLM provider selected"),
            None => warn!(
                "No LLM provider key configured; recipe and meal-plan generation will fail"
            ),
        }

        Self { kind, adapter }
    }

    pub fn provider(&self) -> Option<ProviderKind> {
        self.kind
    }
}

impl LLMClient for ProviderClient {
    async fn complete(
        &self,
        prompt: String,
        options: CompletionOptions,
    ) -> Result<String, GenerationError> {
        match &self.adapter {
            Some(adapter) => adapter.complete(prompt, options).await,
            None => Err(GenerationError::Configuration),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    use super::*;

    fn config() -> LLMConfig {
        LLMConfig {
            groq_api_key: None,
            groq_model: DEFAULT_GROQ_MODEL.to_string(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            openrouter_api_key: None,
            openrouter_model: DEFAULT_OPENROUTER_MODEL.to_string(),
            temperature: 0.7,
        }
    }

    #[test]
    fn test_priority_is_groq_gemini_openrouter() {
        let mut config = config();
        config.openrouter_api_key = Some("or".to_string());
        assert_eq!(ProviderKind::select(&config), Some(ProviderKind::OpenRouter));

        config.gemini_api_key = Some("g".to_string());
        assert_eq!(ProviderKind::select(&config), Some(ProviderKind::Gemini));

        config.groq_api_key = Some("gq".to_string());
        assert_eq!(ProviderKind::select(&config), Some(ProviderKind::Groq));
    }

    #[test]
    fn test_blank_keys_are_not_configured() {
        let mut config = config();
        config.groq_api_key = Some("   ".to_string());
        config.gemini_api_key = Some(String::new());
        assert_eq!(ProviderKind::select(&config), None);
    }

    #[tokio::test]
    async fn test_no_provider_fails_with_configuration() {
        let client = ProviderClient::from_config(&config());

        assert_eq!(client.provider(), None);
        let err = client
            .complete(
                "prompt".to_string(),
                CompletionOptions {
                    max_output_tokens: 10,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::Configuration);
    }

    #[tokio::test]
    async fn test_first_configured_provider_handles_the_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer gq"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "from groq"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = config();
        config.groq_api_key = Some("gq".to_string());
        config.openrouter_api_key = Some("or".to_string());

        let client = ProviderClient::with_base_url(&config, &server.uri());
        assert_eq!(client.provider(), Some(ProviderKind::Groq));

        let text = client
            .complete(
                "prompt".to_string(),
                CompletionOptions {
                    max_output_tokens: 10,
                },
            )
            .await
            .unwrap();
        assert_eq!(text, "from groq");
    }

    #[tokio::test]
    async fn test_openrouter_payment_required_is_classified() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(402).set_body_string("insufficient credits"))
            .mount(&server)
            .await;

        let mut config = config();
        config.openrouter_api_key = Some("or".to_string());

        let err = ProviderClient::with_base_url(&config, &server.uri())
            .complete(
                "prompt".to_string(),
                CompletionOptions {
                    max_output_tokens: 10,
                },
            )
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("OpenRouter API error: 402"));
        assert!(message.contains("payment is required"));
    }
}
