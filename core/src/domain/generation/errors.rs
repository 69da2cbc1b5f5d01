use thiserror::Error;

/// Failures of the recipe / meal-plan generation pipeline.
///
/// Each variant keeps the diagnostic detail (status, body or raw completion)
/// so the caller can surface it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error(
        "No LLM provider is configured. Set GROQ_API_KEY, GEMINI_API_KEY or OPENROUTER_API_KEY"
    )]
    Configuration,

    #[error("{provider} API error: {status} - {body}{hint}", hint = status_hint(.status))]
    Provider {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Invalid response format from {provider}: {reason}")]
    MalformedResponse { provider: String, reason: String },

    #[error("Failed to reach {provider}: {reason}")]
    Transport { provider: String, reason: String },

    #[error("Failed to parse JSON from the model response")]
    Extraction { raw: String },

    #[error("{0}")]
    Shape(String),
}

fn status_hint(status: &u16) -> &'static str {
    match status {
        401 | 403 => " (the API key is invalid or expired)",
        402 => " (payment is required by the provider)",
        429 => " (rate limit exceeded, please try again later)",
        _ => "",
    }
}
