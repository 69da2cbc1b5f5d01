pub mod gemini_client;
pub mod openai_compatible;
pub mod provider;

mod transport;
