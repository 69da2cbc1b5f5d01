use chefai_core::{
    domain::common::{AuthConfig, ChefaiConfig, DatabaseConfig, LLMConfig},
    infrastructure::llm::provider::{
        DEFAULT_GEMINI_MODEL, DEFAULT_GROQ_MODEL, DEFAULT_OPENROUTER_MODEL,
    },
};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "chefai-api", version, about = "ChefAI Companion API")]
pub struct Args {
    #[arg(long, env = "ENV", value_enum, default_value_t = Environment::Development)]
    pub env: Environment,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(id = "server-host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server-port", long = "server-port", env = "PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(id = "database-host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database-port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "chefai")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    #[arg(long = "jwt-secret", env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    #[arg(long = "jwt-expiration-days", env = "JWT_EXPIRATION_DAYS", default_value_t = 7)]
    pub jwt_expiration_days: i64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "groq-api-key", env = "GROQ_API_KEY", hide_env_values = true)]
    pub groq_api_key: Option<String>,

    #[arg(long = "groq-model", env = "GROQ_MODEL", default_value = DEFAULT_GROQ_MODEL)]
    pub groq_model: String,

    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long = "openrouter-api-key", env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub openrouter_api_key: Option<String>,

    #[arg(
        long = "openrouter-model",
        env = "OPENROUTER_MODEL",
        default_value = DEFAULT_OPENROUTER_MODEL
    )]
    pub openrouter_model: String,

    #[arg(long = "llm-temperature", env = "LLM_TEMPERATURE", default_value_t = 0.7)]
    pub temperature: f32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(
        long = "log-json",
        env = "LOG_JSON",
        default_value_t = false,
        action = clap::ArgAction::Set
    )]
    pub json: bool,
}

impl From<Args> for ChefaiConfig {
    fn from(args: Args) -> Self {
        ChefaiConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.user,
                password: args.database.password,
                name: args.database.name,
            },
            llm: LLMConfig {
                groq_api_key: args.llm.groq_api_key,
                groq_model: args.llm.groq_model,
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                openrouter_api_key: args.llm.openrouter_api_key,
                openrouter_model: args.llm.openrouter_model,
                temperature: args.llm.temperature,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                jwt_expiration_days: args.auth.jwt_expiration_days,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["chefai-api", "--jwt-secret", "s3cret"]);

        assert_eq!(args.server.port, 5000);
        assert_eq!(args.server.root_path, "/api");
        assert_eq!(args.auth.jwt_expiration_days, 7);
        assert_eq!(args.llm.temperature, 0.7);
        assert_eq!(args.llm.groq_model, DEFAULT_GROQ_MODEL);
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = Args::parse_from([
            "chefai-api",
            "--jwt-secret",
            "s3cret",
            "--allowed-origins",
            "http://localhost:5173,https://chefai.example",
        ]);

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://localhost:5173", "https://chefai.example"]
        );
    }

    #[test]
    fn test_converts_into_core_config() {
        let args = Args::parse_from([
            "chefai-api",
            "--jwt-secret",
            "s3cret",
            "--gemini-api-key",
            "g-key",
            "--database-name",
            "recipes",
        ]);

        let config = ChefaiConfig::from(args);

        assert_eq!(config.auth.jwt_secret, "s3cret");
        assert_eq!(config.llm.gemini_api_key.as_deref(), Some("g-key"));
        assert_eq!(config.database.name, "recipes");
    }
}
