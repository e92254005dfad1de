//! Server configuration from environment variables.

use std::path::PathBuf;

/// Server configuration loaded from the environment.
///
/// Provider credentials are optional: without an Anthropic key the server
/// serves deterministic offline summaries, and without Confluence credentials
/// it serves the built-in sample document.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub anthropic_model: String,
    pub feedback_file: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists (ignore errors if not found)
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid port number"))?;

        let anthropic_model = std::env::var("ANTHROPIC_MODEL")
            .unwrap_or_else(|_| anthropic_client::DEFAULT_MODEL.to_string());

        let feedback_file = std::env::var("FEEDBACK_FILE")
            .unwrap_or_else(|_| "feedback_data.json".to_string())
            .into();

        Ok(Self {
            host,
            port,
            anthropic_model,
            feedback_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("ANTHROPIC_MODEL");
        std::env::remove_var("FEEDBACK_FILE");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.anthropic_model, "claude-3-haiku-20240307");
        assert_eq!(config.feedback_file, PathBuf::from("feedback_data.json"));
    }
}
