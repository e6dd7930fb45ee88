use dotenvy::dotenv;
use shared::error::ChatError;
use std::env;
use std::path::PathBuf;

const DEFAULT_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_LLM_MODEL: &str = "llama3-8b-8192";
const DEFAULT_EMBEDDING_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_EMBEDDING_MODEL: &str = "nomic-embed-text";
const DEFAULT_KB_PATH: &str = "knowledge_base.json";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub struct Config {
    pub groq_api_key: String,
    pub groq_api_url: String,
    pub llm_model: String,
    pub embedding_base_url: String,
    pub embedding_model: String,
    pub kb_path: PathBuf,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from `.env` and the environment.
    ///
    /// The completion API key is required; everything else has a default.
    pub fn load() -> Result<Self, ChatError> {
        dotenv().ok();
        let groq_api_key = env::var("GROQ_API_KEY").map_err(|_| {
            ChatError::Configuration(
                "GROQ_API_KEY is not set; add it to the environment or a .env file".to_string(),
            )
        })?;
        Ok(Self {
            groq_api_key,
            groq_api_url: env::var("GROQ_API_URL")
                .unwrap_or_else(|_| DEFAULT_COMPLETIONS_URL.to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            embedding_base_url: env::var("EMBEDDING_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_EMBEDDING_BASE_URL.to_string()),
            embedding_model: env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string()),
            kb_path: env::var("KB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_KB_PATH)),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}
