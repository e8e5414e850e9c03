//! Process configuration.
//!
//! Read once at start-up from `.env` and the environment, then shared
//! read-only by every request. `from_getter` takes any key lookup so the
//! parsing rules can be tested without touching the real environment.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.tokenfactory.nebius.com/v1";
pub const DEFAULT_LLM_MODEL: &str = "meta-llama/Llama-3.3-70B-Instruct-fast";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_README_CHAR_LIMIT: usize = 5000;
pub const DEFAULT_MAX_TREE_ENTRIES: usize = 1000;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GitHubConfig {
    pub token: String,
    pub api_url: String,
    pub max_tree_entries: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl LlmConfig {
    pub fn chat_endpoint(&self) -> String {
        let trimmed = self.base_url.trim_end_matches('/');
        if trimmed.ends_with(CHAT_COMPLETIONS_PATH) {
            trimmed.to_string()
        } else {
            format!("{trimmed}/{CHAT_COMPLETIONS_PATH}")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterConfig {
    pub readme_char_limit: usize,
    /// Extension → excluded. Merged over the built-in table.
    pub extension_overrides: HashMap<String, bool>,
    pub skip_hidden: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub github: GitHubConfig,
    pub llm: LlmConfig,
    pub filter: FilterConfig,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env is not an error.
        let _ = dotenv::dotenv();
        Self::from_getter(|key| std::env::var(key).ok())
    }

    pub fn from_getter(mut getter: impl FnMut(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut get = |key: &str| getter(key).filter(|v| !v.trim().is_empty());

        let token = get("GITHUB_TOKEN").ok_or(ConfigError::Missing("GITHUB_TOKEN"))?;
        let api_key = get("LLM_API_KEY")
            .or_else(|| get("NEBIUS_API_KEY"))
            .ok_or(ConfigError::Missing("LLM_API_KEY"))?;

        let github = GitHubConfig {
            token: token.trim().to_string(),
            api_url: get("GITHUB_API_URL")
                .map(|u| u.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            max_tree_entries: parse_or("MAX_TREE_ENTRIES", get("MAX_TREE_ENTRIES"), DEFAULT_MAX_TREE_ENTRIES)?,
        };

        let llm = LlmConfig {
            api_key: api_key.trim().to_string(),
            base_url: get("LLM_BASE_URL")
                .map(|u| u.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
            model: get("LLM_MODEL")
                .map(|m| m.trim().to_string())
                .unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            temperature: parse_or("LLM_TEMPERATURE", get("LLM_TEMPERATURE"), DEFAULT_TEMPERATURE)?,
            max_tokens: parse_or("LLM_MAX_TOKENS", get("LLM_MAX_TOKENS"), DEFAULT_MAX_TOKENS)?,
        };

        let mut extension_overrides = HashMap::new();
        if let Some(list) = get("EXCLUDED_EXTENSIONS") {
            for ext in split_extensions(&list) {
                extension_overrides.insert(ext, true);
            }
        }
        if let Some(list) = get("INCLUDED_EXTENSIONS") {
            for ext in split_extensions(&list) {
                extension_overrides.insert(ext, false);
            }
        }

        let filter = FilterConfig {
            readme_char_limit: parse_or("README_CHAR_LIMIT", get("README_CHAR_LIMIT"), DEFAULT_README_CHAR_LIMIT)?,
            extension_overrides,
            skip_hidden: parse_or("SKIP_HIDDEN_FILES", get("SKIP_HIDDEN_FILES"), false)?,
        };

        let timeout_secs: u64 = parse_or(
            "REQUEST_TIMEOUT_SECS",
            get("REQUEST_TIMEOUT_SECS"),
            DEFAULT_REQUEST_TIMEOUT.as_secs(),
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "REQUEST_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            github,
            llm,
            filter,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

/// Splits `".png, svg,.PDF"` into `["png", "svg", "pdf"]`.
fn split_extensions(list: &str) -> Vec<String> {
    list.split(',')
        .map(|s| s.trim().trim_start_matches('.').to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
