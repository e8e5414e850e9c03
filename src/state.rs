use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::filter::FilterPolicy;
use crate::github::GitHubClient;
use crate::llm::{CompletionClient, SummaryGenerator};

/// Built once at start-up; read-only afterwards, so requests share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    pub github: GitHubClient,
    pub filter: FilterPolicy,
    pub generator: SummaryGenerator,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            github: GitHubClient::new(&config.github, config.request_timeout)?,
            filter: FilterPolicy::from(&config.filter),
            generator: SummaryGenerator::new(CompletionClient::new(&config.llm, config.request_timeout)?),
        })
    }
}

pub type SharedState = Arc<AppState>;
