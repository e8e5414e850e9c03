use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::{Client, RequestBuilder, StatusCode, header};
use serde::Deserialize;
use std::time::Duration;

use crate::config::GitHubConfig;
use crate::error::{AppError, Result};
use crate::models::{RawRepositorySnapshot, RepoEntry, RepositoryReference};

const USER_AGENT: &str = concat!("repo-summarizer/", env!("CARGO_PKG_VERSION"));

/// One item from `GET /repos/{owner}/{repo}/contents/`.
#[derive(Debug, Deserialize)]
struct ContentItem {
    path: String,
    #[serde(rename = "type")]
    item_type: String,
}

impl ContentItem {
    fn into_entry(self) -> RepoEntry {
        match self.item_type.as_str() {
            "dir" | "submodule" => RepoEntry::directory(self.path),
            _ => RepoEntry::file(self.path),
        }
    }
}

/// Body of `GET /repos/{owner}/{repo}/readme`.
#[derive(Debug, Deserialize)]
struct ReadmeBody {
    content: String,
    #[serde(default)]
    encoding: Option<String>,
}

/// Read-only GitHub REST client. Built once and shared across requests.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
    token: String,
    max_entries: usize,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build GitHub client: {}", e)))?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            max_entries: config.max_tree_entries,
        })
    }

    /// Parses the URL, then fetches. An unparsable URL makes no outbound call.
    pub async fn fetch_url(&self, url: &str) -> Result<(RepositoryReference, RawRepositorySnapshot)> {
        let repo = RepositoryReference::parse(url)?;
        let snapshot = self.fetch(&repo).await?;
        Ok((repo, snapshot))
    }

    pub async fn fetch(&self, repo: &RepositoryReference) -> Result<RawRepositorySnapshot> {
        let entries = self.list_root(repo).await?;
        let readme_text = self.readme(repo).await?;

        tracing::debug!(
            "Fetched {}: {} root entries, README {} chars",
            repo,
            entries.len(),
            readme_text.chars().count()
        );

        Ok(RawRepositorySnapshot { entries, readme_text })
    }

    async fn list_root(&self, repo: &RepositoryReference) -> Result<Vec<RepoEntry>> {
        let url = format!("{}/repos/{}/{}/contents/", self.api_url, repo.owner, repo.name);
        let response = self.get(&url).send().await?;

        match response.status() {
            s if s.is_success() => {}
            s if s == StatusCode::NOT_FOUND => {
                return Err(AppError::RepositoryNotFound(repo.to_string()));
            }
            s => {
                return Err(AppError::UpstreamUnavailable(format!(
                    "listing {} returned HTTP {}",
                    repo, s
                )));
            }
        }

        let items: Vec<ContentItem> = response.json().await?;
        if items.len() > self.max_entries {
            tracing::info!(
                "Root of {} has {} entries, keeping the first {}",
                repo,
                items.len(),
                self.max_entries
            );
        }

        Ok(items
            .into_iter()
            .take(self.max_entries)
            .map(ContentItem::into_entry)
            .collect())
    }

    async fn readme(&self, repo: &RepositoryReference) -> Result<String> {
        let url = format!("{}/repos/{}/{}/readme", self.api_url, repo.owner, repo.name);
        let response = self.get(&url).send().await?;

        match response.status() {
            s if s.is_success() => {}
            // Many repositories have no README; that is not an error.
            s if s == StatusCode::NOT_FOUND => return Ok(String::new()),
            s => {
                return Err(AppError::UpstreamUnavailable(format!(
                    "README of {} returned HTTP {}",
                    repo, s
                )));
            }
        }

        let body: ReadmeBody = response.json().await?;
        decode_readme(&body)
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.http
            .get(url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .bearer_auth(&self.token)
    }
}

fn decode_readme(body: &ReadmeBody) -> Result<String> {
    match body.encoding.as_deref() {
        Some("base64") | None => {}
        Some(other) => {
            return Err(AppError::UpstreamUnavailable(format!(
                "unsupported README encoding: {}",
                other
            )));
        }
    }

    // GitHub wraps the base64 payload at 60 columns.
    let compact: String = body.content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| AppError::UpstreamUnavailable(format!("README is not valid base64: {}", e)))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
