//! GitHub URL → `RepositoryReference`.
//!
//! Accepted forms:
//!   - https://github.com/owner/repo
//!   - https://www.github.com/owner/repo/
//!   - github.com/owner/repo.git
//!   - https://github.com/owner/repo/tree/main/src (extra segments ignored)

use url::Url;

use crate::error::{AppError, Result};
use crate::models::RepositoryReference;

const GITHUB_HOSTS: &[&str] = &["github.com", "www.github.com"];

impl RepositoryReference {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = || AppError::InvalidRepositoryUrl(trimmed.to_string());

        let url = match Url::parse(trimmed) {
            Ok(url) => url,
            // Scheme-less "github.com/owner/repo"
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Url::parse(&format!("https://{trimmed}")).map_err(|_| invalid())?
            }
            Err(_) => return Err(invalid()),
        };

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid());
        }

        let host = url.host_str().ok_or_else(invalid)?.to_lowercase();
        if !GITHUB_HOSTS.contains(&host.as_str()) {
            return Err(invalid());
        }

        let mut segments = url.path_segments().ok_or_else(invalid)?;
        let owner = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        let name = segments
            .next()
            .map(|s| s.strip_suffix(".git").unwrap_or(s))
            .filter(|s| !s.is_empty())
            .ok_or_else(invalid)?;

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}
