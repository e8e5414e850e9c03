//! Repository-side DTOs.
//!
//! - `RepositoryReference`: owner/name pair parsed from a GitHub URL
//! - `RepoEntry`: one root-level listing item
//! - `RawRepositorySnapshot`: listing + README text as fetched
//! - `FilteredPayload`: what survives the content filter

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryReference {
    pub owner: String,
    pub name: String,
}

impl std::fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Directory,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoEntry {
    pub path: String,
    pub entry_type: EntryType,
}

impl RepoEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            entry_type: EntryType::File,
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            entry_type: EntryType::Directory,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRepositorySnapshot {
    pub entries: Vec<RepoEntry>,
    pub readme_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredPayload {
    pub entries: Vec<String>,
    pub readme_excerpt: String,
}
