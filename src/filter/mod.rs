//! Content filter: turns a `RawRepositorySnapshot` into the compact
//! `FilteredPayload` sent to the model.
//!
//! Rules:
//! - directories are dropped, only file paths go downstream
//! - files whose extension the `ExtensionTable` excludes are dropped
//! - optionally, dot-files are dropped
//! - surviving paths keep their original order
//! - the README is cut to the first `readme_char_limit` characters

pub mod extensions;

pub use extensions::ExtensionTable;

use crate::config::{DEFAULT_README_CHAR_LIMIT, FilterConfig};
use crate::models::{EntryType, FilteredPayload, RawRepositorySnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPolicy {
    pub table: ExtensionTable,
    pub readme_char_limit: usize,
    pub skip_hidden: bool,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            table: ExtensionTable::default(),
            readme_char_limit: DEFAULT_README_CHAR_LIMIT,
            skip_hidden: false,
        }
    }
}

impl From<&FilterConfig> for FilterPolicy {
    fn from(config: &FilterConfig) -> Self {
        Self {
            table: ExtensionTable::with_overrides(&config.extension_overrides),
            readme_char_limit: config.readme_char_limit,
            skip_hidden: config.skip_hidden,
        }
    }
}

impl FilterPolicy {
    pub fn apply(&self, snapshot: &RawRepositorySnapshot) -> FilteredPayload {
        let entries = snapshot
            .entries
            .iter()
            .filter(|e| e.entry_type == EntryType::File)
            .filter(|e| !(self.skip_hidden && is_hidden(&e.path)))
            .filter(|e| !self.table.excludes_path(&e.path))
            .map(|e| e.path.clone())
            .collect();

        FilteredPayload {
            entries,
            readme_excerpt: truncate_chars(&snapshot.readme_text, self.readme_char_limit).to_string(),
        }
    }
}

fn is_hidden(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|name| name.starts_with('.'))
}

/// First `limit` characters of `text`. A hard cut, not sentence-aware.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RepoEntry;

    fn snapshot(entries: Vec<RepoEntry>, readme: &str) -> RawRepositorySnapshot {
        RawRepositorySnapshot {
            entries,
            readme_text: readme.to_string(),
        }
    }

    #[test]
    fn drops_directories_and_excluded_files_in_order() {
        let snap = snapshot(
            vec![
                RepoEntry::file("README.md"),
                RepoEntry::directory("src"),
                RepoEntry::file("logo.png"),
                RepoEntry::file("main.py"),
                RepoEntry::file("poetry.lock"),
                RepoEntry::directory("docs.png"),
                RepoEntry::file("Dockerfile"),
            ],
            "",
        );

        let payload = FilterPolicy::default().apply(&snap);
        assert_eq!(payload.entries, vec!["README.md", "main.py", "Dockerfile"]);
    }

    #[test]
    fn fifty_file_root_with_long_readme() {
        let mut entries = Vec::new();
        for i in 0..3 {
            entries.push(RepoEntry::file(format!("image{i}.png")));
        }
        entries.push(RepoEntry::file("uv.lock"));
        for i in 0..46 {
            let ext = if i % 2 == 0 { "py" } else { "md" };
            entries.push(RepoEntry::file(format!("file{i}.{ext}")));
        }
        assert_eq!(entries.len(), 50);

        let readme = "a".repeat(10_000);
        let payload = FilterPolicy::default().apply(&snapshot(entries, &readme));

        assert_eq!(payload.entries.len(), 46);
        assert!(payload.entries.iter().all(|p| !p.ends_with(".png") && !p.ends_with(".lock")));
        assert_eq!(payload.entries.first().map(String::as_str), Some("file0.py"));
        assert_eq!(payload.entries.last().map(String::as_str), Some("file45.md"));
        assert_eq!(payload.readme_excerpt.chars().count(), 5000);
    }

    #[test]
    fn short_readme_passes_through() {
        let payload = FilterPolicy::default().apply(&snapshot(vec![], "# Title\nshort"));
        assert_eq!(payload.readme_excerpt, "# Title\nshort");
        assert!(payload.entries.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_payload() {
        let payload = FilterPolicy::default().apply(&RawRepositorySnapshot::default());
        assert_eq!(payload, FilteredPayload::default());
    }

    #[test]
    fn hidden_files_are_kept_unless_configured() {
        let snap = snapshot(
            vec![RepoEntry::file(".gitignore"), RepoEntry::file("app.rs")],
            "",
        );

        let keep = FilterPolicy::default().apply(&snap);
        assert_eq!(keep.entries, vec![".gitignore", "app.rs"]);

        let skip = FilterPolicy {
            skip_hidden: true,
            ..FilterPolicy::default()
        }
        .apply(&snap);
        assert_eq!(skip.entries, vec!["app.rs"]);
    }

    #[test]
    fn filtering_is_deterministic() {
        let snap = snapshot(
            vec![RepoEntry::file("a.rs"), RepoEntry::file("b.gif"), RepoEntry::file("c.toml")],
            &"x".repeat(6000),
        );
        let policy = FilterPolicy::default();
        assert_eq!(policy.apply(&snap), policy.apply(&snap));
    }

    #[test]
    fn policy_from_config_uses_overrides() {
        let config = FilterConfig {
            readme_char_limit: 4,
            extension_overrides: [("md".to_string(), true)].into_iter().collect(),
            skip_hidden: false,
        };
        let policy = FilterPolicy::from(&config);
        let payload = policy.apply(&snapshot(
            vec![RepoEntry::file("NOTES.md"), RepoEntry::file("lib.rs")],
            "abcdefgh",
        ));
        assert_eq!(payload.entries, vec!["lib.rs"]);
        assert_eq!(payload.readme_excerpt, "abcd");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo");
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
        assert_eq!(truncate_chars("", 5), "");
    }
}
