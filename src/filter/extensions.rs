//! Extension deny table.
//!
//! A pure per-extension lookup: `extension → excluded`. The built-in rows
//! cover binary images, dependency lock files and compiled/archived blobs;
//! config can add rows or flip existing ones.

use std::collections::HashMap;
use std::path::Path;

/// Built-in rows. Keys are lowercase and carry no leading dot.
pub const DEFAULT_EXTENSION_TABLE: &[(&str, bool)] = &[
    // Images
    ("png", true),
    ("jpg", true),
    ("jpeg", true),
    ("gif", true),
    ("svg", true),
    ("ico", true),
    ("webp", true),
    ("bmp", true),
    // Dependency pins
    ("lock", true),
    // Archives and compiled artifacts
    ("zip", true),
    ("exe", true),
    ("pyc", true),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionTable {
    rows: HashMap<String, bool>,
}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self {
            rows: DEFAULT_EXTENSION_TABLE
                .iter()
                .map(|(ext, excluded)| (ext.to_string(), *excluded))
                .collect(),
        }
    }
}

impl ExtensionTable {
    /// Built-in table with `overrides` merged on top.
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a bool)>,
    {
        let mut table = Self::default();
        for (ext, excluded) in overrides {
            table.set(ext, *excluded);
        }
        table
    }

    pub fn set(&mut self, extension: &str, excluded: bool) {
        let key = extension.trim().trim_start_matches('.').to_lowercase();
        if !key.is_empty() {
            self.rows.insert(key, excluded);
        }
    }

    /// Whether files with this extension are dropped. Unlisted extensions are kept.
    pub fn is_excluded(&self, extension: &str) -> bool {
        self.rows
            .get(&extension.to_lowercase())
            .copied()
            .unwrap_or(false)
    }

    /// Looks up the extension of the last path component.
    pub fn excludes_path(&self, path: &str) -> bool {
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.is_excluded(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rows_are_excluded() {
        let table = ExtensionTable::default();
        for (ext, _) in DEFAULT_EXTENSION_TABLE {
            assert!(table.is_excluded(ext), "{ext} should be excluded");
        }
        assert!(!table.is_excluded("py"));
        assert!(!table.is_excluded("md"));
    }

    #[test]
    fn path_lookup_is_case_insensitive_and_uses_last_extension() {
        let table = ExtensionTable::default();
        assert!(table.excludes_path("logo.PNG"));
        assert!(table.excludes_path("Cargo.lock"));
        assert!(table.excludes_path("assets/icon.ico"));
        assert!(!table.excludes_path("package-lock.json"));
        assert!(!table.excludes_path("archive.zip.md"));
        assert!(!table.excludes_path("Makefile"));
        assert!(!table.excludes_path(".gitignore"));
    }

    #[test]
    fn overrides_extend_and_flip_rows() {
        let overrides: HashMap<String, bool> = [
            ("pdf".to_string(), true),
            ("svg".to_string(), false),
        ]
        .into_iter()
        .collect();
        let table = ExtensionTable::with_overrides(&overrides);

        assert!(table.excludes_path("paper.pdf"));
        assert!(!table.excludes_path("diagram.svg"));
        assert!(table.excludes_path("photo.jpg"));
    }

    #[test]
    fn set_normalizes_keys() {
        let mut table = ExtensionTable::default();
        table.set(" .WOFF2 ", true);
        table.set("", true);
        assert!(table.excludes_path("font.woff2"));
        assert!(!table.excludes_path("noext"));
    }
}
