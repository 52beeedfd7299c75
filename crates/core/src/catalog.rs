//! Block catalog loading and block reference checks.
//!
//! The catalog is read once per session from a [`CatalogSource`] and is
//! read-only afterwards. When it cannot be loaded, or turns out to be empty,
//! block references are accepted unchecked and the session warns once.

use std::fs::File;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use indexmap::IndexSet;
use log::{info, warn};
use serde::Deserialize;

use crate::config::NAMESPACE_PREFIX;
use crate::error::{Error, Result};
use crate::fuzzy;

const BUNDLED_BLOCKS: &str = include_str!("../data/blocks.yml");

/// Somewhere the list of canonical block identifiers can be read from.
pub trait CatalogSource {
    /// Loads every block identifier, with or without the namespace prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed.
    fn load_all(&self) -> Result<Vec<String>>;

    /// Human readable name of the source, used in log and warning messages.
    fn describe(&self) -> String;
}

/// Either a bare list of identifiers or a map with a `blocks` list.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<String>),
    Keyed { blocks: Vec<String> },
}

impl CatalogDocument {
    fn into_blocks(self) -> Vec<String> {
        match self {
            CatalogDocument::List(blocks) | CatalogDocument::Keyed { blocks } => blocks,
        }
    }
}

/// A YAML file on disk.
pub struct FileCatalogSource {
    path: String,
}

impl FileCatalogSource {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl CatalogSource for FileCatalogSource {
    fn load_all(&self) -> Result<Vec<String>> {
        let reader = File::open(&self.path)
            .map_err(|e| Error::io_error("block catalog".to_string(), self.path.clone(), e))?;

        let document: CatalogDocument = serde_yaml::from_reader(reader).map_err(|e| {
            Error::yaml_error(
                "reading".to_string(),
                "block catalog".to_string(),
                self.path.clone(),
                e,
            )
        })?;

        Ok(document.into_blocks())
    }

    fn describe(&self) -> String {
        self.path.clone()
    }
}

/// The catalog compiled into the binary.
pub struct BundledCatalogSource;

impl CatalogSource for BundledCatalogSource {
    fn load_all(&self) -> Result<Vec<String>> {
        let document: CatalogDocument = serde_yaml::from_str(BUNDLED_BLOCKS).map_err(|e| {
            Error::yaml_error(
                "reading".to_string(),
                "block catalog".to_string(),
                self.describe(),
                e,
            )
        })?;

        Ok(document.into_blocks())
    }

    fn describe(&self) -> String {
        "<bundled>".to_string()
    }
}

/// Strips the namespace prefix and surrounding whitespace from a block reference.
#[must_use]
pub fn normalize_block_id(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_prefix(NAMESPACE_PREFIX).unwrap_or(trimmed)
}

/// Outcome of checking a block reference against the catalog.
#[derive(Debug, PartialEq)]
pub enum BlockCheck<'a> {
    /// The block exists in the catalog.
    Known,
    /// The catalog is unavailable, so the block could not be checked.
    Unchecked,
    /// The block is not in the catalog.
    Unknown {
        suggestions: Vec<&'a str>,
        completions: Vec<&'a str>,
    },
}

/// Canonical (unprefixed) block identifiers, in load order.
#[derive(Debug)]
pub struct BlockCatalog {
    blocks: IndexSet<String>,
    unavailable_reason: Option<String>,
}

impl BlockCatalog {
    /// Loads the catalog from `source`, degrading to an unavailable catalog on failure.
    pub fn load(source: &dyn CatalogSource) -> Self {
        match source.load_all() {
            Ok(blocks) => {
                let catalog = Self::from_blocks(blocks);
                if catalog.is_available() {
                    info!(
                        "Loaded {} blocks from `{}`",
                        catalog.len(),
                        source.describe()
                    );
                    catalog
                } else {
                    let reason = Error::empty_catalog(source.describe()).to_string();
                    warn!("{}", reason);
                    Self::unavailable(reason)
                }
            }
            Err(e) => {
                warn!("Could not load block catalog: {}", e);
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn from_blocks<I, S>(blocks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let blocks: IndexSet<String> = blocks
            .into_iter()
            .map(|block| normalize_block_id(block.as_ref()).to_string())
            .filter(|block| !block.is_empty())
            .collect();

        let unavailable_reason = if blocks.is_empty() {
            Some("The block catalog is empty.".to_string())
        } else {
            None
        };

        Self {
            blocks,
            unavailable_reason,
        }
    }

    pub fn unavailable(reason: String) -> Self {
        Self {
            blocks: IndexSet::new(),
            unavailable_reason: Some(reason),
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.unavailable_reason.is_none()
    }

    /// Why block references are not being checked, if they are not.
    #[must_use]
    pub fn unavailable_reason(&self) -> Option<&str> {
        self.unavailable_reason.as_deref()
    }

    fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn contains(&self, block_id: &str) -> bool {
        self.blocks.contains(normalize_block_id(block_id))
    }

    /// Closest catalog entries by edit distance.
    #[must_use]
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        fuzzy::suggest(
            normalize_block_id(query),
            self.blocks.iter().map(String::as_str),
            limit,
        )
    }

    /// Catalog entries matching `query` as a fuzzy subsequence, best match first.
    #[must_use]
    pub fn complete(&self, query: &str, limit: usize) -> Vec<&str> {
        let matcher = SkimMatcherV2::default();
        let query = normalize_block_id(query);

        let mut scored: Vec<(i64, &str)> = self
            .blocks
            .iter()
            .filter_map(|block| {
                matcher
                    .fuzzy_match(block, query)
                    .map(|score| (score, block.as_str()))
            })
            .collect();

        scored.sort_by(|(s1, _), (s2, _)| s2.cmp(s1));

        scored
            .into_iter()
            .take(limit)
            .map(|(_, block)| block)
            .collect()
    }

    /// Checks a (possibly prefixed) block reference.
    #[must_use]
    pub fn check(&self, block_id: &str, limit: usize) -> BlockCheck<'_> {
        if !self.is_available() {
            return BlockCheck::Unchecked;
        }

        if self.contains(block_id) {
            return BlockCheck::Known;
        }

        let suggestions = self.suggest(block_id, limit);
        let completions = self
            .complete(block_id, self.len())
            .into_iter()
            .filter(|block| !suggestions.contains(block))
            .take(limit)
            .collect();

        BlockCheck::Unknown {
            suggestions,
            completions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    struct FailingSource;

    impl CatalogSource for FailingSource {
        fn load_all(&self) -> Result<Vec<String>> {
            Err(Error::io_error(
                "block catalog".to_string(),
                "nowhere".to_string(),
                std::io::Error::from(std::io::ErrorKind::NotFound),
            ))
        }

        fn describe(&self) -> String {
            "nowhere".to_string()
        }
    }

    fn sample_catalog() -> BlockCatalog {
        BlockCatalog::from_blocks(["stone", "stone_bricks", "dirt", "diamond_block", "diamond_ore"])
    }

    #[test]
    fn test_normalize_block_id() {
        assert_eq!(normalize_block_id("minecraft:stone"), "stone");
        assert_eq!(normalize_block_id("  stone "), "stone");
        assert_eq!(normalize_block_id("mymod:stone"), "mymod:stone");
    }

    #[test]
    fn test_from_blocks_normalizes_and_dedupes() {
        let catalog = BlockCatalog::from_blocks(["minecraft:stone", "stone", "dirt", ""]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("stone"));
        assert!(catalog.contains("minecraft:dirt"));
    }

    #[test]
    fn test_empty_catalog_is_unavailable() {
        let catalog = BlockCatalog::from_blocks(Vec::<String>::new());
        assert!(!catalog.is_available());
        assert_eq!(catalog.check("anything", 5), BlockCheck::Unchecked);
    }

    #[test]
    fn test_failed_load_is_unavailable() {
        let catalog = BlockCatalog::load(&FailingSource);
        assert!(!catalog.is_available());
        assert!(catalog.unavailable_reason().unwrap().contains("nowhere"));
    }

    #[test]
    fn test_check_known_and_unknown() {
        let catalog = sample_catalog();
        assert_eq!(catalog.check("minecraft:diamond_block", 5), BlockCheck::Known);

        match catalog.check("ston", 2) {
            BlockCheck::Unknown { suggestions, .. } => {
                assert_eq!(suggestions, vec!["stone", "dirt"]);
            }
            other => panic!("Expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn test_completions_exclude_suggestions() {
        let catalog = sample_catalog();
        match catalog.check("diamond", 1) {
            BlockCheck::Unknown {
                suggestions,
                completions,
            } => {
                assert_eq!(suggestions.len(), 1);
                assert_eq!(completions.len(), 1);
                assert!(completions[0].starts_with("diamond"));
                assert!(!suggestions.contains(&completions[0]));
            }
            other => panic!("Expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = BlockCatalog::load(&BundledCatalogSource);
        assert!(catalog.is_available());
        assert!(catalog.contains("diamond_block"));
        assert!(catalog.contains("stone"));
    }

    #[test]
    fn test_file_catalog_plain_list() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "- stone\n- minecraft:dirt\n").unwrap();
        let source = FileCatalogSource::new(temp_file.path().to_str().unwrap().to_string());

        let catalog = BlockCatalog::load(&source);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("dirt"));
    }

    #[test]
    fn test_file_catalog_keyed_list() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "blocks:\n  - glass\n  - sand\n").unwrap();
        let source = FileCatalogSource::new(temp_file.path().to_str().unwrap().to_string());

        let blocks = source.load_all().unwrap();
        assert_eq!(blocks, vec!["glass", "sand"]);
    }

    #[test]
    fn test_file_catalog_invalid_yaml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "invalid: yaml: content: [").unwrap();
        let source = FileCatalogSource::new(temp_file.path().to_str().unwrap().to_string());

        assert!(matches!(source.load_all(), Err(Error::Yaml { .. })));
        assert!(!BlockCatalog::load(&source).is_available());
    }

    #[test]
    fn test_file_catalog_missing_file() {
        let source = FileCatalogSource::new("/this/path/does/not/exist.yml".to_string());
        assert!(matches!(source.load_all(), Err(Error::Io { .. })));
    }
}
