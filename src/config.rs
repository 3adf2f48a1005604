//! Index configuration: where the content lives and which collections to scan.
//!
//! Values are layered in three steps. Built-in defaults describe the usual
//! site layout (`./content` with `articles`, `teams` and `services`), an
//! optional YAML file may override any of them, and command-line flags
//! override both.
//!
//! ```yaml
//! content_dir: ./site/content
//! output_file: index.json
//! collections: [articles, teams, services, events]
//! sort: true
//! ```

use itertools::Itertools;
use serde::Deserialize;
use std::error::Error;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

use crate::error::IndexError;

pub const DEFAULT_CONTENT_DIR: &str = "./content";
pub const DEFAULT_OUTPUT_FILE: &str = "index.json";
pub const DEFAULT_COLLECTIONS: [&str; 3] = ["articles", "teams", "services"];

/// Fully resolved configuration for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Root directory holding the collection folders and the index file.
    pub content_dir: PathBuf,
    /// Name of the index file, relative to `content_dir`.
    pub output_file: String,
    /// Collection names, in the order they appear in the index.
    pub collections: Vec<String>,
    /// Sort file names inside each collection instead of keeping listing order.
    pub sort: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            collections: DEFAULT_COLLECTIONS.iter().map(|c| c.to_string()).collect(),
            sort: false,
        }
    }
}

/// Partial configuration, as read from a YAML file or assembled from CLI flags.
///
/// Every field is optional; unset fields leave the layer below untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub content_dir: Option<PathBuf>,
    pub output_file: Option<String>,
    pub collections: Option<Vec<String>>,
    pub sort: Option<bool>,
}

impl ConfigOverrides {
    /// Parse overrides from YAML text. An empty document yields no overrides.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Load overrides from a YAML file.
    #[instrument(level = "debug")]
    pub async fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path).await.map_err(|e| IndexError::ReadConfig {
            path: path.to_path_buf(),
            source: e,
        })?;
        let overrides = Self::from_yaml(&text).map_err(|e| IndexError::ParseConfig {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(?overrides, "Loaded configuration file");
        Ok(overrides)
    }
}

impl IndexConfig {
    /// Apply `overrides` on top of this configuration.
    pub fn extends(self, overrides: ConfigOverrides) -> Self {
        Self {
            content_dir: overrides.content_dir.unwrap_or(self.content_dir),
            output_file: overrides.output_file.unwrap_or(self.output_file),
            collections: overrides
                .collections
                .map(normalize_collections)
                .unwrap_or(self.collections),
            sort: overrides.sort.unwrap_or(self.sort),
        }
    }

    /// Check that the resolved values can be used for a run.
    ///
    /// The output file must be a plain file name: absolute paths, separators
    /// and `.`/`..` would place the index outside the content root.
    pub fn validate(&self) -> Result<(), IndexError> {
        if Path::new(&self.output_file).file_name() != Some(OsStr::new(&self.output_file)) {
            return Err(IndexError::InvalidOutputFile {
                name: self.output_file.clone(),
            });
        }
        Ok(())
    }

    /// Full path of the index file.
    pub fn output_path(&self) -> PathBuf {
        self.content_dir.join(&self.output_file)
    }
}

/// Trim names, drop empty ones and remove duplicates, keeping the first occurrence.
pub fn normalize_collections(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_site_layout() {
        let config = IndexConfig::default();
        assert_eq!(config.content_dir, PathBuf::from("./content"));
        assert_eq!(config.output_path(), PathBuf::from("./content/index.json"));
        assert_eq!(config.collections, vec!["articles", "teams", "services"]);
        assert!(!config.sort);
    }

    #[test]
    fn test_extends_only_overrides_given_fields() {
        let overrides = ConfigOverrides {
            content_dir: Some(PathBuf::from("/srv/site")),
            sort: Some(true),
            ..Default::default()
        };
        let config = IndexConfig::default().extends(overrides);
        assert_eq!(config.content_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.output_file, "index.json");
        assert_eq!(config.collections, vec!["articles", "teams", "services"]);
        assert!(config.sort);
    }

    #[test]
    fn test_later_layers_win() {
        let file = ConfigOverrides {
            output_file: Some("from-file.json".to_string()),
            collections: Some(vec!["events".to_string()]),
            ..Default::default()
        };
        let cli = ConfigOverrides {
            output_file: Some("from-cli.json".to_string()),
            ..Default::default()
        };
        let config = IndexConfig::default().extends(file).extends(cli);
        assert_eq!(config.output_file, "from-cli.json");
        assert_eq!(config.collections, vec!["events"]);
    }

    #[test]
    fn test_normalize_collections() {
        let names = vec![
            " articles ".to_string(),
            "".to_string(),
            "teams".to_string(),
            "articles".to_string(),
            "   ".to_string(),
        ];
        assert_eq!(normalize_collections(names), vec!["articles", "teams"]);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "content_dir: ./site\ncollections: [news, people]\nsort: true\n";
        let overrides = ConfigOverrides::from_yaml(yaml).unwrap();
        assert_eq!(overrides.content_dir, Some(PathBuf::from("./site")));
        assert_eq!(
            overrides.collections,
            Some(vec!["news".to_string(), "people".to_string()])
        );
        assert_eq!(overrides.sort, Some(true));
        assert_eq!(overrides.output_file, None);
    }

    #[test]
    fn test_from_yaml_empty_document() {
        assert_eq!(
            ConfigOverrides::from_yaml("\n").unwrap(),
            ConfigOverrides::default()
        );
    }

    #[test]
    fn test_from_yaml_rejects_unknown_keys() {
        assert!(ConfigOverrides::from_yaml("colections: [a]\n").is_err());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output_file: manifest.json").unwrap();
        let overrides = ConfigOverrides::load(file.path()).await.unwrap();
        assert_eq!(overrides.output_file.as_deref(), Some("manifest.json"));
    }

    #[tokio::test]
    async fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        let err = ConfigOverrides::load(&path).await.unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
    }

    fn with_output_file(name: &str) -> IndexConfig {
        IndexConfig::default().extends(ConfigOverrides {
            output_file: Some(name.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_validate_accepts_plain_file_names() {
        for name in ["index.json", "manifest.v2.json", ".index.json"] {
            assert!(with_output_file(name).validate().is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn test_validate_rejects_paths_outside_content_dir() {
        let outside = std::env::temp_dir().join("outside.json");
        let outside = outside.to_string_lossy().into_owned();
        for name in [outside.as_str(), "sub/index.json", "../index.json", "..", ".", ""] {
            let err = with_output_file(name).validate().unwrap_err();
            assert!(
                matches!(err, IndexError::InvalidOutputFile { .. }),
                "{name:?} should be rejected"
            );
        }
    }
}
