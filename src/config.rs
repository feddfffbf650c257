//! Generator configuration.

use crate::error::{DictError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Upstream character -> pinyin table.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/mozillazg/pinyin-data/master/pinyin.txt";

/// Written relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "pinyinDict.json";

/// Character count of the upstream table as of 20 Jul 2024. The real number
/// drifts as upstream grows.
pub const DEFAULT_EXPECTED_CHARACTERS: usize = 41651;

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    /// Where the source table is fetched from
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Where the JSON dictionary is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Fewer characters than this logs an "incomplete" warning
    #[serde(default = "default_expected_min_characters")]
    pub expected_min_characters: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            output_path: default_output_path(),
            expected_min_characters: default_expected_min_characters(),
        }
    }
}

impl GeneratorConfig {
    /// Loads a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| DictError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&text)
            .map_err(|e| DictError::Config(format!("{}: {}", path.display(), e)))
    }
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_expected_min_characters() -> usize {
    DEFAULT_EXPECTED_CHARACTERS
}
