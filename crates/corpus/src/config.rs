use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CorpusError, Result};

/// Environment variable overriding [`CorpusConfig::data_dir`]
pub const DATA_DIR_ENV: &str = "OGNT_DATA_DIR";

/// Location of the four data files and the markers of the lexicon script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Directory holding the data files
    pub data_dir: PathBuf,

    /// Word-level corpus (tab separated, 13 columns)
    pub word_file: String,

    /// Clause translation table (tab separated)
    pub translation_file: String,

    /// Strong's dictionary embedded in a JavaScript assignment
    pub lexicon_file: String,

    /// Text dump carrying pronunciations
    pub pronunciation_file: String,

    /// Text preceding the JSON object in the lexicon file
    pub lexicon_prefix: String,

    /// Text following the JSON object in the lexicon file
    pub lexicon_suffix: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            word_file: "OpenGNT_version3_3.csv".to_string(),
            translation_file: "OpenGNT_TranslationByClause.csv".to_string(),
            lexicon_file: "strongs-greek-dictionary.js".to_string(),
            pronunciation_file: "strongsgreek.dat".to_string(),
            lexicon_prefix: "var strongsGreekDictionary = ".to_string(),
            lexicon_suffix: "; module.exports = strongsGreekDictionary;".to_string(),
        }
    }
}

impl CorpusConfig {
    /// Default file names under `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// Load a TOML file; missing keys keep their defaults
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| CorpusError::config(e.to_string()))
    }

    /// Apply `OGNT_DATA_DIR` if set
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        self
    }

    pub fn word_path(&self) -> PathBuf {
        self.data_dir.join(&self.word_file)
    }

    pub fn translation_path(&self) -> PathBuf {
        self.data_dir.join(&self.translation_file)
    }

    pub fn lexicon_path(&self) -> PathBuf {
        self.data_dir.join(&self.lexicon_file)
    }

    pub fn pronunciation_path(&self) -> PathBuf {
        self.data_dir.join(&self.pronunciation_file)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("word_file", &self.word_file),
            ("translation_file", &self.translation_file),
            ("lexicon_file", &self.lexicon_file),
            ("pronunciation_file", &self.pronunciation_file),
            ("lexicon_prefix", &self.lexicon_prefix),
            ("lexicon_suffix", &self.lexicon_suffix),
        ];
        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(CorpusError::config(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}
