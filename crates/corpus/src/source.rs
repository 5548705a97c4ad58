//! Raw inputs of the corpus.
//!
//! Every call re-opens its input, so row iterators are restartable and never
//! exhaust the underlying file.

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

use crate::config::CorpusConfig;
use crate::error::{CorpusError, Result};
use crate::tsv::{Row, TsvRows};

/// Boxed lazy row iterator
pub type RowIter<'a> = Box<dyn Iterator<Item = Result<Row>> + Send + 'a>;

/// Supplier of the four raw data inputs
pub trait CorpusSource: Send + Sync {
    /// Word-level corpus rows in file order
    fn word_rows(&self) -> Result<RowIter<'_>>;

    /// Clause translation rows in file order
    fn translation_rows(&self) -> Result<RowIter<'_>>;

    /// Full text of the Strong's dictionary script
    fn lexicon_text(&self) -> Result<String>;

    /// Full text of the pronunciation dump
    fn pronunciation_text(&self) -> Result<String>;

    /// Marker pair surrounding the lexicon JSON
    fn lexicon_markers(&self) -> (&str, &str);
}

/// Reads the data files named by a [`CorpusConfig`]
#[derive(Debug, Clone)]
pub struct FileSource {
    config: CorpusConfig,
}

impl FileSource {
    pub fn new(config: CorpusConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    fn open_rows(path: &Path) -> Result<RowIter<'static>> {
        let file = File::open(path).map_err(|e| CorpusError::io(path, e))?;
        log::debug!("Opened {}", path.display());
        Ok(Box::new(TsvRows::new(BufReader::new(file))))
    }

    fn read_text(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))
    }
}

impl CorpusSource for FileSource {
    fn word_rows(&self) -> Result<RowIter<'_>> {
        Self::open_rows(&self.config.word_path())
    }

    fn translation_rows(&self) -> Result<RowIter<'_>> {
        Self::open_rows(&self.config.translation_path())
    }

    fn lexicon_text(&self) -> Result<String> {
        Self::read_text(&self.config.lexicon_path())
    }

    fn pronunciation_text(&self) -> Result<String> {
        Self::read_text(&self.config.pronunciation_path())
    }

    fn lexicon_markers(&self) -> (&str, &str) {
        (&self.config.lexicon_prefix, &self.config.lexicon_suffix)
    }
}

/// In-memory inputs, for fixtures and embedding
#[derive(Debug, Clone)]
pub struct MemorySource {
    words: String,
    translations: String,
    lexicon: String,
    pronunciations: String,
    prefix: String,
    suffix: String,
}

impl MemorySource {
    pub fn new(
        words: impl Into<String>,
        translations: impl Into<String>,
        lexicon: impl Into<String>,
        pronunciations: impl Into<String>,
    ) -> Self {
        let defaults = CorpusConfig::default();
        Self {
            words: words.into(),
            translations: translations.into(),
            lexicon: lexicon.into(),
            pronunciations: pronunciations.into(),
            prefix: defaults.lexicon_prefix,
            suffix: defaults.lexicon_suffix,
        }
    }
}

impl CorpusSource for MemorySource {
    fn word_rows(&self) -> Result<RowIter<'_>> {
        Ok(Box::new(TsvRows::new(Cursor::new(self.words.as_bytes()))))
    }

    fn translation_rows(&self) -> Result<RowIter<'_>> {
        Ok(Box::new(TsvRows::new(Cursor::new(
            self.translations.as_bytes(),
        ))))
    }

    fn lexicon_text(&self) -> Result<String> {
        Ok(self.lexicon.clone())
    }

    fn pronunciation_text(&self) -> Result<String> {
        Ok(self.pronunciations.clone())
    }

    fn lexicon_markers(&self) -> (&str, &str) {
        (&self.prefix, &self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_iterators_restart() {
        let source = MemorySource::new("a\tb\nc\td\n", "", "", "");
        let first: Vec<Row> = source.word_rows().unwrap().map(|r| r.unwrap()).collect();
        let second: Vec<Row> = source.word_rows().unwrap().map(|r| r.unwrap()).collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = FileSource::new(CorpusConfig::with_data_dir("/nonexistent/ognt")).unwrap();
        let result = source.word_rows();
        match result {
            Err(CorpusError::Io { path, .. }) => {
                assert!(path.ends_with("OpenGNT_version3_3.csv"))
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected an IO error"),
        }
    }
}
