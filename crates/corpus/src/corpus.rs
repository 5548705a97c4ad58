use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use once_cell::sync::OnceCell;

use crate::chapter::{build_chapter, GreekChapter, GreekSection};
use crate::config::CorpusConfig;
use crate::error::{CorpusError, Result};
use crate::lexicon::{Lexicon, PronunciationIndex};
use crate::source::{CorpusSource, FileSource, RowIter};
use crate::strongs::{StrongsDefinition, StrongsNumber};
use crate::translation::{TranslationIndex, TranslationMode};
use crate::tsv::Row;

/// Repository over one corpus source.
///
/// The word table, translation index and enriched lexicon are loaded at most
/// once; chapters are cached per `(book, chapter)` for the repository's
/// lifetime.
pub struct Corpus {
    source: Arc<dyn CorpusSource>,
    word_table: OnceCell<Vec<Row>>,
    translations: OnceCell<TranslationIndex>,
    lexicon: OnceCell<Lexicon>,
    chapters: Mutex<HashMap<(u32, u32), Arc<GreekChapter>>>,
    chapter_builds: AtomicUsize,
}

impl std::fmt::Debug for Corpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Corpus")
            .field("word_table_loaded", &self.word_table.get().is_some())
            .field("translations_loaded", &self.translations.get().is_some())
            .field("lexicon_loaded", &self.lexicon.get().is_some())
            .field("chapter_builds", &self.chapter_builds())
            .finish()
    }
}

impl Corpus {
    pub fn new(source: impl CorpusSource + 'static) -> Self {
        Self::from_shared(Arc::new(source))
    }

    pub fn from_shared(source: Arc<dyn CorpusSource>) -> Self {
        Self {
            source,
            word_table: OnceCell::new(),
            translations: OnceCell::new(),
            lexicon: OnceCell::new(),
            chapters: Mutex::new(HashMap::new()),
            chapter_builds: AtomicUsize::new(0),
        }
    }

    /// Corpus over the data files named by `config`
    pub fn open(config: CorpusConfig) -> Result<Self> {
        Ok(Self::new(FileSource::new(config)?))
    }

    /// Lazy, restartable word rows straight from the source
    pub fn word_rows(&self) -> Result<RowIter<'_>> {
        self.source.word_rows()
    }

    /// Lazy, restartable translation rows straight from the source
    pub fn translation_rows(&self) -> Result<RowIter<'_>> {
        self.source.translation_rows()
    }

    /// Every word row in file order, loaded once
    pub fn word_table(&self) -> Result<&[Row]> {
        let rows = self.word_table.get_or_try_init(|| {
            let rows = self.source.word_rows()?.collect::<Result<Vec<_>>>()?;
            log::info!("Loaded {} word rows", rows.len());
            Ok::<_, CorpusError>(rows)
        })?;
        Ok(rows)
    }

    /// Clause translations keyed by normalized clause id, loaded once
    pub fn translations(&self) -> Result<&TranslationIndex> {
        self.translations.get_or_try_init(|| {
            let index = TranslationIndex::from_rows(self.source.translation_rows()?)?;
            log::info!("Loaded {} clause translations", index.len());
            Ok(index)
        })
    }

    /// The dictionary as shipped, without pronunciations
    pub fn lexicon_raw(&self) -> Result<Lexicon> {
        let (prefix, suffix) = self.source.lexicon_markers();
        Lexicon::from_script(&self.source.lexicon_text()?, prefix, suffix)
    }

    /// Dictionary enriched with pronunciations, loaded once
    pub fn lexicon(&self) -> Result<&Lexicon> {
        self.lexicon.get_or_try_init(|| {
            let mut lexicon = self.lexicon_raw()?;
            let dump = PronunciationIndex::parse(&self.source.pronunciation_text()?);
            if dump.warnings() > 0 {
                log::warn!(
                    "Pronunciation dump: {} entries with an unexpected header line",
                    dump.warnings()
                );
            }
            lexicon.enrich_with_pronunciation(&dump);
            Ok(lexicon)
        })
    }

    /// Chapter `chapter` of book `book`, built on first request
    pub fn chapter(&self, book: u32, chapter: u32) -> Result<Arc<GreekChapter>> {
        let mut chapters = self.chapters.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = chapters.get(&(book, chapter)) {
            log::debug!("Chapter {book}:{chapter} served from cache");
            return Ok(Arc::clone(cached));
        }

        log::debug!("Building chapter {book}:{chapter}");
        self.chapter_builds.fetch_add(1, Ordering::Relaxed);
        let built = Arc::new(build_chapter(self.word_table()?, book, chapter)?);
        chapters.insert((book, chapter), Arc::clone(&built));
        Ok(built)
    }

    /// Verses `start..end` of a chapter
    pub fn section(&self, book: u32, chapter: u32, start: usize, end: usize) -> Result<GreekSection> {
        Ok(self.chapter(book, chapter)?.slice(start, end))
    }

    /// Rendered text of a whole chapter
    pub fn chapter_text(&self, book: u32, chapter: u32, mode: TranslationMode) -> Result<String> {
        let chapter = self.chapter(book, chapter)?;
        Ok(chapter.text(mode, self.translations()?))
    }

    /// Resolve a Strong's identifier (`5547`, `"5547"`, `"G5547"`)
    pub fn resolve_strongs<Q>(&self, query: Q) -> Result<StrongsDefinition>
    where
        Q: TryInto<StrongsNumber, Error = CorpusError>,
    {
        let number = query.try_into()?;
        Ok(StrongsDefinition::resolve(self.lexicon()?, number))
    }

    /// Number of chapter builds, i.e. cache misses
    pub fn chapter_builds(&self) -> usize {
        self.chapter_builds.load(Ordering::Relaxed)
    }
}
