use serde::Serialize;

use crate::error::{CorpusError, Result};
use crate::translation::{TranslationIndex, TranslationMode};
use crate::tsv::Row;
use crate::verse::{group_into_verses, GreekVerse};
use crate::word::{GreekWord, Location};

fn common_chapter(verses: &[GreekVerse]) -> Result<(u32, u32)> {
    let Some(first) = verses.first() else {
        return Err(CorpusError::validation("at least one verse is required"));
    };
    let key = (first.book(), first.chapter());
    if let Some(stray) = verses.iter().find(|v| (v.book(), v.chapter()) != key) {
        return Err(CorpusError::validation(format!(
            "all verses must be in the same chapter: {}:{} vs {}:{}",
            key.0,
            key.1,
            stray.book(),
            stray.chapter()
        )));
    }
    Ok(key)
}

fn concat_text(verses: &[GreekVerse], mode: TranslationMode, translations: &TranslationIndex) -> String {
    verses.iter().map(|v| v.text(mode, translations)).collect()
}

/// A contiguous run of verses from one chapter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GreekSection {
    book: u32,
    chapter: u32,
    verses: Vec<GreekVerse>,
}

impl GreekSection {
    /// Fails unless `verses` is non-empty and shares one book and chapter
    pub fn new(verses: Vec<GreekVerse>) -> Result<Self> {
        let (book, chapter) = common_chapter(&verses)?;
        Ok(Self {
            book,
            chapter,
            verses,
        })
    }

    pub fn book(&self) -> u32 {
        self.book
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    pub fn verses(&self) -> &[GreekVerse] {
        &self.verses
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Every word of the section, verse by verse
    pub fn words(&self) -> impl Iterator<Item = &GreekWord> + '_ {
        self.verses.iter().flat_map(|v| v.words())
    }

    pub fn text(&self, mode: TranslationMode, translations: &TranslationIndex) -> String {
        concat_text(&self.verses, mode, translations)
    }

    pub fn literal(&self, translations: &TranslationIndex) -> String {
        self.text(TranslationMode::Literal, translations)
    }

    pub fn idiomatic(&self, translations: &TranslationIndex) -> String {
        self.text(TranslationMode::Idiomatic, translations)
    }

    pub fn simplified(&self, translations: &TranslationIndex) -> String {
        self.text(TranslationMode::Simplified, translations)
    }
}

/// All verses of one canonical chapter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GreekChapter {
    book: u32,
    chapter: u32,
    verses: Vec<GreekVerse>,
}

impl GreekChapter {
    /// Fails unless `verses` is non-empty and shares one book and chapter
    pub fn new(verses: Vec<GreekVerse>) -> Result<Self> {
        let (book, chapter) = common_chapter(&verses)?;
        Ok(Self {
            book,
            chapter,
            verses,
        })
    }

    pub fn book(&self) -> u32 {
        self.book
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    pub fn verses(&self) -> &[GreekVerse] {
        &self.verses
    }

    /// Verse with the given verse number
    pub fn verse(&self, verse_num: u32) -> Option<&GreekVerse> {
        self.verses.iter().find(|v| v.verse_num() == verse_num)
    }

    /// Verses at indices `start..end`, clamped to the chapter like a slice
    pub fn slice(&self, start: usize, end: usize) -> GreekSection {
        let end = end.min(self.verses.len());
        let start = start.min(end);
        GreekSection {
            book: self.book,
            chapter: self.chapter,
            verses: self.verses[start..end].to_vec(),
        }
    }

    /// The whole chapter as a section
    pub fn as_section(&self) -> GreekSection {
        self.slice(0, self.verses.len())
    }

    pub fn text(&self, mode: TranslationMode, translations: &TranslationIndex) -> String {
        concat_text(&self.verses, mode, translations)
    }

    pub fn literal(&self, translations: &TranslationIndex) -> String {
        self.text(TranslationMode::Literal, translations)
    }

    pub fn idiomatic(&self, translations: &TranslationIndex) -> String {
        self.text(TranslationMode::Idiomatic, translations)
    }

    pub fn simplified(&self, translations: &TranslationIndex) -> String {
        self.text(TranslationMode::Simplified, translations)
    }
}

/// Build one chapter from the full word table, keeping file order
pub fn build_chapter(rows: &[Row], book: u32, chapter: u32) -> Result<GreekChapter> {
    let mut words = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        let location = Location::from_row(row);
        if location.book != book || location.chapter != chapter {
            continue;
        }
        words.push(GreekWord::from_row(row).map_err(|e| e.at_line(i + 1))?);
    }
    if words.is_empty() {
        return Err(CorpusError::not_found(format!(
            "chapter {chapter} not found in book {book}"
        )));
    }
    log::debug!("Chapter {book}:{chapter}: {} words", words.len());
    GreekChapter::new(group_into_verses(words)?)
}
