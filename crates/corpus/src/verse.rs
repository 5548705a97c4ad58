use serde::Serialize;

use crate::error::{CorpusError, Result};
use crate::translation::{TranslationIndex, TranslationMode};
use crate::word::{GreekWord, Location};

/// Words of a single verse, in corpus order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GreekVerse {
    location: Location,
    words: Vec<GreekWord>,
}

impl GreekVerse {
    /// Fails unless `words` is non-empty and every word has the same location
    pub fn new(words: Vec<GreekWord>) -> Result<Self> {
        let Some(first) = words.first() else {
            return Err(CorpusError::validation("a verse needs at least one word"));
        };
        let location = first.location;
        if let Some(stray) = words.iter().find(|w| w.location != location) {
            return Err(CorpusError::validation(format!(
                "all words must be in the same verse: {}:{}:{} vs {}:{}:{}",
                location.book,
                location.chapter,
                location.verse,
                stray.book(),
                stray.chapter(),
                stray.verse()
            )));
        }
        Ok(Self { location, words })
    }

    pub fn book(&self) -> u32 {
        self.location.book
    }

    pub fn chapter(&self) -> u32 {
        self.location.chapter
    }

    pub fn verse_num(&self) -> u32 {
        self.location.verse
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn words(&self) -> &[GreekWord] {
        &self.words
    }

    /// Words reordered by their simplified-translation sort key
    pub fn words_in_simplified_order(&self) -> Vec<&GreekWord> {
        let mut words: Vec<&GreekWord> = self.words.iter().collect();
        words.sort_by(|a, b| a.sort.simplified.cmp(&b.sort.simplified));
        words
    }

    /// Normalized clause ids feeding `mode`, deduplicated per the mode's policy
    pub fn clause_ids(&self, mode: TranslationMode) -> Vec<String> {
        let words = match mode {
            TranslationMode::Simplified => self.words_in_simplified_order(),
            TranslationMode::Literal | TranslationMode::Idiomatic => self.words.iter().collect(),
        };
        mode.dedup_policy()
            .apply(words.into_iter().map(GreekWord::clause_key))
    }

    pub fn text(&self, mode: TranslationMode, translations: &TranslationIndex) -> String {
        let ids = self.clause_ids(mode);
        translations.assemble(ids.iter().map(String::as_str), mode)
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

/// Split words into verses wherever the verse number changes.
///
/// Rows are expected to be grouped by verse already; order is kept as is.
pub fn group_into_verses(words: Vec<GreekWord>) -> Result<Vec<GreekVerse>> {
    let mut verses = Vec::new();
    let mut current: Vec<GreekWord> = Vec::new();
    for word in words {
        if current.last().is_some_and(|w| w.verse() != word.verse()) {
            verses.push(GreekVerse::new(std::mem::take(&mut current))?);
        }
        current.push(word);
    }
    if !current.is_empty() {
        verses.push(GreekVerse::new(current)?);
    }
    Ok(verses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsv::Row;
    use crate::word::fixtures::word_row;
    use std::collections::HashSet;

    fn word(sort: u32, clause: &str, verse: u32, st_sort: u32) -> GreekWord {
        GreekWord::from_row(&word_row(sort, clause, (40, 1, verse), st_sort, "λόγος")).unwrap()
    }

    fn translations() -> TranslationIndex {
        let rows: Vec<Result<Row>> = [
            ["c1", "it-one", "lt-one", "st-one"],
            ["c2", "it-two", "lt-two", "st-two"],
            ["c3", "it-three", "lt-three", "st-three"],
        ]
        .iter()
        .map(|r| Ok(r.iter().map(|c| c.to_string()).collect()))
        .collect();
        TranslationIndex::from_rows(rows).unwrap()
    }

    #[test]
    fn mixed_locations_are_rejected() {
        let err = GreekVerse::new(vec![word(1, "c1", 1, 1), word(2, "c1", 2, 2)]).unwrap_err();
        assert!(matches!(err, CorpusError::Validation(_)));
        assert!(GreekVerse::new(Vec::new()).is_err());
    }

    #[test]
    fn simplified_follows_sort_key_with_stable_dedup() {
        let verse = GreekVerse::new(vec![
            word(1, "C1", 1, 30),
            word(2, "c2", 1, 10),
            word(3, "c3", 1, 20),
            word(4, "c2", 1, 40),
        ])
        .unwrap();

        assert_eq!(verse.clause_ids(TranslationMode::Simplified), vec!["c2", "c3", "c1"]);
        let index = translations();
        let first = verse.simplified(&index);
        assert_eq!(first, "st-two st-three st-one ");
        assert_eq!(verse.simplified(&index), first);
        // the verse itself keeps corpus order
        assert_eq!(verse.words()[0].clause_id, "C1");
    }

    #[test]
    fn simplified_order_compares_keys_as_text() {
        let verse = GreekVerse::new(vec![word(1, "c2", 1, 2), word(2, "c1", 1, 10)]).unwrap();

        assert_eq!(verse.clause_ids(TranslationMode::Simplified), vec!["c1", "c2"]);
        assert_eq!(verse.simplified(&translations()), "st-one st-two ");
    }

    #[test]
    fn literal_and_idiomatic_cover_each_clause_once() {
        let verse = GreekVerse::new(vec![
            word(1, "c1", 1, 1),
            word(2, "c2", 1, 2),
            word(3, "c1", 1, 3),
            word(4, "missing", 1, 4),
        ])
        .unwrap();
        let index = translations();

        let literal: HashSet<String> = verse
            .literal(&index)
            .split_whitespace()
            .map(str::to_string)
            .collect();
        assert_eq!(literal, HashSet::from(["it-one".to_string(), "it-two".to_string()]));

        let idiomatic = verse.idiomatic(&index);
        assert_eq!(idiomatic.len(), "lt-one lt-two ".len());
        assert!(idiomatic.contains("lt-one ") && idiomatic.contains("lt-two "));
    }

    #[test]
    fn grouping_splits_on_verse_transitions() {
        let verses = group_into_verses(vec![
            word(1, "c1", 1, 1),
            word(2, "c1", 1, 2),
            word(3, "c2", 2, 1),
            word(4, "c3", 3, 1),
            word(5, "c3", 3, 2),
        ])
        .unwrap();

        let shape: Vec<(u32, usize)> = verses.iter().map(|v| (v.verse_num(), v.words().len())).collect();
        assert_eq!(shape, vec![(1, 2), (2, 1), (3, 2)]);
        assert!(group_into_verses(Vec::new()).unwrap().is_empty());
    }
}
