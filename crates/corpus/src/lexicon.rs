//! Strong's Greek dictionary and its pronunciation enrichment.
//!
//! The dictionary ships as a JavaScript file whose single assignment holds a
//! JSON object keyed `G<digits>`. Pronunciations live in a separate text dump
//! where each entry is a block:
//!
//! ```text
//! $$T0005547
//! \05547\
//!  5547  Christos  khris-tos'
//!  ...
//! ```
//!
//! The pronunciation is the last field of the first space-indented line after
//! the backslash header.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CorpusError, Result};

static ENTRY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$\$T(\d{7})\s*$").expect("entry tag regex"));

/// One dictionary item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrongsEntry {
    pub lemma: String,
    pub translit: String,
    pub derivation: String,
    pub strongs_def: String,
    pub kjv_def: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

/// Strong's dictionary keyed `G<digits>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    entries: BTreeMap<String, StrongsEntry>,
}

impl Lexicon {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the JSON object found between `prefix` and `suffix`
    pub fn from_script(text: &str, prefix: &str, suffix: &str) -> Result<Self> {
        Self::from_json(extract_embedded_json(text, prefix, suffix)?)
    }

    pub fn get(&self, key: &str) -> Option<&StrongsEntry> {
        self.entries.get(key)
    }

    pub fn entry(&self, number: u32) -> Option<&StrongsEntry> {
        self.entries.get(&format!("G{number}"))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fill in pronunciations from a parsed dump; returns how many were set.
    ///
    /// Entries whose tag is absent from the dump are left untouched.
    pub fn enrich_with_pronunciation(&mut self, dump: &PronunciationIndex) -> usize {
        let mut enriched = 0;
        for (key, entry) in &mut self.entries {
            let Some(tag) = entry_tag(key) else {
                log::debug!("Skipping lexicon key without a numeric tag: {key}");
                continue;
            };
            if let Some(pron) = dump.get(&tag) {
                entry.pronunciation = Some(pron.to_string());
                enriched += 1;
            }
        }
        log::info!(
            "Enriched {enriched} of {} lexicon entries with pronunciation",
            self.entries.len()
        );
        enriched
    }
}

/// Slice strictly between the first `prefix` and the following `suffix`
pub fn extract_embedded_json<'a>(text: &'a str, prefix: &str, suffix: &str) -> Result<&'a str> {
    let start = text
        .find(prefix)
        .map(|i| i + prefix.len())
        .ok_or_else(|| CorpusError::missing_marker(prefix))?;
    let len = text[start..]
        .find(suffix)
        .ok_or_else(|| CorpusError::missing_marker(suffix))?;
    Ok(&text[start..start + len])
}

/// `$$T` tag for a `G<digits>` key, digits zero-padded to 7
pub fn entry_tag(key: &str) -> Option<String> {
    let digits = key.strip_prefix('G')?;
    let number: u32 = digits.parse().ok()?;
    Some(format!("$$T{number:07}"))
}

/// Pronunciations of the dump keyed by their `$$T0000000` tag
#[derive(Debug, Clone, Default)]
pub struct PronunciationIndex {
    by_tag: HashMap<String, String>,
    warnings: usize,
}

#[derive(Clone, Copy)]
enum BlockState {
    Header,
    Data,
    Done,
}

impl PronunciationIndex {
    pub fn parse(dump: &str) -> Self {
        let mut index = Self::default();
        let mut current: Option<(String, BlockState)> = None;

        for line in dump.lines() {
            if let Some(caps) = ENTRY_TAG.captures(line) {
                current = Some((format!("$$T{}", &caps[1]), BlockState::Header));
                continue;
            }
            let Some((tag, state)) = current.as_mut() else {
                continue;
            };
            match *state {
                BlockState::Header => {
                    if !line.starts_with('\\') {
                        log::warn!("{tag}: header line does not start with '\\': {line:?}");
                        index.warnings += 1;
                    }
                    *state = BlockState::Data;
                }
                BlockState::Data => {
                    if !line.starts_with(' ') {
                        continue;
                    }
                    if let Some(pron) = pronunciation_field(line) {
                        index.by_tag.insert(tag.clone(), pron.to_string());
                    }
                    *state = BlockState::Done;
                }
                BlockState::Done => {}
            }
        }
        index
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.by_tag.get(tag).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }

    /// Number of blocks whose header line was not where expected
    pub fn warnings(&self) -> usize {
        self.warnings
    }
}

/// Text after the last double space, or the last token if fields are single-spaced
fn pronunciation_field(line: &str) -> Option<&str> {
    let line = line.trim_end();
    let field = match line.trim_start().rfind("  ") {
        Some(_) => line.rsplit("  ").next(),
        None => line.split_whitespace().last(),
    }?;
    let field = field.trim();
    (!field.is_empty()).then_some(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PREFIX: &str = "var strongsGreekDictionary = ";
    const SUFFIX: &str = "; module.exports = strongsGreekDictionary;";

    const DUMP: &str = "\
$$T0000001
\\00001\\
 1  A  al'-fah
 A, the first letter of the alphabet
$$T0005547
\\05547\\
 5547  Christos  khris-tos'
 anointed
$$T0000025
 25  agapao  ag-ap-ah'-o
";

    #[test]
    fn extracts_json_between_markers() {
        let text = format!("// header\n{PREFIX}{{\"G1\":{{\"lemma\":\"Α\"}}}}{SUFFIX}\n");
        assert_eq!(
            extract_embedded_json(&text, PREFIX, SUFFIX).unwrap(),
            "{\"G1\":{\"lemma\":\"Α\"}}"
        );
        let lexicon = Lexicon::from_script(&text, PREFIX, SUFFIX).unwrap();
        assert_eq!(lexicon.entry(1).unwrap().lemma, "Α");
        assert_eq!(lexicon.entry(1).unwrap().kjv_def, "");
    }

    #[test]
    fn missing_markers_are_typed() {
        let err = extract_embedded_json("{}", PREFIX, SUFFIX).unwrap_err();
        assert!(matches!(err, CorpusError::MissingMarker { ref marker } if marker == PREFIX));

        let err = extract_embedded_json(&format!("{PREFIX}{{}}"), PREFIX, SUFFIX).unwrap_err();
        assert!(matches!(err, CorpusError::MissingMarker { ref marker } if marker == SUFFIX));
    }

    #[test]
    fn invalid_json_fails() {
        let text = format!("{PREFIX}{{\"G1\": }}{SUFFIX}");
        assert!(matches!(
            Lexicon::from_script(&text, PREFIX, SUFFIX),
            Err(CorpusError::Json(_))
        ));
    }

    #[test]
    fn tags_are_zero_padded() {
        assert_eq!(entry_tag("G5547").as_deref(), Some("$$T0005547"));
        assert_eq!(entry_tag("G1").as_deref(), Some("$$T0000001"));
        assert_eq!(entry_tag("H1"), None);
        assert_eq!(entry_tag("G"), None);
    }

    #[test]
    fn parses_dump_blocks() {
        let index = PronunciationIndex::parse(DUMP);
        assert_eq!(index.get("$$T0000001"), Some("al'-fah"));
        assert_eq!(index.get("$$T0005547"), Some("khris-tos'"));
        // header missing: warned, and the line in its place is not read as data
        assert_eq!(index.warnings(), 1);
        assert_eq!(index.get("$$T0000025"), None);
    }

    #[test]
    fn enrichment_leaves_unknown_entries_alone() {
        let mut lexicon = Lexicon::from_json(
            r#"{"G1":{"lemma":"Α"},"G5547":{"lemma":"Χριστός"},"G9999":{"lemma":"?"}}"#,
        )
        .unwrap();
        let enriched = lexicon.enrich_with_pronunciation(&PronunciationIndex::parse(DUMP));

        assert_eq!(enriched, 2);
        assert_eq!(lexicon.entry(5547).unwrap().pronunciation.as_deref(), Some("khris-tos'"));
        assert_eq!(lexicon.entry(9999).unwrap().pronunciation, None);
    }

    #[test]
    fn pronunciation_field_variants() {
        assert_eq!(pronunciation_field(" 3  abaddon  ab-ad-dohn' "), Some("ab-ad-dohn'"));
        assert_eq!(pronunciation_field(" 3 abaddon ab-ad-dohn'"), Some("ab-ad-dohn'"));
        assert_eq!(pronunciation_field("   "), None);
    }
}
