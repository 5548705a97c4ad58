use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{CorpusError, Result};
use crate::tsv::Row;
use crate::word::normalize_clause_id;

/// English rendering of one clause
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationRow {
    pub clause_id: String,
    pub literal: String,
    pub idiomatic: String,
    pub simplified: String,
}

impl TranslationRow {
    /// `clause id, IT, LT, ST`; extra columns are ignored
    pub fn from_row(row: &[String]) -> Result<Self> {
        let [clause_id, literal, idiomatic, simplified, ..] = row else {
            return Err(CorpusError::malformed_row(
                0,
                format!("translation row needs 4 columns, found {}", row.len()),
            ));
        };
        Ok(Self {
            clause_id: clause_id.clone(),
            literal: literal.clone(),
            idiomatic: idiomatic.clone(),
            simplified: simplified.clone(),
        })
    }

    pub fn text(&self, mode: TranslationMode) -> &str {
        match mode {
            TranslationMode::Literal => &self.literal,
            TranslationMode::Idiomatic => &self.idiomatic,
            TranslationMode::Simplified => &self.simplified,
        }
    }
}

/// Which English column to assemble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    /// `IT` column, unordered clause set
    Literal,
    /// `LT` column, unordered clause set
    Idiomatic,
    /// `ST` column, clauses in simplified word order
    Simplified,
}

impl TranslationMode {
    pub fn dedup_policy(self) -> DedupPolicy {
        match self {
            Self::Literal | Self::Idiomatic => DedupPolicy::Unordered,
            Self::Simplified => DedupPolicy::Ordered,
        }
    }
}

impl std::str::FromStr for TranslationMode {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" | "it" => Ok(Self::Literal),
            "idiomatic" | "lt" => Ok(Self::Idiomatic),
            "simplified" | "st" => Ok(Self::Simplified),
            other => Err(CorpusError::invalid_argument(format!(
                "unknown translation mode: {other}"
            ))),
        }
    }
}

/// How repeated clause ids are collapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupPolicy {
    /// Set semantics; resulting order is unspecified
    Unordered,
    /// Keep first occurrence, preserve order
    Ordered,
}

impl DedupPolicy {
    pub fn apply<T: Eq + Hash + Clone>(self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        match self {
            Self::Unordered => unordered_dedup(items),
            Self::Ordered => ordered_dedup(items),
        }
    }
}

/// Unique items in unspecified order
pub fn unordered_dedup<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items
        .into_iter()
        .collect::<HashSet<T>>()
        .into_iter()
        .collect()
}

/// Unique items in first-occurrence order
pub fn ordered_dedup<T: Eq + Hash + Clone>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Clause id (trimmed, lowercase) → translation row
#[derive(Debug, Clone, Default)]
pub struct TranslationIndex {
    rows: HashMap<String, TranslationRow>,
}

impl TranslationIndex {
    /// Build from raw rows; a later row replaces an earlier one with the same id
    pub fn from_rows(rows: impl IntoIterator<Item = Result<Row>>) -> Result<Self> {
        let mut index = HashMap::new();
        for (i, row) in rows.into_iter().enumerate() {
            let row = TranslationRow::from_row(&row?).map_err(|e| e.at_line(i + 1))?;
            index.insert(normalize_clause_id(&row.clause_id), row);
        }
        Ok(Self { rows: index })
    }

    pub fn get(&self, clause_id: &str) -> Option<&TranslationRow> {
        self.rows.get(&normalize_clause_id(clause_id))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Text of each known clause followed by a single space; unknown ids are skipped
    pub fn assemble<'a>(
        &self,
        clause_ids: impl IntoIterator<Item = &'a str>,
        mode: TranslationMode,
    ) -> String {
        let mut out = String::new();
        for row in clause_ids.into_iter().filter_map(|id| self.get(id)) {
            out.push_str(row.text(mode));
            out.push(' ');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cols: &[&str]) -> Result<Row> {
        Ok(cols.iter().map(|c| c.to_string()).collect())
    }

    fn index() -> TranslationIndex {
        TranslationIndex::from_rows(vec![
            row(&["LevinsohnClauseID", "IT", "LT", "ST"]),
            row(&["Mt1_1a ", "book of-genesis", "The book of the genealogy", "A record"]),
            row(&["Mt1_2a", "Abraham begat", "Abraham fathered", "Abraham was the father"]),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_is_folded() {
        let index = index();
        assert_eq!(index.len(), 3);
        assert_eq!(index.get(" MT1_1A").unwrap().simplified, "A record");
    }

    #[test]
    fn last_duplicate_wins() {
        let index = TranslationIndex::from_rows(vec![
            row(&["a", "1", "1", "1"]),
            row(&["A", "2", "2", "2"]),
        ])
        .unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("a").unwrap().literal, "2");
    }

    #[test]
    fn short_row_reports_line() {
        let err = TranslationIndex::from_rows(vec![row(&["a", "1", "1", "1"]), row(&["b", "x"])])
            .unwrap_err();
        assert!(matches!(err, CorpusError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn assemble_skips_unknown_ids() {
        let text = index().assemble(["mt1_1a", "nope", "mt1_2a"], TranslationMode::Simplified);
        assert_eq!(text, "A record Abraham was the father ");
    }

    #[test]
    fn ordered_dedup_keeps_first_occurrence() {
        assert_eq!(ordered_dedup(["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
    }

    #[test]
    fn unordered_dedup_keeps_each_item_once() {
        let mut items = unordered_dedup(["b", "a", "b", "c", "a"]);
        items.sort_unstable();
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn mode_policies() {
        assert_eq!(TranslationMode::Literal.dedup_policy(), DedupPolicy::Unordered);
        assert_eq!(TranslationMode::Idiomatic.dedup_policy(), DedupPolicy::Unordered);
        assert_eq!(TranslationMode::Simplified.dedup_policy(), DedupPolicy::Ordered);
        assert_eq!("ST".parse::<TranslationMode>().unwrap(), TranslationMode::Simplified);
        assert!("gloss".parse::<TranslationMode>().is_err());
    }
}
