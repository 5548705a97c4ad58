use std::cmp::Ordering;

use serde::Serialize;

use crate::error::{CorpusError, Result};

/// Separator inside composite columns (FULLWIDTH VERTICAL LINE)
pub const COMPOSITE_SEPARATOR: char = '｜';

/// Number of columns in a word row
pub const WORD_COLUMNS: usize = 13;

const LOCATION_COLUMN: usize = 6;

/// Strip one bracket character from each end and split on [`COMPOSITE_SEPARATOR`]
pub fn split_composite(field: &str) -> Vec<&str> {
    let mut chars = field.chars();
    chars.next();
    chars.next_back();
    chars.as_str().split(COMPOSITE_SEPARATOR).collect()
}

fn split_exact<const N: usize>(row: &[String], column: usize) -> Result<[String; N]> {
    let field = row.get(column).ok_or_else(|| {
        CorpusError::malformed_row(0, format!("missing column {column}"))
    })?;
    let parts = split_composite(field);
    if parts.len() != N {
        return Err(CorpusError::malformed_row(
            0,
            format!(
                "column {column} has {} sub-fields, expected {N}: {field:?}",
                parts.len()
            ),
        ));
    }
    Ok(std::array::from_fn(|i| parts[i].to_string()))
}

/// Book, chapter and verse of a word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Location {
    pub book: u32,
    pub chapter: u32,
    pub verse: u32,
}

impl Location {
    pub const fn new(book: u32, chapter: u32, verse: u32) -> Self {
        Self {
            book,
            chapter,
            verse,
        }
    }

    /// Parse `〔book｜chapter｜verse〕`; anything else yields `0,0,0`
    pub fn parse(field: &str) -> Self {
        let parts = split_composite(field);
        let [book, chapter, verse] = parts.as_slice() else {
            return Self::default();
        };
        match (book.parse(), chapter.parse(), verse.parse()) {
            (Ok(book), Ok(chapter), Ok(verse)) => Self::new(book, chapter, verse),
            _ => Self::default(),
        }
    }

    /// Location column of a raw row, `0,0,0` when absent
    pub fn from_row(row: &[String]) -> Self {
        row.get(LOCATION_COLUMN)
            .map(|field| Self::parse(field))
            .unwrap_or_default()
    }
}

/// A sort key column, ordered by its raw text (`"10"` sorts before `"2"`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SortKey(pub String);

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Interlinear sort positions (`〔BGBsortI｜LTsortI｜STsortI〕`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SortKeys {
    pub bgb: SortKey,
    pub literal: SortKey,
    pub simplified: SortKey,
}

/// Greek forms and parsing (`〔OGNTk｜OGNTu｜OGNTa｜lexeme｜rmac｜sn〕`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct GreekForm {
    pub koine: String,
    pub unaccented: String,
    pub accented: String,
    pub lexeme: String,
    pub rmac: String,
    pub strongs: String,
}

/// Lexicon cross references (`〔BDAG｜EDNT｜Mounce｜GK｜LN〕`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct LexiconRefs {
    pub bdag: String,
    pub ednt: String,
    pub mounce: String,
    pub goodrick_kohlenberger: String,
    pub louw_nida: String,
}

/// Transliterations (`〔transSBLcap｜transSBL｜modernGreek｜Fonetica〕`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Transliteration {
    pub sbl_capitalized: String,
    pub sbl: String,
    pub modern_greek: String,
    pub fonetica: String,
}

/// Word glosses (`〔TBESG｜IT｜LT｜ST｜Español〕`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Glosses {
    pub tbesg: String,
    pub interlinear: String,
    pub literal: String,
    pub simplified: String,
    pub spanish: String,
}

/// Punctuation around the word (`〔PMpWord｜PMfWord〕`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Punctuation {
    pub preceding: String,
    pub following: String,
}

/// Textual variant and note (`〔Note｜Mvar｜Mlexeme｜Mrmac｜Msn｜MTBESG〕`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Variant {
    pub note: String,
    pub reading: String,
    pub lexeme: String,
    pub rmac: String,
    pub strongs: String,
    pub tbesg: String,
}

/// One morphologically annotated token of the Greek text
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct GreekWord {
    pub ognt_sort: String,
    pub tantt_sort: String,
    pub features_sort: String,
    pub clause_id: String,
    pub ot_quotation: String,
    pub sort: SortKeys,
    pub location: Location,
    pub form: GreekForm,
    pub lexicon: LexiconRefs,
    pub transliteration: Transliteration,
    pub glosses: Glosses,
    pub punctuation: Punctuation,
    pub variant: Variant,
}

impl GreekWord {
    /// Build a word from a 13-column row
    pub fn from_row(row: &[String]) -> Result<Self> {
        if row.len() < WORD_COLUMNS {
            return Err(CorpusError::malformed_row(
                0,
                format!("expected {WORD_COLUMNS} columns, found {}", row.len()),
            ));
        }

        let [bgb, literal, simplified] = split_exact(row, 5)?;
        let [koine, unaccented, accented, lexeme, rmac, strongs] = split_exact(row, 7)?;
        let [bdag, ednt, mounce, goodrick_kohlenberger, louw_nida] = split_exact(row, 8)?;
        let [sbl_capitalized, sbl, modern_greek, fonetica] = split_exact(row, 9)?;
        let [tbesg, interlinear, lt, st, spanish] = split_exact(row, 10)?;
        let [preceding, following] = split_exact(row, 11)?;
        let [note, reading, v_lexeme, v_rmac, v_strongs, v_tbesg] = split_exact(row, 12)?;

        Ok(Self {
            ognt_sort: row[0].clone(),
            tantt_sort: row[1].clone(),
            features_sort: row[2].clone(),
            clause_id: row[3].clone(),
            ot_quotation: row[4].clone(),
            sort: SortKeys {
                bgb: SortKey(bgb),
                literal: SortKey(literal),
                simplified: SortKey(simplified),
            },
            location: Location::from_row(row),
            form: GreekForm {
                koine,
                unaccented,
                accented,
                lexeme,
                rmac,
                strongs,
            },
            lexicon: LexiconRefs {
                bdag,
                ednt,
                mounce,
                goodrick_kohlenberger,
                louw_nida,
            },
            transliteration: Transliteration {
                sbl_capitalized,
                sbl,
                modern_greek,
                fonetica,
            },
            glosses: Glosses {
                tbesg,
                interlinear,
                literal: lt,
                simplified: st,
                spanish,
            },
            punctuation: Punctuation {
                preceding,
                following,
            },
            variant: Variant {
                note,
                reading,
                lexeme: v_lexeme,
                rmac: v_rmac,
                strongs: v_strongs,
                tbesg: v_tbesg,
            },
        })
    }

    pub fn book(&self) -> u32 {
        self.location.book
    }

    pub fn chapter(&self) -> u32 {
        self.location.chapter
    }

    pub fn verse(&self) -> u32 {
        self.location.verse
    }

    /// Clause identifier as used for translation lookups
    pub fn clause_key(&self) -> String {
        normalize_clause_id(&self.clause_id)
    }
}

/// Trim and case-fold a clause identifier
pub fn normalize_clause_id(id: &str) -> String {
    id.trim().to_lowercase()
}
