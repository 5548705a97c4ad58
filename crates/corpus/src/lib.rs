//! # OpenGNT Corpus
//!
//! Navigable Greek New Testament built from the OpenGNT data files.
//!
//! ## Pipeline
//!
//! ```text
//! Data files
//!     │
//!     ├──> Corpus source (file or in-memory)
//!     │      ├─ word rows      (tab separated, 13 columns)
//!     │      ├─ clause rows    (id, IT, LT, ST)
//!     │      ├─ lexicon script (JSON inside a JS assignment)
//!     │      └─ pronunciation dump ($$T0000000 blocks)
//!     │
//!     ├──> Corpus (compute-once caches)
//!     │      ├─ word table → GreekWord → GreekVerse → GreekChapter
//!     │      ├─ translation index (clause id → row)
//!     │      └─ enriched lexicon
//!     │
//!     └──> Rendering
//!            ├─ literal / idiomatic / simplified text per verse, section, chapter
//!            ├─ verse spans (HTML)
//!            └─ Strong's definitions
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use ognt_corpus::{Corpus, CorpusConfig, TranslationMode};
//!
//! fn main() -> ognt_corpus::Result<()> {
//!     let corpus = Corpus::open(CorpusConfig::with_data_dir("data"))?;
//!     let john = corpus.chapter(43, 1)?;
//!     let prologue = john.slice(0, 5);
//!
//!     println!("{}", prologue.simplified(corpus.translations()?));
//!     println!("{}", corpus.chapter_text(43, 1, TranslationMode::Literal)?);
//!     println!("{}", corpus.resolve_strongs("G3056")?.strongs_str);
//!     Ok(())
//! }
//! ```

mod chapter;
mod config;
mod corpus;
mod error;
mod lexicon;
mod source;
mod strongs;
mod translation;
mod tsv;
mod verse;
mod word;

pub mod canon;
pub mod render;

pub use chapter::{build_chapter, GreekChapter, GreekSection};
pub use config::{CorpusConfig, DATA_DIR_ENV};
pub use corpus::Corpus;
pub use error::{CorpusError, Result};
pub use lexicon::{entry_tag, extract_embedded_json, Lexicon, PronunciationIndex, StrongsEntry};
pub use source::{CorpusSource, FileSource, MemorySource, RowIter};
pub use strongs::{StrongsDefinition, StrongsNumber};
pub use translation::{
    ordered_dedup, unordered_dedup, DedupPolicy, TranslationIndex, TranslationMode,
    TranslationRow,
};
pub use tsv::{split_tsv_line, Row, TsvRows};
pub use verse::{group_into_verses, GreekVerse};
pub use word::{
    normalize_clause_id, split_composite, GreekForm, GreekWord, Glosses, LexiconRefs, Location,
    Punctuation, SortKey, SortKeys, Transliteration, Variant, COMPOSITE_SEPARATOR, WORD_COLUMNS,
};
