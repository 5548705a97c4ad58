use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{CorpusError, Result};
use crate::lexicon::Lexicon;

/// A Greek Strong's number without its `G` prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StrongsNumber(u32);

impl StrongsNumber {
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Lexicon key, e.g. `G5547`
    pub fn key(self) -> String {
        format!("G{}", self.0)
    }

    /// Accepts `5547` or `G5547`
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('G').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CorpusError::invalid_argument(format!(
                "not a Strong's number: {input:?}"
            )));
        }
        digits
            .parse()
            .map(Self)
            .map_err(|e| CorpusError::invalid_argument(format!("{input:?}: {e}")))
    }
}

impl fmt::Display for StrongsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.0)
    }
}

impl TryFrom<u32> for StrongsNumber {
    type Error = CorpusError;

    fn try_from(number: u32) -> Result<Self> {
        Ok(Self(number))
    }
}

impl TryFrom<i64> for StrongsNumber {
    type Error = CorpusError;

    fn try_from(number: i64) -> Result<Self> {
        u32::try_from(number)
            .map(Self)
            .map_err(|_| CorpusError::invalid_argument(format!("out of range: {number}")))
    }
}

impl TryFrom<&str> for StrongsNumber {
    type Error = CorpusError;

    fn try_from(input: &str) -> Result<Self> {
        Self::parse(input)
    }
}

impl TryFrom<&Value> for StrongsNumber {
    type Error = CorpusError;

    /// Integers and strings only; floats, null, booleans and containers are rejected
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| CorpusError::invalid_argument(format!("not an integer: {n}")))
                .and_then(<Self as TryFrom<i64>>::try_from),
            Value::String(s) => Self::parse(s),
            other => Err(CorpusError::invalid_argument(format!(
                "unsupported Strong's identifier: {other}"
            ))),
        }
    }
}

impl std::str::FromStr for StrongsNumber {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Display-ready view of one lexicon entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StrongsDefinition {
    pub strongs: u32,
    pub found: bool,
    pub greek: String,
    pub translit: String,
    pub pronunciation: String,
    pub derivation: String,
    pub strongs_def: String,
    /// Derivation and definition joined by one space
    pub strongs_str: String,
    pub kjv_def: String,
}

impl StrongsDefinition {
    /// Look `number` up; an absent entry yields `found == false` and empty text
    pub fn resolve(lexicon: &Lexicon, number: StrongsNumber) -> Self {
        let Some(entry) = lexicon.get(&number.key()) else {
            return Self {
                strongs: number.get(),
                ..Default::default()
            };
        };
        Self {
            strongs: number.get(),
            found: true,
            greek: entry.lemma.clone(),
            translit: entry.translit.clone(),
            pronunciation: entry.pronunciation.clone().unwrap_or_default(),
            derivation: entry.derivation.clone(),
            strongs_def: entry.strongs_def.clone(),
            strongs_str: compose_definition(&entry.derivation, &entry.strongs_def),
            kjv_def: entry.kjv_def.clone(),
        }
    }
}

fn compose_definition(derivation: &str, definition: &str) -> String {
    match (derivation.is_empty(), definition.is_empty()) {
        (false, false) => format!("{derivation} {definition}"),
        (false, true) => derivation.to_string(),
        (true, _) => definition.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lexicon() -> Lexicon {
        Lexicon::from_json(
            r#"{
                "G5547": {"lemma": "Χριστός", "translit": "Christós",
                          "derivation": "from G5548;", "strongs_def": "anointed, i.e. the Messiah",
                          "kjv_def": "Christ"},
                "G1": {"lemma": "Α", "strongs_def": "first letter"},
                "G2": {"lemma": "Ἀαρών", "derivation": "of Hebrew origin"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn identifier_shapes_agree() {
        let lexicon = lexicon();
        let a = StrongsDefinition::resolve(&lexicon, StrongsNumber::try_from(5547u32).unwrap());
        let b = StrongsDefinition::resolve(&lexicon, "G5547".parse().unwrap());
        let c = StrongsDefinition::resolve(&lexicon, StrongsNumber::try_from("5547").unwrap());
        let d = StrongsDefinition::resolve(&lexicon, StrongsNumber::try_from(&json!(5547)).unwrap());
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c, d);
        assert_eq!(a.strongs_str, "from G5548; anointed, i.e. the Messiah");
        assert_eq!(a.greek, "Χριστός");
    }

    #[test]
    fn unsupported_shapes_are_invalid() {
        for value in [json!(3.5), Value::Null, json!(true), json!([1]), json!(-4)] {
            assert!(matches!(
                StrongsNumber::try_from(&value),
                Err(CorpusError::InvalidArgument(_))
            ));
        }
        for input in ["", "G", "g5547", "H5547", "55x", "G-1"] {
            assert!(StrongsNumber::parse(input).is_err(), "{input:?} should fail");
        }
    }

    #[test]
    fn definition_composition() {
        let lexicon = lexicon();
        let only_def = StrongsDefinition::resolve(&lexicon, StrongsNumber::new(1));
        assert_eq!(only_def.strongs_str, "first letter");
        let only_derv = StrongsDefinition::resolve(&lexicon, StrongsNumber::new(2));
        assert_eq!(only_derv.strongs_str, "of Hebrew origin");
    }

    #[test]
    fn absent_entry_is_soft() {
        let def = StrongsDefinition::resolve(&lexicon(), StrongsNumber::new(42));
        assert_eq!(
            def,
            StrongsDefinition {
                strongs: 42,
                ..Default::default()
            }
        );
        assert!(!def.found);
    }

    #[test]
    fn displays_with_prefix() {
        assert_eq!(StrongsNumber::new(26).to_string(), "G26");
        assert_eq!(StrongsNumber::new(26).key(), "G26");
    }
}
