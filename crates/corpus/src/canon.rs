//! Canonical book order of the 66-book Protestant canon.

use serde::Serialize;

/// Book names, numbered from 1
pub const BOOK_NAMES: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Chapter count of each book, same order as [`BOOK_NAMES`]
pub const CHAPTER_COUNTS: [u32; 66] = [
    50, 40, 27, 36, 34, 24, 21, 4, 31, 24, 22, 25, 29, 36, 10, 13, 10, 42, 150, 31, 12, 8, 66, 52,
    5, 48, 12, 14, 3, 9, 1, 4, 7, 3, 3, 3, 2, 14, 4, 28, 16, 24, 21, 28, 16, 16, 13, 6, 6, 4, 4, 5,
    3, 6, 4, 3, 1, 13, 5, 5, 3, 5, 1, 1, 1, 22,
];

/// Number of the first New Testament book (Matthew)
pub const FIRST_NEW_TESTAMENT_BOOK: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub fn of_number(book: u32) -> Option<Self> {
        book_name(book)?;
        if book < FIRST_NEW_TESTAMENT_BOOK {
            Some(Self::Old)
        } else {
            Some(Self::New)
        }
    }

    pub fn of_name(name: &str) -> Option<Self> {
        book_number(name).and_then(Self::of_number)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }
}

/// Book name for a 1-based book number
pub fn book_name(book: u32) -> Option<&'static str> {
    let index = usize::try_from(book).ok()?.checked_sub(1)?;
    BOOK_NAMES.get(index).copied()
}

/// 1-based book number for a name (trimmed, case-insensitive)
pub fn book_number(name: &str) -> Option<u32> {
    let name = name.trim();
    BOOK_NAMES
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .and_then(|i| u32::try_from(i + 1).ok())
}

pub fn book_names() -> &'static [&'static str] {
    &BOOK_NAMES
}

pub fn chapter_counts() -> &'static [u32] {
    &CHAPTER_COUNTS
}

/// Chapter count of a 1-based book number
pub fn chapter_count(book: u32) -> Option<u32> {
    let index = usize::try_from(book).ok()?.checked_sub(1)?;
    CHAPTER_COUNTS.get(index).copied()
}

/// `book` is a number (`"45"`) or a name (`"romans"`)
pub fn is_new_testament(book: &str) -> bool {
    let book = book.trim();
    let testament = match book.parse::<u32>() {
        Ok(number) => Testament::of_number(number),
        Err(_) => Testament::of_name(book),
    };
    testament == Some(Testament::New)
}
