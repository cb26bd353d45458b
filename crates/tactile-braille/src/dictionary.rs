//! The cell dictionary: characters and contractions to braille cells.
//!
//! The standard table covers lowercase letters, digits, common punctuation,
//! and a set of whole-word contractions. Digits reuse the cells of `a`–`j`;
//! the numeric indicator that would tell them apart is not modelled.
//!
//! Whole-word entries are kept so the table stays complete, but the
//! [`Encoder`](crate::Encoder) looks up one character at a time and never
//! reaches them. [`CellDictionary::word_signs`] exposes them for inspection.

use std::collections::BTreeMap;

use tactile_types::{TactileError, TactileResult};

use crate::cell::Cell;

/// Built-in single-character entries.
const CHARACTER_CELLS: &[(char, Cell)] = &[
    ('a', Cell::from_pattern_const("100000")),
    ('b', Cell::from_pattern_const("101000")),
    ('c', Cell::from_pattern_const("110000")),
    ('d', Cell::from_pattern_const("110100")),
    ('e', Cell::from_pattern_const("100100")),
    ('f', Cell::from_pattern_const("111000")),
    ('g', Cell::from_pattern_const("111100")),
    ('h', Cell::from_pattern_const("101100")),
    ('i', Cell::from_pattern_const("011000")),
    ('j', Cell::from_pattern_const("011100")),
    ('k', Cell::from_pattern_const("100010")),
    ('l', Cell::from_pattern_const("101010")),
    ('m', Cell::from_pattern_const("110010")),
    ('n', Cell::from_pattern_const("110110")),
    ('o', Cell::from_pattern_const("100110")),
    ('p', Cell::from_pattern_const("111010")),
    ('q', Cell::from_pattern_const("111110")),
    ('r', Cell::from_pattern_const("101110")),
    ('s', Cell::from_pattern_const("011010")),
    ('t', Cell::from_pattern_const("011110")),
    ('u', Cell::from_pattern_const("100011")),
    ('v', Cell::from_pattern_const("101011")),
    ('w', Cell::from_pattern_const("011101")),
    ('x', Cell::from_pattern_const("110011")),
    ('y', Cell::from_pattern_const("110111")),
    ('z', Cell::from_pattern_const("100111")),
    ('1', Cell::from_pattern_const("100000")),
    ('2', Cell::from_pattern_const("101000")),
    ('3', Cell::from_pattern_const("110000")),
    ('4', Cell::from_pattern_const("110100")),
    ('5', Cell::from_pattern_const("100100")),
    ('6', Cell::from_pattern_const("111000")),
    ('7', Cell::from_pattern_const("111100")),
    ('8', Cell::from_pattern_const("101100")),
    ('9', Cell::from_pattern_const("011000")),
    ('0', Cell::from_pattern_const("011100")),
    ('.', Cell::from_pattern_const("010011")),
    (',', Cell::from_pattern_const("010000")),
    ('?', Cell::from_pattern_const("010001")),
    (';', Cell::from_pattern_const("011000")),
    (':', Cell::from_pattern_const("010010")),
    ('!', Cell::from_pattern_const("011010")),
    ('(', Cell::from_pattern_const("011011")),
    (')', Cell::from_pattern_const("011011")),
    ('-', Cell::from_pattern_const("001001")),
    ('/', Cell::from_pattern_const("001100")),
    (' ', Cell::BLANK),
];

/// Built-in whole-word contractions.
const WORD_SIGNS: &[(&str, Cell)] = &[
    ("but", Cell::from_pattern_const("110100")),
    ("can", Cell::from_pattern_const("101000")),
    ("do", Cell::from_pattern_const("110101")),
    ("every", Cell::from_pattern_const("111000")),
    ("from", Cell::from_pattern_const("111001")),
    ("go", Cell::from_pattern_const("111010")),
    ("have", Cell::from_pattern_const("111011")),
    ("just", Cell::from_pattern_const("111100")),
    ("knowledge", Cell::from_pattern_const("111101")),
    ("like", Cell::from_pattern_const("111110")),
    ("more", Cell::from_pattern_const("111111")),
    ("not", Cell::from_pattern_const("100011")),
    ("people", Cell::from_pattern_const("100111")),
    ("quite", Cell::from_pattern_const("101000")),
    ("rather", Cell::from_pattern_const("101001")),
    ("so", Cell::from_pattern_const("101010")),
    ("that", Cell::from_pattern_const("101011")),
    ("us", Cell::from_pattern_const("101100")),
    ("very", Cell::from_pattern_const("101101")),
    ("will", Cell::from_pattern_const("101110")),
    ("it", Cell::from_pattern_const("101111")),
    ("you", Cell::from_pattern_const("110000")),
    ("as", Cell::from_pattern_const("110001")),
    ("and", Cell::from_pattern_const("110010")),
    ("for", Cell::from_pattern_const("110011")),
    ("of", Cell::from_pattern_const("110100")),
    ("the", Cell::from_pattern_const("110101")),
    ("with", Cell::from_pattern_const("110110")),
    ("to", Cell::from_pattern_const("110111")),
    ("in", Cell::from_pattern_const("111000")),
];

/// Lookup table from dictionary keys to cells.
///
/// Keys of one character live in the character table, longer keys in the
/// word-sign table. Build it once, then share it by reference; the encoder
/// only ever reads from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellDictionary {
    characters: BTreeMap<char, Cell>,
    words: BTreeMap<String, Cell>,
}

impl CellDictionary {
    /// Creates a dictionary holding the built-in table.
    pub fn standard() -> Self {
        let mut dict = Self::empty();
        for &(ch, cell) in CHARACTER_CELLS {
            dict.characters.insert(ch, cell);
        }
        for &(word, cell) in WORD_SIGNS {
            dict.words.insert(word.to_string(), cell);
        }
        dict
    }

    /// Creates an empty dictionary.
    pub fn empty() -> Self {
        Self {
            characters: BTreeMap::new(),
            words: BTreeMap::new(),
        }
    }

    /// Registers an entry. Overwrites if the key already exists.
    ///
    /// Empty keys are rejected.
    pub fn register(&mut self, key: &str, cell: Cell) -> TactileResult<()> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(TactileError::InvalidConfig(
                "dictionary keys must not be empty".into(),
            )),
            (Some(ch), None) => {
                self.characters.insert(ch, cell);
                Ok(())
            }
            (Some(_), Some(_)) => {
                self.words.insert(key.to_string(), cell);
                Ok(())
            }
        }
    }

    /// Returns a copy of this dictionary with `overrides` applied.
    ///
    /// Each override is a key and a six-symbol pattern. A malformed pattern
    /// fails the whole call with [`TactileError::InvalidGlyph`].
    pub fn with_overrides<'a, I>(&self, overrides: I) -> TactileResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut dict = self.clone();
        for (key, pattern) in overrides {
            let cell: Cell = pattern.parse().map_err(|e| {
                TactileError::InvalidGlyph(format!("dictionary entry {key:?}: {e}"))
            })?;
            dict.register(key, cell)?;
        }
        Ok(dict)
    }

    /// Looks up a single character.
    #[inline]
    pub fn get_char(&self, ch: char) -> Option<Cell> {
        self.characters.get(&ch).copied()
    }

    /// Looks up any key, single character or whole word.
    pub fn get(&self, key: &str) -> Option<Cell> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.get_char(ch),
            _ => self.words.get(key).copied(),
        }
    }

    /// Returns true if `ch` has an entry.
    #[inline]
    pub fn contains_char(&self, ch: char) -> bool {
        self.characters.contains_key(&ch)
    }

    /// Whole-word contraction entries in key order.
    ///
    /// The per-character encoder never consults these.
    pub fn word_signs(&self) -> impl Iterator<Item = (&str, Cell)> {
        self.words.iter().map(|(word, &cell)| (word.as_str(), cell))
    }

    /// Single-character entries in key order.
    pub fn characters(&self) -> impl Iterator<Item = (char, Cell)> + '_ {
        self.characters.iter().map(|(&ch, &cell)| (ch, cell))
    }

    /// Returns the total number of entries.
    pub fn len(&self) -> usize {
        self.characters.len() + self.words.len()
    }

    /// Returns true if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty() && self.words.is_empty()
    }
}

impl Default for CellDictionary {
    fn default() -> Self {
        Self::standard()
    }
}
