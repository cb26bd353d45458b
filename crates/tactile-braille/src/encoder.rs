//! Text → glyph token encoding.
//!
//! Words are split on whitespace and encoded one character at a time:
//!
//! - A word written entirely in capitals (at least one uppercase letter,
//!   no lowercase) opens with two capitalization indicators, then each
//!   character's cell. A lone capital such as `"A"` counts.
//! - Otherwise every uppercase character is preceded by one indicator.
//! - Characters missing from the dictionary become blank separator cells.
//! - Every word is followed by one separator.
//!
//! Encoding never fails. Missing characters are collected in
//! [`Encoding::unmapped`] so callers can decide how strict to be.

use serde::{Deserialize, Serialize};
use tactile_types::{TactileError, TactileResult};

use crate::cell::Cell;
use crate::dictionary::CellDictionary;

/// One entry of the encoded token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlyphToken {
    /// A dictionary cell.
    Cell(Cell),
    /// Marks the next cell (or, doubled, the whole word) as uppercase.
    /// Rendered as [`Cell::CAPITAL`].
    CapitalIndicator,
    /// Blank cell: advances the layout cursor without rendering dots.
    Separator,
}

impl GlyphToken {
    /// The cell this token renders.
    #[inline]
    pub fn code(self) -> Cell {
        match self {
            GlyphToken::Cell(cell) => cell,
            GlyphToken::CapitalIndicator => Cell::CAPITAL,
            GlyphToken::Separator => Cell::BLANK,
        }
    }

    /// Returns true for the separator token.
    #[inline]
    pub fn is_separator(self) -> bool {
        matches!(self, GlyphToken::Separator)
    }
}

/// A character that had no dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmappableCharacter {
    /// The character as it appeared in the input.
    pub character: char,
    /// Index of the word (0-based, after whitespace splitting).
    pub word: usize,
    /// Character offset within the word.
    pub offset: usize,
}

impl From<UnmappableCharacter> for TactileError {
    fn from(u: UnmappableCharacter) -> Self {
        TactileError::UnmappableCharacter {
            character: u.character,
            word: u.word,
            offset: u.offset,
        }
    }
}

/// Result of encoding a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoding {
    /// The token stream handed to the layout builder.
    pub tokens: Vec<GlyphToken>,
    /// Characters that were replaced by separators, in input order.
    pub unmapped: Vec<UnmappableCharacter>,
    /// Number of words encoded.
    pub word_count: usize,
}

impl Encoding {
    /// Returns the tokens, or the first unmappable character as an error.
    pub fn into_strict(self) -> TactileResult<Vec<GlyphToken>> {
        match self.unmapped.first() {
            Some(&first) => Err(first.into()),
            None => Ok(self.tokens),
        }
    }

    /// Number of tokens that are not separators.
    pub fn glyph_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.is_separator()).count()
    }
}

/// Encodes text against a borrowed dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a> {
    dictionary: &'a CellDictionary,
}

impl<'a> Encoder<'a> {
    /// Creates an encoder reading from `dictionary`.
    pub fn new(dictionary: &'a CellDictionary) -> Self {
        Self { dictionary }
    }

    /// Encodes `text` into a token stream, discarding the unmapped report.
    pub fn encode(&self, text: &str) -> Vec<GlyphToken> {
        self.encode_with_report(text).tokens
    }

    /// Encodes `text` and reports every character that fell back to a separator.
    pub fn encode_with_report(&self, text: &str) -> Encoding {
        let mut encoding = Encoding::default();

        for (word_index, word) in text.split_whitespace().enumerate() {
            if is_capitalized_word(word) {
                encoding.tokens.push(GlyphToken::CapitalIndicator);
                encoding.tokens.push(GlyphToken::CapitalIndicator);
                for (offset, ch) in word.chars().enumerate() {
                    let token = self.lookup_lowercase(ch, word_index, offset, &mut encoding);
                    encoding.tokens.push(token);
                }
            } else {
                for (offset, ch) in word.chars().enumerate() {
                    if ch.is_uppercase() {
                        encoding.tokens.push(GlyphToken::CapitalIndicator);
                        let token = self.lookup_lowercase(ch, word_index, offset, &mut encoding);
                        encoding.tokens.push(token);
                    } else if let Some(cell) = self.dictionary.get_char(ch) {
                        encoding.tokens.push(GlyphToken::Cell(cell));
                    } else {
                        let token = unmapped(ch, word_index, offset, &mut encoding);
                        encoding.tokens.push(token);
                    }
                }
            }
            encoding.tokens.push(GlyphToken::Separator);
            encoding.word_count += 1;
        }

        encoding
    }

    fn lookup_lowercase(
        &self,
        ch: char,
        word: usize,
        offset: usize,
        encoding: &mut Encoding,
    ) -> GlyphToken {
        match single_lowercase(ch).and_then(|lower| self.dictionary.get_char(lower)) {
            Some(cell) => GlyphToken::Cell(cell),
            None => unmapped(ch, word, offset, encoding),
        }
    }
}

fn unmapped(ch: char, word: usize, offset: usize, encoding: &mut Encoding) -> GlyphToken {
    tracing::debug!(character = ?ch, word, offset, "no braille cell, substituting blank");
    encoding.unmapped.push(UnmappableCharacter {
        character: ch,
        word,
        offset,
    });
    GlyphToken::Separator
}

/// Lowercase form of `ch` when it lowercases to exactly one character.
fn single_lowercase(ch: char) -> Option<char> {
    let mut lower = ch.to_lowercase();
    let first = lower.next()?;
    if lower.next().is_some() {
        None
    } else {
        Some(first)
    }
}

/// A word in capitals: at least one uppercase letter and no lowercase.
fn is_capitalized_word(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}
