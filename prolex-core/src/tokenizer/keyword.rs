//! # Reserved Words
//!
//! Prolog built-in and control words reported under
//! [`Category::ReservedWord`](super::token::Category::ReservedWord).
//!
//! Each reserved word is scanned by its own whole-word rule. The rules are
//! applied in [`Keyword::sorted`] order so that the token stream is identical
//! from run to run.

use strum::IntoEnumIterator;

/// Represents the reserved words recognized by the analyzer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    /// Adds a clause to the database.
    Assert,
    /// Loads a source file.
    Consult,
    Cut,
    Else,
    /// Goal that always fails.
    Fail,
    False,
    If,
    /// Prints the clauses of a predicate.
    Listing,
    /// Writes a newline.
    Nl,
    Not,
    Read,
    /// Removes a clause from the database.
    Retract,
    Then,
    True,
    Write,
    /// Formatted write.
    Writef,
}

impl Keyword {
    /// All reserved words, ordered by their spelling.
    pub fn sorted() -> Vec<Keyword> {
        let mut keywords: Vec<Keyword> = Keyword::iter().collect();
        keywords.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));
        keywords
    }
}
