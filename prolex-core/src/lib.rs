//! # prolex
//!
//! Lexical classification of Prolog-like source text.
//!
//! The [`tokenizer`] turns source text into a flat list of
//! [`Token`]s, each tagged with a [`Category`] and the 1-based line it came
//! from. The only failure is an unbalanced `"` on a line
//! ([`TokenizerError::UnterminatedString`]).
//!
//! ```text
//! Source → split lines → trim → quote check → rule passes → Vec<Token>
//! ```
//!
//! [`config`] holds the JSON loaders shared by the binaries, and [`report`]
//! renders token lists for the `prolex` CLI.

pub mod config;
pub mod error;
pub mod report;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use tokenizer::analyzer::{Analyzer, analyze};
pub use tokenizer::token::{Category, Token};
