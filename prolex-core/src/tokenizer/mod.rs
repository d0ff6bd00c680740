//! # Tokenizer Component
//!
//! Classifies each line of Prolog-like source text into categorized lexemes.
//!
//! ## Design Principles
//!
//! * **Independent passes**: every [`Rule`](rule::Rule) scans the whole line on its own.
//!   Tokens are the union of all pass results, not a partition of the line, so
//!   one span of text may appear under several categories.
//! * **Stable order**: output order depends only on line order, rule order,
//!   and left-to-right match order within a rule. Reserved words are scanned
//!   in alphabetical order.
//! * **One structural check**: a line with an odd number of `"` characters
//!   aborts the whole run with
//!   [`TokenizerError::UnterminatedString`](crate::error::TokenizerError::UnterminatedString).
//!
//! ## Component Structure
//!
//! * [`token`]: token value and category vocabulary
//! * [`keyword`]: reserved words
//! * [`rule`]: classification passes and the built-in rule table
//! * [`analyzer`]: line driver
//!
//! ## Usage Example
//!
//! ```rust
//! use prolex_core::tokenizer::{analyzer::analyze, token::Category};
//!
//! let tokens = analyze("?- foo(X).").unwrap();
//! assert!(tokens.iter().any(|t| t.category == Category::Query && t.lexeme == "?- foo(X)."));
//! assert!(tokens.iter().any(|t| t.category == Category::Variable && t.lexeme == "X"));
//! ```

pub mod analyzer;
pub mod keyword;
pub mod rule;
pub mod token;
