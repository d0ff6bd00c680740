//! # Rule Table
//!
//! A [`Rule`] is one independent classification pass: a category, a regular
//! expression, and whether the pass reports every match or only the first.
//! A [`RuleTable`] is an ordered list of rules; scanning a line runs every
//! rule over the whole line and appends the matches in table order.
//!
//! Rules never consume input from each other, so the same span can be
//! reported under several categories. For example `foo(a,1).` is a `Fact`,
//! and `foo` inside it is also an `Atom`.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use super::{
    keyword::Keyword,
    token::{Category, Token},
};
use crate::error::{TokenizerError, TokenizerResult};

/// How many matches a rule reports per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only the leftmost match.
    First,
    /// Every non-overlapping match, left to right.
    All,
}

#[derive(Debug, Clone)]
pub struct Rule {
    category: Category,
    pattern: Regex,
    scope: Scope,
}

impl Rule {
    pub fn new(category: Category, pattern: &str, scope: Scope) -> TokenizerResult<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|source| TokenizerError::InvalidPattern { category, source })?;
        Ok(Self {
            category,
            pattern,
            scope,
        })
    }

    pub fn all(category: Category, pattern: &str) -> TokenizerResult<Self> {
        Self::new(category, pattern, Scope::All)
    }

    pub fn first(category: Category, pattern: &str) -> TokenizerResult<Self> {
        Self::new(category, pattern, Scope::First)
    }

    /// Whole-word match of a reserved word, bounded by ASCII word characters.
    pub fn keyword(keyword: Keyword) -> TokenizerResult<Self> {
        let pattern = format!(r"(?-u:\b){}(?-u:\b)", regex::escape(keyword.as_ref()));
        Self::all(Category::ReservedWord, &pattern)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Matched lexemes in left-to-right order. Empty matches are dropped.
    pub fn scan<'t>(&self, line: &'t str) -> Vec<&'t str> {
        let matches: Vec<&'t str> = match self.scope {
            Scope::First => self.pattern.find(line).into_iter().map(|m| m.as_str()).collect(),
            Scope::All => self.pattern.find_iter(line).map(|m| m.as_str()).collect(),
        };
        matches.into_iter().filter(|m| !m.is_empty()).collect()
    }
}

/// Ordered list of classification passes.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

lazy_static! {
    static ref PROLOG_RULES: Arc<RuleTable> =
        Arc::new(RuleTable::prolog().expect("built-in Prolog patterns must compile"));
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Builds the Prolog pass list.
    ///
    /// Identifier classes and word boundaries are ASCII-only, so a non-ASCII
    /// letter never counts as part of a word or a digit run.
    pub fn prolog() -> TokenizerResult<Self> {
        let mut rules = vec![
            Rule::all(Category::Fact, r"[0-9A-Za-z_]+\([0-9A-Za-z_,]+\)[\t\n\x0C\r ]*\.")?,
            Rule::all(
                Category::Rule,
                r"[0-9A-Za-z_]+\([0-9A-Za-z_,]+\) :- [0-9A-Za-z_(),]+\.",
            )?,
            Rule::all(Category::Query, r"\?- [0-9A-Za-z_(),]+\.")?,
            Rule::all(Category::Variable, r"(?-u:\b)[A-Z][A-Za-z0-9_]*(?-u:\b)")?,
            Rule::all(Category::List, r"\[[0-9A-Za-z_,]+\]")?,
            Rule::all(Category::LogicalOperator, r",|;|->")?,
            Rule::all(Category::Number, r"[0-9]+")?,
            Rule::all(Category::Operator, r"[+\-*/]")?,
            Rule::first(Category::Assignment, r"=")?,
            Rule::all(Category::Parenthesis, r"[()]")?,
            Rule::all(Category::Punctuation, r"[.,]")?,
            Rule::all(Category::Atom, r"[a-z][A-Za-z0-9_]*")?,
        ];
        for keyword in Keyword::sorted() {
            rules.push(Rule::keyword(keyword)?);
        }
        rules.push(Rule::all(
            Category::Unrecognized,
            r"[^A-Za-z0-9_(),;=+\-*/.\t\n\x0C\r ]",
        )?);
        Ok(Self::new(rules))
    }

    /// The process-wide Prolog table, compiled on first use.
    pub fn shared() -> Arc<RuleTable> {
        Arc::clone(&PROLOG_RULES)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Runs every rule over `line`, appending one token per match.
    pub fn scan_line(&self, line: &str, line_number: usize, tokens: &mut Vec<Token>) {
        for rule in &self.rules {
            for lexeme in rule.scan(line) {
                tokens.push(Token::new(lexeme, rule.category(), line_number));
            }
        }
    }
}
