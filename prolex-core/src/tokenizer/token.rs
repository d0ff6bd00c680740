use serde::{Deserialize, Serialize};

/// The closed set of labels a lexeme can be classified under.
///
/// Categories are not mutually exclusive: the same span of text is reported
/// once for every category whose pass matches it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum Category {
    /// `name(arg,...).`
    Fact,
    /// `head(args) :- body.`
    Rule,
    /// `?- goal.`
    Query,
    /// Capitalized identifier.
    Variable,
    /// `[item,...]`
    List,
    /// `,` `;` `->`
    LogicalOperator,
    Number,
    /// `+ - * /`
    Operator,
    /// First `=` on a line.
    Assignment,
    Parenthesis,
    /// `.` and `,`
    Punctuation,
    /// Lowercase-led identifier.
    Atom,
    ReservedWord,
    /// Any character outside the accepted alphabet.
    Unrecognized,
}

/// One classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Exact matched text, never empty.
    pub lexeme: String,
    pub category: Category,
    /// 1-based line number in the original source.
    pub line: usize,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, category: Category, line: usize) -> Self {
        Self {
            lexeme: lexeme.into(),
            category,
            line,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.line, self.category, self.lexeme)
    }
}
