use thiserror::Error;

use crate::tokenizer::token::Category;

/// Errors raised while building rule tables or analyzing source text.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// A line carries an odd number of `"` characters.
    #[error("Unterminated string literal on line {line}")]
    UnterminatedString { line: usize },

    /// A rule was built from a pattern the regex engine rejects.
    #[error("Invalid pattern for {category} rule: {source}")]
    InvalidPattern {
        category: Category,
        #[source]
        source: regex::Error,
    },
}

impl TokenizerError {
    /// 1-based line the error points at, if it belongs to a source line.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::UnterminatedString { line } => Some(*line),
            Self::InvalidPattern { .. } => None,
        }
    }
}

pub type TokenizerResult<T> = Result<T, TokenizerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unterminated_string_message() {
        let error = TokenizerError::UnterminatedString { line: 3 };
        assert_eq!(error.to_string(), "Unterminated string literal on line 3");
        assert_eq!(error.line(), Some(3));
    }

    #[test]
    fn test_invalid_pattern_has_no_line() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = TokenizerError::InvalidPattern {
            category: Category::Atom,
            source,
        };
        assert_eq!(error.line(), None);
        assert!(error.to_string().starts_with("Invalid pattern for Atom rule"));
    }
}
