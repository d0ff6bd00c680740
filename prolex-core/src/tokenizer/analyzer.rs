use std::sync::Arc;

use tracing::{debug, warn};

use super::{rule::RuleTable, token::Token};
use crate::error::{TokenizerError, TokenizerResult};

/// Drives a [`RuleTable`] over whole source texts, one line at a time.
///
/// Cloning is cheap and clones share the same table, which is never mutated
/// after construction.
#[derive(Debug, Clone)]
pub struct Analyzer {
    rules: Arc<RuleTable>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            rules: RuleTable::shared(),
        }
    }
}

impl Analyzer {
    pub fn new(rules: RuleTable) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Splits `source` on `\n`, trims each line, and scans the lines in order.
    ///
    /// Line numbers are 1-based and count blank lines. The first line with an
    /// odd number of `"` characters aborts the run, and no tokens are
    /// returned.
    #[tracing::instrument(level = "debug", skip(self, source), fields(bytes = source.len()))]
    pub fn analyze(&self, source: &str) -> TokenizerResult<Vec<Token>> {
        let mut tokens = Vec::new();

        for (index, raw_line) in source.split('\n').enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();

            if let Err(error) = check_quotes(line, line_number) {
                warn!("{}", error);
                return Err(error);
            }

            self.rules.scan_line(line, line_number, &mut tokens);
        }

        debug!("analyzed source into {} tokens", tokens.len());
        Ok(tokens)
    }
}

fn check_quotes(line: &str, line_number: usize) -> TokenizerResult<()> {
    if line.matches('"').count() % 2 != 0 {
        return Err(TokenizerError::UnterminatedString { line: line_number });
    }
    Ok(())
}

/// Analyzes `source` with the built-in Prolog rule table.
pub fn analyze(source: &str) -> TokenizerResult<Vec<Token>> {
    Analyzer::default().analyze(source)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokenizer::{rule::Rule, token::Category};

    #[test]
    fn test_empty_source() {
        assert!(analyze("").unwrap().is_empty());
        assert!(analyze("   \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let tokens = analyze("\n\n  42  ").unwrap();
        assert_eq!(tokens, vec![Token::new("42", Category::Number, 3)]);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let tokens = analyze("   foo(a).\r").unwrap();
        assert_eq!(tokens[0], Token::new("foo(a).", Category::Fact, 1));
    }

    #[test]
    fn test_balanced_quotes_pass() {
        assert!(analyze(r#"write("hi")."#).is_ok());
    }

    #[test]
    fn test_unterminated_string_discards_earlier_lines() {
        let result = analyze("foo(a).\nbar(b).\nsay \"hi.");
        assert!(matches!(
            result,
            Err(TokenizerError::UnterminatedString { line: 3 })
        ));
    }

    #[test]
    fn test_first_unbalanced_line_wins() {
        let result = analyze("ok.\n\"\n\"\"\"");
        assert_eq!(result.unwrap_err().line(), Some(2));
    }

    #[test]
    fn test_custom_rule_table() {
        let analyzer = Analyzer::new(RuleTable::new(vec![Rule::all(
            Category::Number,
            r"[0-9]+",
        )
        .unwrap()]));
        let tokens = analyzer.analyze("a 1\nb 22").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new("1", Category::Number, 1),
                Token::new("22", Category::Number, 2),
            ]
        );
        assert_eq!(analyzer.rules().rules().len(), 1);
    }

    #[test]
    fn test_clones_share_table() {
        let analyzer = Analyzer::default();
        let clone = analyzer.clone();
        assert!(Arc::ptr_eq(&analyzer.rules, &clone.rules));
    }
}
