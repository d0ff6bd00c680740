//! Text and JSON renderings of a token list.

use crate::tokenizer::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `line<TAB>category<TAB>lexeme` row per token.
    Text,
    /// Pretty-printed JSON array.
    Json,
}

pub fn render(tokens: &[Token], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(tokens
            .iter()
            .map(|token| format!("{}\n", token))
            .collect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(tokens)?;
            json.push('\n');
            Ok(json)
        }
    }
}
