use prolex_core::Token;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request for analyzing Prolog source
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Prolog source text, analyzed verbatim
    #[serde(alias = "codigoProlog")]
    pub code: String,
}

/// API schema mirror of [`prolex_core::Token`], carrying `ToSchema` for the OpenAPI document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenView {
    /// Exact matched text
    pub lexeme: String,
    /// Category label, e.g. `Atom` or `Fact`
    pub category: String,
    /// Line number (1-based)
    pub line: usize,
}

impl From<Token> for TokenView {
    fn from(token: Token) -> Self {
        Self {
            lexeme: token.lexeme,
            category: token.category.to_string(),
            line: token.line,
        }
    }
}

/// Error body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description
    pub error: String,
    /// Offending line (1-based), for structural errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}
