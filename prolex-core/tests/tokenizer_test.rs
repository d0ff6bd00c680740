use pretty_assertions::assert_eq;
use prolex_core::{Analyzer, Category, Token, TokenizerError, analyze};

fn token(lexeme: &str, category: Category, line: usize) -> Token {
    Token::new(lexeme, category, line)
}

#[test]
fn test_fact_overlaps_with_component_passes() {
    let tokens = analyze("foo(a,1).").unwrap();

    assert_eq!(
        tokens,
        vec![
            token("foo(a,1).", Category::Fact, 1),
            token(",", Category::LogicalOperator, 1),
            token("1", Category::Number, 1),
            token("(", Category::Parenthesis, 1),
            token(")", Category::Parenthesis, 1),
            token(",", Category::Punctuation, 1),
            token(".", Category::Punctuation, 1),
            token("foo", Category::Atom, 1),
            token("a", Category::Atom, 1),
        ]
    );
}

#[test]
fn test_query_with_variable() {
    let tokens = analyze("?- foo(X).").unwrap();

    assert_eq!(
        tokens,
        vec![
            token("foo(X).", Category::Fact, 1),
            token("?- foo(X).", Category::Query, 1),
            token("X", Category::Variable, 1),
            token("-", Category::Operator, 1),
            token("(", Category::Parenthesis, 1),
            token(")", Category::Parenthesis, 1),
            token(".", Category::Punctuation, 1),
            token("foo", Category::Atom, 1),
            token("?", Category::Unrecognized, 1),
        ]
    );
}

#[test]
fn test_reserved_word() {
    let tokens = analyze("nl.").unwrap();

    assert_eq!(
        tokens,
        vec![
            token(".", Category::Punctuation, 1),
            token("nl", Category::Atom, 1),
            token("nl", Category::ReservedWord, 1),
        ]
    );
}

#[test]
fn test_unterminated_string_returns_no_tokens() {
    let result = analyze("padre(juan,maria).\nsay \"hi.");

    match result {
        Err(TokenizerError::UnterminatedString { line }) => assert_eq!(line, 2),
        other => panic!("expected UnterminatedString, got {:?}", other),
    }
}

#[test]
fn test_program_spanning_lines() {
    let source = "padre(juan,maria).\n\nhijo(X,Y) :- padre(Y,X).\nX = 2 + 3";
    let tokens = analyze(source).unwrap();

    let rules: Vec<&Token> = tokens
        .iter()
        .filter(|t| t.category == Category::Rule)
        .collect();
    assert_eq!(rules, vec![&token("hijo(X,Y) :- padre(Y,X).", Category::Rule, 3)]);

    let last_line: Vec<(String, Category)> = tokens
        .iter()
        .filter(|t| t.line == 4)
        .map(|t| (t.lexeme.clone(), t.category))
        .collect();
    assert_eq!(
        last_line,
        vec![
            ("X".to_string(), Category::Variable),
            ("2".to_string(), Category::Number),
            ("3".to_string(), Category::Number),
            ("+".to_string(), Category::Operator),
            ("=".to_string(), Category::Assignment),
        ]
    );

    assert!(tokens.iter().all(|t| t.line != 2));
    assert!(tokens.windows(2).all(|w| w[0].line <= w[1].line));
}

#[test]
fn test_duplicate_tokens_are_kept() {
    let tokens = analyze("a + a").unwrap();
    let atoms: Vec<&Token> = tokens
        .iter()
        .filter(|t| t.category == Category::Atom)
        .collect();
    assert_eq!(atoms.len(), 2);
    assert_eq!(atoms[0], atoms[1]);
}

#[test]
fn test_list_token() {
    let tokens = analyze("member(X,[a,b]).").unwrap();
    assert!(tokens.contains(&token("[a,b]", Category::List, 1)));
    assert!(tokens.contains(&token("[", Category::Unrecognized, 1)));
}

#[test]
fn test_shared_analyzer_is_repeatable() {
    let analyzer = Analyzer::default();
    let source = "write(X), nl.\ntrue ; fail.";
    let first = analyzer.analyze(source).unwrap();
    let second = analyzer.analyze(source).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
