//! Integration tests for whole-expression scanning.
//!
//! These tests drive the public scanner API the way a caller would: pull
//! tokens until end of input and check the resulting sequence.

use lexan::{
    config::ScannerConfig,
    lexer::{
        lexer::{tokenize, Scanner},
        tokens::{Token, TokenKind},
    },
    report::Summary,
};
use regex::Regex;
use std::thread;

fn pairs(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens
        .iter()
        .map(|token| (token.kind, token.lexeme.as_str()))
        .collect()
}

fn strip_whitespace(source: &str) -> String {
    Regex::new(r"\s+").unwrap().replace_all(source, "").into_owned()
}

#[test]
fn test_parenthesised_division() {
    let tokens = tokenize("(sum + 47) / total", None);

    assert_eq!(
        pairs(&tokens),
        vec![
            (TokenKind::LeftParen, "("),
            (TokenKind::Identifier, "sum"),
            (TokenKind::AddOp, "+"),
            (TokenKind::IntLiteral, "47"),
            (TokenKind::RightParen, ")"),
            (TokenKind::DivOp, "/"),
            (TokenKind::Identifier, "total"),
            (TokenKind::EndOfInput, "EOF"),
        ]
    );
}

#[test]
fn test_assignment_expression() {
    let tokens = tokenize("x = y * (z - 5)", None);

    assert_eq!(
        pairs(&tokens),
        vec![
            (TokenKind::Identifier, "x"),
            (TokenKind::AssignOp, "="),
            (TokenKind::Identifier, "y"),
            (TokenKind::MultOp, "*"),
            (TokenKind::LeftParen, "("),
            (TokenKind::Identifier, "z"),
            (TokenKind::SubOp, "-"),
            (TokenKind::IntLiteral, "5"),
            (TokenKind::RightParen, ")"),
            (TokenKind::EndOfInput, "EOF"),
        ]
    );
}

#[test]
fn test_empty_expression() {
    let tokens = tokenize("", None);

    assert_eq!(pairs(&tokens), vec![(TokenKind::EndOfInput, "EOF")]);
}

#[test]
fn test_single_unknown_character() {
    let tokens = tokenize("@", None);

    assert_eq!(
        pairs(&tokens),
        vec![(TokenKind::Unknown, "@"), (TokenKind::EndOfInput, "EOF")]
    );
}

#[test]
fn test_lexemes_rebuild_input() {
    let inputs = [
        "(sum + 47) / total",
        "x = y * (z - 5)",
        "  a1b2\t+ 33 $ ( ) \n zz9 ",
        "count=count+1",
        "!@# 12ab 3 - -4",
    ];

    for input in inputs {
        let joined: String = tokenize(input, None)
            .iter()
            .filter(|token| !token.is_eof())
            .map(|token| token.lexeme.as_str())
            .collect();

        assert_eq!(joined, strip_whitespace(input), "input: {:?}", input);
    }
}

#[test]
fn test_token_count_bounded_by_input_length() {
    let input = "a + b * (c - 100) / d = e @ f";
    let mut scanner = Scanner::new(input, None);
    let mut steps = 0;

    loop {
        steps += 1;
        assert!(steps <= input.len() + 1, "scanner did not terminate");
        if scanner.next_token().is_eof() {
            break;
        }
    }
}

#[test]
fn test_maximal_munch() {
    let tokens = tokenize("abc123def 4567 x9", None);

    assert_eq!(
        pairs(&tokens),
        vec![
            (TokenKind::Identifier, "abc123def"),
            (TokenKind::IntLiteral, "4567"),
            (TokenKind::Identifier, "x9"),
            (TokenKind::EndOfInput, "EOF"),
        ]
    );
}

#[test]
fn test_every_other_symbol_is_unknown() {
    for ch in "!\"#$%&',.:;<>?@[\\]^_`{|}~".chars() {
        let tokens = tokenize(&ch.to_string(), None);

        assert_eq!(tokens.len(), 2, "symbol: {:?}", ch);
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].lexeme, ch.to_string());
    }
}

#[test]
fn test_overflow_does_not_stop_scanning() {
    let input = format!("{} = 1", "v".repeat(10));
    let config = ScannerConfig::default()
        .with_max_lexeme_len(4)
        .with_trace_tokens(false);
    let mut scanner = Scanner::with_config(&input, None, config).unwrap();
    let tokens: Vec<Token> = scanner.by_ref().collect();

    assert_eq!(
        pairs(&tokens),
        vec![
            (TokenKind::Identifier, "vvvv"),
            (TokenKind::AssignOp, "="),
            (TokenKind::IntLiteral, "1"),
            (TokenKind::EndOfInput, "EOF"),
        ]
    );
    assert_eq!(scanner.diagnostics().len(), 6);
    assert!(scanner
        .diagnostics()
        .iter()
        .all(|error| error.get_error_name() == "LexemeTooLong"));
}

#[test]
fn test_independent_sessions_on_threads() {
    let handles: Vec<_> = ["(sum + 47) / total", "x = y * (z - 5)"]
        .into_iter()
        .map(|input| thread::spawn(move || tokenize(input, None)))
        .collect();

    let results: Vec<Vec<Token>> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(results[0].len(), 8);
    assert_eq!(results[1].len(), 10);
    assert_eq!(results[0], tokenize("(sum + 47) / total", None));
}

#[test]
fn test_summary_for_sample_expression() {
    let summary = Summary::new("(sum + 47) / total", tokenize("(sum + 47) / total", None));
    let rendered = summary.to_string();

    assert!(rendered.starts_with("Summary of tokens:\n1. Token: LEFT_PAREN (25), Lexeme: (\n"));
    assert!(rendered.ends_with("7. Token: IDENT (11), Lexeme: total\n"));
    assert!(!rendered.contains("EOF"));
    assert_eq!(summary.token_count(), 7);
    assert_eq!(summary.operator_count(), 2);
}
