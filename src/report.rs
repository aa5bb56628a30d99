//! Summary of one analysed expression, in the classic numbered layout:
//!
//! ```text
//! Summary of tokens:
//! 1. Token: LEFT_PAREN (25), Lexeme: (
//! 2. Token: IDENT (11), Lexeme: sum
//! ```
//!
//! The end-of-input token is counted in the numbering but never listed.

use std::fmt::Display;

use crate::lexer::tokens::Token;

#[derive(Debug, Clone)]
pub struct Summary {
    pub expression: String,
    pub tokens: Vec<Token>,
}

impl Summary {
    pub fn new(expression: &str, tokens: Vec<Token>) -> Self {
        Summary {
            expression: expression.to_string(),
            tokens,
        }
    }

    /// Tokens other than the end-of-input marker.
    pub fn token_count(&self) -> usize {
        self.tokens.iter().filter(|token| !token.is_eof()).count()
    }

    pub fn operator_count(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_operator()).count()
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Summary of tokens:")?;
        for (index, token) in self.tokens.iter().enumerate() {
            if token.is_eof() {
                continue;
            }
            writeln!(
                f,
                "{}. Token: {} ({}), Lexeme: {}",
                index + 1,
                token.kind,
                token.kind.code(),
                token.lexeme
            )?;
        }
        Ok(())
    }
}
