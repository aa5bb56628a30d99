use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref SYMBOL_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('(', TokenKind::LeftParen);
        map.insert(')', TokenKind::RightParen);
        map.insert('+', TokenKind::AddOp);
        map.insert('-', TokenKind::SubOp);
        map.insert('*', TokenKind::MultOp);
        map.insert('/', TokenKind::DivOp);
        map.insert('=', TokenKind::AssignOp);
        map
    };
}

/// Lexeme carried by the end-of-input token.
pub const EOF_LEXEME: &str = "EOF";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    IntLiteral,
    Identifier,

    AssignOp, // =
    AddOp,    // +
    SubOp,    // -
    MultOp,   // *
    DivOp,    // /

    LeftParen,
    RightParen,

    Unknown,
    EndOfInput,
}

impl TokenKind {
    pub const ALL: [TokenKind; 11] = [
        TokenKind::IntLiteral,
        TokenKind::Identifier,
        TokenKind::AssignOp,
        TokenKind::AddOp,
        TokenKind::SubOp,
        TokenKind::MultOp,
        TokenKind::DivOp,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::Unknown,
        TokenKind::EndOfInput,
    ];

    /// Legacy numeric token code, as printed in trace output.
    pub fn code(&self) -> i32 {
        match self {
            TokenKind::IntLiteral => 10,
            TokenKind::Identifier => 11,
            TokenKind::AssignOp => 20,
            TokenKind::AddOp => 21,
            TokenKind::SubOp => 22,
            TokenKind::MultOp => 23,
            TokenKind::DivOp => 24,
            TokenKind::LeftParen => 25,
            TokenKind::RightParen => 26,
            TokenKind::Unknown => 99,
            TokenKind::EndOfInput => -1,
        }
    }

    pub fn from_code(code: i32) -> Option<TokenKind> {
        TokenKind::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::IntLiteral => "INT_LIT",
            TokenKind::Identifier => "IDENT",
            TokenKind::AssignOp => "ASSIGN_OP",
            TokenKind::AddOp => "ADD_OP",
            TokenKind::SubOp => "SUB_OP",
            TokenKind::MultOp => "MULT_OP",
            TokenKind::DivOp => "DIV_OP",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::EndOfInput => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Next token is: {} ({}), Next lexeme is {}",
            self.kind.code(),
            self.kind,
            self.lexeme
        )
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_operator(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::AssignOp,
            TokenKind::AddOp,
            TokenKind::SubOp,
            TokenKind::MultOp,
            TokenKind::DivOp,
        ])
    }
}
