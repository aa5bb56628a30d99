//! Lexical analysis for arithmetic-assignment expressions.
//!
//! This module turns an in-memory expression into tokens. It handles:
//!
//! - A character cursor over the fully loaded input
//! - Classification of characters into letters, digits and everything else
//! - Maximal-munch scanning of identifiers and integer literals
//! - Single-character operator and parenthesis lookup

pub mod lexer;
pub mod source;
pub mod tokens;
