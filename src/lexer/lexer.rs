use std::rc::Rc;

use log::{debug, warn};

use crate::{
    config::{ScannerConfig, DEFAULT_SOURCE_NAME},
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    source::CharacterSource,
    tokens::{Token, TokenKind, EOF_LEXEME, SYMBOL_LOOKUP},
};

/// Coarse category of the character under the cursor.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CharClass {
    Letter,
    Digit,
    Other,
    EndOfInput,
}

pub fn classify(ch: Option<char>) -> CharClass {
    match ch {
        Some(c) if c.is_ascii_alphabetic() => CharClass::Letter,
        Some(c) if c.is_ascii_digit() => CharClass::Digit,
        Some(_) => CharClass::Other,
        None => CharClass::EndOfInput,
    }
}

/// Whitespace is skipped between tokens but classified as `Other`.
pub fn is_blank(ch: char) -> bool {
    ch.is_whitespace()
}

pub fn classify_symbol(ch: char) -> TokenKind {
    SYMBOL_LOOKUP.get(&ch).copied().unwrap_or(TokenKind::Unknown)
}

/// Pull-based scanner producing one token per `next_token` call.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: CharacterSource,
    current_char: Option<char>,
    current_class: CharClass,
    lexeme: String,
    lexeme_len: usize,
    config: ScannerConfig,
    file: Rc<String>,
    diagnostics: Vec<Error>,
    finished: bool,
}

impl Scanner {
    pub fn new(source: &str, file: Option<String>) -> Scanner {
        Scanner::build(source, file, ScannerConfig::default())
    }

    pub fn with_config(
        source: &str,
        file: Option<String>,
        config: ScannerConfig,
    ) -> Result<Scanner, Error> {
        config.validate()?;
        Ok(Scanner::build(source, file, config))
    }

    fn build(source: &str, file: Option<String>, config: ScannerConfig) -> Scanner {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from(DEFAULT_SOURCE_NAME)));

        let mut scanner = Scanner {
            source: CharacterSource::new(source),
            current_char: None,
            current_class: CharClass::EndOfInput,
            lexeme: String::with_capacity(config.max_lexeme_len),
            lexeme_len: 0,
            config,
            file: file_name,
            diagnostics: vec![],
            finished: false,
        };
        scanner.get_char();
        scanner
    }

    pub fn next_token(&mut self) -> Token {
        if self.finished {
            let error = Error::new(ErrorImpl::ScanPastEnd, self.current_position());
            warn!("{}", error);
            self.diagnostics.push(error);
        }

        self.lexeme.clear();
        self.lexeme_len = 0;
        self.skip_blanks();

        let kind = match self.current_class {
            CharClass::Letter => {
                self.add_char();
                self.get_char();
                while matches!(self.current_class, CharClass::Letter | CharClass::Digit) {
                    self.add_char();
                    self.get_char();
                }
                TokenKind::Identifier
            }
            CharClass::Digit => {
                self.add_char();
                self.get_char();
                while self.current_class == CharClass::Digit {
                    self.add_char();
                    self.get_char();
                }
                TokenKind::IntLiteral
            }
            CharClass::Other => {
                let kind = self.current_char.map_or(TokenKind::Unknown, classify_symbol);
                self.add_char();
                self.get_char();
                kind
            }
            CharClass::EndOfInput => {
                self.finished = true;
                self.lexeme.push_str(EOF_LEXEME);
                self.lexeme_len = EOF_LEXEME.len();
                TokenKind::EndOfInput
            }
        };

        let token = MK_TOKEN!(kind, self.lexeme.clone());
        if self.config.trace_tokens {
            debug!("{}", token);
        }

        token
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    /// True once the end-of-input token has been handed out.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.diagnostics)
    }

    fn get_char(&mut self) {
        self.current_char = self.source.advance();
        self.current_class = classify(self.current_char);
    }

    fn skip_blanks(&mut self) {
        while self.current_char.is_some_and(is_blank) {
            self.get_char();
        }
    }

    fn add_char(&mut self) {
        let Some(ch) = self.current_char else {
            return;
        };

        if self.lexeme_len < self.config.max_lexeme_len {
            self.lexeme.push(ch);
            self.lexeme_len += 1;
        } else {
            let error = Error::new(
                ErrorImpl::LexemeTooLong {
                    max: self.config.max_lexeme_len,
                    dropped: ch,
                },
                self.current_position(),
            );
            warn!("Error - lexeme is too long: {}", error);
            self.diagnostics.push(error);
        }
    }

    /// Offset of `current_char`, or of the end of input once it is exhausted.
    fn current_position(&self) -> Position {
        let offset = match self.current_char {
            Some(_) => self.source.position() - 1,
            None => self.source.position(),
        };
        Position(offset as u32, Rc::clone(&self.file))
    }
}

impl Iterator for Scanner {
    type Item = Token;

    /// Yields tokens up to and including end of input, then stops.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        Some(self.next_token())
    }
}

pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    Scanner::new(source, file).collect()
}
