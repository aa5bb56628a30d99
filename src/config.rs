//! Scanner configuration.

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Longest lexeme kept by default: a 100-slot buffer minus its terminator slot.
pub const DEFAULT_MAX_LEXEME_LEN: usize = 99;

/// Source name used when the caller does not provide one.
pub const DEFAULT_SOURCE_NAME: &str = "shell";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Characters beyond this count are dropped from a lexeme and reported.
    pub max_lexeme_len: usize,
    /// Log every produced token at debug level.
    pub trace_tokens: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            max_lexeme_len: DEFAULT_MAX_LEXEME_LEN,
            trace_tokens: true,
        }
    }
}

impl ScannerConfig {
    pub fn with_max_lexeme_len(mut self, max_lexeme_len: usize) -> Self {
        self.max_lexeme_len = max_lexeme_len;
        self
    }

    pub fn with_trace_tokens(mut self, trace_tokens: bool) -> Self {
        self.trace_tokens = trace_tokens;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.max_lexeme_len == 0 {
            return Err(Error::new(
                ErrorImpl::InvalidConfig {
                    reason: String::from("max_lexeme_len must be at least 1"),
                },
                Position(0, Rc::new(String::from(DEFAULT_SOURCE_NAME))),
            ));
        }

        Ok(())
    }
}
