use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::LexemeTooLong { .. } => "LexemeTooLong",
            ErrorImpl::InvalidConfig { .. } => "InvalidConfig",
            ErrorImpl::ScanPastEnd => "ScanPastEnd",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::LexemeTooLong { max, dropped } => ErrorTip::Suggestion(format!(
                "Lexeme is too long, `{}` dropped after {} characters",
                dropped, max
            )),
            ErrorImpl::InvalidConfig { reason } => {
                ErrorTip::Suggestion(format!("Invalid scanner configuration: {}", reason))
            }
            ErrorImpl::ScanPastEnd => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}:{})", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("lexeme is too long: limit {max:?}, dropped {dropped:?}")]
    LexemeTooLong { max: usize, dropped: char },
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
    #[error("next_token called after end of input")]
    ScanPastEnd,
}
