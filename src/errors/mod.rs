//! Error types and diagnostics for the scanner.
//!
//! Nothing in the scanner is fatal. These types describe the soft
//! conditions it reports on its diagnostic channel:
//!
//! - Lexemes that outgrow the configured buffer capacity
//! - Pulls made after the end-of-input token was already returned
//! - Rejected scanner configuration

pub mod errors;
