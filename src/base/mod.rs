//! Foundation types for the bunpo matcher.
//!
//! This module provides the input and addressing types used throughout:
//! - [`Token`] - One analyzed unit from the external tokenizer
//! - [`TokenSpan`] - Half-open token index ranges
//!
//! This module has NO dependencies on other bunpo modules.

mod span;
mod token;

pub use span::TokenSpan;
pub use token::Token;
