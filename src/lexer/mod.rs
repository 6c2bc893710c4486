//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts declaration
//! statements into a stream of tokens for parsing. It handles:
//!
//! - Character-class dispatch on the byte under the cursor
//! - Recognition of the `let` keyword, identifiers and literals
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
