//! Error types and error handling for the lexer.
//!
//! This module defines the errors a scan can fail with. It includes:
//!
//! - The positioned `Error` wrapper carrying the file and byte offset
//! - `ErrorImpl`, one variant per failure kind
//! - Error names and tips used by the diagnostic renderer

pub mod errors;

#[cfg(test)]
mod tests;
