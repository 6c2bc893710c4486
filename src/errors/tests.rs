//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognizedCharacter { character: '@' },
        Position(10, Rc::new("test.let".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognizedCharacter");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.let".to_string()));
    let error = Error::new(ErrorImpl::UnterminatedString { found: None }, pos.clone());

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_empty_source_error() {
    let error = Error::new(ErrorImpl::EmptySource, Position(0, Rc::new("repl".to_string())));

    assert_eq!(error.get_error_name(), "EmptySource");
    assert_eq!(error.to_string(), "no source provided at repl:0");
}

#[test]
fn test_invalid_numeric_literal_error() {
    let error = Error::new(
        ErrorImpl::InvalidNumericLiteral {
            literal: "1".to_string(),
            found: 'f',
        },
        Position(5, Rc::new("test.let".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidNumericLiteral");
    assert_eq!(
        error.get_tip().to_string(),
        "identifiers can't start with a digit: `1` is followed by `f`"
    );
    assert_eq!(
        error.to_string(),
        "invalid numeric literal \"1\" followed by 'f' at test.let:5"
    );
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position(0, Rc::new("test.let".to_string())),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert!(error.get_tip().to_string().contains("integer limit"));
}

#[test]
fn test_unterminated_string_tips() {
    let newline = Error::new(
        ErrorImpl::UnterminatedString { found: Some('\n') },
        Position(0, Rc::new("test.let".to_string())),
    );
    let end = Error::new(
        ErrorImpl::UnterminatedString { found: None },
        Position(0, Rc::new("test.let".to_string())),
    );

    assert_eq!(newline.get_error_name(), "UnterminatedString");
    assert_eq!(end.get_error_name(), "UnterminatedString");
    assert_eq!(
        newline.get_tip().to_string(),
        "strings cannot contain carriage returns or newlines"
    );
    assert_eq!(
        end.get_tip().to_string(),
        "reached end of input before the closing quote"
    );
}

#[test]
fn test_error_tip_display() {
    assert_eq!(ErrorTip::None.to_string(), "");
    assert_eq!(ErrorTip::Suggestion("hint".to_string()).to_string(), "hint");
}

#[test]
fn test_error_kind() {
    let error = Error::new(
        ErrorImpl::UnrecognizedCharacter { character: '#' },
        Position(3, Rc::new("test.let".to_string())),
    );

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognizedCharacter { character: '#' }
    );
    assert_eq!(
        error.to_string(),
        "encountered unrecognized character '#' at test.let:3"
    );
}
