use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {}:{}", .position.1, .position.0)]
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

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::EmptySource => "EmptySource",
            ErrorImpl::UnrecognizedCharacter { .. } => "UnrecognizedCharacter",
            ErrorImpl::InvalidNumericLiteral { .. } => "InvalidNumericLiteral",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::EmptySource => {
                ErrorTip::Suggestion(String::from("load a source before scanning"))
            }
            ErrorImpl::UnrecognizedCharacter { .. } => ErrorTip::None,
            ErrorImpl::InvalidNumericLiteral { literal, found } => ErrorTip::Suggestion(format!(
                "identifiers can't start with a digit: `{}` is followed by `{}`",
                literal, found
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnterminatedString { found: Some(_) } => ErrorTip::Suggestion(
                String::from("strings cannot contain carriage returns or newlines"),
            ),
            ErrorImpl::UnterminatedString { found: None } => ErrorTip::Suggestion(String::from(
                "reached end of input before the closing quote",
            )),
        }
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("no source provided")]
    EmptySource,
    #[error("encountered unrecognized character {character:?}")]
    UnrecognizedCharacter { character: char },
    #[error("invalid numeric literal {literal:?} followed by {found:?}")]
    InvalidNumericLiteral { literal: String, found: char },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    /// `found` is the line terminator that cut the literal short, or `None`
    /// when the source ended first.
    #[error("unterminated string literal")]
    UnterminatedString { found: Option<char> },
}
