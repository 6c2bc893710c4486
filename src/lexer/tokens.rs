use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Declaration);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    SOF,
    EOF,

    Equals,    // =
    Semicolon, // ;

    // Reserved
    Declaration, // let

    Identifier,
    Int,
    Float,
    String,
}

impl TokenKind {
    /// Whether tokens of this kind carry a value.
    pub fn has_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Int | TokenKind::Float | TokenKind::String
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::SOF => write!(f, "<SOF>"),
            TokenKind::EOF => write!(f, "<EOF>"),
            TokenKind::Equals => write!(f, "="),
            TokenKind::Semicolon => write!(f, ";"),
            _ => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl TokenValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            TokenValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            TokenValue::Float(value) => Some(*value),
            _ => None,
        }
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Text(text) => write!(f, "{:?}", text),
            TokenValue::Int(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{:?}", value),
        }
    }
}

/// A single lexeme.
///
/// `value` is `Some` exactly when `kind.has_value()`, and `mutable` is only
/// ever set on `TokenKind::Declaration`.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub mutable: bool,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} ({})", self.kind, value),
            None if self.mutable => write!(f, "{} (mutable)", self.kind),
            None => write!(f, "{} ()", self.kind),
        }
    }
}

impl Token {
    pub fn declaration(span: Span) -> Self {
        Token {
            kind: TokenKind::Declaration,
            value: None,
            mutable: true,
            span,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.value.as_ref().and_then(TokenValue::as_str)
    }

    pub fn debug_string(&self) -> String {
        format!(
            "{:>4}..{:<4} {}",
            self.span.start.0, self.span.end.0, self
        )
    }

    pub fn debug(&self) {
        println!("{}", self.debug_string());
    }
}
