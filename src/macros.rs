//! Utility macros for the lexer.
//!
//! - `MK_SPAN!` - Creates a Span between two byte offsets of the current file
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Pushes a single-character punctuation token
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Span covering `$start..$end` in the lexer's current file.
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(lexer, start, lexer.pos);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($lexer:expr, $start:expr, $end:expr) => {
        Span {
            start: Position($start as u32, Rc::clone(&$lexer.file)),
            end: Position($end as u32, Rc::clone(&$lexer.file)),
        }
    };
}

/// Creates a Token instance.
///
/// The two-argument form is for kinds that carry no value. Declaration
/// tokens are built through `Token::declaration` so the mutability marker
/// can't be forgotten.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, Some(TokenValue::Int(42)), span);
/// let token = MK_TOKEN!(TokenKind::Semicolon, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: None,
            mutable: false,
            span: $span,
        }
    };
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            mutable: false,
            span: $span,
        }
    };
}

/// Pushes a value-less token for a single-character pattern and advances
/// the lexer past it.
///
/// # Example
///
/// ```ignore
/// b'=' => MK_DEFAULT_HANDLER!(self, TokenKind::Equals, "="),
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($lexer:expr, $kind:expr, $value:literal) => {{
        let start = $lexer.pos;
        $lexer.advance_n($value.len());
        let token = $crate::MK_TOKEN!($kind, $crate::MK_SPAN!($lexer, start, $lexer.pos));
        $lexer.push(token);
    }};
}
