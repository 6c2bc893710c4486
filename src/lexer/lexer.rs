use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP};

lazy_static! {
    static ref NAME: Regex = Regex::new("^[A-Za-z0-9_]+").unwrap();
    static ref DIGITS: Regex = Regex::new("^[0-9]*").unwrap();
    static ref STRING_BODY: Regex = Regex::new("^[^\r\n'\"]*").unwrap();
}

/// Characters allowed to end a run of digits.
fn is_number_delimiter(c: u8) -> bool {
    matches!(c, b'\t' | b' ' | b'\r' | b'\n' | b'.' | b';')
}

#[derive(Clone, Debug)]
pub struct Lexer {
    tokens: Vec<Token>,
    source: Option<String>,
    pos: usize,
    len: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source: None,
            pos: 0,
            len: 0,
            file: file_name,
        }
    }

    pub fn with_source(source: String, file: Option<String>) -> Lexer {
        let mut lexer = Lexer::new(file);
        lexer.load_source(source);
        lexer
    }

    /// Replaces the held source. The cursor is left alone; `scan` resets it.
    pub fn load_source(&mut self, source: String) {
        self.len = source.len();
        self.source = Some(source);
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The sequence produced by the last successful scan.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// Tokenizes the whole source from offset zero.
    ///
    /// The result always starts with `SOF` and ends with a single `EOF`. Any
    /// failure aborts the scan and leaves `tokens()` empty.
    pub fn scan(&mut self) -> Result<Vec<Token>, Error> {
        if self.source.is_none() {
            return Err(self.error(ErrorImpl::EmptySource));
        }

        debug!(file = %self.file, len = self.len, "scanning source");

        self.pos = 0;
        self.tokens = vec![MK_TOKEN!(TokenKind::SOF, MK_SPAN!(self, 0, 0))];

        if let Err(error) = self.scan_tokens() {
            debug!(error = %error, "scan failed");
            self.tokens.clear();
            return Err(error);
        }

        debug!(count = self.tokens.len(), "scan finished");
        Ok(self.tokens.clone())
    }

    fn scan_tokens(&mut self) -> Result<(), Error> {
        loop {
            self.skip_whitespace();

            if self.at_eof() {
                let token = MK_TOKEN!(TokenKind::EOF, MK_SPAN!(self, self.pos, self.pos));
                self.push(token);
                return Ok(());
            }

            match self.at() {
                b'=' => MK_DEFAULT_HANDLER!(self, TokenKind::Equals, "="),
                b';' => MK_DEFAULT_HANDLER!(self, TokenKind::Semicolon, ";"),
                b'"' | b'\'' => {
                    self.advance_n(1);
                    string_handler(self)?;
                }
                b'A'..=b'Z' | b'a'..=b'z' | b'_' => symbol_handler(self),
                b'0'..=b'9' => number_handler(self)?,
                _ => {
                    let character = self.remainder().chars().next().unwrap_or_default();
                    return Err(self.error(ErrorImpl::UnrecognizedCharacter { character }));
                }
            }
        }
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn push(&mut self, token: Token) {
        trace!(token = %token, "token");
        self.tokens.push(token);
    }

    /// The byte under the cursor, `0` past the end.
    fn at(&self) -> u8 {
        self.remainder().as_bytes().first().copied().unwrap_or(0)
    }

    fn remainder(&self) -> &str {
        match &self.source {
            Some(source) => source.get(self.pos..).unwrap_or(""),
            None => "",
        }
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.len
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && matches!(self.at(), b'\t' | b' ' | b'\r' | b'\n') {
            self.pos += 1;
        }
    }

    /// Consumes the longest prefix of the remainder matched by `regex`.
    fn eat(&mut self, regex: &Regex) -> String {
        let matched = regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        self.advance_n(matched.len());
        matched
    }

    fn error(&self, error: ErrorImpl) -> Error {
        Error::new(error, Position(self.pos as u32, Rc::clone(&self.file)))
    }
}

fn symbol_handler(lexer: &mut Lexer) {
    let start = lexer.pos;
    let value = lexer.eat(&NAME);
    let span = MK_SPAN!(lexer, start, lexer.pos);

    let token = match RESERVED_LOOKUP.get(value.as_str()) {
        Some(_) => Token::declaration(span),
        None => MK_TOKEN!(TokenKind::Identifier, Some(TokenValue::Text(value)), span),
    };

    lexer.push(token);
}

/// Scans a digit run and checks that whatever stopped it may end a number.
fn read_digits(lexer: &mut Lexer) -> Result<String, Error> {
    let digits = lexer.eat(&DIGITS);

    if !lexer.at_eof() && !is_number_delimiter(lexer.at()) {
        let found = lexer.remainder().chars().next().unwrap_or_default();
        return Err(lexer.error(ErrorImpl::InvalidNumericLiteral { literal: digits, found }));
    }

    Ok(digits)
}

fn number_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.pos;
    let prefix = read_digits(lexer)?;

    let value = if !lexer.at_eof() && lexer.at() == b'.' {
        lexer.advance_n(1);
        let suffix = read_digits(lexer)?;
        let literal = if suffix.is_empty() {
            format!("{}.0", prefix)
        } else {
            format!("{}.{}", prefix, suffix)
        };

        let value = literal.parse::<f64>().map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError { token: literal.clone() },
                Position(start as u32, Rc::clone(&lexer.file)),
            )
        })?;

        // f64 parsing saturates to infinity instead of failing.
        if !value.is_finite() {
            return Err(Error::new(
                ErrorImpl::NumberParseError { token: literal },
                Position(start as u32, Rc::clone(&lexer.file)),
            ));
        }
        TokenValue::Float(value)
    } else {
        let value = prefix.parse::<i64>().map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError { token: prefix.clone() },
                Position(start as u32, Rc::clone(&lexer.file)),
            )
        })?;
        TokenValue::Int(value)
    };

    let kind = match value {
        TokenValue::Float(_) => TokenKind::Float,
        _ => TokenKind::Int,
    };

    let token = MK_TOKEN!(kind, Some(value), MK_SPAN!(lexer, start, lexer.pos));
    lexer.push(token);
    Ok(())
}

/// Called with the cursor on the first byte after the opening quote.
fn string_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.pos - 1;
    let content = lexer.eat(&STRING_BODY);

    match lexer.at() {
        b'"' | b'\'' if !lexer.at_eof() => {
            lexer.advance_n(1);
        }
        b'\r' | b'\n' if !lexer.at_eof() => {
            let found = Some(lexer.at() as char);
            return Err(lexer.error(ErrorImpl::UnterminatedString { found }));
        }
        _ => return Err(lexer.error(ErrorImpl::UnterminatedString { found: None })),
    }

    let token = MK_TOKEN!(TokenKind::String, Some(TokenValue::Text(content)), MK_SPAN!(lexer, start, lexer.pos));
    lexer.push(token);
    Ok(())
}

/// Tokenizes `source` in one shot.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::with_source(source, file);
    lex.scan()
}
