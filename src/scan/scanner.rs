use std::iter::Peekable;
use std::ops::Range;
use std::str::CharIndices;

use thiserror::Error;

use super::{Literal, Reporter, Token, TokenType};

/// Scans `source` into tokens, handing every diagnostic to `reporter`.
///
/// The returned sequence always ends with a single [`TokenType::Eof`] token,
/// whatever was reported along the way.
pub fn scan<R>(source: &str, reporter: &mut R) -> Vec<Token>
where
    R: Reporter + ?Sized,
{
    Scanner::new(source).scan(reporter)
}

/// Single-pass tokenizer. [`Scanner::scan`] consumes it, so an instance serves
/// exactly one pass over its source.
#[derive(Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    tokens: Vec<Token>,
    cursor: Range<usize>,
    line: usize,
    start_line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            tokens: vec![],
            cursor: 0..0,
            line: 1,
            start_line: 1,
        }
    }

    pub fn scan<R>(mut self, reporter: &mut R) -> Vec<Token>
    where
        R: Reporter + ?Sized,
    {
        while self.peek().is_some() {
            self.cursor.start = self.cursor.end;
            self.start_line = self.line;
            if let Err(e) = self.scan_token() {
                reporter.report(&e);
            }
        }

        self.tokens.push(Token::eof(self.source.len(), self.line));

        self.tokens
    }
}

impl Scanner<'_> {
    fn add_token(&mut self, kind: TokenType) {
        self.add_literal(kind, Literal::None);
    }

    fn add_literal(&mut self, kind: TokenType, literal: Literal) {
        self.tokens.push(Token::new(
            kind,
            self.source[self.cursor.clone()].into(),
            literal,
            self.start_line,
            self.cursor.clone(),
        ));
    }

    fn error(&self, kind: ScanErrorKind) -> ScanError {
        ScanError {
            kind,
            line: self.line,
            span: self.cursor.clone(),
        }
    }

    fn scan_token(&mut self) -> Result<(), ScanError> {
        let Some(c) = self.advance() else {
            return Ok(());
        };

        match c {
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            '-' => self.add_token(TokenType::Minus),
            '+' => self.add_token(TokenType::Plus),
            ';' => self.add_token(TokenType::Semicolon),
            '*' => self.add_token(TokenType::Star),
            '?' => self.add_token(TokenType::Question),
            ':' => self.add_token(TokenType::Colon),
            '!' => self.one_or_two(TokenType::Bang, TokenType::BangEqual),
            '=' => self.one_or_two(TokenType::Equal, TokenType::EqualEqual),
            '<' => self.one_or_two(TokenType::Less, TokenType::LessEqual),
            '>' => self.one_or_two(TokenType::Greater, TokenType::GreaterEqual),
            '/' => {
                if self.expect_char('/') {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenType::Slash);
                }
            }
            ' ' | '\r' | '\t' => (),
            '\n' => self.line += 1,
            '"' => self.string()?,
            c if c.is_ascii_digit() => self.number(),
            c if is_identifier_start(c) => self.identifier_or_keyword(),
            c => return Err(self.error(ScanErrorKind::UnexpectedCharacter(c))),
        }

        Ok(())
    }

    fn one_or_two(&mut self, single: TokenType, with_equal: TokenType) {
        let kind = if self.expect_char('=') {
            with_equal
        } else {
            single
        };
        self.add_token(kind)
    }

    fn string(&mut self) -> Result<(), ScanError> {
        loop {
            let Some(c) = self.advance() else {
                return Err(self.error(ScanErrorKind::UnterminatedString));
            };

            match c {
                '"' => break,
                '\n' => self.line += 1,
                _ => (),
            }
        }

        let content = &self.source[self.cursor.start + 1..self.cursor.end - 1];
        self.add_literal(TokenType::String, Literal::String(content.into()));

        Ok(())
    }

    fn number(&mut self) {
        while self.expect_pred(|c| c.is_ascii_digit()) {}

        if self.chars.peek().is_some_and(|(i, c)| {
            *c == '.'
                && self
                    .source
                    .get(i + 1..)
                    .is_some_and(|s| s.starts_with(|c: char| c.is_ascii_digit()))
        }) {
            let _ = self.advance();

            while self.expect_pred(|c| c.is_ascii_digit()) {}
        }

        // DIGIT+ ( "." DIGIT+ )? is always a valid float
        let x = self.source[self.cursor.clone()]
            .parse::<f64>()
            .unwrap_or(f64::NAN);
        self.add_literal(TokenType::Number, Literal::Number(x));
    }

    fn identifier_or_keyword(&mut self) {
        while self.expect_pred(is_identifier_continuation) {}

        let kind =
            TokenType::keyword(&self.source[self.cursor.clone()]).unwrap_or(TokenType::Identifier);

        self.add_token(kind)
    }

    fn advance(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        self.cursor.end = self
            .chars
            .peek()
            .map(|(i, _)| *i)
            .unwrap_or(self.source.len());
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn expect_char(&mut self, expected: char) -> bool {
        self.expect_pred(|c| c == expected)
    }

    fn expect_pred<F>(&mut self, pred: F) -> bool
    where
        F: FnOnce(char) -> bool,
    {
        if self.peek().is_some_and(pred) {
            let _ = self.advance();
            true
        } else {
            false
        }
    }
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

pub fn is_identifier_continuation(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '_'
}

/// A lexical diagnostic. Its `Display` is the message handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: usize,
    /// Offending bytes: the character, or the whole unclosed string.
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
}
