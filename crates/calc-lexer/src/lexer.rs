use serde::Serialize;

use crate::diagnostics::LexError;
use crate::span::Span;
use crate::token::{resolve_keyword, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Self { kind, text, span }
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Whitespace the lexer consumes without emitting a token: space, tab,
/// newline. Carriage returns are not in the set and halt the scan like any
/// other unrecognized character.
fn is_skippable(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    halted: bool,
    pub errors: Vec<LexError>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            halted: false,
            errors: Vec::new(),
        }
    }

    /// Read the next token. Returns None once the input is exhausted, or
    /// after the scan has halted on an unrecognized character; a halted
    /// lexer never resumes.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        if self.halted {
            return None;
        }
        self.skip_whitespace();

        let start = self.pos;
        let c = self.source[self.pos..].chars().next()?;

        let kind = match c {
            '(' => {
                self.pos += 1;
                TokenKind::OpenParen
            }
            ')' => {
                self.pos += 1;
                TokenKind::CloseParen
            }
            '+' | '-' | '*' | '/' => {
                self.pos += 1;
                TokenKind::BinaryOperator
            }
            '=' => {
                self.pos += 1;
                TokenKind::Equals
            }
            c if is_digit(c) => {
                self.consume_while(is_digit);
                TokenKind::Number
            }
            c if is_alpha(c) => {
                // Identifiers may contain digits after the first letter
                self.consume_while(|c| is_alpha(c) || is_digit(c));
                resolve_keyword(&self.source[start..self.pos]).unwrap_or(TokenKind::Identifier)
            }
            other => {
                let span = Span::new(start as u32, (start + other.len_utf8()) as u32);
                self.errors.push(LexError::UnexpectedCharacter { found: other, span });
                self.halted = true;
                return None;
            }
        };

        let span = Span::new(start as u32, self.pos as u32);
        Some(Token::new(kind, &self.source[start..self.pos], span))
    }

    fn skip_whitespace(&mut self) {
        self.consume_while(is_skippable);
    }

    /// Advance past a maximal run of characters matching `pred`.
    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.source[self.pos..].chars().next() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }
}
