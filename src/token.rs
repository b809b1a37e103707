use std::fmt;

use derive_more::From;
use serde::Serialize;

use crate::number::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Number,
    Ident,
    Eof,

    // keywords
    Let,
    Print,

    // operators
    Plus,
    Minus,
    Star,
    Slash,
    Assign,

    // punctuation
    LeftParen,
    RightParen,
    Semicolon,
}

impl TokenKind {
    pub fn from_keyword_str(name: &str) -> Option<TokenKind> {
        match name {
            "let" => Some(TokenKind::Let),
            "print" => Some(TokenKind::Print),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Number => "number",
            TokenKind::Ident => "identifier",
            TokenKind::Eof => "end of input",
            TokenKind::Let => "'let'",
            TokenKind::Print => "'print'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Assign => "'='",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Semicolon => "';'",
        })
    }
}

/// Literal payload of a token. Only `Number` and `Ident` tokens carry one.
#[derive(Debug, Clone, PartialEq, Serialize, From)]
#[serde(untagged)]
pub enum Literal {
    Number(Number),
    Name(String),
}

/// A single lexical unit, positioned at the 1-based line/column of its first
/// character.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal: Option<Literal>,
    pub line: u32,
    pub column: u32,
}

impl Token {
    /// Phrases the token for an error message, including the literal when the
    /// kind alone is ambiguous.
    pub fn describe(&self) -> String {
        match &self.literal {
            Some(Literal::Number(value)) => format!("number '{value}'"),
            Some(Literal::Name(name)) => format!("identifier '{name}'"),
            None => self.kind.to_string(),
        }
    }
}
