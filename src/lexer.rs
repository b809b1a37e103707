use unicode_xid::UnicodeXID;

use crate::{
    error::LexError,
    number::Number,
    token::{Literal, Token, TokenKind},
};

/// Left-to-right scanner over the source text.
///
/// Tracks the 1-based line/column of the character about to be consumed, so
/// every token (and every error) points at the position where its first
/// character was encountered.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Vec<char>,
    current: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn from_str(source: &str) -> Self {
        Lexer {
            source: source.chars().collect(),
            current: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.current += 1;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn single(&mut self, kind: TokenKind, line: u32, column: u32) -> Token {
        self.advance();
        Token {
            kind,
            literal: None,
            line,
            column,
        }
    }

    fn lex_number(&mut self, line: u32, column: u32) -> Result<Token, LexError> {
        let mut lexeme = String::new();
        let mut is_float = false;

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                lexeme.push(c);
                self.advance();
            } else if c == '.'
                && !is_float
                && self.peek_next().is_some_and(|next| next.is_ascii_digit())
            {
                // one fractional part at most; a '.' without a digit after it
                // is left for the next token
                is_float = true;
                lexeme.push(c);
                self.advance();
            } else {
                break;
            }
        }

        let value = if is_float {
            match lexeme.parse::<f64>() {
                Ok(value) => Number::Float(value),
                Err(_) => return Err(LexError::NumberOutOfRange { lexeme, line, column }),
            }
        } else {
            match lexeme.parse::<i64>() {
                Ok(value) => Number::Int(value),
                Err(_) => return Err(LexError::NumberOutOfRange { lexeme, line, column }),
            }
        };

        Ok(Token {
            kind: TokenKind::Number,
            literal: Some(Literal::Number(value)),
            line,
            column,
        })
    }

    fn lex_ident(&mut self, line: u32, column: u32) -> Token {
        let mut lexeme = String::new();

        while let Some(c) = self.peek() {
            if c.is_xid_continue() {
                lexeme.push(c);
                self.advance();
            } else {
                break;
            }
        }

        match TokenKind::from_keyword_str(&lexeme) {
            Some(kind) => Token {
                kind,
                literal: None,
                line,
                column,
            },
            None => Token {
                kind: TokenKind::Ident,
                literal: Some(Literal::Name(lexeme)),
                line,
                column,
            },
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(c) = self.peek() {
            let (line, column) = (self.line, self.column);

            if c.is_whitespace() {
                self.advance();
                continue;
            }

            if c == '/' && self.peek_next() == Some('/') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            let token = match c {
                '+' => self.single(TokenKind::Plus, line, column),
                '-' => self.single(TokenKind::Minus, line, column),
                '*' => self.single(TokenKind::Star, line, column),
                '/' => self.single(TokenKind::Slash, line, column),
                '=' => self.single(TokenKind::Assign, line, column),
                '(' => self.single(TokenKind::LeftParen, line, column),
                ')' => self.single(TokenKind::RightParen, line, column),
                ';' => self.single(TokenKind::Semicolon, line, column),
                _ if c.is_ascii_digit() => self.lex_number(line, column)?,
                _ if c == '_' || c.is_xid_start() => self.lex_ident(line, column),
                _ => return Err(LexError::InvalidCharacter { ch: c, line, column }),
            };

            tokens.push(token);
        }

        tokens.push(Token {
            kind: TokenKind::Eof,
            literal: None,
            line: self.line,
            column: self.column,
        });

        Ok(tokens)
    }
}
