use thiserror::Error;

use crate::ast::BinOp;

/// Scanning failure: the source contained something that is not part of the
/// language's lexical grammar.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("invalid character '{ch}' at line {line}, column {column}")]
    InvalidCharacter { ch: char, line: u32, column: u32 },

    #[error("number '{lexeme}' is out of range at line {line}, column {column}")]
    NumberOutOfRange {
        lexeme: String,
        line: u32,
        column: u32,
    },
}

/// Syntax failure: the token at `line`/`column` is not what the grammar
/// called for. Also raised for tokens left over after the last statement.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("expected {expected}, found {found} at line {line}, column {column}")]
pub struct ParseError {
    pub expected: String,
    pub found: String,
    pub line: u32,
    pub column: u32,
}

/// Evaluation failure. Execution stops at the first one; no output produced
/// before it survives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in '{op}' expression")]
    Overflow { op: BinOp },
}

/// Any failure the pipeline can produce, for callers that run source text
/// end to end.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
