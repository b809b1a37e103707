//! tinylang is a tree-walking interpreter for a small imperative language:
//! `let` assignments, `+ - * /` arithmetic over numbers, `print` statements
//! and `//` comments.
//!
//! Source text flows through [`tokenize`], [`parse`] and [`run`]; each stage
//! either produces its whole result or fails with a positioned error. Runs
//! are independent of each other — every call to [`run`] gets a fresh symbol
//! table.

pub mod ast;
pub mod error;
pub mod examples;
pub mod interpreter;
pub mod lexer;
pub mod number;
pub mod parser;
pub mod token;

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

pub use crate::{
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::Interpreter,
    number::Number,
};
use crate::{ast::Program, token::Token};

/// Scans `source` into its full token sequence, ending with exactly one Eof
/// token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = lexer::Lexer::from_str(source).tokenize()?;
    debug!(tokens = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Scans and parses `source` into a [`Program`].
pub fn parse(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    let program = parser::parse(&tokens)?;
    debug!(statements = program.statements.len(), "parsed program");
    Ok(program)
}

/// Everything a completed run produces: the printed lines in program order
/// and the final symbol table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub output: Vec<String>,
    #[serde(rename = "symbol_table")]
    pub symbols: HashMap<String, Number>,
}

/// Executes `source` end to end. All or nothing: on any error the caller
/// gets only the error, never partial output.
pub fn run(source: &str) -> Result<RunResult, Error> {
    let program = parse(source)?;

    let mut interpreter = Interpreter::new();
    interpreter.interpret(&program)?;

    let output = interpreter.take_output();
    debug!(lines = output.len(), "run finished");
    Ok(RunResult {
        output,
        symbols: interpreter.into_symbols(),
    })
}
