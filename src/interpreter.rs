use std::collections::HashMap;

use crate::{
    ast::{BinOp, Expr, Program, Stmt},
    error::RuntimeError,
    number::Number,
};

/// Tree-walking evaluator.
///
/// Owns the symbol table (one flat namespace) and an output buffer of printed
/// lines. A fresh interpreter per run keeps runs independent; the REPL reuses
/// one so variables survive across lines.
#[derive(Debug, Default)]
pub struct Interpreter {
    symbols: HashMap<String, Number>,
    output: Vec<String>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes every statement of `program` in source order, stopping at the
    /// first runtime error.
    pub fn interpret(&mut self, program: &Program) -> Result<(), RuntimeError> {
        for stmt in &program.statements {
            self.execute(stmt)?;
        }
        Ok(())
    }

    /// Executes one statement and returns the value it assigned or printed.
    pub fn execute(&mut self, stmt: &Stmt) -> Result<Number, RuntimeError> {
        match stmt {
            Stmt::Assign(assign) => {
                let value = self.eval(&assign.value)?;
                self.symbols.insert(assign.name.clone(), value);
                Ok(value)
            }
            Stmt::Print(print) => {
                let value = self.eval(&print.expr)?;
                self.output.push(value.to_string());
                Ok(value)
            }
        }
    }

    pub fn eval(&self, expr: &Expr) -> Result<Number, RuntimeError> {
        match expr {
            Expr::Number(lit) => Ok(lit.value),
            Expr::Var(var) => match self.symbols.get(&var.name) {
                Some(value) => Ok(*value),
                None => Err(RuntimeError::UndefinedVariable {
                    name: var.name.clone(),
                }),
            },
            Expr::Binary(binary) => {
                let left = self.eval(&binary.left)?;
                let right = self.eval(&binary.right)?;
                apply(binary.op, left, right)
            }
        }
    }

    pub fn symbols(&self) -> &HashMap<String, Number> {
        &self.symbols
    }

    pub fn into_symbols(self) -> HashMap<String, Number> {
        self.symbols
    }

    /// Drains the lines printed since the last call.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }
}

fn apply(op: BinOp, lhs: Number, rhs: Number) -> Result<Number, RuntimeError> {
    match op {
        BinOp::Add | BinOp::Sub | BinOp::Mul => match (lhs, rhs) {
            (Number::Int(a), Number::Int(b)) => {
                let result = match op {
                    BinOp::Add => a.checked_add(b),
                    BinOp::Sub => a.checked_sub(b),
                    BinOp::Mul => a.checked_mul(b),
                    BinOp::Div => unreachable!(),
                };
                match result {
                    Some(value) => Ok(Number::Int(value)),
                    None => Err(RuntimeError::Overflow { op }),
                }
            }
            _ => {
                let (a, b) = (lhs.as_f64(), rhs.as_f64());
                Ok(Number::Float(match op {
                    BinOp::Add => a + b,
                    BinOp::Sub => a - b,
                    BinOp::Mul => a * b,
                    BinOp::Div => unreachable!(),
                }))
            }
        },
        // the quotient is a float even when it divides evenly
        BinOp::Div => {
            if rhs.is_zero() {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Number::Float(lhs.as_f64() / rhs.as_f64()))
        }
    }
}
