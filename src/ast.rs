use std::fmt;

use derive_more::{From, TryInto};
use serde::Serialize;

use crate::number::Number;

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberLit {
    pub value: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarExpr {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpr {
    pub op: BinOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// An expression node. Serialized with a `type` tag and named fields so that
/// a renderer can walk the tree without knowing the variants up front.
#[derive(Debug, Clone, PartialEq, Serialize, From, TryInto)]
#[serde(tag = "type")]
pub enum Expr {
    Number(NumberLit),
    Var(VarExpr),
    Binary(BinaryExpr),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignStmt {
    pub name: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintStmt {
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, From, TryInto)]
#[serde(tag = "type")]
pub enum Stmt {
    Assign(AssignStmt),
    Print(PrintStmt),
}

/// Root of a parsed program. Statement order is source order and execution
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(lit) => write!(f, "{}", lit.value),
            Expr::Var(var) => f.write_str(&var.name),
            Expr::Binary(binary) => {
                write!(f, "({} {} {})", binary.left, binary.op, binary.right)
            }
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Assign(assign) => write!(f, "let {} = {};", assign.name, assign.value),
            Stmt::Print(print) => write!(f, "print({});", print.expr),
        }
    }
}
