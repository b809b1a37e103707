use crate::{
    ast,
    ast::BinOp,
    error::ParseError,
    token::{Literal, Token, TokenKind},
};

/// Recursive-descent parser over the grammar:
///
/// ```text
/// program    := statement* EOF
/// statement  := assignment | print_stmt
/// assignment := LET IDENT ASSIGN expr SEMICOLON
/// print_stmt := PRINT LPAREN expr RPAREN SEMICOLON
/// expr       := term ( (PLUS | MINUS) term )*
/// term       := factor ( (STAR | SLASH) factor )*
/// factor     := NUMBER | IDENT | LPAREN expr RPAREN
/// ```
///
/// One routine per production, single-token lookahead, no backtracking.
#[derive(Debug)]
struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, current: 0 }
    }

    fn peek(&self) -> &'a Token {
        match self.tokens.get(self.current) {
            Some(token) => token,
            // the stream always ends with Eof, so this only defends against
            // hand-built token slices
            None => &self.tokens[self.tokens.len() - 1],
        }
    }

    fn expected(&self, what: &str) -> ParseError {
        let token = self.peek();
        ParseError {
            expected: what.to_string(),
            found: token.describe(),
            line: token.line,
            column: token.column,
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        let token = self.peek();
        if token.kind == kind {
            self.current += 1;
            Ok(token)
        } else {
            Err(self.expected(&kind.to_string()))
        }
    }

    fn ident(&mut self) -> Result<String, ParseError> {
        let token = self.expect(TokenKind::Ident)?;
        match &token.literal {
            Some(Literal::Name(name)) => Ok(name.clone()),
            _ => unreachable!("identifier tokens always carry a name"),
        }
    }

    fn program(&mut self) -> Result<ast::Program, ParseError> {
        let mut statements = Vec::new();

        while self.peek().kind != TokenKind::Eof {
            statements.push(self.statement()?);
        }
        self.expect(TokenKind::Eof)?;

        Ok(ast::Program { statements })
    }

    fn statement(&mut self) -> Result<ast::Stmt, ParseError> {
        match self.peek().kind {
            TokenKind::Let => Ok(self.assignment()?.into()),
            TokenKind::Print => Ok(self.print_stmt()?.into()),
            _ => Err(self.expected("'let' or 'print'")),
        }
    }

    fn assignment(&mut self) -> Result<ast::AssignStmt, ParseError> {
        self.expect(TokenKind::Let)?;
        let name = self.ident()?;
        self.expect(TokenKind::Assign)?;
        let value = self.expr()?;
        self.expect(TokenKind::Semicolon)?;

        Ok(ast::AssignStmt { name, value })
    }

    fn print_stmt(&mut self) -> Result<ast::PrintStmt, ParseError> {
        self.expect(TokenKind::Print)?;
        self.expect(TokenKind::LeftParen)?;
        let expr = self.expr()?;
        self.expect(TokenKind::RightParen)?;
        self.expect(TokenKind::Semicolon)?;

        Ok(ast::PrintStmt { expr })
    }

    fn expr(&mut self) -> Result<ast::Expr, ParseError> {
        let mut node = self.term()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.current += 1;

            let right = self.term()?;
            node = ast::BinaryExpr {
                op,
                left: Box::new(node),
                right: Box::new(right),
            }
            .into();
        }

        Ok(node)
    }

    fn term(&mut self) -> Result<ast::Expr, ParseError> {
        let mut node = self.factor()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.current += 1;

            let right = self.factor()?;
            node = ast::BinaryExpr {
                op,
                left: Box::new(node),
                right: Box::new(right),
            }
            .into();
        }

        Ok(node)
    }

    fn factor(&mut self) -> Result<ast::Expr, ParseError> {
        match self.peek().kind {
            TokenKind::Number => {
                let token = self.expect(TokenKind::Number)?;
                let value = match token.literal {
                    Some(Literal::Number(value)) => value,
                    _ => unreachable!("number tokens always carry a value"),
                };
                Ok(ast::NumberLit { value }.into())
            }
            TokenKind::Ident => {
                let name = self.ident()?;
                Ok(ast::VarExpr { name }.into())
            }
            TokenKind::LeftParen => {
                self.expect(TokenKind::LeftParen)?;
                let node = self.expr()?;
                self.expect(TokenKind::RightParen)?;
                Ok(node)
            }
            _ => Err(self.expected("number, identifier or '('")),
        }
    }
}

pub fn parse(tokens: &[Token]) -> Result<ast::Program, ParseError> {
    if tokens.is_empty() {
        return Ok(ast::Program {
            statements: Vec::new(),
        });
    }

    Parser::new(tokens).program()
}
