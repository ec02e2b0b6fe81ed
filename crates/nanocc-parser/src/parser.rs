//! Recursive descent parser building an AST from a token sequence.

use nanocc_syntax::ast::{Expr, Function, Program, Stmt, UnaryOp};
use nanocc_syntax::error::{error, Result};
use nanocc_syntax::token::{Token, TokenKind};

/// Single-pass parser with a forward cursor over an immutable token
/// buffer (lookahead of one token).
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a parser over a lexed token sequence.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Result<&Token> {
        match self.tokens.get(self.pos) {
            Some(tk) => Ok(tk),
            None => error("unexpected end of input"),
        }
    }

    /// Remove and return the next token unconditionally.
    fn consume(&mut self) -> Result<Token> {
        match self.tokens.get(self.pos) {
            Some(tk) => {
                self.pos += 1;
                Ok(tk.clone())
            }
            None => error("unexpected end of input"),
        }
    }

    /// Remove and return the next token, requiring it to have the
    /// given kind.
    fn expect(&mut self, expected: TokenKind) -> Result<Token> {
        match self.tokens.get(self.pos) {
            Some(tk) if tk.kind == expected => {
                self.pos += 1;
                Ok(tk.clone())
            }
            Some(tk) => error(format!(
                "expected {}, but found \"{}\"",
                expected, tk.literal
            )),
            None => error(format!("expected {}, but found end of input", expected)),
        }
    }

    fn parse_unop(&mut self) -> Result<UnaryOp> {
        let tk = self.consume()?;
        match tk.kind {
            TokenKind::Tilde => Ok(UnaryOp::Complement),
            _ => Ok(UnaryOp::Negate),
        }
    }

    /// Parse one expression, dispatching on the lookahead token.
    fn parse_expr(&mut self) -> Result<Expr> {
        match self.peek()?.kind {
            TokenKind::Constant => {
                let tk = self.consume()?;
                let value: i32 = tk
                    .literal
                    .parse()
                    .map_err(|_| format!("illegal constant \"{}\"", tk.literal))?;
                Ok(Expr::Constant(value))
            }
            TokenKind::Tilde | TokenKind::Minus => {
                let op = self.parse_unop()?;
                let inner = self.parse_expr()?;
                Ok(Expr::Unary(op, Box::new(inner)))
            }
            TokenKind::OpenParen => {
                self.consume()?;
                let inner = self.parse_expr()?;
                self.expect(TokenKind::CloseParen)?;
                Ok(inner)
            }
            _ => {
                let literal = self.peek()?.literal.clone();
                error(format!("malformed expression \"{}\"", literal))
            }
        }
    }

    fn parse_statement(&mut self) -> Result<Stmt> {
        self.expect(TokenKind::ReturnKeyword)?;
        let return_val = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Return(return_val))
    }

    fn parse_function(&mut self) -> Result<Function> {
        self.expect(TokenKind::IntKeyword)?;
        let name = self.expect(TokenKind::Identifier)?.literal;
        self.expect(TokenKind::OpenParen)?;
        self.expect(TokenKind::VoidKeyword)?;
        self.expect(TokenKind::CloseParen)?;
        self.expect(TokenKind::OpenBrace)?;
        let body = self.parse_statement()?;
        self.expect(TokenKind::CloseBrace)?;
        Ok(Function { name, body })
    }

    /// Parse the entire token sequence as one translation unit.
    ///
    /// The whole sequence must be consumed; a leftover token after a
    /// complete function definition is a syntax error.
    pub fn parse_program(&mut self) -> Result<Program> {
        let function = self.parse_function()?;
        if let Some(tk) = self.tokens.get(self.pos) {
            return error(format!(
                "expected end of input, but found \"{}\"",
                tk.literal
            ));
        }
        Ok(Program { function })
    }
}
