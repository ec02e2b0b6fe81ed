//! AST (abstract syntax tree) types for the nanocc C subset.
//!
//! The grammar is closed to one function definition holding one
//! `return` statement, so the tree is intentionally small. Every node
//! is built by the parser only; a tree that exists is well-formed.

/// Unary operators applicable to an integer expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Bitwise complement `~`.
    Complement,
    /// Arithmetic negation `-`.
    Negate,
}

/// Expressions (integer constants and unary operations).
///
/// Parenthesized expressions are unwrapped during parsing and never
/// appear as a distinct node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Constant(i32),
    Unary(UnaryOp, Box<Expr>),
}

/// Statements. The only statement the grammar admits is `return`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Return(Expr),
}

/// Function definition: `int <name>(void) { <body> }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub body: Stmt,
}

/// Entire translation unit: exactly one function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub function: Function,
}
