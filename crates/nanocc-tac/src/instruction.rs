//! Instruction set for the nanocc three-address code IR.

use crate::value::Value;

/// Unary operators at the TAC level, mapped 1:1 from the AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Complement,
    Negate,
}

/// One three-address instruction: at most two source operands, one
/// destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Return `value` from the enclosing function.
    Return(Value),

    /// `dst = op(src)`, where `dst` names a fresh temporary.
    Unary {
        op: UnaryOp,
        src: Value,
        dst: String,
    },
}
