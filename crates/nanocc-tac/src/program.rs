//! Program containers for the nanocc TAC IR.

use crate::instruction::Instruction;

/// Function body: an ordered list of TAC instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub body: Vec<Instruction>,
}

/// Entire lowered translation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub function: Function,
}
