//! Three-address code (TAC) IR for nanocc.
//!
//! This crate defines the instruction set, operand values and program
//! container produced by the lowering stage and consumed by code
//! generation. Each instruction computes one operation with at most
//! two sources and one destination; intermediate unary results live
//! in fresh temporaries.

pub mod instruction;
pub mod program;
pub mod value;

pub use instruction::{Instruction, UnaryOp};
pub use program::{Function, Program};
pub use value::Value;
