//! nanocc code generation: TAC -> assembly tree -> assembly text.
//!
//! Instruction selection first produces a tree whose temporaries are
//! `Pseudo` operands; a replacement pass then assigns each temporary
//! a stack slot, and a fix-up pass rewrites instructions the target
//! does not support (memory-to-memory moves). The result contains
//! only emittable operands.

pub mod asm;
pub mod emit;

use std::collections::HashMap;

use nanocc_syntax::error::Result;
use nanocc_tac as tac;

pub use emit::emit;

/// Generate an assembly program for a lowered TAC program.
pub fn codegen(program: &tac::Program) -> Result<asm::Program> {
    let selected = select_function(&program.function);
    let function = fix_instructions(replace_pseudos(selected));
    Ok(asm::Program { function })
}

fn select_operand(value: &tac::Value) -> asm::Operand {
    match value {
        tac::Value::Constant(v) => asm::Operand::Imm(*v),
        tac::Value::Var(name) => asm::Operand::Pseudo(name.clone()),
    }
}

fn select_unop(op: tac::UnaryOp) -> asm::UnaryOp {
    match op {
        tac::UnaryOp::Negate => asm::UnaryOp::Neg,
        tac::UnaryOp::Complement => asm::UnaryOp::Not,
    }
}

/// Select instructions one TAC instruction at a time.
///
/// A unary operation becomes a move into its destination followed by
/// the in-place machine operation; a return moves the value into
/// `%eax` before `ret`.
fn select_function(function: &tac::Function) -> asm::Function {
    let mut instructions = Vec::new();
    for instr in &function.body {
        match instr {
            tac::Instruction::Return(value) => {
                instructions.push(asm::Instruction::Mov {
                    src: select_operand(value),
                    dst: asm::Operand::Reg(asm::Reg::Ax),
                });
                instructions.push(asm::Instruction::Ret);
            }
            tac::Instruction::Unary { op, src, dst } => {
                instructions.push(asm::Instruction::Mov {
                    src: select_operand(src),
                    dst: asm::Operand::Pseudo(dst.clone()),
                });
                instructions.push(asm::Instruction::Unary {
                    op: select_unop(*op),
                    dst: asm::Operand::Pseudo(dst.clone()),
                });
            }
        }
    }
    asm::Function {
        name: function.name.clone(),
        instructions,
    }
}

/// Assigns stack slots to pseudo operands in first-use order.
struct StackSlots {
    offsets: HashMap<String, i32>,
    next_offset: i32,
}

impl StackSlots {
    fn new() -> Self {
        Self {
            offsets: HashMap::new(),
            next_offset: 0,
        }
    }

    fn resolve(&mut self, operand: asm::Operand) -> asm::Operand {
        match operand {
            asm::Operand::Pseudo(name) => {
                let offset = *self.offsets.entry(name).or_insert_with(|| {
                    self.next_offset -= 4;
                    self.next_offset
                });
                asm::Operand::Stack(offset)
            }
            other => other,
        }
    }

    fn frame_size(&self) -> i32 {
        -self.next_offset
    }
}

/// Replace every `Pseudo` operand with a `Stack` slot below `%rbp`.
///
/// Each temporary maps to exactly one 4-byte slot, chosen in first-use
/// order, so the mapping is determined by the instruction order. When
/// any slot was assigned, an `AllocateStack` is prepended so the
/// emitter sets up a frame.
fn replace_pseudos(function: asm::Function) -> asm::Function {
    let mut slots = StackSlots::new();
    let mut instructions: Vec<asm::Instruction> = function
        .instructions
        .into_iter()
        .map(|instr| match instr {
            asm::Instruction::Mov { src, dst } => asm::Instruction::Mov {
                src: slots.resolve(src),
                dst: slots.resolve(dst),
            },
            asm::Instruction::Unary { op, dst } => asm::Instruction::Unary {
                op,
                dst: slots.resolve(dst),
            },
            other => other,
        })
        .collect();
    if slots.frame_size() > 0 {
        instructions.insert(0, asm::Instruction::AllocateStack(slots.frame_size()));
    }
    asm::Function {
        name: function.name,
        instructions,
    }
}

/// Rewrite instructions the target cannot encode.
///
/// `movl` requires at most one memory operand, so a stack-to-stack
/// move goes through the `%r10d` scratch register.
fn fix_instructions(function: asm::Function) -> asm::Function {
    let mut instructions = Vec::new();
    for instr in function.instructions {
        match instr {
            asm::Instruction::Mov {
                src: src @ asm::Operand::Stack(_),
                dst: dst @ asm::Operand::Stack(_),
            } => {
                instructions.push(asm::Instruction::Mov {
                    src,
                    dst: asm::Operand::Reg(asm::Reg::R10),
                });
                instructions.push(asm::Instruction::Mov {
                    src: asm::Operand::Reg(asm::Reg::R10),
                    dst,
                });
            }
            other => instructions.push(other),
        }
    }
    asm::Function {
        name: function.name,
        instructions,
    }
}
