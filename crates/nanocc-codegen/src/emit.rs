//! Serializer from the assembly tree to AT&T-syntax text.
//!
//! The formatting is whitespace-exact: the external assembler does
//! not care, but tests compare emitted output byte for byte.

use nanocc_syntax::error::{error, Result};

use crate::asm::{Function, Instruction, Operand, Program, Reg, UnaryOp};

fn format_operand(operand: &Operand) -> Result<String> {
    match operand {
        Operand::Imm(v) => Ok(format!("${}", v)),
        Operand::Reg(Reg::Ax) => Ok("%eax".to_string()),
        Operand::Reg(Reg::R10) => Ok("%r10d".to_string()),
        Operand::Stack(offset) => Ok(format!("{}(%rbp)", offset)),
        // only reachable through a codegen defect
        Operand::Pseudo(name) => error(format!("unresolved pseudo operand \"{}\"", name)),
    }
}

fn emit_function(function: &Function, output: &mut Vec<String>) -> Result<()> {
    let has_frame = function
        .instructions
        .iter()
        .any(|i| matches!(i, Instruction::AllocateStack(_)));

    output.push(format!("\t.globl {}", function.name));
    output.push(format!("{}:", function.name));
    for instr in &function.instructions {
        match instr {
            Instruction::AllocateStack(bytes) => {
                output.push("\tpushq\t%rbp".to_string());
                output.push("\tmovq\t%rsp, %rbp".to_string());
                output.push(format!("\tsubq\t${}, %rsp", bytes));
            }
            Instruction::Mov { src, dst } => {
                output.push(format!(
                    "\tmovl\t{}, {}",
                    format_operand(src)?,
                    format_operand(dst)?
                ));
            }
            Instruction::Unary { op, dst } => {
                let mnemonic = match op {
                    UnaryOp::Neg => "negl",
                    UnaryOp::Not => "notl",
                };
                output.push(format!("\t{}\t{}", mnemonic, format_operand(dst)?));
            }
            Instruction::Ret => {
                if has_frame {
                    output.push("\tmovq\t%rbp, %rsp".to_string());
                    output.push("\tpopq\t%rbp".to_string());
                }
                output.push("\tret".to_string());
            }
        }
    }
    Ok(())
}

/// Serialize an assembly program to the text handed to the assembler.
pub fn emit(program: &Program) -> Result<String> {
    let mut output: Vec<String> = Vec::new();
    emit_function(&program.function, &mut output)?;
    output.push("\t.section\t.note.GNU-stack, \"\",@progbits".to_string());
    let mut text = output.join("\n");
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asm;

    #[test]
    fn test_constant_return_is_byte_exact() {
        let program = Program {
            function: Function {
                name: "main".to_string(),
                instructions: vec![
                    Instruction::Mov {
                        src: Operand::Imm(100),
                        dst: Operand::Reg(Reg::Ax),
                    },
                    Instruction::Ret,
                ],
            },
        };
        assert_eq!(
            emit(&program).unwrap(),
            "\t.globl main\nmain:\n\tmovl\t$100, %eax\n\tret\n\t.section\t.note.GNU-stack, \"\",@progbits\n"
        );
    }

    #[test]
    fn test_frame_setup_and_teardown() {
        let program = Program {
            function: Function {
                name: "main".to_string(),
                instructions: vec![
                    Instruction::AllocateStack(4),
                    Instruction::Mov {
                        src: Operand::Imm(3),
                        dst: Operand::Stack(-4),
                    },
                    Instruction::Unary {
                        op: UnaryOp::Neg,
                        dst: Operand::Stack(-4),
                    },
                    Instruction::Mov {
                        src: Operand::Stack(-4),
                        dst: Operand::Reg(Reg::Ax),
                    },
                    Instruction::Ret,
                ],
            },
        };
        let text = emit(&program).unwrap();
        let expected = "\t.globl main\n\
                        main:\n\
                        \tpushq\t%rbp\n\
                        \tmovq\t%rsp, %rbp\n\
                        \tsubq\t$4, %rsp\n\
                        \tmovl\t$3, -4(%rbp)\n\
                        \tnegl\t-4(%rbp)\n\
                        \tmovl\t-4(%rbp), %eax\n\
                        \tmovq\t%rbp, %rsp\n\
                        \tpopq\t%rbp\n\
                        \tret\n\
                        \t.section\t.note.GNU-stack, \"\",@progbits\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_unresolved_pseudo_is_an_internal_error() {
        let program = Program {
            function: Function {
                name: "main".to_string(),
                instructions: vec![Instruction::Unary {
                    op: UnaryOp::Not,
                    dst: asm::Operand::Pseudo("tmp_0".to_string()),
                }],
            },
        };
        let err = emit(&program).unwrap_err();
        assert_eq!(err.msg, "unresolved pseudo operand \"tmp_0\"");
    }
}
