//! nanocc lowering: AST -> three-address code.

use nanocc_syntax::ast;
use nanocc_syntax::error::Result;
use nanocc_tac::{Function as TacFunction, Instruction, Program as TacProgram, UnaryOp, Value};

/// Lowers an AST into TAC, owning the temporary-name counter for one
/// compilation.
///
/// The counter lives on the generator rather than in process-wide
/// state, so separate compilations never leak or collide temporary
/// names and output stays deterministic.
pub struct TacGen {
    tmp_count: u32,
}

impl Default for TacGen {
    fn default() -> Self {
        Self::new()
    }
}

impl TacGen {
    pub fn new() -> Self {
        Self { tmp_count: 0 }
    }

    fn fresh_tmp(&mut self) -> String {
        let name = format!("tmp_{}", self.tmp_count);
        self.tmp_count += 1;
        name
    }

    /// Lower a whole translation unit to a TAC program.
    pub fn emit(&mut self, program: &ast::Program) -> Result<TacProgram> {
        Ok(TacProgram {
            function: self.emit_function(&program.function)?,
        })
    }

    fn emit_function(&mut self, function: &ast::Function) -> Result<TacFunction> {
        Ok(TacFunction {
            name: function.name.clone(),
            body: self.emit_stmt(&function.body)?,
        })
    }

    fn emit_stmt(&mut self, stmt: &ast::Stmt) -> Result<Vec<Instruction>> {
        let mut body = Vec::new();
        match stmt {
            ast::Stmt::Return(expr) => {
                let value = self.emit_expr(expr, &mut body)?;
                body.push(Instruction::Return(value));
            }
        }
        Ok(body)
    }

    /// Lower one expression depth-first, appending the instructions
    /// that compute it and returning the value holding its result.
    /// Constants produce no instructions.
    fn emit_expr(&mut self, expr: &ast::Expr, body: &mut Vec<Instruction>) -> Result<Value> {
        match expr {
            ast::Expr::Constant(v) => Ok(Value::Constant(*v)),
            ast::Expr::Unary(op, inner) => {
                let src = self.emit_expr(inner, body)?;
                let dst = self.fresh_tmp();
                body.push(Instruction::Unary {
                    op: lower_unop(*op),
                    src,
                    dst: dst.clone(),
                });
                Ok(Value::Var(dst))
            }
        }
    }
}

// Closed 1:1 mapping; the parser is the only producer of operators.
fn lower_unop(op: ast::UnaryOp) -> UnaryOp {
    match op {
        ast::UnaryOp::Complement => UnaryOp::Complement,
        ast::UnaryOp::Negate => UnaryOp::Negate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanocc_lexer::Lexer;
    use nanocc_parser::Parser;

    fn lower_str(input: &str) -> TacProgram {
        let tokens = Lexer::new(input).tokenize().expect("Lexing should succeed");
        let program = Parser::new(tokens)
            .parse_program()
            .expect("Parsing should succeed");
        TacGen::new().emit(&program).expect("Lowering should succeed")
    }

    #[test]
    fn test_constant_return() {
        let tac = lower_str("int main(void) { return 2; }");
        assert_eq!(tac.function.name, "main");
        assert_eq!(
            tac.function.body,
            vec![Instruction::Return(Value::Constant(2))]
        );
    }

    #[test]
    fn test_nested_unary() {
        let tac = lower_str("int main(void) { return ~-1; }");
        assert_eq!(
            tac.function.body,
            vec![
                Instruction::Unary {
                    op: UnaryOp::Negate,
                    src: Value::Constant(1),
                    dst: "tmp_0".to_string(),
                },
                Instruction::Unary {
                    op: UnaryOp::Complement,
                    src: Value::Var("tmp_0".to_string()),
                    dst: "tmp_1".to_string(),
                },
                Instruction::Return(Value::Var("tmp_1".to_string())),
            ]
        );
    }

    #[test]
    fn test_counter_is_scoped_per_generator() {
        let first = lower_str("int main(void) { return -4; }");
        let second = lower_str("int main(void) { return -4; }");
        assert_eq!(first, second);
        assert_eq!(
            first.function.body[0],
            Instruction::Unary {
                op: UnaryOp::Negate,
                src: Value::Constant(4),
                dst: "tmp_0".to_string(),
            }
        );
    }

    #[test]
    fn test_every_var_source_was_a_destination() {
        let tac = lower_str("int main(void) { return -~-~0; }");
        let mut written: Vec<&str> = Vec::new();
        for instr in &tac.function.body {
            match instr {
                Instruction::Unary { src, dst, .. } => {
                    if let Value::Var(name) = src {
                        assert!(written.contains(&name.as_str()));
                    }
                    assert!(!written.contains(&dst.as_str()));
                    written.push(dst);
                }
                Instruction::Return(Value::Var(name)) => {
                    assert!(written.contains(&name.as_str()));
                }
                Instruction::Return(Value::Constant(_)) => {}
            }
        }
        assert_eq!(written, vec!["tmp_0", "tmp_1", "tmp_2", "tmp_3"]);
    }
}
