/// Operand values for TAC instructions.
///
/// `Var` names are compiler-generated temporaries of the form
/// `tmp_<n>`; each one is written exactly once before any read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Constant(i32),
    Var(String),
}
