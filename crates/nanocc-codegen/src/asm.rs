//! Assembly tree: an almost-textual encoding of the target x86-64
//! AT&T-syntax output, serialized by the emitter rather than executed.

/// The registers instruction selection knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg {
    /// `%eax`, the return-value register.
    Ax,
    /// `%r10d`, scratch register for memory-to-memory rewrites.
    R10,
}

/// Instruction operands.
///
/// `Pseudo` operands name TAC temporaries and only exist between
/// instruction selection and the pseudo-replacement pass; emitted
/// programs contain none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Imm(i32),
    Reg(Reg),
    Pseudo(String),
    /// A 4-byte stack slot at the given offset from `%rbp`.
    Stack(i32),
}

/// Unary machine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `negl`
    Neg,
    /// `notl`
    Not,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Mov { src: Operand, dst: Operand },
    Unary { op: UnaryOp, dst: Operand },
    /// Reserve this many bytes of stack frame on function entry.
    AllocateStack(i32),
    Ret,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub instructions: Vec<Instruction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub function: Function,
}
