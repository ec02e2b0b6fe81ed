//! Token definitions for the C subset accepted by nanocc.
//!
//! Tokens are the smallest meaningful units of the source text:
//! keywords, identifiers, integer constants, punctuators and the two
//! unary operators. The lexer produces them in source order; every
//! later diagnostic echoes a token's literal text verbatim.

use std::fmt;

/// Token categories produced by the nanocc lexer.
///
/// This is a closed set: the grammar only knows `int`, `void` and
/// `return`, the five punctuators, the two unary operators, and the
/// identifier/constant classes. Each keyword gets its own kind so the
/// parser can `expect` it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier (function names, for now just `main`).
    Identifier,

    /// An integer constant, e.g. `42`.
    Constant,

    /// The `int` keyword.
    IntKeyword,

    /// The `void` keyword.
    VoidKeyword,

    /// The `return` keyword.
    ReturnKeyword,

    /// Left parenthesis `(`.
    OpenParen,

    /// Right parenthesis `)`.
    CloseParen,

    /// Left brace `{`.
    OpenBrace,

    /// Right brace `}`.
    CloseBrace,

    /// Semicolon `;`.
    Semicolon,

    /// Bitwise complement operator `~`.
    Tilde,

    /// Negation operator `-`.
    Minus,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Constant => "constant",
            TokenKind::IntKeyword => "int-keyword",
            TokenKind::VoidKeyword => "void-keyword",
            TokenKind::ReturnKeyword => "return-keyword",
            TokenKind::OpenParen => "open-paren",
            TokenKind::CloseParen => "close-paren",
            TokenKind::OpenBrace => "open-brace",
            TokenKind::CloseBrace => "close-brace",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Tilde => "tilde",
            TokenKind::Minus => "minus",
        };
        write!(f, "{}", name)
    }
}

/// A lexed token: a kind paired with the exact matched substring.
///
/// No source positions are tracked; error messages surface only the
/// offending literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The syntactic category of this token.
    pub kind: TokenKind,

    /// The exact source text this token was lexed from.
    pub literal: String,
}

impl Token {
    /// Create a token from a kind and its literal text.
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }
}
