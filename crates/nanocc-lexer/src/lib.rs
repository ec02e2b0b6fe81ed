//! nanocc lexer: converts preprocessed C source text into tokens.
use nanocc_syntax::error::{error, Result};
use nanocc_syntax::token::{Token, TokenKind};

/// Left-to-right character scanner producing classified tokens.
pub struct Lexer {
    src: Vec<char>,
    pos: usize,
}

impl Lexer {
    /// Create a new lexer over the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            src: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }
    fn peek_next(&self) -> Option<char> {
        self.src.get(self.pos + 1).copied()
    }
    fn advance(&mut self) -> Option<char> {
        let ch = self.src.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Scan a maximal digit run. A digit run flowing directly into a
    /// letter or underscore is rejected: identifiers may not start
    /// with a digit.
    fn read_constant(&mut self) -> Result<Token> {
        let mut literal = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                literal.push(c);
                self.advance();
            } else {
                break;
            }
        }
        if let Some(c) = self.peek() {
            if c.is_ascii_alphabetic() || c == '_' {
                return error(format!("illegal constant \"{}{}\"", literal, c));
            }
        }
        Ok(Token::new(TokenKind::Constant, literal))
    }

    fn read_identifier(&mut self) -> Token {
        let mut literal = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                literal.push(c);
                self.advance();
            } else {
                break;
            }
        }
        let kind = match literal.as_str() {
            "int" => TokenKind::IntKeyword,
            "void" => TokenKind::VoidKeyword,
            "return" => TokenKind::ReturnKeyword,
            _ => TokenKind::Identifier,
        };
        Token::new(kind, literal)
    }

    /// Tokenize the entire input.
    ///
    /// Returns the complete token sequence in source order, or the
    /// first lexical error encountered; no partial output survives a
    /// failure. Empty input yields an empty sequence.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let tk = match self.peek() {
                None => break,
                Some('(') => {
                    self.advance();
                    Token::new(TokenKind::OpenParen, "(")
                }
                Some(')') => {
                    self.advance();
                    Token::new(TokenKind::CloseParen, ")")
                }
                Some('{') => {
                    self.advance();
                    Token::new(TokenKind::OpenBrace, "{")
                }
                Some('}') => {
                    self.advance();
                    Token::new(TokenKind::CloseBrace, "}")
                }
                Some(';') => {
                    self.advance();
                    Token::new(TokenKind::Semicolon, ";")
                }
                Some('~') => {
                    self.advance();
                    Token::new(TokenKind::Tilde, "~")
                }
                Some('-') => {
                    // decrement is not part of the grammar
                    if self.peek_next() == Some('-') {
                        return error("illegal token \"--\"");
                    }
                    self.advance();
                    Token::new(TokenKind::Minus, "-")
                }
                Some(c) if c.is_ascii_digit() => self.read_constant()?,
                Some(c) if c.is_ascii_alphabetic() || c == '_' => self.read_identifier(),
                Some(other) => {
                    return error(format!("illegal token \"{}\"", other));
                }
            };
            tokens.push(tk);
        }
        Ok(tokens)
    }
}
