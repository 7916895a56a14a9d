use std::fmt;

use super::token_type::TokenType;

/// A lexed token: kind, literal value, 1-based line number, and byte-offset
/// range within the full input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub literal: String,
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// `end` is derived from the literal's byte length.
    pub fn new(token_type: TokenType, literal: impl Into<String>, line: usize, start: usize) -> Self {
        let literal = literal.into();
        let end = start + literal.len();

        Self {
            token_type,
            literal,
            line,
            start,
            end,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, {:?}, {}:{})",
            self.token_type, self.literal, self.line, self.start
        )
    }
}
