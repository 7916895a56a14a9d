//! Forward-only cursor over a lexed token sequence

use super::token::Token;

/// A single forward read position over an ordered token slice.
///
/// The position is monotonically non-decreasing and no backward seek is
/// exposed. Re-scanning means constructing a new stream over the same
/// slice, which is cheap because the backing sequence is never mutated.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Whether a token remains to be consumed.
    pub fn has_next(&self) -> bool {
        self.position < self.tokens.len()
    }

    /// The next token, without advancing.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// The most recently consumed token. `None` until `next` has been
    /// called at least once.
    pub fn current(&self) -> Option<&'a Token> {
        self.position.checked_sub(1).and_then(|i| self.tokens.get(i))
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = &'a Token;

    /// Consume and return the next token.
    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;

        Some(token)
    }
}
