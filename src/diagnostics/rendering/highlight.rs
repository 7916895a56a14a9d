//! Per-token syntax coloring for source excerpts

use crate::diagnostics::rendering::code_block::CodeBlockLine;
use crate::diagnostics::rendering::colors::Colors;
use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;

/// Wrap a token's literal in the color directive for its kind.
///
/// Keywords render blue, identifiers green, and numeric literals magenta.
/// Every other kind passes through unmodified. Total over [`TokenType`].
pub fn coat(token: &Token, colors: &Colors) -> String {
    let kind = token.token_type;

    if kind.is_keyword() {
        format!("{}{}{}", colors.blue, token.literal, colors.reset)
    } else if kind == TokenType::Ident {
        format!("{}{}{}", colors.green, token.literal, colors.reset)
    } else if kind.is_numeric() {
        format!("{}{}{}", colors.magenta, token.literal, colors.reset)
    } else {
        token.literal.clone()
    }
}

/// Produce a highlighted copy of a line's text with every token's literal
/// replaced by its coated form. The source line is never mutated.
///
/// Token offsets are rebased against the line's first token, since
/// reconstructed line text always starts at that token. An offset at or
/// past the end of the text resolves to an empty trailing segment rather
/// than an out-of-range slice.
pub fn highlight_line(line: &CodeBlockLine, colors: &Colors) -> String {
    let Some(first) = line.tokens.first() else {
        return line.text.clone();
    };

    let base = first.start;
    let mut out = String::with_capacity(line.text.len());
    let mut cursor = 0;

    for token in &line.tokens {
        let rel_start = token.start - base;
        let rel_end = token.end - base;

        out.push_str(line.text.get(cursor..rel_start).unwrap_or(""));
        out.push_str(&coat(token, colors));
        cursor = rel_end;
    }

    out.push_str(line.text.get(cursor..).unwrap_or(""));

    out
}
