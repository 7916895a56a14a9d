//! Windowed extraction of source lines around a diagnostic
//!
//! The extractor locates a line-numbered window inside the token sequence
//! with a single forward pass. A fresh [`TokenStream`] is constructed per
//! extraction, so windows for different diagnostics may overlap freely.

use crate::diagnostics::position::Span;
use crate::syntax::token::Token;
use crate::syntax::token_stream::TokenStream;

/// Number of context lines included above and below the flagged line.
pub const DEFAULT_GRACE: usize = 2;

/// A single extracted source line, optionally underlined.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlockLine {
    pub text: String,
    pub tokens: Vec<Token>,
    pub line_number: Option<usize>,
    pub colors_enabled: bool,
    /// Column range to underline, relative to the start of `text`.
    pub underline: Option<Span>,
}

/// Extracted window of source lines, ascending by line number.
pub type CodeBlock = Vec<CodeBlockLine>;

/// Rebuild a line's literal text from its tokens and the full input.
///
/// A single-token line returns the token's literal directly. A multi-token
/// line slices the original input from the first token's start to the last
/// token's end, preserving the inter-token text exactly as written.
///
/// # Panics
///
/// Both `input` and `line_tokens` must be non-empty; violating this is a
/// usage error, not a recoverable condition.
pub fn reconstruct_line_text(input: &str, line_tokens: &[Token]) -> String {
    assert!(
        !line_tokens.is_empty() && !input.is_empty(),
        "line text reconstruction requires a non-empty input and token buffer"
    );

    if line_tokens.len() == 1 {
        return line_tokens[0].literal.clone();
    }

    let first = &line_tokens[0];
    let last = &line_tokens[line_tokens.len() - 1];

    input[first.start..last.end].to_string()
}

/// Materialize a window of source lines around `target_line` from a fresh
/// forward pass over `tokens`.
///
/// The window nominally covers `target_line ± grace`, with the start
/// clamped to zero instead of underflowing. The line matching
/// `target_line` carries `underline_column`.
///
/// Returns `None` when the stream ends before the window start is reached,
/// or before the target line produced a line record. A stream that ends
/// early but after the target line still yields the partial window.
pub fn extract_window(
    input: &str,
    tokens: &[Token],
    colors_enabled: bool,
    target_line: usize,
    underline_column: Span,
    grace: usize,
) -> Option<CodeBlock> {
    let start = if grace >= target_line {
        0
    } else {
        target_line - grace
    };
    let end = target_line + grace;

    let mut stream = TokenStream::new(tokens);
    let mut counter = 0;

    // Discard tokens until the stream sits on the first token of the
    // window's start line. A clamped start of zero means "begin at the
    // first available token".
    while counter != start {
        let token = stream.next()?;
        counter = token.line;
    }

    // The counter adopts the entry token's own line number so the first
    // buffered line closes against the line its tokens actually carry.
    let entry = if start == 0 {
        stream.next()?
    } else {
        stream.current()?
    };
    let mut counter = entry.line;

    let mut block = CodeBlock::new();
    let mut line_buffer: Vec<Token> = Vec::new();
    let mut prime = true;

    while counter != end {
        let met = counter >= target_line;

        let token = if prime {
            prime = false;
            entry
        } else {
            stream.next()?
        };

        line_buffer.push(token.clone());

        match stream.peek() {
            Some(next) if next.line != counter => {
                let underline = (counter == target_line).then_some(underline_column);
                block.push(close_line(input, &line_buffer, counter, colors_enabled, underline));
                line_buffer.clear();
                counter = next.line;
            }
            Some(_) => {}
            None if !met => return None,
            None => {
                // The stream ran out after the target line was reached:
                // accept the partial window. The final line is underlined.
                block.push(close_line(
                    input,
                    &line_buffer,
                    counter,
                    colors_enabled,
                    Some(underline_column),
                ));

                return Some(block);
            }
        }
    }

    Some(block)
}

fn close_line(
    input: &str,
    line_buffer: &[Token],
    line_number: usize,
    colors_enabled: bool,
    underline: Option<Span>,
) -> CodeBlockLine {
    CodeBlockLine {
        text: reconstruct_line_text(input, line_buffer),
        tokens: line_buffer.to_vec(),
        line_number: Some(line_number),
        colors_enabled,
        underline,
    }
}
