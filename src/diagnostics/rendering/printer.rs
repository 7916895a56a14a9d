//! Stack-trace style rendering of collected diagnostics
//!
//! One [`DiagnosticPrinter`] serves one render session: it borrows the full
//! source text and the token sequence, renders every diagnostic's header in
//! input order, attaches a source excerpt under the first diagnostic, and
//! gates printing on the presence of error-like diagnostics.

use std::io::{self, Write};

use crate::diagnostics::diagnostic::Diagnostic;
use crate::diagnostics::position::{SourceLocation, Span};
use crate::diagnostics::rendering::code_block::{self, CodeBlock, CodeBlockLine, DEFAULT_GRACE};
use crate::diagnostics::rendering::colors::{Colors, RESET};
use crate::diagnostics::rendering::highlight;
use crate::syntax::token::Token;

/// Fixed indentation applied below a trace header.
const INDENT: &str = "   ";

/// Placeholder shown where a file path would go; no path flows through the
/// rendering core.
const UNKNOWN_FILE: &str = "<unknown>";

/// Options for one render session. Immutable once constructed.
#[derive(Debug, Clone, Copy)]
pub struct PrinterOptions<'a> {
    /// Full original source text the tokens were lexed from.
    pub input: &'a str,
    /// Token sequence sorted by position. A fresh cursor is created over it
    /// for every extraction.
    pub tokens: &'a [Token],
    /// Whether ANSI color directives are emitted.
    pub colors: bool,
}

/// An assembled diagnostic stack trace: the rendered text (absent only for
/// an empty diagnostic collection) and the number of error-like
/// diagnostics encountered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackTrace {
    pub text: Option<String>,
    pub error_like_count: usize,
}

pub struct DiagnosticPrinter<'a> {
    opts: PrinterOptions<'a>,
}

impl<'a> DiagnosticPrinter<'a> {
    pub fn new(opts: PrinterOptions<'a>) -> Self {
        Self { opts }
    }

    /// Extract a window of source lines around an arbitrary line number,
    /// underlining `column` on the target line.
    pub fn code_block_near_line(
        &self,
        line: usize,
        column: Span,
        grace: usize,
    ) -> Option<CodeBlock> {
        code_block::extract_window(
            self.opts.input,
            self.opts.tokens,
            self.opts.colors,
            line,
            column,
            grace,
        )
    }

    /// Extract a window around a single token, underlining the token's own
    /// span.
    pub fn code_block_near_token(&self, token: &Token, grace: usize) -> Option<CodeBlock> {
        self.code_block_near_line(
            token.line,
            Span::new(token.start, token.end - token.start),
            grace,
        )
    }

    /// Extract a window around a reported location.
    ///
    /// Only the location's start line is used, even when the line range
    /// spans further.
    pub fn code_block_near_location(
        &self,
        location: &SourceLocation,
        grace: usize,
    ) -> Option<CodeBlock> {
        self.code_block_near_line(location.lines.start, location.column, grace)
    }

    /// Extract a window for a diagnostic, failing when it carries no
    /// location.
    pub fn code_block_near(&self, diagnostic: &Diagnostic, grace: usize) -> Option<CodeBlock> {
        let location = diagnostic.location?;

        self.code_block_near_location(&location, grace)
    }

    fn trace_header(&self, diagnostic: &Diagnostic) -> String {
        let palette = Colors::for_session(self.opts.colors);
        let level = diagnostic.severity.display_level();

        let mut out = format!(
            "{}{}{}: {}\n",
            palette.for_level(level),
            level,
            palette.reset,
            diagnostic.message
        );

        if let Some(location) = diagnostic.location {
            out.push_str(&format!(
                "{}@ {}:{}-{}:{}-{}\n",
                INDENT,
                UNKNOWN_FILE,
                location.lines.start,
                location.lines.end(),
                location.column.start,
                location.column.end(),
            ));
        }

        out
    }

    /// Render the code-block body for the prime diagnostic.
    ///
    /// # Panics
    ///
    /// The caller guarantees the diagnostic carries a location, so the
    /// window must be derivable; failing to extract or render it here is an
    /// internal consistency error.
    fn trace_body(&self, diagnostic: &Diagnostic) -> String {
        let block = self
            .code_block_near(diagnostic, DEFAULT_GRACE)
            .expect("code block for the prime diagnostic must be derivable");

        render_code_block(&block, self.opts.colors)
            .expect("code block for the prime diagnostic must not be empty")
    }

    /// Assemble the full stack trace for `diagnostics`, in input order.
    ///
    /// Every diagnostic renders a header; a diagnostic with a location also
    /// renders the location suffix. Only the first diagnostic receives a
    /// rendered code-block body.
    pub fn stack_trace(&self, diagnostics: &[Diagnostic]) -> StackTrace {
        if diagnostics.is_empty() {
            return StackTrace {
                text: None,
                error_like_count: 0,
            };
        }

        let mut out = String::new();
        let mut error_like_count = 0;
        let mut prime = true;

        for diagnostic in diagnostics {
            if diagnostic.severity.is_error_like() {
                error_like_count += 1;
            }

            out.push_str(&self.trace_header(diagnostic));

            if prime && diagnostic.location.is_some() {
                // A single blank line separates the header from its body.
                out.push('\n');
                out.push_str(&self.trace_body(diagnostic));
            }

            prime = false;
        }

        if self.opts.colors {
            out.push_str(RESET);
        }

        StackTrace {
            text: Some(out),
            error_like_count,
        }
    }

    /// Print the assembled stack trace to stdout when it contains at least
    /// one error-like diagnostic. Returns whether anything was printed.
    pub fn print_stack_trace(&self, diagnostics: &[Diagnostic]) -> bool {
        let trace = self.stack_trace(diagnostics);

        let Some(text) = trace.text else {
            return false;
        };

        if trace.error_like_count == 0 {
            return false;
        }

        let mut stdout = io::stdout();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();

        true
    }
}

/// Render an extracted window into printable text. Empty blocks produce no
/// output.
pub fn render_code_block(block: &CodeBlock, colors_enabled: bool) -> Option<String> {
    if block.is_empty() {
        return None;
    }

    let palette = Colors::for_session(colors_enabled);
    let mut out = String::new();

    for line in block {
        out.push_str(&render_line(line, colors_enabled, &palette));
    }

    Some(out)
}

/// Format the gutter for a line. The trailing `" | "` is a fixed
/// 3-character suffix; underline padding is computed from the gutter's
/// rendered width.
fn make_gutter(line_number: Option<usize>) -> String {
    match line_number {
        Some(n) => format!("{} | ", n),
        None => String::from("  | "),
    }
}

fn render_line(line: &CodeBlockLine, colors_enabled: bool, palette: &Colors) -> String {
    let gutter = make_gutter(line.line_number);
    let text = if colors_enabled {
        highlight::highlight_line(line, palette)
    } else {
        line.text.clone()
    };

    let mut out = format!("{}{}{}\n", INDENT, gutter, text);

    if let Some(underline) = line.underline {
        // The caret row runs from the start of the line text through the
        // underline's end column, so the final caret sits beneath the
        // flagged span.
        out.push_str(INDENT);
        out.push_str(&" ".repeat(gutter.len()));
        out.push_str(&"^".repeat(underline.end()));
        out.push('\n');
    }

    out
}
