pub mod code_block;
pub mod colors;
pub mod highlight;
pub mod printer;

pub use code_block::{CodeBlock, CodeBlockLine, DEFAULT_GRACE, extract_window};
pub use colors::Colors;
pub use printer::{DiagnosticPrinter, PrinterOptions, StackTrace, render_code_block};
