use std::{env, fs, process::ExitCode};

use anyhow::Context;
use ember::diagnostics::rendering::{DiagnosticPrinter, PrinterOptions};
use ember::syntax::lexer::Lexer;

fn main() -> anyhow::Result<ExitCode> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let no_color = args.iter().any(|arg| arg == "--no-color");
    if no_color {
        args.retain(|arg| arg != "--no-color");
    }

    let Some(path) = args.first() else {
        eprintln!("usage: ember [--no-color] <file.em>");
        return Ok(ExitCode::from(2));
    };

    let input =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;

    let mut lexer = Lexer::new(input.as_str());
    let tokens = lexer.tokenize();
    let diagnostics = lexer.diagnostics().to_vec();

    let colors = !no_color && env::var_os("NO_COLOR").is_none();
    let printer = DiagnosticPrinter::new(PrinterOptions {
        input: &input,
        tokens: &tokens,
        colors,
    });

    if printer.print_stack_trace(&diagnostics) {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
