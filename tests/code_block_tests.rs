use ember::diagnostics::position::Span;
use ember::diagnostics::rendering::code_block::extract_window;
use ember::syntax::lexer::Lexer;
use ember::syntax::token::Token;

const SOURCE: &str = "\
let a = 1
let b = 2
let c = 3
let d = 4
let e = 5
let f = 6
";

fn tokens_of(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();
    assert!(lexer.diagnostics().is_empty());
    tokens
}

#[test]
fn window_spans_target_with_grace() {
    let tokens = tokens_of(SOURCE);
    let block = extract_window(SOURCE, &tokens, false, 4, Span::new(4, 1), 2)
        .expect("window should be extractable");

    let lines: Vec<Option<usize>> = block.iter().map(|l| l.line_number).collect();
    assert_eq!(lines, vec![Some(2), Some(3), Some(4), Some(5)]);

    let texts: Vec<&str> = block.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["let b = 2", "let c = 3", "let d = 4", "let e = 5"]
    );

    // Only the target line carries the underline.
    assert_eq!(block[2].underline, Some(Span::new(4, 1)));
    assert!(block[0].underline.is_none());
    assert!(block[1].underline.is_none());
    assert!(block[3].underline.is_none());
}

#[test]
fn window_start_clamps_instead_of_underflowing() {
    let tokens = tokens_of(SOURCE);
    let block = extract_window(SOURCE, &tokens, false, 1, Span::new(0, 3), 5)
        .expect("clamped window should be extractable");

    assert_eq!(block[0].line_number, Some(1));
    assert_eq!(block[0].underline, Some(Span::new(0, 3)));
}

#[test]
fn target_line_zero_treats_start_as_zero() {
    let tokens = tokens_of(SOURCE);
    let block = extract_window(SOURCE, &tokens, false, 0, Span::new(0, 1), 5)
        .expect("window at line zero should not underflow");

    // Line zero never appears in the lexed stream, so nothing is
    // underlined; the window still materializes from the first line on.
    assert_eq!(block[0].line_number, Some(1));
    assert!(block.iter().all(|l| l.underline.is_none()));
}

#[test]
fn window_excludes_the_nominal_end_line() {
    let tokens = tokens_of(SOURCE);
    let block = extract_window(SOURCE, &tokens, false, 4, Span::new(4, 1), 2)
        .expect("window should be extractable");

    // target + grace is the stop marker, not part of the window.
    assert!(block.iter().all(|l| l.line_number != Some(6)));
}

#[test]
fn fails_when_window_start_is_beyond_the_stream() {
    let tokens = tokens_of(SOURCE);

    assert_eq!(extract_window(SOURCE, &tokens, false, 40, Span::new(0, 1), 2), None);
}

#[test]
fn fails_when_stream_ends_before_the_target_line() {
    let tokens = tokens_of(SOURCE);

    // The window start (line 6) exists, but line 8 is never reached.
    assert_eq!(extract_window(SOURCE, &tokens, false, 8, Span::new(0, 1), 2), None);
}

#[test]
fn partial_window_is_accepted_once_the_target_was_emitted() {
    let tokens = tokens_of(SOURCE);
    let block = extract_window(SOURCE, &tokens, false, 6, Span::new(4, 1), 2)
        .expect("partial window should be accepted");

    let lines: Vec<Option<usize>> = block.iter().map(|l| l.line_number).collect();
    assert_eq!(lines, vec![Some(4), Some(5), Some(6)]);
    assert_eq!(block[2].underline, Some(Span::new(4, 1)));
}

#[test]
fn line_number_jump_past_end_runs_to_exhaustion() {
    // The blank line produces no tokens, so closing line 1 jumps the line
    // counter straight past the nominal end; the window then runs to the
    // end of the stream and underlines its final line.
    let source = "let a = 1\n\nlet c = 3\n";
    let tokens = tokens_of(source);

    let block = extract_window(source, &tokens, false, 1, Span::new(4, 1), 1)
        .expect("window should be extractable");

    let lines: Vec<Option<usize>> = block.iter().map(|l| l.line_number).collect();
    assert_eq!(lines, vec![Some(1), Some(3)]);
    assert_eq!(block[0].underline, Some(Span::new(4, 1)));
    assert_eq!(block[1].underline, Some(Span::new(4, 1)));
}

#[test]
fn extraction_is_idempotent() {
    let tokens = tokens_of(SOURCE);

    let first = extract_window(SOURCE, &tokens, false, 3, Span::new(4, 1), 2);
    let second = extract_window(SOURCE, &tokens, false, 3, Span::new(4, 1), 2);

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn reconstructed_text_relocates_every_token() {
    let tokens = tokens_of(SOURCE);
    let block = extract_window(SOURCE, &tokens, false, 3, Span::new(4, 1), 2)
        .expect("window should be extractable");

    for line in &block {
        let base = line.tokens[0].start;
        for token in &line.tokens {
            let slice = &line.text[token.start - base..token.end - base];
            assert_eq!(slice, token.literal);
        }
    }
}

#[test]
fn session_color_flag_is_stamped_on_every_line() {
    let tokens = tokens_of(SOURCE);
    let block = extract_window(SOURCE, &tokens, true, 3, Span::new(4, 1), 2)
        .expect("window should be extractable");

    assert!(block.iter().all(|l| l.colors_enabled));
}
