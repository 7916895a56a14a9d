//! Lexer for Ember source text

use crate::diagnostics::Diagnostic;
use crate::diagnostics::position::{SourceLocation, Span};
use crate::syntax::token::Token;
use crate::syntax::token_type::{TokenType, lookup_ident};

/// The Ember lexer
///
/// Produces per-line tokens sorted by position, with byte-offset spans into
/// the original input. Lexical problems (unknown characters, unterminated
/// strings) are reported as error diagnostics rather than failures, so a
/// broken file still lexes to the end.
#[derive(Debug, Clone)]
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    read_position: usize,
    current_char: Option<char>,
    /// Byte offset of the current character within the input.
    offset: usize,
    line: usize,
    column: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Lexer {
    pub fn new(input: impl Into<String>) -> Self {
        let mut lexer = Self {
            chars: input.into().chars().collect(),
            position: 0,
            read_position: 0,
            current_char: None,
            offset: 0,
            line: 1,
            column: 0,
            diagnostics: Vec::new(),
        };
        lexer.read_char();
        lexer
    }

    /// Diagnostics collected while lexing.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Token {
        self.skip_ignorable();

        let line = self.line;
        let column = self.column;
        let start = self.offset;

        let token = match self.current_char {
            // Two-character operators
            Some('=') if self.peek_char() == Some('=') => {
                self.read_char();
                Token::new(TokenType::Eq, "==", line, start)
            }
            Some('!') if self.peek_char() == Some('=') => {
                self.read_char();
                Token::new(TokenType::NotEq, "!=", line, start)
            }
            // Single-character operators and delimiters
            Some('=') => Token::new(TokenType::Assign, "=", line, start),
            Some('!') => Token::new(TokenType::Bang, "!", line, start),
            Some('+') => Token::new(TokenType::Plus, "+", line, start),
            Some('-') => Token::new(TokenType::Minus, "-", line, start),
            Some('*') => Token::new(TokenType::Asterisk, "*", line, start),
            Some('/') => Token::new(TokenType::Slash, "/", line, start),
            Some('<') => Token::new(TokenType::Lt, "<", line, start),
            Some('>') => Token::new(TokenType::Gt, ">", line, start),
            Some('(') => Token::new(TokenType::LParen, "(", line, start),
            Some(')') => Token::new(TokenType::RParen, ")", line, start),
            Some('{') => Token::new(TokenType::LBrace, "{", line, start),
            Some('}') => Token::new(TokenType::RBrace, "}", line, start),
            Some(',') => Token::new(TokenType::Comma, ",", line, start),
            Some(';') => Token::new(TokenType::Semicolon, ";", line, start),
            Some('"') => return self.read_string(line, column, start),
            Some(ch) if is_letter(ch) => {
                let literal = self.read_identifier();
                return Token::new(lookup_ident(&literal), literal, line, start);
            }
            Some(ch) if ch.is_ascii_digit() => {
                let literal = self.read_number();
                return Token::new(TokenType::Int, literal, line, start);
            }
            Some(ch) => {
                self.diagnostics.push(
                    Diagnostic::error(format!("unknown character `{}`", ch))
                        .with_location(SourceLocation::at_line(line, Span::new(column, 1))),
                );
                Token::new(TokenType::Illegal, ch.to_string(), line, start)
            }
            None => Token::new(TokenType::Eof, "", line, start),
        };

        self.read_char();
        token
    }

    /// Lex the entire input, returning every printable token in order.
    ///
    /// The end-of-file marker is not included; the returned sequence is
    /// exactly what the diagnostic printer scans.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            if token.token_type == TokenType::Eof {
                break;
            }
            tokens.push(token);
        }

        tokens
    }

    fn read_char(&mut self) {
        if let Some(current) = self.current_char {
            self.offset += current.len_utf8();
            if current == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }

        self.position = self.read_position;
        self.current_char = self.chars.get(self.read_position).copied();
        self.read_position += 1;
    }

    fn peek_char(&self) -> Option<char> {
        self.chars.get(self.read_position).copied()
    }

    fn skip_ignorable(&mut self) {
        loop {
            match self.current_char {
                Some(ch) if ch.is_whitespace() => self.read_char(),
                // Line comments run to the end of the line.
                Some('/') if self.peek_char() == Some('/') => {
                    while !matches!(self.current_char, Some('\n') | None) {
                        self.read_char();
                    }
                }
                _ => break,
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while matches!(self.current_char, Some(ch) if is_letter(ch) || ch.is_ascii_digit()) {
            self.read_char();
        }

        self.chars[start..self.position].iter().collect()
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while matches!(self.current_char, Some(ch) if ch.is_ascii_digit()) {
            self.read_char();
        }

        self.chars[start..self.position].iter().collect()
    }

    fn read_string(&mut self, line: usize, column: usize, start: usize) -> Token {
        let mut literal = String::from("\"");
        self.read_char();

        loop {
            match self.current_char {
                Some('"') => {
                    literal.push('"');
                    self.read_char();
                    return Token::new(TokenType::String, literal, line, start);
                }
                Some('\n') | None => {
                    self.diagnostics.push(
                        Diagnostic::error("unterminated string literal").with_location(
                            SourceLocation::at_line(
                                line,
                                Span::new(column, literal.chars().count()),
                            ),
                        ),
                    );
                    return Token::new(TokenType::Illegal, literal, line, start);
                }
                Some(ch) => {
                    literal.push(ch);
                    self.read_char();
                }
            }
        }
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}
