use std::fmt;

use crate::token::{Location, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A `"` was opened but never closed before end of input.
    UnclosedString,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclosedString => write!(f, "unclosed string"),
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{location}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: Location,
}

/// Tokenize a keybinding definition source into a sequence of tokens.
///
/// `file` is only used to label token locations.
///
/// # Errors
///
/// Returns `LexError` when a quoted string is not terminated.
pub fn tokenize(file: &str, input: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(file, input).tokenize()?;
    log::trace!("{file}: lexed {} token(s)", tokens.len());
    Ok(tokens)
}

struct Lexer<'a> {
    file: &'a str,
    input: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    fn new(file: &'a str, input: &str) -> Self {
        let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
        Self {
            file,
            input: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == '"' {
                tokens.push(self.read_string()?);
            } else {
                tokens.push(self.read_word());
            }
        }

        Ok(tokens)
    }

    fn location(&self) -> Location {
        Location::new(self.file, self.line, self.col)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            if ch == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.pos += 1;
        }
    }

    fn read_word(&mut self) -> Token {
        let location = self.location();
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() || ch == '"' {
                break;
            }
            text.push(ch);
            self.advance();
        }

        Token {
            kind: TokenKind::Word,
            text,
            location,
        }
    }

    fn read_string(&mut self) -> Result<Token, LexError> {
        let location = self.location();
        self.advance(); // skip opening quote

        let mut text = String::new();
        loop {
            match self.peek() {
                None => {
                    return Err(LexError {
                        kind: LexErrorKind::UnclosedString,
                        location,
                    });
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some(ch) => {
                    text.push(ch);
                    self.advance();
                }
            }
        }

        Ok(Token {
            kind: TokenKind::String,
            text,
            location,
        })
    }
}
