use std::fmt;

use crate::ast::Keybinding;
use crate::key::{self, Key, KeyError, KeyErrorKind};
use crate::token::{Location, Token, TokenKind};

/// The only statement keyword of the language.
pub const BIND_KEYWORD: &str = "bind";

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A word other than `bind` where a statement should start.
    UnknownCommand { command: String },
    /// A quoted string where a statement should start.
    StringAsCommand,
    /// `bind` at end of input.
    KeyCombinationMissing,
    /// `bind` followed by a key combination but no command.
    ExecCommandMissing,
    /// The token after `bind` is not a quoted string.
    KeyCombinationNotString,
    /// The command after the key combination is not a quoted string.
    ExecCommandNotString,
    /// Key combination string is empty or only whitespace.
    EmptyKeyCombination,
    /// A key name in the combination could not be classified.
    InvalidKey(KeyErrorKind),
    /// Key combination starts with a character key or `Enter`.
    InvalidLeadingKey { key: Key },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand { command } => write!(f, "unknown command `{command}`"),
            Self::StringAsCommand => write!(f, "strings cannot be used as commands"),
            Self::KeyCombinationMissing => not_provided(f, "key combination"),
            Self::ExecCommandMissing => not_provided(f, "exec command"),
            Self::KeyCombinationNotString => write!(f, "key combination must be a string"),
            Self::ExecCommandNotString => write!(f, "exec command must be a string"),
            Self::EmptyKeyCombination => write!(f, "key combination must have at least one key"),
            Self::InvalidKey(kind) => write!(f, "{kind}"),
            Self::InvalidLeadingKey { key } => write!(
                f,
                "key combination cannot start with a character key or `Enter`, got `{key}`"
            ),
        }
    }
}

fn not_provided(f: &mut fmt::Formatter<'_>, what: &str) -> fmt::Result {
    write!(f, "{what} not provided for command `{BIND_KEYWORD}`")
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{location}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: Location,
}

impl From<KeyError> for ParseError {
    fn from(err: KeyError) -> Self {
        Self {
            kind: ParseErrorKind::InvalidKey(err.kind),
            location: err.location,
        }
    }
}

/// Parse a token stream into keybindings, in source order.
///
/// # Errors
///
/// Returns `ParseError` on the first malformed statement; no bindings are
/// returned in that case.
pub fn parse(tokens: &[Token]) -> Result<Vec<Keybinding>, ParseError> {
    let bindings = Parser::new(tokens).parse()?;
    log::debug!("parsed {} keybinding(s)", bindings.len());
    Ok(bindings)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(mut self) -> Result<Vec<Keybinding>, ParseError> {
        let mut bindings = Vec::new();

        while let Some(token) = self.tokens.get(self.pos) {
            match token.kind {
                TokenKind::Word if token.text == BIND_KEYWORD => {
                    bindings.push(self.parse_bind()?);
                }
                TokenKind::Word => {
                    return Err(error(
                        ParseErrorKind::UnknownCommand {
                            command: token.text.clone(),
                        },
                        token,
                    ));
                }
                TokenKind::String => {
                    return Err(error(ParseErrorKind::StringAsCommand, token));
                }
            }
        }

        Ok(bindings)
    }

    /// Parse `bind <keys> <command>` starting at the `bind` keyword.
    fn parse_bind(&mut self) -> Result<Keybinding, ParseError> {
        let tokens = self.tokens;
        let bind = &tokens[self.pos];

        let keys_token = tokens
            .get(self.pos + 1)
            .ok_or_else(|| error(ParseErrorKind::KeyCombinationMissing, bind))?;
        let command_token = tokens
            .get(self.pos + 2)
            .ok_or_else(|| error(ParseErrorKind::ExecCommandMissing, bind))?;

        if keys_token.kind != TokenKind::String {
            return Err(error(ParseErrorKind::KeyCombinationNotString, keys_token));
        }
        if command_token.kind != TokenKind::String {
            return Err(error(ParseErrorKind::ExecCommandNotString, command_token));
        }

        let keys = parse_keys(keys_token)?;
        self.pos += 3;

        Ok(Keybinding {
            keys,
            command: command_token.text.trim().to_string(),
            location: bind.location.clone(),
        })
    }
}

/// Split a key combination string on whitespace and classify each name.
fn parse_keys(token: &Token) -> Result<Vec<Key>, ParseError> {
    let keys = token
        .text
        .split_whitespace()
        .map(|name| key::classify(name, &token.location))
        .collect::<Result<Vec<_>, _>>()?;

    match keys.first() {
        None => Err(error(ParseErrorKind::EmptyKeyCombination, token)),
        Some(&first) if !first.can_lead() => {
            let kind = ParseErrorKind::InvalidLeadingKey { key: first };
            Err(error(kind, token))
        }
        Some(_) => Ok(keys),
    }
}

fn error(kind: ParseErrorKind, token: &Token) -> ParseError {
    ParseError {
        kind,
        location: token.location.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::NumpadKey;
    use crate::lexer::tokenize;

    fn parse_input(input: &str) -> Result<Vec<Keybinding>, ParseError> {
        let tokens = tokenize("test.gnks", input).expect("tokenize failed");
        parse(&tokens)
    }

    fn error_at(input: &str) -> (ParseErrorKind, usize, usize) {
        let err = parse_input(input).unwrap_err();
        (err.kind, err.location.line, err.location.column)
    }

    #[test]
    fn single_bind() {
        let bindings = parse_input(r#"bind "Super Enter" "  foot  ""#).expect("parse failed");
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].keys, vec![Key::Super, Key::Enter]);
        assert_eq!(bindings[0].command, "foot");
        assert_eq!(bindings[0].location, Location::new("test.gnks", 1, 1));
    }

    #[test]
    fn multiple_binds_keep_order() {
        let bindings = parse_input(
            "bind \"Super 1\" \"one\"\n\
             bind \"Super N_5\" \"five\"\n\
             bind \"Print\" \"shot\"\n",
        )
        .expect("parse failed");
        let commands: Vec<_> = bindings.iter().map(|b| b.command.as_str()).collect();
        assert_eq!(commands, ["one", "five", "shot"]);
        assert_eq!(
            bindings[1].keys,
            vec![Key::Super, Key::Numpad(NumpadKey::new(5).unwrap())]
        );
        assert_eq!(bindings[2].location.line, 3);
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_input("  \n\t ").expect("parse failed"), Vec::new());
    }

    #[test]
    fn key_combination_whitespace_is_flexible() {
        let bindings = parse_input("bind \"  Super\n\tShift   a \" \"x\"").expect("parse failed");
        assert_eq!(
            bindings[0].keys,
            vec![Key::Super, Key::Shift, Key::Character('A')]
        );
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            error_at("bind \"Super a\" \"x\"\nunbind"),
            (
                ParseErrorKind::UnknownCommand {
                    command: "unbind".to_string()
                },
                2,
                1
            )
        );
    }

    #[test]
    fn keyword_is_case_sensitive() {
        assert!(matches!(
            error_at(r#"Bind "Super a" "x""#).0,
            ParseErrorKind::UnknownCommand { .. }
        ));
    }

    #[test]
    fn string_as_command() {
        assert_eq!(
            error_at(r#"  "Super a" "x""#),
            (ParseErrorKind::StringAsCommand, 1, 3)
        );
    }

    #[test]
    fn missing_key_combination() {
        assert_eq!(
            error_at("\n bind"),
            (ParseErrorKind::KeyCombinationMissing, 2, 2)
        );
    }

    #[test]
    fn missing_exec_command() {
        assert_eq!(
            error_at(r#"bind "Super a""#),
            (ParseErrorKind::ExecCommandMissing, 1, 1)
        );
    }

    #[test]
    fn missing_command_is_reported_before_wrong_kinds() {
        assert_eq!(
            error_at("bind foo"),
            (ParseErrorKind::ExecCommandMissing, 1, 1)
        );
    }

    #[test]
    fn key_combination_not_string() {
        assert_eq!(
            error_at(r#"bind Super "x""#),
            (ParseErrorKind::KeyCombinationNotString, 1, 6)
        );
    }

    #[test]
    fn exec_command_not_string() {
        assert_eq!(
            error_at(r#"bind "Super a" foot"#),
            (ParseErrorKind::ExecCommandNotString, 1, 16)
        );
    }

    #[test]
    fn empty_key_combination() {
        assert_eq!(
            error_at(r#"bind "   " "x""#),
            (ParseErrorKind::EmptyKeyCombination, 1, 6)
        );
    }

    #[test]
    fn invalid_key_reports_combination_location() {
        assert_eq!(
            error_at(r#"bind "Super N_10" "x""#),
            (
                ParseErrorKind::InvalidKey(KeyErrorKind::NumpadRangeError {
                    key: "N_10".to_string()
                }),
                1,
                6
            )
        );
    }

    #[test]
    fn leading_character_key() {
        assert_eq!(
            error_at(r#"bind "a Super" "x""#),
            (
                ParseErrorKind::InvalidLeadingKey {
                    key: Key::Character('A')
                },
                1,
                6
            )
        );
    }

    #[test]
    fn leading_enter_key() {
        assert!(matches!(
            error_at(r#"bind "Enter" "x""#).0,
            ParseErrorKind::InvalidLeadingKey { key: Key::Enter }
        ));
    }

    #[test]
    fn error_display() {
        let err = parse_input(r#"bind "A" "x""#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "test.gnks:1:6: key combination cannot start with a character key or `Enter`, got `A`"
        );
    }
}
