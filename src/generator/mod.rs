//! Back ends that render keybindings into compositor configuration.
//!
//! Each generator is a pure function of the keybinding slice. Both can run
//! over the same bindings in one process.

pub mod hyprland;
pub mod sway;

use std::fmt;

use crate::ast::Keybinding;
use crate::token::Location;

pub use hyprland::Hyprland;
pub use sway::Sway;

/// Classifies a generator error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateErrorKind {
    /// Hyprland binds take at most two modifiers and one key.
    TooManyKeysForHyprland { count: usize },
}

impl fmt::Display for GenerateErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyKeysForHyprland { count } => write!(
                f,
                "Hyprland keybindings cannot contain more than {} keys, got {count}",
                hyprland::MAX_KEYS
            ),
        }
    }
}

/// Error produced while rendering keybindings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{location}: {kind}")]
pub struct GenerateError {
    pub kind: GenerateErrorKind,
    /// Location of the offending `bind` statement.
    pub location: Location,
}

/// A configuration back end.
pub trait Generator {
    /// Human readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Render all keybindings, one line each.
    ///
    /// Either the whole batch renders or nothing does.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError` when a binding cannot be expressed in the
    /// target format.
    fn render(&self, keybindings: &[Keybinding]) -> Result<String, GenerateError>;

    /// Quote a command for embedding after `sh -c`.
    fn quote_command(&self, command: &str) -> String {
        shell_quote(command)
    }
}

/// Quote `text` as a single POSIX shell word.
///
/// The text is wrapped in single quotes, inside which the shell interprets
/// nothing; each embedded `'` is written as `'\''`.
#[must_use]
pub fn shell_quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for ch in text.chars() {
        if ch == '\'' {
            quoted.push_str(r"'\''");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('\'');
    quoted
}
