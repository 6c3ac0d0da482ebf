use crate::key::Key;
use crate::token::Location;

/// A parsed `bind` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    /// Keys in the order they were written. The parser never produces an
    /// empty list or one starting with a character key or `Enter`.
    /// Generators render an empty list as a blank key field.
    pub keys: Vec<Key>,
    /// Shell command, trimmed but otherwise verbatim.
    pub command: String,
    /// Location of the `bind` keyword.
    pub location: Location,
}
