//! Key names and their classification.
//!
//! The keybinding language knows four named keys, the nine numpad keys
//! (`N_1` to `N_9`) and any single character. Everything else is rejected.

use std::fmt;

use crate::token::Location;

/// A numpad key, always in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NumpadKey(u8);

/// Keysym names by numpad digit, `1` first. The keys are named after their
/// position on the pad, not the digit printed on them.
const NUMPAD_KEYSYMS: [&str; 9] = [
    "KP_End", "KP_Down", "KP_Next", "KP_Left", "KP_Begin", "KP_Right", "KP_Home", "KP_Up",
    "KP_Prior",
];

impl NumpadKey {
    /// Returns `None` unless `digit` is in `1..=9`.
    #[must_use]
    pub const fn new(digit: u8) -> Option<Self> {
        if matches!(digit, 1..=9) {
            Some(Self(digit))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn digit(self) -> u8 {
        self.0
    }

    /// The X keysym for this key with num lock off, e.g. `KP_Begin` for `5`.
    #[must_use]
    pub const fn keysym(self) -> &'static str {
        NUMPAD_KEYSYMS[(self.0 - 1) as usize]
    }
}

/// A single key of a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Print,
    Super,
    Shift,
    Enter,
    Numpad(NumpadKey),
    /// Single character key, always upper case.
    Character(char),
}

impl Key {
    /// Whether a key combination may start with this key.
    ///
    /// Character keys and `Enter` only make sense as the final key.
    #[must_use]
    pub const fn can_lead(self) -> bool {
        !matches!(self, Self::Character(_) | Self::Enter)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Print => write!(f, "Print"),
            Self::Super => write!(f, "Super"),
            Self::Shift => write!(f, "Shift"),
            Self::Enter => write!(f, "Enter"),
            Self::Numpad(n) => write!(f, "N_{}", n.digit()),
            Self::Character(c) => write!(f, "{c}"),
        }
    }
}

/// Classifies a key error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyErrorKind {
    /// `N_` followed by something other than digits.
    InvalidNumpadKey { key: String },
    /// `N_` followed by a number outside `1..=9`.
    NumpadRangeError { key: String },
    /// Neither a named key, a numpad key, nor a single character.
    InvalidCharacterKey { key: String },
}

impl fmt::Display for KeyErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumpadKey { key } => write!(f, "invalid `N_` key `{key}`"),
            Self::NumpadRangeError { key } => {
                write!(f, "invalid `N_` key `{key}`, keypads only have keys 1 to 9")
            }
            Self::InvalidCharacterKey { key } => write!(f, "invalid character key `{key}`"),
        }
    }
}

/// Error produced while classifying a key name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{location}: {kind}")]
pub struct KeyError {
    pub kind: KeyErrorKind,
    pub location: Location,
}

/// Classify a single key name.
///
/// `location` is attached to any error; it should point at the key
/// combination the name came from.
///
/// # Errors
///
/// Returns `KeyError` for malformed numpad keys and for names that are
/// neither a known key nor a single character.
pub fn classify(text: &str, location: &Location) -> Result<Key, KeyError> {
    let fail = |kind| KeyError {
        kind,
        location: location.clone(),
    };

    match text {
        "Print" => return Ok(Key::Print),
        "Super" => return Ok(Key::Super),
        "Shift" => return Ok(Key::Shift),
        "Enter" => return Ok(Key::Enter),
        _ => {}
    }

    if let Some(digits) = text.strip_prefix("N_") {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(fail(KeyErrorKind::InvalidNumpadKey {
                key: text.to_string(),
            }));
        }
        // Overflowing digit strings are out of range too.
        return digits
            .parse::<u8>()
            .ok()
            .and_then(NumpadKey::new)
            .map(Key::Numpad)
            .ok_or_else(|| {
                fail(KeyErrorKind::NumpadRangeError {
                    key: text.to_string(),
                })
            });
    }

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(Key::Character(to_upper(ch))),
        _ => Err(fail(KeyErrorKind::InvalidCharacterKey {
            key: text.to_string(),
        })),
    }
}

/// Upper-case a single character, keeping it as is when the upper-case form
/// is more than one character (`ß`).
fn to_upper(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => ch,
    }
}
