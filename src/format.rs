use std::fmt;
use std::str::FromStr;

use crate::generator::{Generator, Hyprland, Sway};

/// A single output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Sway,
    Hyprland,
}

impl Target {
    #[must_use]
    pub fn generator(self) -> &'static dyn Generator {
        match self {
            Self::Sway => &Sway,
            Self::Hyprland => &Hyprland,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.generator().name())
    }
}

/// Which formats to generate, as selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    Sway,
    Hyprland,
    #[default]
    All,
}

impl Format {
    /// Targets to generate, in output order.
    #[must_use]
    pub const fn targets(self) -> &'static [Target] {
        match self {
            Self::Sway => &[Target::Sway],
            Self::Hyprland => &[Target::Hyprland],
            Self::All => &[Target::Sway, Target::Hyprland],
        }
    }
}

/// Error returned when parsing an unsupported format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown configuration format: `{0}`")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sway" | "i3" => Ok(Self::Sway),
            "hyprland" => Ok(Self::Hyprland),
            "all" => Ok(Self::All),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}
