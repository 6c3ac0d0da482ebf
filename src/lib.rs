//! Keybinding definition compiler.
//!
//! Reads a small language of `bind` statements and renders it as Sway/i3
//! or Hyprland configuration.
//!
//! # Quick start
//!
//! ```
//! use genkeys::{Generator, Hyprland, Sway, compile_str};
//!
//! let bindings = compile_str("keys.gnks", r#"bind "Super Shift Print" "slurp | grim""#).unwrap();
//!
//! let sway = Sway.render(&bindings).unwrap();
//! assert_eq!(sway, "bindsym $mod+Shift+Print exec sh -c 'slurp | grim'\n");
//!
//! let hyprland = Hyprland.render(&bindings).unwrap();
//! assert_eq!(hyprland, "bind = $mainMod SHIFT, Print, exec, sh -c 'slurp | grim'\n");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod config;
pub mod format;
pub mod generator;
pub mod key;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod token;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use ast::Keybinding;
pub use config::{Config, ConfigError};
pub use format::{Format, Target, UnknownFormat};
pub use generator::{GenerateError, GenerateErrorKind, Generator, Hyprland, Sway, shell_quote};
pub use key::{Key, KeyError, KeyErrorKind, NumpadKey, classify};
pub use lexer::{LexError, LexErrorKind, tokenize};
pub use output::Destination;
pub use parser::{ParseError, ParseErrorKind, parse};
pub use token::{Location, Token, TokenKind};

/// Unified error type covering every stage of a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// A parser error.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A generator error.
    #[error(transparent)]
    Generate(#[from] GenerateError),
    /// A configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The keybinding definitions could not be read.
    #[error("could not open file `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Output could not be written or flushed.
    #[error("could not write to {destination}")]
    Write {
        destination: Destination,
        #[source]
        source: io::Error,
    },
}

/// Tokenize and parse keybinding definitions in one step.
///
/// `file_name` labels error locations.
pub fn compile_str(file_name: &str, source: &str) -> Result<Vec<Keybinding>, Error> {
    let tokens = tokenize(file_name, source)?;
    Ok(parse(&tokens)?)
}

/// Read and compile a keybinding definitions file.
pub fn compile_file(path: &Path) -> Result<Vec<Keybinding>, Error> {
    let source = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    compile_str(&path.display().to_string(), &source)
}

/// Render `keybindings` for every target of `format` and write each to the
/// destination the configuration selects.
///
/// Every target is rendered and every destination resolved before anything
/// is written, so an error in a later target leaves no partial output.
pub fn generate(format: Format, keybindings: &[Keybinding], config: &Config) -> Result<(), Error> {
    let mut outputs = Vec::with_capacity(format.targets().len());

    for &target in format.targets() {
        let destination = config.destination(target)?;
        let rendered = target.generator().render(keybindings)?;
        log::debug!("rendered {} keybinding(s) for {target}", keybindings.len());
        outputs.push((destination, rendered));
    }

    for (destination, rendered) in outputs {
        if let Err(source) = destination.write(&rendered) {
            return Err(Error::Write {
                destination,
                source,
            });
        }
    }

    Ok(())
}
