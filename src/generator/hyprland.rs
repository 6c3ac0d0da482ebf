//! Hyprland `bind =` output.
//!
//! Hyprland splits a bind into a modifier field and a key field, so the last
//! key of a combination becomes the key and the ones before it the
//! space-separated modifiers:
//!
//! ```text
//! bind = , Print, exec, sh -c 'grim'
//! bind = $mainMod, 1, exec, sh -c 'foo'
//! bind = $mainMod SHIFT, Print, exec, sh -c 'slurp | grim'
//! ```

use super::{GenerateError, GenerateErrorKind, Generator};
use crate::ast::Keybinding;
use crate::key::Key;

/// Most keys a single Hyprland bind can hold.
pub const MAX_KEYS: usize = 3;

/// Renders `bind = MODS, KEY, exec, sh -c '...'` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hyprland;

impl Generator for Hyprland {
    fn name(&self) -> &'static str {
        "hyprland"
    }

    fn render(&self, keybindings: &[Keybinding]) -> Result<String, GenerateError> {
        check_key_counts(keybindings)?;

        let mut out = String::new();

        for binding in keybindings {
            let (trigger, modifiers) = binding.keys.split_last().unzip();

            out.push_str("bind = ");
            for (i, key) in modifiers.unwrap_or_default().iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                push_key(&mut out, *key);
            }
            out.push_str(", ");
            if let Some(&key) = trigger {
                push_key(&mut out, key);
            }
            out.push_str(", exec, sh -c ");
            out.push_str(&self.quote_command(&binding.command));
            out.push('\n');
        }

        Ok(out)
    }
}

/// Reject the whole batch if any binding has too many keys.
fn check_key_counts(keybindings: &[Keybinding]) -> Result<(), GenerateError> {
    keybindings
        .iter()
        .find(|b| b.keys.len() > MAX_KEYS)
        .map_or(Ok(()), |binding| {
            Err(GenerateError {
                kind: GenerateErrorKind::TooManyKeysForHyprland {
                    count: binding.keys.len(),
                },
                location: binding.location.clone(),
            })
        })
}

fn push_key(out: &mut String, key: Key) {
    match key {
        Key::Print => out.push_str("Print"),
        Key::Super => out.push_str("$mainMod"),
        Key::Shift => out.push_str("SHIFT"),
        Key::Enter => out.push_str("Return"),
        Key::Numpad(n) => out.push_str(n.keysym()),
        Key::Character(c) => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::NumpadKey;
    use crate::token::Location;

    fn binding(keys: Vec<Key>, command: &str, line: usize) -> Keybinding {
        Keybinding {
            keys,
            command: command.to_string(),
            location: Location::new("test.gnks", line, 1),
        }
    }

    fn render(bindings: &[Keybinding]) -> String {
        Hyprland.render(bindings).expect("render failed")
    }

    #[test]
    fn one_key() {
        assert_eq!(
            render(&[binding(vec![Key::Print], "grim", 1)]),
            "bind = , Print, exec, sh -c 'grim'\n"
        );
    }

    #[test]
    fn two_keys() {
        assert_eq!(
            render(&[binding(vec![Key::Super, Key::Character('1')], "foo", 1)]),
            "bind = $mainMod, 1, exec, sh -c 'foo'\n"
        );
    }

    #[test]
    fn three_keys() {
        assert_eq!(
            render(&[binding(
                vec![Key::Super, Key::Shift, Key::Print],
                "slurp | grim",
                1
            )]),
            "bind = $mainMod SHIFT, Print, exec, sh -c 'slurp | grim'\n"
        );
    }

    #[test]
    fn numpad_and_enter() {
        let five = Key::Numpad(NumpadKey::new(5).unwrap());
        assert_eq!(
            render(&[
                binding(vec![Key::Super, five], "a", 1),
                binding(vec![Key::Shift, Key::Enter], "b", 2),
            ]),
            "bind = $mainMod, KP_Begin, exec, sh -c 'a'\n\
             bind = SHIFT, Return, exec, sh -c 'b'\n"
        );
    }

    #[test]
    fn empty_keys_leave_both_fields_blank() {
        assert_eq!(
            render(&[binding(Vec::new(), "x", 1)]),
            "bind = , , exec, sh -c 'x'\n"
        );
    }

    #[test]
    fn three_keys_is_the_limit() {
        let three = vec![Key::Super, Key::Shift, Key::Print];
        assert!(check_key_counts(&[binding(three, "ok", 1)]).is_ok());
    }

    #[test]
    fn too_many_keys_rejects_whole_batch() {
        let keys = vec![Key::Super, Key::Shift, Key::Print, Key::Character('A')];
        let err = Hyprland
            .render(&[
                binding(vec![Key::Super, Key::Character('Q')], "ok", 1),
                binding(keys, "bad", 7),
            ])
            .unwrap_err();
        assert_eq!(
            err.kind,
            GenerateErrorKind::TooManyKeysForHyprland { count: 4 }
        );
        assert_eq!(err.location, Location::new("test.gnks", 7, 1));
        assert_eq!(
            err.to_string(),
            "test.gnks:7:1: Hyprland keybindings cannot contain more than 3 keys, got 4"
        );
    }

    #[test]
    fn reports_first_offender() {
        let four = vec![Key::Super, Key::Shift, Key::Print, Key::Enter];
        let err = Hyprland
            .render(&[binding(four.clone(), "a", 2), binding(four, "b", 3)])
            .unwrap_err();
        assert_eq!(err.location.line, 2);
    }
}
