//! Sway and i3 `bindsym` output.

use super::{GenerateError, Generator};
use crate::ast::Keybinding;
use crate::key::Key;

/// Renders `bindsym $mod+Shift+Q exec sh -c '...'` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sway;

impl Generator for Sway {
    fn name(&self) -> &'static str {
        "sway"
    }

    fn render(&self, keybindings: &[Keybinding]) -> Result<String, GenerateError> {
        let mut out = String::new();

        for binding in keybindings {
            out.push_str("bindsym ");
            for (i, key) in binding.keys.iter().enumerate() {
                if i > 0 {
                    out.push('+');
                }
                push_key(&mut out, *key);
            }
            out.push_str(" exec sh -c ");
            out.push_str(&self.quote_command(&binding.command));
            out.push('\n');
        }

        Ok(out)
    }
}

fn push_key(out: &mut String, key: Key) {
    match key {
        Key::Print => out.push_str("Print"),
        Key::Super => out.push_str("$mod"),
        Key::Shift => out.push_str("Shift"),
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

    fn binding(keys: Vec<Key>, command: &str) -> Keybinding {
        Keybinding {
            keys,
            command: command.to_string(),
            location: Location::new("test.gnks", 1, 1),
        }
    }

    #[test]
    fn super_and_character() {
        let out = Sway
            .render(&[binding(vec![Key::Super, Key::Character('1')], "foo")])
            .expect("render failed");
        assert_eq!(out, "bindsym $mod+1 exec sh -c 'foo'\n");
    }

    #[test]
    fn all_key_kinds() {
        let out = Sway
            .render(&[binding(
                vec![
                    Key::Super,
                    Key::Shift,
                    Key::Print,
                    Key::Numpad(NumpadKey::new(9).unwrap()),
                    Key::Enter,
                ],
                "x",
            )])
            .expect("render failed");
        assert_eq!(
            out,
            "bindsym $mod+Shift+Print+KP_Prior+Return exec sh -c 'x'\n"
        );
    }

    #[test]
    fn no_key_limit() {
        let keys = vec![Key::Super, Key::Shift, Key::Print, Key::Character('A')];
        let out = Sway.render(&[binding(keys, "x")]).expect("render failed");
        assert_eq!(out, "bindsym $mod+Shift+Print+A exec sh -c 'x'\n");
    }

    #[test]
    fn one_line_per_binding() {
        let out = Sway
            .render(&[
                binding(vec![Key::Print], "grim"),
                binding(vec![Key::Super, Key::Enter], "foot"),
            ])
            .expect("render failed");
        assert_eq!(
            out,
            "bindsym Print exec sh -c 'grim'\n\
             bindsym $mod+Return exec sh -c 'foot'\n"
        );
    }

    #[test]
    fn empty_keys_still_render_a_line() {
        let keys = Vec::new();
        let out = Sway.render(&[binding(keys, "x")]).expect("render failed");
        assert_eq!(out, "bindsym  exec sh -c 'x'\n");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(Sway.render(&[]).expect("render failed"), "");
    }
}
