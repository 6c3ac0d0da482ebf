#![allow(dead_code)]

use genkeys::{Generator, Hyprland, Keybinding, Sway, compile_str};

pub const FILE: &str = "keys.gnks";

pub fn compile(input: &str) -> Vec<Keybinding> {
    compile_str(FILE, input).expect("compile failed")
}

pub fn sway(input: &str) -> String {
    Sway.render(&compile(input)).expect("sway render failed")
}

pub fn hyprland(input: &str) -> String {
    Hyprland
        .render(&compile(input))
        .expect("hyprland render failed")
}
