//! The Hyper key itself.

use crate::constants::HYPER_VARIABLE;
use crate::models::{FromEvent, Manipulator, Rule, ToEvent};

/// Caps Lock held acts as Hyper (sets `hyper`), tapped alone it is Escape.
pub fn hyper_key() -> Rule {
    Rule::new(
        "Hyper Key (⌃⌥⇧⌘)",
        [Manipulator::new(FromEvent::key_any("caps_lock"))
            .with_description("Caps Lock -> Hyper Key")
            .to([ToEvent::set_variable(HYPER_VARIABLE, 1)])
            .to_after_key_up([ToEvent::set_variable(HYPER_VARIABLE, 0)])
            .to_if_alone([ToEvent::key("escape")])],
    )
}
