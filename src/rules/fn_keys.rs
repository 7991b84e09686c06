//! Function-row rules.

use crate::constants::CURSOR_BUNDLE_ID;
use crate::models::{Condition, FromEvent, FromModifiers, Manipulator, Modifier, Rule, ToEvent};

/// Media action sent by each function key when `fn` is held. F6 is left alone.
fn media_actions() -> Vec<(&'static str, ToEvent)> {
    vec![
        ("f1", ToEvent::consumer("display_brightness_decrement")),
        ("f2", ToEvent::consumer("display_brightness_increment")),
        ("f3", ToEvent::apple_keyboard("mission_control")),
        ("f4", ToEvent::apple_keyboard("spotlight")),
        ("f5", ToEvent::consumer("dictation")),
        ("f7", ToEvent::consumer("rewind")),
        ("f8", ToEvent::consumer("play_or_pause")),
        ("f9", ToEvent::consumer("fast_forward")),
        ("f10", ToEvent::consumer("mute")),
        ("f11", ToEvent::consumer("volume_decrement")),
        ("f12", ToEvent::consumer("volume_increment")),
    ]
}

/// Inside the editor `key` is a plain function key and `fn` + `key` is `media`.
fn switch_fn_key(key: &str, media: ToEvent) -> [Manipulator; 2] {
    let in_editor = Condition::FrontmostApplicationIf {
        bundle_identifiers: vec![CURSOR_BUNDLE_ID.to_string()],
    };

    let plain = Manipulator::new(FromEvent::key_any(key))
        .to([ToEvent::key(key)])
        .with_conditions([in_editor.clone()]);
    let with_fn = Manipulator::new(
        FromEvent::key(key).with_modifiers(FromModifiers::mandatory([Modifier::Fn])),
    )
    .to([media])
    .with_conditions([in_editor]);

    [plain, with_fn]
}

/// Standard F1-F12 in VSCode-family editors, media keys behind `fn`.
pub fn vscode_fn_switch() -> Rule {
    let manipulators: Vec<Manipulator> = media_actions()
        .into_iter()
        .flat_map(|(key, media)| switch_fn_key(key, media))
        .collect();

    Rule::new(
        "Use F1-F12 as standard function keys in VSCode and Cursor, with fn for media keys.",
        manipulators,
    )
}

/// Moves fn to Right Option and puts fn on Right Control.
pub fn fn_key_remapping() -> Vec<Rule> {
    vec![
        Rule::new(
            "Fn key remapping",
            [Manipulator::new(FromEvent::top_case("keyboard_fn"))
                .with_description("Fn -> Right Option")
                .to([ToEvent::key("right_option")])],
        ),
        Rule::new(
            "Right Control -> Fn",
            [Manipulator::new(FromEvent::key("right_control"))
                .to([ToEvent::top_case("keyboard_fn")])],
        ),
    ]
}
