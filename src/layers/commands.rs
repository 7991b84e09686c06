//! Shorthands for the commands most layers are made of.

use crate::layers::LayerCommand;
use crate::models::{Modifier, ToEvent};

/// Runs `open -g <what>` (URL, file, or `-a` application) in the background.
pub fn open(what: &str) -> LayerCommand {
    LayerCommand::new([ToEvent::shell(format!("open -g {what}"))])
        .with_description(format!("Open {what}"))
}

/// Opens the application bundle `<name>.app`.
pub fn app(name: &str) -> LayerCommand {
    open(&format!("-a '{name}.app'"))
}

/// Sends a single key.
pub fn key(key_code: &str) -> LayerCommand {
    LayerCommand::new([ToEvent::key(key_code)])
}

/// Sends a single key with modifiers held.
pub fn key_with(key_code: &str, modifiers: impl Into<Vec<Modifier>>) -> LayerCommand {
    LayerCommand::new([ToEvent::key(key_code).with_modifiers(modifiers)])
}
