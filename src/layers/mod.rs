//! Hyper sub-layer definitions and their compilation into rules.
//!
//! A sub-layer set maps a trigger key either to a single command (fired by
//! Hyper + key) or to a nested keymap that is active while Hyper + key is held.
//! Both maps keep insertion order, and inserting an existing key replaces the
//! old value in place, so every key (and therefore every state variable) is
//! unique.

pub mod commands;
pub mod compiler;

pub use commands::{app, key, key_with, open};
pub use compiler::{compile_sub_layer, compile_sub_layers};

use crate::constants::SUB_LAYER_VARIABLE_PREFIX;
use crate::models::ToEvent;

/// A command bound to a key inside a layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerCommand {
    /// Actions on key down
    pub to: Vec<ToEvent>,
    /// Optional description carried onto the manipulator
    pub description: Option<String>,
}

impl LayerCommand {
    /// Creates a command without a description.
    pub fn new(to: impl Into<Vec<ToEvent>>) -> Self {
        Self {
            to: to.into(),
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Nested keymap active while its trigger key is held with Hyper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubLayer {
    commands: Vec<(String, LayerCommand)>,
}

impl SubLayer {
    /// Creates an empty sub-layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `key` to `command`, replacing any previous binding of `key`.
    pub fn bind(mut self, key: impl Into<String>, command: LayerCommand) -> Self {
        self.insert(key, command);
        self
    }

    /// Binds `key` to `command` in place.
    pub fn insert(&mut self, key: impl Into<String>, command: LayerCommand) {
        upsert(&mut self.commands, key.into(), command);
    }

    /// Iterates bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LayerCommand)> {
        self.commands.iter().map(|(key, command)| (key.as_str(), command))
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no key is bound.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, LayerCommand)> for SubLayer {
    fn from_iter<I: IntoIterator<Item = (K, LayerCommand)>>(iter: I) -> Self {
        let mut layer = Self::new();
        for (key, command) in iter {
            layer.insert(key, command);
        }
        layer
    }
}

/// Value bound to a top-level Hyper key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubLayerEntry {
    /// Fires directly on Hyper + key
    Command(LayerCommand),
    /// Nested keymap toggled by Hyper + key
    Layer(SubLayer),
}

/// Ordered set of top-level Hyper bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubLayers {
    entries: Vec<(String, SubLayerEntry)>,
}

impl SubLayers {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a nested sub-layer under `key`.
    pub fn layer(mut self, key: impl Into<String>, layer: SubLayer) -> Self {
        self.insert(key, SubLayerEntry::Layer(layer));
        self
    }

    /// Adds a direct Hyper + `key` command.
    pub fn command(mut self, key: impl Into<String>, command: LayerCommand) -> Self {
        self.insert(key, SubLayerEntry::Command(command));
        self
    }

    /// Binds `key` in place, replacing any previous entry for `key`.
    pub fn insert(&mut self, key: impl Into<String>, entry: SubLayerEntry) {
        upsert(&mut self.entries, key.into(), entry);
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubLayerEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// State variable names for every top-level key, in insertion order.
    pub fn variable_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(key, _)| sub_layer_variable(key))
            .collect()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// State variable name for the sub-layer on `key`.
pub fn sub_layer_variable(key: &str) -> String {
    format!("{SUB_LAYER_VARIABLE_PREFIX}{key}")
}

fn upsert<V>(entries: &mut Vec<(String, V)>, key: String, value: V) {
    if let Some(slot) = entries.iter_mut().find(|(existing, _)| *existing == key) {
        slot.1 = value;
    } else {
        entries.push((key, value));
    }
}
