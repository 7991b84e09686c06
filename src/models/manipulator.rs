//! Manipulator data structures (one trigger-to-action binding).
//!
//! Field declaration order is the JSON key order, so keep it stable.

use serde::{Deserialize, Serialize};

/// Modifier key names understood by Karabiner-Elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// Matches any modifier (only valid in `from.modifiers.optional`)
    Any,
    /// Caps lock as a modifier
    CapsLock,
    /// Either command key
    Command,
    /// Either control key
    Control,
    /// Either option key
    Option,
    /// Either shift key
    Shift,
    /// Left command
    LeftCommand,
    /// Left control
    LeftControl,
    /// Left option
    LeftOption,
    /// Left shift
    LeftShift,
    /// Right command
    RightCommand,
    /// Right control
    RightControl,
    /// Right option
    RightOption,
    /// Right shift
    RightShift,
    /// The fn key
    Fn,
}

/// The four left-hand modifiers held together, i.e. what Hyper sends.
pub const HYPER: [Modifier; 4] = [
    Modifier::LeftControl,
    Modifier::LeftOption,
    Modifier::LeftShift,
    Modifier::LeftCommand,
];

/// Modifier constraints on a trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromModifiers {
    /// Modifiers that must be held
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mandatory: Vec<Modifier>,
    /// Modifiers that may be held without blocking the match
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optional: Vec<Modifier>,
}

impl FromModifiers {
    /// Allows any modifier to be held (`optional: ["any"]`).
    pub fn optional_any() -> Self {
        Self {
            mandatory: Vec::new(),
            optional: vec![Modifier::Any],
        }
    }

    /// Requires `mandatory` while still allowing any other modifier.
    pub fn mandatory(mandatory: impl Into<Vec<Modifier>>) -> Self {
        Self {
            mandatory: mandatory.into(),
            optional: vec![Modifier::Any],
        }
    }
}

/// Trigger side of a manipulator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromEvent {
    /// Regular key code (e.g. "caps_lock")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_code: Option<String>,
    /// Apple top-case key code (e.g. "keyboard_fn")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_vendor_top_case_key_code: Option<String>,
    /// Modifier constraints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<FromModifiers>,
}

impl FromEvent {
    /// Triggers on `key_code` with no modifier constraints.
    pub fn key(key_code: impl Into<String>) -> Self {
        Self {
            key_code: Some(key_code.into()),
            ..Self::default()
        }
    }

    /// Triggers on `key_code` regardless of which modifiers are held.
    pub fn key_any(key_code: impl Into<String>) -> Self {
        Self::key(key_code).with_modifiers(FromModifiers::optional_any())
    }

    /// Triggers on an Apple top-case key code.
    pub fn top_case(key_code: impl Into<String>) -> Self {
        Self {
            apple_vendor_top_case_key_code: Some(key_code.into()),
            ..Self::default()
        }
    }

    /// Sets the modifier constraints.
    pub fn with_modifiers(mut self, modifiers: FromModifiers) -> Self {
        self.modifiers = Some(modifiers);
        self
    }
}

/// A `set_variable` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetVariable {
    /// Variable name
    pub name: String,
    /// Value to assign (Karabiner variables default to 0)
    pub value: i64,
}

/// One output action.
///
/// Karabiner accepts exactly one kind of action per entry; the constructors
/// below only ever fill one of the kind fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToEvent {
    /// Regular key code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_code: Option<String>,
    /// Consumer (media) key code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_key_code: Option<String>,
    /// Apple keyboard key code (mission_control, spotlight, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_vendor_keyboard_key_code: Option<String>,
    /// Apple top-case key code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_vendor_top_case_key_code: Option<String>,
    /// Modifiers sent together with the key
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    /// Shell command to run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell_command: Option<String>,
    /// Variable assignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_variable: Option<SetVariable>,
}

impl ToEvent {
    /// Sends a regular key.
    pub fn key(key_code: impl Into<String>) -> Self {
        Self {
            key_code: Some(key_code.into()),
            ..Self::default()
        }
    }

    /// Sends a consumer (media) key.
    pub fn consumer(key_code: impl Into<String>) -> Self {
        Self {
            consumer_key_code: Some(key_code.into()),
            ..Self::default()
        }
    }

    /// Sends an Apple keyboard key.
    pub fn apple_keyboard(key_code: impl Into<String>) -> Self {
        Self {
            apple_vendor_keyboard_key_code: Some(key_code.into()),
            ..Self::default()
        }
    }

    /// Sends an Apple top-case key.
    pub fn top_case(key_code: impl Into<String>) -> Self {
        Self {
            apple_vendor_top_case_key_code: Some(key_code.into()),
            ..Self::default()
        }
    }

    /// Runs a shell command.
    pub fn shell(command: impl Into<String>) -> Self {
        Self {
            shell_command: Some(command.into()),
            ..Self::default()
        }
    }

    /// Assigns `value` to the variable `name`.
    pub fn set_variable(name: impl Into<String>, value: i64) -> Self {
        Self {
            set_variable: Some(SetVariable {
                name: name.into(),
                value,
            }),
            ..Self::default()
        }
    }

    /// Adds modifiers to the emitted key.
    pub fn with_modifiers(mut self, modifiers: impl Into<Vec<Modifier>>) -> Self {
        self.modifiers = modifiers.into();
        self
    }
}

/// Guard condition on a manipulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    /// Matches when variable `name` equals `value`
    VariableIf {
        /// Variable name
        name: String,
        /// Expected value
        value: i64,
    },
    /// Matches when the frontmost application is one of the bundles
    FrontmostApplicationIf {
        /// Bundle identifiers (regular expressions in Karabiner)
        bundle_identifiers: Vec<String>,
    },
}

impl Condition {
    /// Shorthand for `variable_if`.
    pub fn variable_if(name: impl Into<String>, value: i64) -> Self {
        Self::VariableIf {
            name: name.into(),
            value,
        }
    }
}

/// Manipulator type. Only `basic` is generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManipulatorType {
    /// Plain key-to-action binding
    #[default]
    Basic,
}

/// One input-trigger-to-output-action rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manipulator {
    /// Human-readable description shown in the Karabiner UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Manipulator type
    #[serde(rename = "type")]
    pub kind: ManipulatorType,
    /// Trigger
    pub from: FromEvent,
    /// Actions on key down
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<ToEvent>,
    /// Actions on key up
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_after_key_up: Vec<ToEvent>,
    /// Actions when the key is tapped alone
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_if_alone: Vec<ToEvent>,
    /// Guards that must all hold for the manipulator to fire
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

impl Manipulator {
    /// Creates a basic manipulator for `from` with no actions yet.
    pub fn new(from: FromEvent) -> Self {
        Self {
            from,
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the key-down actions.
    pub fn to(mut self, to: impl Into<Vec<ToEvent>>) -> Self {
        self.to = to.into();
        self
    }

    /// Sets the key-up actions.
    pub fn to_after_key_up(mut self, to: impl Into<Vec<ToEvent>>) -> Self {
        self.to_after_key_up = to.into();
        self
    }

    /// Sets the tap-alone actions.
    pub fn to_if_alone(mut self, to: impl Into<Vec<ToEvent>>) -> Self {
        self.to_if_alone = to.into();
        self
    }

    /// Sets the guard conditions.
    pub fn with_conditions(mut self, conditions: impl Into<Vec<Condition>>) -> Self {
        self.conditions = conditions.into();
        self
    }

    /// Returns true if this manipulator assigns `variable` on key down.
    pub fn sets_variable(&self, variable: &str) -> bool {
        self.to.iter().any(|event| {
            event
                .set_variable
                .as_ref()
                .is_some_and(|set| set.name == variable)
        })
    }
}
