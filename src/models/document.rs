//! Top-level `karabiner.json` document shape.

use crate::models::{Device, Rule, SimpleModification};
use serde::{Deserialize, Serialize};

/// Global (profile independent) settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Global {
    /// Show the Karabiner icon in the menu bar
    pub show_in_menu_bar: bool,
}

/// Wrapper object Karabiner expects around the rule list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexModifications {
    /// Rules in priority order
    pub rules: Vec<Rule>,
}

/// One Karabiner profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile name
    pub name: String,
    /// Complex modification rules
    pub complex_modifications: ComplexModifications,
    /// Device-scoped settings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub devices: Vec<Device>,
    /// Key swaps applied to every device
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub simple_modifications: Vec<SimpleModification>,
}

/// The complete `karabiner.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KarabinerConfig {
    /// Global settings
    pub global: Global,
    /// Profiles (the first one is selected by Karabiner on load)
    pub profiles: Vec<Profile>,
}

impl KarabinerConfig {
    /// Total number of manipulators across all profiles.
    pub fn manipulator_count(&self) -> usize {
        self.profiles
            .iter()
            .flat_map(|profile| &profile.complex_modifications.rules)
            .map(|rule| rule.manipulators.len())
            .sum()
    }
}
