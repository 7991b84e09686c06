//! Complex modification rules.

use crate::models::Manipulator;
use serde::{Deserialize, Serialize};

/// A named group of manipulators, shown as one entry in the Karabiner UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Rule description
    pub description: String,
    /// Manipulators, evaluated in order
    pub manipulators: Vec<Manipulator>,
}

impl Rule {
    /// Creates a rule from a description and its manipulators.
    pub fn new(description: impl Into<String>, manipulators: impl Into<Vec<Manipulator>>) -> Self {
        Self {
            description: description.into(),
            manipulators: manipulators.into(),
        }
    }
}
