//! Device identifiers and per-device simple modifications.

use serde::{Deserialize, Serialize};

/// Hardware identity used to scope settings to one device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentifiers {
    /// Whether the device is a game pad
    pub is_game_pad: bool,
    /// Whether the device is a keyboard
    pub is_keyboard: bool,
    /// Whether the device is a pointing device
    pub is_pointing_device: bool,
    /// USB product id
    pub product_id: u32,
    /// USB vendor id
    pub vendor_id: u32,
}

impl DeviceIdentifiers {
    /// Identifiers for a plain keyboard (no pointing or game pad capability).
    pub const fn keyboard(vendor_id: u32, product_id: u32) -> Self {
        Self {
            is_game_pad: false,
            is_keyboard: true,
            is_pointing_device: false,
            product_id,
            vendor_id,
        }
    }
}

/// A bare key code reference used by simple modifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleKey {
    /// Key code
    pub key_code: String,
}

/// One-to-one key replacement applied before complex modifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleModification {
    /// Physical key
    pub from: SimpleKey,
    /// Replacement key(s)
    pub to: Vec<SimpleKey>,
}

impl SimpleModification {
    /// Replaces `from` with `to`.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: SimpleKey {
                key_code: from.into(),
            },
            to: vec![SimpleKey {
                key_code: to.into(),
            }],
        }
    }
}

/// Per-device settings inside a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Which device these settings apply to
    pub identifiers: DeviceIdentifiers,
    /// Key swaps applied only on this device
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub simple_modifications: Vec<SimpleModification>,
}

impl Device {
    /// Creates device settings without any modifications.
    pub fn new(identifiers: DeviceIdentifiers) -> Self {
        Self {
            identifiers,
            simple_modifications: Vec::new(),
        }
    }

    /// Sets the simple modifications for this device.
    pub fn with_simple_modifications(mut self, modifications: Vec<SimpleModification>) -> Self {
        self.simple_modifications = modifications;
        self
    }
}
