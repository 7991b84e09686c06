//! Device identifier tables and device-scoped key swaps.

use crate::models::{Device, DeviceIdentifiers, SimpleModification};

/// Apple's USB vendor id.
const APPLE_VENDOR_ID: u32 = 1452;

/// Built-in MacBook keyboard.
pub const INTERNAL_KEYBOARD: DeviceIdentifiers =
    DeviceIdentifiers::keyboard(APPLE_VENDOR_ID, 835);

/// Keychron K2 (reports Apple's vendor id in Mac mode).
pub const KEYCHRON_K2: DeviceIdentifiers = DeviceIdentifiers::keyboard(APPLE_VENDOR_ID, 591);

/// Maps `from` to `to` and `to` to `from`.
pub fn swap_keys(from: &str, to: &str) -> Vec<SimpleModification> {
    vec![
        SimpleModification::new(from, to),
        SimpleModification::new(to, from),
    ]
}

/// Puts `<` / `>` and `§` back where a Norwegian layout expects them.
pub fn norwegian_keyboard_mod() -> Vec<SimpleModification> {
    swap_keys("grave_accent_and_tilde", "non_us_backslash")
}

/// Internal keyboard with the Norwegian swap.
pub fn internal_keyboard() -> Vec<Device> {
    vec![Device::new(INTERNAL_KEYBOARD).with_simple_modifications(norwegian_keyboard_mod())]
}

/// Keychron K2 without modifications.
pub fn keychron_k2() -> Vec<Device> {
    vec![Device::new(KEYCHRON_K2)]
}

/// Every device entry written to the profile.
pub fn all_devices() -> Vec<Device> {
    let mut devices = internal_keyboard();
    devices.extend(keychron_k2());
    devices
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_swap_keys_is_symmetric() {
        let swaps = swap_keys("a", "b");
        assert_eq!(swaps.len(), 2);
        assert_eq!(swaps[0].from.key_code, "a");
        assert_eq!(swaps[0].to[0].key_code, "b");
        assert_eq!(swaps[1].from.key_code, "b");
        assert_eq!(swaps[1].to[0].key_code, "a");
    }

    #[test]
    fn test_all_devices_json() {
        let value = serde_json::to_value(all_devices()).unwrap();
        assert_eq!(
            value[0]["identifiers"],
            json!({
                "is_game_pad": false,
                "is_keyboard": true,
                "is_pointing_device": false,
                "product_id": 835,
                "vendor_id": 1452
            })
        );
        assert_eq!(
            value[0]["simple_modifications"].as_array().unwrap().len(),
            2
        );
        assert_eq!(value[1]["identifiers"]["product_id"], 591);
        assert!(value[1].get("simple_modifications").is_none());
    }
}
