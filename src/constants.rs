//! Application-wide constants.
//!
//! This module defines the application name along with the fixed names the
//! generated configuration relies on.

/// The display name of the application.
pub const APP_NAME: &str = "karabiner-config";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "karabiner-config";

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "karabiner.json";

/// Default (and only) profile name.
pub const DEFAULT_PROFILE_NAME: &str = "Default";

/// Variable set to 1 while the Hyper key is held.
pub const HYPER_VARIABLE: &str = "hyper";

/// Prefix for per-sub-layer state variables (`hyper_sublayer_<key>`).
pub const SUB_LAYER_VARIABLE_PREFIX: &str = "hyper_sublayer_";

/// Bundle id of the Cursor editor, which gets standard F1-F12 keys.
pub const CURSOR_BUNDLE_ID: &str = "com.todesktop.230313mzl4w4u92";
