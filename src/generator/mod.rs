//! Document assembly and output.
//!
//! This module nests the compiled rules and device tables into the
//! `karabiner.json` document shape and hands it to the writer.

pub mod writer;

pub use writer::{check_config, render, write_config, CheckOutcome, WriteReport};

use crate::config::{Config, ProfileConfig};
use crate::devices;
use crate::models::{ComplexModifications, Device, Global, KarabinerConfig, Profile, Rule};
use crate::rules;
use tracing::debug;

/// Wraps `rules` and `devices` into a single-profile document.
///
/// No validation against the host schema is performed.
pub fn assemble(
    rules: Vec<Rule>,
    devices: Vec<Device>,
    profile: &ProfileConfig,
) -> KarabinerConfig {
    let document = KarabinerConfig {
        global: Global {
            show_in_menu_bar: profile.show_in_menu_bar,
        },
        profiles: vec![Profile {
            name: profile.name.clone(),
            complex_modifications: ComplexModifications { rules },
            devices,
            simple_modifications: Vec::new(),
        }],
    };

    debug!(
        profile = %profile.name,
        manipulators = document.manipulator_count(),
        "assembled document"
    );
    document
}

/// Builds the complete document for `config`.
pub fn build_document(config: &Config) -> KarabinerConfig {
    assemble(
        rules::complex_modifications(&config.rules),
        devices::all_devices(),
        &config.profile,
    )
}
