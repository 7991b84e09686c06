//! Karabiner Config Library
//!
//! This library describes a Karabiner-Elements setup (a Hyper key, Hyper
//! sub-layers, application launchers, media keys and device-specific key
//! swaps) as Rust data and renders it to `karabiner.json`.

// Module declarations
pub mod config;
pub mod constants;
pub mod devices;
pub mod generator;
pub mod layers;
pub mod models;
pub mod rules;
