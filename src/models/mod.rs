//! Data models for the Karabiner-Elements configuration document.
//!
//! These types mirror the host application's JSON schema closely enough to
//! serialize it; they do not attempt to validate it.

pub mod device;
pub mod document;
pub mod manipulator;
pub mod rule;

// Re-export all model types
pub use device::{Device, DeviceIdentifiers, SimpleKey, SimpleModification};
pub use document::{ComplexModifications, Global, KarabinerConfig, Profile};
pub use manipulator::{
    Condition, FromEvent, FromModifiers, Manipulator, ManipulatorType, Modifier, SetVariable,
    ToEvent, HYPER,
};
pub use rule::Rule;
