//! The shipped rule set.
//!
//! Rules are evaluated by Karabiner in order, so the Hyper key comes first,
//! then the sub-layers, then the function-row tweaks.

pub mod fn_keys;
pub mod hyper;
pub mod sub_layers;

pub use fn_keys::{fn_key_remapping, vscode_fn_switch};
pub use hyper::hyper_key;
pub use sub_layers::hyper_sub_layers;

use crate::config::RulesConfig;
use crate::layers::compile_sub_layers;
use crate::models::Rule;
use tracing::debug;

/// Builds every complex modification rule enabled by `options`.
pub fn complex_modifications(options: &RulesConfig) -> Vec<Rule> {
    let mut rules = vec![hyper_key()];
    rules.extend(compile_sub_layers(&hyper_sub_layers()));

    if options.vscode_fn_switch {
        rules.push(vscode_fn_switch());
    }
    if options.fn_key_remapping {
        rules.extend(fn_key_remapping());
    }

    debug!(rules = rules.len(), "built complex modifications");
    rules
}
