//! Expansion of sub-layer sets into flat manipulator rules.
//!
//! Each nested sub-layer becomes a toggle manipulator that holds
//! `hyper_sublayer_<key>` at 1 while its key is down, plus one manipulator per
//! nested key gated on that variable. Toggles only fire while every other
//! sub-layer variable is 0, so at most one sub-layer is active at a time and
//! keys that are themselves sub-layer triggers (e.g. Hyper + O then M) still
//! reach the active layer.

use crate::constants::HYPER_VARIABLE;
use crate::layers::{sub_layer_variable, LayerCommand, SubLayer, SubLayerEntry, SubLayers};
use crate::models::{Condition, FromEvent, Manipulator, Rule, ToEvent};
use tracing::debug;

/// Compiles every entry of `sub_layers` into one rule, in insertion order.
pub fn compile_sub_layers(sub_layers: &SubLayers) -> Vec<Rule> {
    let all_variables = sub_layers.variable_names();

    let rules: Vec<Rule> = sub_layers
        .iter()
        .map(|(key, entry)| match entry {
            SubLayerEntry::Command(command) => Rule::new(
                format!("Hyper Key + {key}"),
                [direct_command(key, command, &all_variables)],
            ),
            SubLayerEntry::Layer(layer) => Rule::new(
                format!("Hyper Key sublayer \"{key}\""),
                compile_sub_layer(key, layer, &all_variables),
            ),
        })
        .collect();

    let manipulators: usize = rules.iter().map(|rule| rule.manipulators.len()).sum();
    debug!(
        entries = sub_layers.len(),
        manipulators,
        "compiled hyper sub-layers"
    );

    rules
}

/// Compiles one nested sub-layer: its toggle followed by its commands.
///
/// `all_variables` must hold the state variable of every sibling sub-layer;
/// the layer's own variable may be included and is skipped.
pub fn compile_sub_layer(
    key: &str,
    layer: &SubLayer,
    all_variables: &[String],
) -> Vec<Manipulator> {
    let variable = sub_layer_variable(key);

    let mut guards: Vec<Condition> = all_variables
        .iter()
        .filter(|other| **other != variable)
        .map(|other| Condition::variable_if(other.as_str(), 0))
        .collect();
    guards.push(Condition::variable_if(HYPER_VARIABLE, 1));

    // Variables default to 0, so the "== 0" guards hold on startup.
    let toggle = Manipulator::new(FromEvent::key_any(key))
        .with_description(format!("Toggle Hyper sublayer {key}"))
        .to([ToEvent::set_variable(variable.as_str(), 1)])
        .to_after_key_up([ToEvent::set_variable(variable.as_str(), 0)])
        .with_conditions(guards);

    let mut manipulators = Vec::with_capacity(layer.len() + 1);
    manipulators.push(toggle);
    manipulators.extend(layer.iter().map(|(command_key, command)| {
        command_manipulator(command_key, command)
            .with_conditions([Condition::variable_if(variable.as_str(), 1)])
    }));
    manipulators
}

/// Hyper + `key` with no sub-layer involved.
fn direct_command(key: &str, command: &LayerCommand, all_variables: &[String]) -> Manipulator {
    let mut guards = vec![Condition::variable_if(HYPER_VARIABLE, 1)];
    guards.extend(
        all_variables
            .iter()
            .map(|variable| Condition::variable_if(variable.as_str(), 0)),
    );

    command_manipulator(key, command).with_conditions(guards)
}

fn command_manipulator(key: &str, command: &LayerCommand) -> Manipulator {
    let mut manipulator = Manipulator::new(FromEvent::key_any(key)).to(command.to.clone());
    manipulator.description.clone_from(&command.description);
    manipulator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{app, key, open};

    fn toggles(rules: &[Rule]) -> Vec<&Manipulator> {
        rules
            .iter()
            .flat_map(|rule| &rule.manipulators)
            .filter(|manipulator| {
                manipulator
                    .to
                    .iter()
                    .any(|event| event.set_variable.is_some())
            })
            .collect()
    }

    fn variable_guards(manipulator: &Manipulator) -> Vec<(&str, i64)> {
        manipulator
            .conditions
            .iter()
            .filter_map(|condition| match condition {
                Condition::VariableIf { name, value } => Some((name.as_str(), *value)),
                Condition::FrontmostApplicationIf { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_open_arc_sub_layer() {
        let layers = SubLayers::new().layer("o", SubLayer::new().bind("a", app("Arc")));
        let rules = compile_sub_layers(&layers);

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].description, "Hyper Key sublayer \"o\"");
        assert_eq!(rules[0].manipulators.len(), 2);

        let toggle = &rules[0].manipulators[0];
        assert_eq!(toggle.from.key_code.as_deref(), Some("o"));
        assert_eq!(
            toggle.description.as_deref(),
            Some("Toggle Hyper sublayer o")
        );
        assert_eq!(
            toggle.to,
            vec![ToEvent::set_variable("hyper_sublayer_o", 1)]
        );
        assert_eq!(
            toggle.to_after_key_up,
            vec![ToEvent::set_variable("hyper_sublayer_o", 0)]
        );
        assert_eq!(variable_guards(toggle), vec![("hyper", 1)]);

        let open_arc = &rules[0].manipulators[1];
        assert_eq!(open_arc.from.key_code.as_deref(), Some("a"));
        assert_eq!(variable_guards(open_arc), vec![("hyper_sublayer_o", 1)]);
        assert_eq!(
            open_arc.to[0].shell_command.as_deref(),
            Some("open -g -a 'Arc.app'")
        );
        assert_eq!(open_arc.description.as_deref(), Some("Open -a 'Arc.app'"));
    }

    #[test]
    fn test_one_toggle_per_sub_layer_guarding_siblings() {
        let layers = SubLayers::new()
            .layer("o", SubLayer::new().bind("a", app("Arc")))
            .layer("s", SubLayer::new().bind("u", key("volume_increment")))
            .layer("w", SubLayer::new().bind("f", open("raycast://maximize")))
            .layer("b", SubLayer::new());
        let rules = compile_sub_layers(&layers);
        let toggles = toggles(&rules);

        assert_eq!(toggles.len(), 4);

        for (toggle, own) in toggles.iter().zip(["o", "s", "w", "b"]) {
            let own_variable = sub_layer_variable(own);
            assert!(toggle.sets_variable(&own_variable));

            let guards = variable_guards(toggle);
            assert!(
                !guards.iter().any(|(name, _)| *name == own_variable),
                "toggle for {own} must not guard on its own variable"
            );
            for sibling in ["o", "s", "w", "b"].iter().filter(|key| **key != own) {
                let sibling_variable = sub_layer_variable(sibling);
                assert!(
                    guards.contains(&(sibling_variable.as_str(), 0)),
                    "toggle for {own} must require {sibling_variable} == 0"
                );
            }
            assert!(guards.contains(&("hyper", 1)));
        }
    }

    #[test]
    fn test_many_layers_with_leaf_guard_every_sibling() {
        let nested = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let mut layers = SubLayers::new();
        for layer_key in nested {
            layers = layers.layer(layer_key, SubLayer::new().bind("x", key("f13")));
        }
        layers = layers.command("z", app("Arc"));

        let rules = compile_sub_layers(&layers);
        assert_eq!(rules.len(), 9);

        let toggles = toggles(&rules);
        assert_eq!(toggles.len(), nested.len());

        for toggle in &toggles {
            let guards = variable_guards(toggle);
            // 7 nested siblings, the leaf's variable, and hyper
            assert_eq!(guards.len(), 9);
            let own = toggle.to[0].set_variable.as_ref().unwrap().name.as_str();
            assert!(!guards.iter().any(|(name, _)| *name == own));
            assert!(guards.contains(&("hyper_sublayer_z", 0)));
        }

        let leaf = &rules[8];
        assert_eq!(leaf.manipulators.len(), 1);
        assert!(leaf.manipulators[0].to[0].set_variable.is_none());
    }

    #[test]
    fn test_empty_set_compiles_to_no_rules() {
        assert!(compile_sub_layers(&SubLayers::new()).is_empty());
    }

    #[test]
    fn test_empty_sub_layer_yields_only_toggle() {
        let layers = SubLayers::new().layer("b", SubLayer::new());
        let rules = compile_sub_layers(&layers);

        assert_eq!(rules[0].manipulators.len(), 1);
        assert!(rules[0].manipulators[0].sets_variable("hyper_sublayer_b"));
    }

    #[test]
    fn test_leaf_command_never_toggles() {
        let layers = SubLayers::new()
            .command("x", key("f13"))
            .layer("o", SubLayer::new().bind("a", app("Arc")));
        let rules = compile_sub_layers(&layers);

        assert_eq!(rules[0].description, "Hyper Key + x");
        assert_eq!(rules[0].manipulators.len(), 1);
        let direct = &rules[0].manipulators[0];
        assert!(direct.to.iter().all(|event| event.set_variable.is_none()));
        assert_eq!(
            variable_guards(direct),
            vec![
                ("hyper", 1),
                ("hyper_sublayer_x", 0),
                ("hyper_sublayer_o", 0),
            ]
        );

        assert_eq!(toggles(&rules).len(), 1);
    }

    #[test]
    fn test_commands_follow_insertion_order() {
        let layer = SubLayer::new()
            .bind("h", key("left_arrow"))
            .bind("j", key("down_arrow"))
            .bind("k", key("up_arrow"));
        let manipulators = compile_sub_layer("e", &layer, &[sub_layer_variable("e")]);

        let keys: Vec<&str> = manipulators
            .iter()
            .filter_map(|manipulator| manipulator.from.key_code.as_deref())
            .collect();
        assert_eq!(keys, vec!["e", "h", "j", "k"]);
    }
}
