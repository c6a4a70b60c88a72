use pretty_assertions::assert_eq;

use super::compose::{FragmentSpec, compose, compose_from, project_config, project_plan};
use super::presets;
use super::types::ConfigError;

#[test]
fn composed_sequence_is_deterministic() {
    let first = compose().unwrap();
    let second = compose().unwrap();
    assert_eq!(first, second);
}

#[test]
fn fragment_names_appear_in_plan_order() {
    let config = compose().unwrap();
    let names: Vec<Option<&str>> = config.iter().map(|f| f.name.as_deref()).collect();
    assert_eq!(
        names,
        vec![
            None, // global ignores
            Some("js/recommended"),
            Some("typescript/base"),
            Some("typescript/recommended"),
            Some("vue/base"),
            Some("vue/essential"),
            Some("vue/strongly-recommended"),
            Some("vue/recommended"),
            Some("project/component-names"),
            Some("prettier"),
        ]
    );
}

#[test]
fn formatter_compatibility_fragment_is_last() {
    let config = compose().unwrap();
    let last = config.last().unwrap();
    assert_eq!(last.name.as_deref(), Some("prettier"));
    assert!(last.rules.values().all(|entry| entry.severity.is_off()));
}

#[test]
fn ignore_fragment_covers_build_and_dependency_directories() {
    let config = compose().unwrap();
    let ignores = &config.fragments[0];
    assert!(ignores.is_global_ignore());
    assert_eq!(
        ignores.ignores,
        vec!["**/node_modules/**", "**/.nuxt/**", "**/dist/**"]
    );
}

#[test]
fn project_config_is_constructed_once() {
    let first = project_config().unwrap();
    let second = project_config().unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first, &compose().unwrap());
}

#[test]
fn unknown_preset_aborts_composition() {
    let plan = vec![
        FragmentSpec::preset(presets::JS_RECOMMENDED),
        FragmentSpec::preset("biome/recommended"),
        FragmentSpec::preset(presets::PRETTIER),
    ];
    let err = compose_from(&plan).unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownPreset {
            name: "biome/recommended".to_string()
        }
    );
}

#[test]
fn serializes_to_the_engine_schema() {
    let config = compose().unwrap();
    let value = serde_json::to_value(&config).unwrap();

    let fragments = value.as_array().unwrap();
    assert_eq!(fragments.len(), config.len());

    // Global ignores: a single-key object.
    let ignores = fragments[0].as_object().unwrap();
    assert_eq!(ignores.len(), 1);
    assert!(ignores["ignores"].is_array());

    // Severity-only entries serialize as strings, optioned ones as arrays.
    let ts_rules = &fragments[3]["rules"];
    assert_eq!(ts_rules["@typescript-eslint/no-explicit-any"], "error");
    assert!(ts_rules["@typescript-eslint/no-unused-expressions"].is_array());

    // The scoped override keeps its selector and disables the rule.
    let component_names = &fragments[8];
    assert_eq!(component_names["files"][0], "**/*.{ts,tsx,js,vue}");
    assert_eq!(component_names["rules"]["vue/multi-word-component-names"], "off");
}
