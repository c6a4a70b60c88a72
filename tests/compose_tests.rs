use flatcfg::{FragmentSpec, compose, compose_from, presets, project_plan, validate};

#[test]
fn recomposition_yields_an_identical_sequence() {
    let first = compose().expect("composition should succeed");
    let second = compose().expect("composition should succeed");
    assert_eq!(first, second);
    // The serialized forms are byte-identical too, so the engine sees the
    // exact same configuration on every construction.
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn presets_are_flattened_not_nested() {
    let config = compose().unwrap();
    // Ten fragments: ignores, js, two from typescript, four from vue, the
    // component-names override, and prettier.
    assert_eq!(config.len(), 10);
}

#[test]
fn override_precedes_the_formatter_fragment() {
    let config = compose().unwrap();
    let names: Vec<_> = config.iter().filter_map(|f| f.name.as_deref()).collect();
    let override_pos = names.iter().position(|n| *n == "project/component-names").unwrap();
    let prettier_pos = names.iter().position(|n| *n == "prettier").unwrap();
    assert_eq!(prettier_pos, names.len() - 1);
    assert_eq!(override_pos, prettier_pos - 1);
}

#[test]
fn composed_configuration_has_no_validation_warnings() {
    let config = compose().unwrap();
    assert!(validate(&config).is_empty());
}

#[test]
fn a_plan_with_an_unresolvable_preset_produces_no_partial_sequence() {
    let mut plan = project_plan();
    plan.insert(1, FragmentSpec::preset("standard/legacy"));
    assert!(compose_from(&plan).is_err());
}

#[test]
fn custom_plans_compose_in_given_order() {
    let plan = vec![
        FragmentSpec::preset(presets::VUE_FLAT_RECOMMENDED),
        FragmentSpec::preset(presets::PRETTIER),
    ];
    let config = compose_from(&plan).unwrap();
    let names: Vec<_> = config.iter().filter_map(|f| f.name.as_deref()).collect();
    assert_eq!(
        names,
        vec!["vue/base", "vue/essential", "vue/strongly-recommended", "vue/recommended", "prettier"]
    );
}
