use flatcfg::{FileMatcher, FragmentSpec, Severity, compose, compose_from, project_plan};

#[test]
fn excluded_directories_are_never_analyzed() {
    let config = compose().unwrap();
    let matcher = FileMatcher::new(&config).unwrap();

    for path in [
        "node_modules/pkg/index.js",
        ".nuxt/types/app.d.ts",
        "dist/assets/index.js",
        "packages/app/node_modules/lib/main.ts",
    ] {
        assert!(matcher.is_ignored(path), "{path} should be ignored");
        assert!(matcher.resolve(path).is_none(), "{path} should resolve to nothing");
    }

    assert!(!matcher.is_ignored("src/pages/index.vue"));
}

#[test]
fn component_naming_rule_is_disabled_for_components() {
    let config = compose().unwrap();
    let matcher = FileMatcher::new(&config).unwrap();

    // A single-word component like index.vue produces no diagnostics from
    // the naming rule: the essential tier enables it, the project override
    // wins.
    let effective = matcher.resolve("src/pages/index.vue").unwrap();
    assert_eq!(
        effective.severity_of("vue/multi-word-component-names"),
        Some(Severity::Off)
    );
    assert!(!effective.is_rule_active("vue/multi-word-component-names"));

    let resolved = &effective.rules["vue/multi-word-component-names"];
    let sources: Vec<_> = resolved
        .overrides
        .iter()
        .filter_map(|o| o.fragment_name.as_deref())
        .collect();
    assert_eq!(sources, vec!["vue/essential", "project/component-names"]);
}

#[test]
fn removing_the_override_reverts_to_the_preset_severity() {
    let plan: Vec<_> = project_plan()
        .into_iter()
        .filter(|spec| {
            !matches!(spec, FragmentSpec::Inline(f) if f.name.as_deref() == Some("project/component-names"))
        })
        .collect();
    let config = compose_from(&plan).unwrap();
    let matcher = FileMatcher::new(&config).unwrap();

    let effective = matcher.resolve("src/pages/index.vue").unwrap();
    assert_eq!(
        effective.severity_of("vue/multi-word-component-names"),
        Some(Severity::Error)
    );
}

#[test]
fn formatter_compatibility_silences_stylistic_rules() {
    let config = compose().unwrap();
    let matcher = FileMatcher::new(&config).unwrap();

    let effective = matcher.resolve("src/App.vue").unwrap();
    let resolved = &effective.rules["vue/html-indent"];
    assert_eq!(resolved.entry.severity, Severity::Off);
    // Warn from the strongly-recommended tier, then off from prettier.
    assert_eq!(resolved.overrides.len(), 2);
    assert_eq!(
        resolved.overrides[0].fragment_name.as_deref(),
        Some("vue/strongly-recommended")
    );
    assert_eq!(resolved.overrides[1].fragment_name.as_deref(), Some("prettier"));
}

#[test]
fn type_aware_rules_stay_scoped_to_typescript_sources() {
    let config = compose().unwrap();
    let matcher = FileMatcher::new(&config).unwrap();

    let typescript = matcher.resolve("src/composables/useAuth.ts").unwrap();
    assert!(typescript.is_rule_active("@typescript-eslint/no-explicit-any"));
    assert_eq!(
        typescript.language_options.as_ref().and_then(|l| l.parser.as_deref()),
        Some("@typescript-eslint/parser")
    );
    // The type-aware tier switches the core rule off in favor of its own.
    assert_eq!(typescript.severity_of("no-unused-vars"), Some(Severity::Off));
    assert!(typescript.is_rule_active("@typescript-eslint/no-unused-vars"));

    let javascript = matcher.resolve("src/plugins/analytics.js").unwrap();
    assert!(!javascript.rules.contains_key("@typescript-eslint/no-explicit-any"));
    assert!(javascript.is_rule_active("no-unused-vars"));
    assert!(javascript.is_rule_active("no-debugger"));
}

#[test]
fn component_files_pick_up_the_framework_parser() {
    let config = compose().unwrap();
    let matcher = FileMatcher::new(&config).unwrap();

    let effective = matcher.resolve("src/components/NavBar.vue").unwrap();
    assert_eq!(
        effective.language_options.clone().and_then(|l| l.parser),
        Some("vue-eslint-parser".to_string())
    );
    assert!(effective.is_rule_active("vue/require-v-for-key"));
}

#[test]
fn unscoped_files_only_receive_universal_fragments() {
    let config = compose().unwrap();
    let matcher = FileMatcher::new(&config).unwrap();

    let effective = matcher.resolve("scripts/check.mjs").unwrap();
    assert!(effective.is_rule_active("no-debugger"));
    assert!(!effective.rules.keys().any(|id| id.starts_with("vue/") && effective.is_rule_active(id)));
    assert!(effective.language_options.is_none());
}
