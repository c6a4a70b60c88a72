//!
//! Built-in preset registry. A preset is a named, externally-maintained
//! rule set that expands to one or more fragments; expansion flattens the
//! preset into the composition, it never nests. Lookup is by name and an
//! unknown name is fatal for the construction.

use indexmap::IndexMap;
use serde_json::json;

use super::types::{ConfigError, ConfigFragment, LanguageOptions, RuleEntry, Severity};

/// General-purpose recommended rules, applied to every file.
pub const JS_RECOMMENDED: &str = "js/recommended";

/// Type-aware recommended preset: a parser base fragment followed by the
/// recommended rule mappings, both scoped to TypeScript sources.
pub const TYPESCRIPT_RECOMMENDED: &str = "typescript/recommended";

/// UI-framework preset in flat form: base, essential, strongly-recommended,
/// and recommended tiers, scoped to single-file components.
pub const VUE_FLAT_RECOMMENDED: &str = "vue/flat-recommended";

/// Formatter compatibility: disables every stylistic rule that would fight
/// an external code formatter.
pub const PRETTIER: &str = "prettier";

/// All preset names known to the registry.
pub const PRESET_NAMES: &[&str] = &[
    JS_RECOMMENDED,
    TYPESCRIPT_RECOMMENDED,
    VUE_FLAT_RECOMMENDED,
    PRETTIER,
];

pub(crate) const TYPESCRIPT_FILES: &[&str] = &["**/*.ts", "**/*.tsx", "**/*.mts", "**/*.cts"];
pub(crate) const VUE_FILES: &[&str] = &["**/*.vue"];

/// Expand a preset name into its fragment sequence.
pub fn expand(name: &str) -> Result<Vec<ConfigFragment>, ConfigError> {
    let fragments = match name {
        JS_RECOMMENDED => js_recommended(),
        TYPESCRIPT_RECOMMENDED => typescript_recommended(),
        VUE_FLAT_RECOMMENDED => vue_flat_recommended(),
        PRETTIER => prettier(),
        _ => {
            return Err(ConfigError::UnknownPreset {
                name: name.to_string(),
            });
        }
    };
    log::debug!("expanded preset {name} into {} fragment(s)", fragments.len());
    Ok(fragments)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn uniform_rules(ids: &[&str], severity: Severity) -> IndexMap<String, RuleEntry> {
    ids.iter()
        .map(|id| (id.to_string(), RuleEntry::new(severity)))
        .collect()
}

fn js_recommended() -> Vec<ConfigFragment> {
    vec![ConfigFragment {
        name: Some(JS_RECOMMENDED.to_string()),
        rules: uniform_rules(JS_RECOMMENDED_RULES, Severity::Error),
        ..ConfigFragment::default()
    }]
}

fn typescript_recommended() -> Vec<ConfigFragment> {
    let base = ConfigFragment {
        name: Some("typescript/base".to_string()),
        files: to_strings(TYPESCRIPT_FILES),
        language_options: Some(LanguageOptions {
            parser: Some("@typescript-eslint/parser".to_string()),
            parser_options: IndexMap::from_iter([("sourceType".to_string(), json!("module"))]),
        }),
        ..ConfigFragment::default()
    };

    // Core rules the type-aware tooling re-implements are switched off and
    // replaced by their namespaced counterparts.
    let mut rules = uniform_rules(TYPESCRIPT_DISABLED_CORE_RULES, Severity::Off);
    rules.extend(uniform_rules(TYPESCRIPT_RECOMMENDED_RULES, Severity::Error));
    rules.insert(
        "@typescript-eslint/no-unused-expressions".to_string(),
        RuleEntry::with_options(
            Severity::Error,
            vec![json!({
                "allowShortCircuit": true,
                "allowTernary": true,
                "allowTaggedTemplates": true
            })],
        ),
    );

    let recommended = ConfigFragment {
        name: Some("typescript/recommended".to_string()),
        files: to_strings(TYPESCRIPT_FILES),
        rules,
        ..ConfigFragment::default()
    };

    vec![base, recommended]
}

fn vue_flat_recommended() -> Vec<ConfigFragment> {
    let base = ConfigFragment {
        name: Some("vue/base".to_string()),
        files: to_strings(VUE_FILES),
        language_options: Some(LanguageOptions {
            parser: Some("vue-eslint-parser".to_string()),
            parser_options: IndexMap::from_iter([
                ("ecmaVersion".to_string(), json!("latest")),
                ("sourceType".to_string(), json!("module")),
            ]),
        }),
        ..ConfigFragment::default()
    };

    let essential = ConfigFragment {
        name: Some("vue/essential".to_string()),
        files: to_strings(VUE_FILES),
        rules: uniform_rules(VUE_ESSENTIAL_RULES, Severity::Error),
        ..ConfigFragment::default()
    };

    let strongly_recommended = ConfigFragment {
        name: Some("vue/strongly-recommended".to_string()),
        files: to_strings(VUE_FILES),
        rules: uniform_rules(VUE_STRONGLY_RECOMMENDED_RULES, Severity::Warn),
        ..ConfigFragment::default()
    };

    let recommended = ConfigFragment {
        name: Some("vue/recommended".to_string()),
        files: to_strings(VUE_FILES),
        rules: uniform_rules(VUE_RECOMMENDED_RULES, Severity::Warn),
        ..ConfigFragment::default()
    };

    vec![base, essential, strongly_recommended, recommended]
}

fn prettier() -> Vec<ConfigFragment> {
    // The formatter-compatibility table is maintained upstream; it is taken
    // over unmodified and applies to every file.
    vec![ConfigFragment {
        name: Some(PRETTIER.to_string()),
        rules: uniform_rules(PRETTIER_RULES, Severity::Off),
        ..ConfigFragment::default()
    }]
}

const JS_RECOMMENDED_RULES: &[&str] = &[
    "constructor-super",
    "for-direction",
    "getter-return",
    "no-async-promise-executor",
    "no-case-declarations",
    "no-class-assign",
    "no-compare-neg-zero",
    "no-cond-assign",
    "no-const-assign",
    "no-constant-binary-expression",
    "no-constant-condition",
    "no-control-regex",
    "no-debugger",
    "no-delete-var",
    "no-dupe-args",
    "no-dupe-class-members",
    "no-dupe-else-if",
    "no-dupe-keys",
    "no-duplicate-case",
    "no-empty",
    "no-empty-character-class",
    "no-empty-pattern",
    "no-empty-static-block",
    "no-ex-assign",
    "no-extra-boolean-cast",
    "no-fallthrough",
    "no-func-assign",
    "no-global-assign",
    "no-import-assign",
    "no-invalid-regexp",
    "no-irregular-whitespace",
    "no-loss-of-precision",
    "no-misleading-character-class",
    "no-new-native-nonconstructor",
    "no-obj-calls",
    "no-octal",
    "no-prototype-builtins",
    "no-redeclare",
    "no-regex-spaces",
    "no-self-assign",
    "no-setter-return",
    "no-shadow-restricted-names",
    "no-sparse-arrays",
    "no-this-before-super",
    "no-undef",
    "no-unexpected-multiline",
    "no-unreachable",
    "no-unsafe-finally",
    "no-unsafe-negation",
    "no-unsafe-optional-chaining",
    "no-unused-labels",
    "no-unused-private-class-members",
    "no-unused-vars",
    "no-useless-backreference",
    "no-useless-catch",
    "no-useless-escape",
    "no-with",
    "require-yield",
    "use-isnan",
    "valid-typeof",
];

const TYPESCRIPT_DISABLED_CORE_RULES: &[&str] = &[
    "no-dupe-class-members",
    "no-loss-of-precision",
    "no-redeclare",
    "no-undef",
    "no-unused-vars",
];

const TYPESCRIPT_RECOMMENDED_RULES: &[&str] = &[
    "@typescript-eslint/ban-ts-comment",
    "@typescript-eslint/no-duplicate-enum-values",
    "@typescript-eslint/no-empty-object-type",
    "@typescript-eslint/no-explicit-any",
    "@typescript-eslint/no-extra-non-null-assertion",
    "@typescript-eslint/no-misused-new",
    "@typescript-eslint/no-namespace",
    "@typescript-eslint/no-non-null-asserted-optional-chain",
    "@typescript-eslint/no-require-imports",
    "@typescript-eslint/no-this-alias",
    "@typescript-eslint/no-unnecessary-type-constraint",
    "@typescript-eslint/no-unsafe-declaration-merging",
    "@typescript-eslint/no-unsafe-function-type",
    "@typescript-eslint/no-unused-vars",
    "@typescript-eslint/no-wrapper-object-types",
    "@typescript-eslint/prefer-as-const",
    "@typescript-eslint/prefer-namespace-keyword",
    "@typescript-eslint/triple-slash-reference",
];

const VUE_ESSENTIAL_RULES: &[&str] = &[
    "vue/multi-word-component-names",
    "vue/no-arrow-functions-in-watch",
    "vue/no-async-in-computed-properties",
    "vue/no-child-content",
    "vue/no-dupe-keys",
    "vue/no-dupe-v-else-if",
    "vue/no-duplicate-attributes",
    "vue/no-mutating-props",
    "vue/no-parsing-error",
    "vue/no-ref-as-operand",
    "vue/no-reserved-component-names",
    "vue/no-side-effects-in-computed-properties",
    "vue/no-template-key",
    "vue/no-textarea-mustache",
    "vue/no-unused-components",
    "vue/no-unused-vars",
    "vue/no-use-v-if-with-v-for",
    "vue/no-v-text-v-html-on-component",
    "vue/require-v-for-key",
    "vue/require-valid-default-prop",
    "vue/return-in-computed-property",
    "vue/use-v-on-exact",
    "vue/valid-template-root",
    "vue/valid-v-bind",
    "vue/valid-v-for",
    "vue/valid-v-if",
    "vue/valid-v-model",
];

const VUE_STRONGLY_RECOMMENDED_RULES: &[&str] = &[
    "vue/attribute-hyphenation",
    "vue/component-definition-name-casing",
    "vue/first-attribute-linebreak",
    "vue/html-closing-bracket-newline",
    "vue/html-closing-bracket-spacing",
    "vue/html-end-tags",
    "vue/html-indent",
    "vue/html-quotes",
    "vue/html-self-closing",
    "vue/max-attributes-per-line",
    "vue/multiline-html-element-content-newline",
    "vue/mustache-interpolation-spacing",
    "vue/no-multi-spaces",
    "vue/no-spaces-around-equal-signs-in-attribute",
    "vue/no-template-shadow",
    "vue/one-component-per-file",
    "vue/prop-name-casing",
    "vue/require-default-prop",
    "vue/require-prop-types",
    "vue/singleline-html-element-content-newline",
    "vue/v-bind-style",
    "vue/v-on-style",
    "vue/v-slot-style",
];

const VUE_RECOMMENDED_RULES: &[&str] = &[
    "vue/attributes-order",
    "vue/block-order",
    "vue/no-lone-template",
    "vue/no-multiple-slot-args",
    "vue/no-v-html",
    "vue/order-in-components",
    "vue/this-in-template",
];

const PRETTIER_RULES: &[&str] = &[
    "array-bracket-newline",
    "array-bracket-spacing",
    "array-element-newline",
    "arrow-parens",
    "arrow-spacing",
    "block-spacing",
    "brace-style",
    "comma-dangle",
    "comma-spacing",
    "comma-style",
    "computed-property-spacing",
    "dot-location",
    "eol-last",
    "func-call-spacing",
    "function-call-argument-newline",
    "function-paren-newline",
    "generator-star-spacing",
    "implicit-arrow-linebreak",
    "indent",
    "jsx-quotes",
    "key-spacing",
    "keyword-spacing",
    "linebreak-style",
    "max-len",
    "multiline-ternary",
    "new-parens",
    "newline-per-chained-call",
    "no-extra-parens",
    "no-extra-semi",
    "no-floating-decimal",
    "no-mixed-operators",
    "no-mixed-spaces-and-tabs",
    "no-multi-spaces",
    "no-multiple-empty-lines",
    "no-tabs",
    "no-trailing-spaces",
    "no-whitespace-before-property",
    "nonblock-statement-body-position",
    "object-curly-newline",
    "object-curly-spacing",
    "object-property-newline",
    "one-var-declaration-per-line",
    "operator-linebreak",
    "padded-blocks",
    "quote-props",
    "quotes",
    "rest-spread-spacing",
    "semi",
    "semi-spacing",
    "semi-style",
    "space-before-blocks",
    "space-before-function-paren",
    "space-in-parens",
    "space-infix-ops",
    "space-unary-ops",
    "switch-colon-spacing",
    "template-curly-spacing",
    "template-tag-spacing",
    "unicode-bom",
    "wrap-iife",
    "wrap-regex",
    "yield-star-spacing",
    "vue/array-bracket-newline",
    "vue/array-bracket-spacing",
    "vue/arrow-spacing",
    "vue/block-spacing",
    "vue/brace-style",
    "vue/comma-dangle",
    "vue/comma-spacing",
    "vue/comma-style",
    "vue/dot-location",
    "vue/func-call-spacing",
    "vue/html-closing-bracket-newline",
    "vue/html-closing-bracket-spacing",
    "vue/html-end-tags",
    "vue/html-indent",
    "vue/html-quotes",
    "vue/html-self-closing",
    "vue/key-spacing",
    "vue/keyword-spacing",
    "vue/max-attributes-per-line",
    "vue/max-len",
    "vue/multiline-html-element-content-newline",
    "vue/multiline-ternary",
    "vue/mustache-interpolation-spacing",
    "vue/no-extra-parens",
    "vue/no-multi-spaces",
    "vue/no-spaces-around-equal-signs-in-attribute",
    "vue/object-curly-newline",
    "vue/object-curly-spacing",
    "vue/object-property-newline",
    "vue/operator-linebreak",
    "vue/quote-props",
    "vue/singleline-html-element-content-newline",
    "vue/space-in-parens",
    "vue/space-infix-ops",
    "vue/space-unary-ops",
    "vue/template-curly-spacing",
];
