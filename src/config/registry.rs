//!
//! Registry of known rule identifiers and plugin namespaces, used by
//! validation. The known set is the union of every built-in preset's rule
//! keys plus a static table of core rules no preset configures.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use phf::phf_set;

use super::presets;

/// Plugin namespaces the registry knows about.
pub const KNOWN_NAMESPACES: &[&str] = &["@typescript-eslint", "vue"];

static EXTRA_CORE_RULES: phf::Set<&'static str> = phf_set! {
    "camelcase",
    "curly",
    "default-case",
    "dot-notation",
    "eqeqeq",
    "no-alert",
    "no-console",
    "no-else-return",
    "no-empty-function",
    "no-eval",
    "no-implicit-coercion",
    "no-lonely-if",
    "no-nested-ternary",
    "no-param-reassign",
    "no-shadow",
    "no-throw-literal",
    "no-use-before-define",
    "no-useless-return",
    "no-var",
    "object-shorthand",
    "prefer-arrow-callback",
    "prefer-const",
    "prefer-template",
    "radix",
    "yoda",
};

/// Split a rule identifier into plugin namespace and bare rule name.
///
/// Core rules have no namespace. Scoped plugins keep the scope:
/// `@typescript-eslint/no-unused-vars` splits into `@typescript-eslint`
/// and `no-unused-vars`; `@scope/plugin/rule` into `@scope/plugin` and
/// `rule`.
pub fn split_rule_id(id: &str) -> (Option<&str>, &str) {
    let Some(first) = id.find('/') else {
        return (None, id);
    };
    if id.starts_with('@') {
        if let Some(offset) = id[first + 1..].find('/') {
            let second = first + 1 + offset;
            return (Some(&id[..second]), &id[second + 1..]);
        }
    }
    (Some(&id[..first]), &id[first + 1..])
}

fn preset_rule_ids() -> &'static BTreeSet<String> {
    static IDS: OnceLock<BTreeSet<String>> = OnceLock::new();
    IDS.get_or_init(|| {
        let mut ids = BTreeSet::new();
        for name in presets::PRESET_NAMES {
            // Built-in names always expand; a failure here would be a bug
            // in the registry itself.
            if let Ok(fragments) = presets::expand(name) {
                for fragment in fragments {
                    ids.extend(fragment.rules.keys().cloned());
                }
            }
        }
        ids
    })
}

pub fn is_known_rule(id: &str) -> bool {
    EXTRA_CORE_RULES.contains(id) || preset_rule_ids().contains(id)
}

pub fn is_known_namespace(namespace: &str) -> bool {
    KNOWN_NAMESPACES.contains(&namespace)
}
