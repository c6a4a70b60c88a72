//!
//! Deterministic construction of the project's fragment sequence. The plan
//! is declarative data; composing it expands preset references in place,
//! flattening each preset's fragments into the output in order. No I/O, no
//! environment inspection: two constructions in one process yield identical
//! sequences.

use std::sync::OnceLock;

use globset::Glob;

use super::presets;
use super::types::{ConfigError, ConfigFragment, FlatConfig, RuleEntry};

/// One step of a composition plan: an inline fragment included as-is, or a
/// preset reference expanded and flattened in place.
#[derive(Debug, Clone, PartialEq)]
pub enum FragmentSpec {
    Inline(ConfigFragment),
    Preset(String),
}

impl FragmentSpec {
    pub fn preset(name: impl Into<String>) -> Self {
        FragmentSpec::Preset(name.into())
    }
}

/// Directories excluded from all analysis: the dependency cache, the
/// framework build output, and the distributable output.
const IGNORED_DIRECTORIES: &[&str] = &["node_modules", ".nuxt", "dist"];

const COMPONENT_NAMES_RULE: &str = "vue/multi-word-component-names";
const COMPONENT_NAMES_FILES: &[&str] = &["**/*.{ts,tsx,js,vue}"];

/// Normalize a bare directory name into a recursive ignore pattern, so the
/// directory is excluded at any depth. Anything already containing glob
/// syntax or a path separator is kept verbatim.
fn normalize_ignore_pattern(pattern: &str) -> String {
    if pattern.contains(['*', '?', '[', '{', '/']) {
        pattern.to_string()
    } else {
        format!("**/{pattern}/**")
    }
}

/// The project's composition plan.
///
/// Order is load-bearing: the component-naming override must come after
/// every preset that configures the same rule, and the formatter
/// compatibility fragment is always last so no preset re-enables a
/// conflicting stylistic rule behind it.
pub fn project_plan() -> Vec<FragmentSpec> {
    let ignores =
        ConfigFragment::global_ignores(IGNORED_DIRECTORIES.iter().map(|d| normalize_ignore_pattern(d)));

    let mut component_names = ConfigFragment::named("project/component-names");
    component_names.files = COMPONENT_NAMES_FILES.iter().map(|f| f.to_string()).collect();
    component_names
        .rules
        .insert(COMPONENT_NAMES_RULE.to_string(), RuleEntry::off());

    vec![
        FragmentSpec::Inline(ignores),
        FragmentSpec::preset(presets::JS_RECOMMENDED),
        FragmentSpec::preset(presets::TYPESCRIPT_RECOMMENDED),
        FragmentSpec::preset(presets::VUE_FLAT_RECOMMENDED),
        FragmentSpec::Inline(component_names),
        FragmentSpec::preset(presets::PRETTIER),
    ]
}

/// Expand a composition plan into the ordered fragment sequence.
///
/// Fails fast on the first unresolvable preset or invalid pattern; a
/// partial sequence is never returned.
pub fn compose_from(plan: &[FragmentSpec]) -> Result<FlatConfig, ConfigError> {
    let mut fragments = Vec::new();
    for spec in plan {
        match spec {
            FragmentSpec::Inline(fragment) => {
                check_patterns(fragment)?;
                fragments.push(fragment.clone());
            }
            FragmentSpec::Preset(name) => {
                for fragment in presets::expand(name)? {
                    check_patterns(&fragment)?;
                    fragments.push(fragment);
                }
            }
        }
    }
    log::debug!(
        "composed {} fragment(s) from {} plan step(s)",
        fragments.len(),
        plan.len()
    );
    Ok(FlatConfig { fragments })
}

/// Compose the project configuration.
pub fn compose() -> Result<FlatConfig, ConfigError> {
    compose_from(&project_plan())
}

/// Process-wide accessor for the composed project configuration.
///
/// Construction runs at most once; every caller observes the same sequence
/// (or the same construction error).
pub fn project_config() -> Result<&'static FlatConfig, ConfigError> {
    static PROJECT_CONFIG: OnceLock<Result<FlatConfig, ConfigError>> = OnceLock::new();
    PROJECT_CONFIG.get_or_init(compose).as_ref().map_err(Clone::clone)
}

// Reject patterns the matcher would later refuse, so a bad plan fails at
// construction rather than at first resolution.
fn check_patterns(fragment: &ConfigFragment) -> Result<(), ConfigError> {
    for pattern in fragment.ignores.iter().chain(fragment.files.iter()) {
        Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}
