//!
//! Per-file resolution of a composed fragment sequence, implementing the
//! engine's documented cascade: global ignores first, then every
//! applicable fragment in sequence order with last-write-wins per rule
//! key. A later severity-only entry updates the severity and keeps the
//! options already in effect; an entry carrying options replaces both.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use indexmap::IndexMap;

use super::types::{ConfigError, ConfigFragment, FlatConfig, LanguageOptions, RuleEntry, Severity};

/// One fragment's contribution to a resolved rule.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOverride {
    pub fragment_index: usize,
    pub fragment_name: Option<String>,
    pub entry: RuleEntry,
}

/// A rule's effective setting plus every fragment that touched it, in
/// application order. The last override is the one in effect.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRule {
    pub entry: RuleEntry,
    pub overrides: Vec<RuleOverride>,
}

/// Effective configuration for one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectiveConfig {
    pub language_options: Option<LanguageOptions>,
    pub rules: IndexMap<String, ResolvedRule>,
}

impl EffectiveConfig {
    pub fn severity_of(&self, rule_id: &str) -> Option<Severity> {
        self.rules.get(rule_id).map(|rule| rule.entry.severity)
    }

    /// True when the rule would produce diagnostics for this file.
    pub fn is_rule_active(&self, rule_id: &str) -> bool {
        self.severity_of(rule_id).is_some_and(|severity| !severity.is_off())
    }
}

struct FragmentScope {
    files: Option<GlobSet>,
    ignores: Option<GlobSet>,
    global_ignore: bool,
}

impl FragmentScope {
    fn applies_to(&self, path: &Path) -> bool {
        if let Some(ignores) = &self.ignores {
            if ignores.is_match(path) {
                return false;
            }
        }
        match &self.files {
            Some(files) => files.is_match(path),
            None => true,
        }
    }
}

/// Compiled matchers for one composed sequence. Compilation happens once;
/// resolution is pure lookup afterwards.
pub struct FileMatcher<'a> {
    config: &'a FlatConfig,
    global_ignores: GlobSet,
    scopes: Vec<FragmentScope>,
}

impl<'a> FileMatcher<'a> {
    pub fn new(config: &'a FlatConfig) -> Result<Self, ConfigError> {
        let mut global_builder = GlobSetBuilder::new();
        let mut scopes = Vec::with_capacity(config.len());

        for fragment in config {
            let global_ignore = fragment.is_global_ignore();
            if global_ignore {
                for pattern in &fragment.ignores {
                    global_builder.add(compile(pattern)?);
                }
            }
            let files = if fragment.files.is_empty() {
                None
            } else {
                Some(build_set(&fragment.files)?)
            };
            // Ignores next to other keys only exclude files from this
            // fragment, they are not global.
            let ignores = if global_ignore || fragment.ignores.is_empty() {
                None
            } else {
                Some(build_set(&fragment.ignores)?)
            };
            scopes.push(FragmentScope {
                files,
                ignores,
                global_ignore,
            });
        }

        let global_ignores = global_builder.build().map_err(set_error)?;
        log::debug!("compiled matchers for {} fragment(s)", config.len());

        Ok(Self {
            config,
            global_ignores,
            scopes,
        })
    }

    /// True if the path is excluded from all analysis.
    pub fn is_ignored(&self, path: impl AsRef<Path>) -> bool {
        self.global_ignores.is_match(path.as_ref())
    }

    /// Effective configuration for `path`, or `None` when the path is
    /// ignored and no rule would execute against it.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Option<EffectiveConfig> {
        let path = path.as_ref();
        if self.is_ignored(path) {
            return None;
        }

        let mut effective = EffectiveConfig::default();
        for (index, (fragment, scope)) in self.config.iter().zip(&self.scopes).enumerate() {
            if scope.global_ignore || !scope.applies_to(path) {
                continue;
            }
            if let Some(language) = &fragment.language_options {
                effective.language_options = Some(language.clone());
            }
            for (rule_id, entry) in &fragment.rules {
                apply_rule(&mut effective.rules, index, fragment, rule_id, entry);
            }
        }
        Some(effective)
    }
}

fn apply_rule(
    rules: &mut IndexMap<String, ResolvedRule>,
    fragment_index: usize,
    fragment: &ConfigFragment,
    rule_id: &str,
    entry: &RuleEntry,
) {
    let contribution = RuleOverride {
        fragment_index,
        fragment_name: fragment.name.clone(),
        entry: entry.clone(),
    };
    match rules.get_mut(rule_id) {
        Some(resolved) => {
            let options = if entry.is_severity_only() {
                resolved.entry.options.clone()
            } else {
                entry.options.clone()
            };
            resolved.entry = RuleEntry {
                severity: entry.severity,
                options,
            };
            resolved.overrides.push(contribution);
        }
        None => {
            rules.insert(
                rule_id.to_string(),
                ResolvedRule {
                    entry: entry.clone(),
                    overrides: vec![contribution],
                },
            );
        }
    }
}

fn compile(pattern: &str) -> Result<Glob, ConfigError> {
    Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

fn build_set(patterns: &[String]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile(pattern)?);
    }
    builder.build().map_err(set_error)
}

fn set_error(e: globset::Error) -> ConfigError {
    ConfigError::InvalidPattern {
        pattern: e.glob().unwrap_or_default().to_string(),
        reason: e.to_string(),
    }
}
