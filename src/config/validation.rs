//!
//! Validation of a composed fragment sequence against the rule-id
//! registry. Warnings never fail composition; they exist so a bad override
//! is caught before the engine silently ignores it.

use super::registry;
use super::types::FlatConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationWarning {
    pub message: String,
    pub fragment: Option<String>,
    pub rule: Option<String>,
}

/// Check every fragment for unknown rules, unknown namespaces, and
/// fragments with no effect.
pub fn validate(config: &FlatConfig) -> Vec<ConfigValidationWarning> {
    let mut warnings = Vec::new();

    for (index, fragment) in config.iter().enumerate() {
        let label = fragment
            .name
            .clone()
            .unwrap_or_else(|| format!("fragment #{index}"));

        if fragment.ignores.is_empty() && fragment.rules.is_empty() && fragment.language_options.is_none() {
            warnings.push(ConfigValidationWarning {
                message: format!("{label} configures nothing"),
                fragment: Some(label.clone()),
                rule: None,
            });
        }

        for rule_id in fragment.rules.keys() {
            match registry::split_rule_id(rule_id) {
                (Some(namespace), _) if !registry::is_known_namespace(namespace) => {
                    warnings.push(ConfigValidationWarning {
                        message: format!("{label}: unknown plugin namespace in rule {rule_id}"),
                        fragment: Some(label.clone()),
                        rule: Some(rule_id.clone()),
                    });
                }
                _ if !registry::is_known_rule(rule_id) => {
                    warnings.push(ConfigValidationWarning {
                        message: format!("{label}: unknown rule {rule_id}"),
                        fragment: Some(label.clone()),
                        rule: Some(rule_id.clone()),
                    });
                }
                _ => {}
            }
        }
    }

    warnings
}
