//!
//! flatcfg models flat lint configuration: an ordered sequence of
//! configuration fragments (ignore lists, rule-set mappings, scoped
//! overrides) of the kind a flat-config lint engine consumes. The crate
//! composes the project's fragment sequence from named presets, serializes
//! it to the engine's schema, and resolves the effective configuration for
//! a concrete file path.

pub mod config;

pub use config::compose::{FragmentSpec, compose, compose_from, project_config, project_plan};
pub use config::presets;
pub use config::registry;
pub use config::resolve::{EffectiveConfig, FileMatcher, ResolvedRule, RuleOverride};
pub use config::types::{ConfigError, ConfigFragment, FlatConfig, LanguageOptions, RuleEntry, Severity};
pub use config::validation::{ConfigValidationWarning, validate};
