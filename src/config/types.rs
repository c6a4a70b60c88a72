//!
//! Core data model for flat lint configuration: severities, rule entries,
//! fragments, and the composed fragment sequence. Serialization matches the
//! engine's flat-config schema exactly (severities as strings, numeric
//! severities accepted on input, rule entries as a bare severity or a
//! `[severity, options...]` sequence).

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Severity assigned to a rule by a fragment.
///
/// The engine schema spells these `"off"`, `"warn"`, `"error"` and also
/// accepts the numeric forms `0`, `1`, `2`. We always emit the string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Off,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// Parse the string spelling used by the engine schema.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "off" => Some(Severity::Off),
            "warn" => Some(Severity::Warn),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }

    /// Parse the legacy numeric spelling (0/1/2).
    pub fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(Severity::Off),
            1 => Some(Severity::Warn),
            2 => Some(Severity::Error),
            _ => None,
        }
    }

    pub fn is_off(&self) -> bool {
        matches!(self, Severity::Off)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeverityVisitor;

        impl Visitor<'_> for SeverityVisitor {
            type Value = Severity;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("\"off\", \"warn\", \"error\", or 0/1/2")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Severity, E> {
                Severity::from_name(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Severity, E> {
                Severity::from_index(v).ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Severity, E> {
                u64::try_from(v)
                    .ok()
                    .and_then(Severity::from_index)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
            }
        }

        deserializer.deserialize_any(SeverityVisitor)
    }
}

/// A single rule setting inside a fragment: a severity plus any rule
/// options. Options are opaque to this crate and passed through verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEntry {
    pub severity: Severity,
    pub options: Vec<serde_json::Value>,
}

impl RuleEntry {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: Vec::new(),
        }
    }

    pub fn with_options(severity: Severity, options: Vec<serde_json::Value>) -> Self {
        Self { severity, options }
    }

    pub fn off() -> Self {
        Self::new(Severity::Off)
    }

    pub fn warn() -> Self {
        Self::new(Severity::Warn)
    }

    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    /// True if the entry carries a severity only (no options).
    pub fn is_severity_only(&self) -> bool {
        self.options.is_empty()
    }
}

impl From<Severity> for RuleEntry {
    fn from(severity: Severity) -> Self {
        RuleEntry::new(severity)
    }
}

impl Serialize for RuleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.options.is_empty() {
            self.severity.serialize(serializer)
        } else {
            let mut seq = serializer.serialize_seq(Some(1 + self.options.len()))?;
            seq.serialize_element(&self.severity)?;
            for option in &self.options {
                seq.serialize_element(option)?;
            }
            seq.end()
        }
    }
}

impl<'de> Deserialize<'de> for RuleEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = RuleEntry;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a severity or a [severity, options...] sequence")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RuleEntry, E> {
                Severity::from_name(v)
                    .map(RuleEntry::new)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<RuleEntry, E> {
                Severity::from_index(v)
                    .map(RuleEntry::new)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<RuleEntry, E> {
                u64::try_from(v)
                    .ok()
                    .and_then(Severity::from_index)
                    .map(RuleEntry::new)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RuleEntry, A::Error> {
                let severity: Severity = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let mut options = Vec::new();
                while let Some(option) = seq.next_element::<serde_json::Value>()? {
                    options.push(option);
                }
                Ok(RuleEntry { severity, options })
            }
        }

        deserializer.deserialize_any(EntryVisitor)
    }
}

/// Parser and parser-option settings carried by base fragments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parser_options: IndexMap<String, serde_json::Value>,
}

/// One discrete unit of lint configuration.
///
/// A fragment with only `ignores` set is a global ignore; a fragment
/// without `files` applies universally; `files` scopes the fragment to
/// matching paths. Rule order is preserved so the serialized form is
/// byte-stable across constructions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFragment {
    /// Debug label, surfaced in provenance and validation messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_options: Option<LanguageOptions>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub rules: IndexMap<String, RuleEntry>,
}

impl ConfigFragment {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A fragment consisting solely of ignore patterns. The engine treats
    /// such a fragment as a global ignore list.
    pub fn global_ignores<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignores: patterns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// True if this fragment only excludes paths and configures nothing.
    pub fn is_global_ignore(&self) -> bool {
        !self.ignores.is_empty()
            && self.files.is_empty()
            && self.rules.is_empty()
            && self.language_options.is_none()
    }

    /// True if this fragment applies only to paths matching `files`.
    pub fn is_scoped(&self) -> bool {
        !self.files.is_empty()
    }
}

/// The composed, ordered fragment sequence handed to the engine.
///
/// Constructed once, then read-only. Serializes transparently as the JSON
/// array the engine's configuration loader expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatConfig {
    pub fragments: Vec<ConfigFragment>,
}

impl FlatConfig {
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigFragment> {
        self.fragments.iter()
    }

    pub fn last(&self) -> Option<&ConfigFragment> {
        self.fragments.last()
    }

    /// Serialize to the engine's JSON schema.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a FlatConfig {
    type Item = &'a ConfigFragment;
    type IntoIter = std::slice::Iter<'a, ConfigFragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

/// Errors raised while composing a fragment sequence.
///
/// Both kinds are fatal for the construction: no partial sequence is ever
/// returned. `Clone` so the one-time-initialized construction result can be
/// shared across callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A referenced preset cannot be located or expanded.
    #[error("unknown preset: {name}")]
    UnknownPreset { name: String },

    /// An ignore pattern or file selector does not compile.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
