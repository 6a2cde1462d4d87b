/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Formatting options.
//!
//! [`FormatterSettings`] controls single-name output (separators and markup);
//! [`ListFormatSpec`] controls how several formatted names are joined.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use crate::components::scalar_to_string;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// How formatted output is escaped or annotated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum MarkupMode {
    /// Plain text.
    #[default]
    None,
    /// Text escaped once for safe embedding in HTML.
    Simple,
    /// Escaped, with each component wrapped in a classed `<span>`.
    Html,
    /// Component values are trusted markup and are emitted unescaped.
    Raw,
}

impl MarkupMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkupMode::None => "none",
            MarkupMode::Simple => "simple",
            MarkupMode::Html => "html",
            MarkupMode::Raw => "raw",
        }
    }
}

impl fmt::Display for MarkupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(MarkupMode::None),
            "simple" => Ok(MarkupMode::Simple),
            "html" => Ok(MarkupMode::Html),
            "raw" => Ok(MarkupMode::Raw),
            other => Err(format!(
                "unknown markup mode '{}' (expected none, simple, html or raw)",
                other
            )),
        }
    }
}

/// Separator strings and markup mode used while formatting a single name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct FormatterSettings {
    /// Separator inserted by the `i` pattern code.
    #[serde(default = "default_sep1")]
    pub sep1: String,
    /// Separator inserted by the `j` pattern code.
    #[serde(default = "default_sep2")]
    pub sep2: String,
    /// Separator inserted by the `k` pattern code.
    #[serde(default)]
    pub sep3: String,
    #[serde(default)]
    pub markup: MarkupMode,
    /// Settings the engine does not interpret, kept for callers.
    ///
    /// Numbers are stored as their decimal text and `true` as `"1"`;
    /// `false`, null and nested values are dropped.
    #[serde(flatten, deserialize_with = "deserialize_extra")]
    pub extra: IndexMap<String, String>,
}

fn deserialize_extra<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| scalar_to_string(&value).map(|value| (key, value)))
        .collect())
}

fn default_sep1() -> String {
    " ".to_string()
}

fn default_sep2() -> String {
    ", ".to_string()
}

impl Default for FormatterSettings {
    fn default() -> Self {
        Self {
            sep1: default_sep1(),
            sep2: default_sep2(),
            sep3: String::new(),
            markup: MarkupMode::None,
            extra: IndexMap::new(),
        }
    }
}

impl FormatterSettings {
    /// Read a setting by key. Unknown keys come from the extension map.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "sep1" => Some(self.sep1.clone()),
            "sep2" => Some(self.sep2.clone()),
            "sep3" => Some(self.sep3.clone()),
            "markup" => Some(self.markup.as_str().to_string()),
            other => self.extra.get(other).cloned(),
        }
    }

    /// Write a setting by key. Fails only for an unrecognised markup mode.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "sep1" => self.sep1 = value.to_string(),
            "sep2" => self.sep2 = value.to_string(),
            "sep3" => self.sep3 = value.to_string(),
            "markup" => self.markup = value.parse()?,
            other => {
                self.extra.insert(other.to_string(), value.to_string());
            }
        }
        Ok(())
    }

    /// The separator for `i` (1), `j` (2) or `k` (3).
    pub fn separator(&self, index: u8) -> &str {
        match index {
            1 => &self.sep1,
            2 => &self.sep2,
            _ => &self.sep3,
        }
    }
}

/// Conjunction placed before the last item of a list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Conjunction {
    /// The localized word, e.g. "and".
    #[default]
    Text,
    /// The localized symbol, e.g. "&".
    Symbol,
    /// No conjunction; the plain delimiter is used.
    Inherit,
}

impl Conjunction {
    pub const ALL: [Conjunction; 3] = [
        Conjunction::Text,
        Conjunction::Symbol,
        Conjunction::Inherit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Conjunction::Text => "text",
            Conjunction::Symbol => "symbol",
            Conjunction::Inherit => "inherit",
        }
    }

    /// Human-readable option label.
    pub fn label(&self, include_examples: bool) -> &'static str {
        match (self, include_examples) {
            (Conjunction::Text, true) => "Textual (i.e. and)",
            (Conjunction::Text, false) => "Textual",
            (Conjunction::Symbol, true) => "Ampersand (i.e. &)",
            (Conjunction::Symbol, false) => "Ampersand",
            (Conjunction::Inherit, _) => "Inherit delimiter",
        }
    }
}

/// When the list delimiter also precedes the last item (or the et al marker).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum DelimiterPrecedesLast {
    #[default]
    Never,
    Always,
    /// Only when three or more items are shown.
    Contextual,
}

impl DelimiterPrecedesLast {
    pub const ALL: [DelimiterPrecedesLast; 3] = [
        DelimiterPrecedesLast::Never,
        DelimiterPrecedesLast::Always,
        DelimiterPrecedesLast::Contextual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DelimiterPrecedesLast::Never => "never",
            DelimiterPrecedesLast::Always => "always",
            DelimiterPrecedesLast::Contextual => "contextual",
        }
    }

    /// Human-readable option label.
    pub fn label(&self, include_examples: bool) -> &'static str {
        match (self, include_examples) {
            (DelimiterPrecedesLast::Never, true) => r#"Never (i.e. "J. Doe and T. Williams")"#,
            (DelimiterPrecedesLast::Never, false) => "Never",
            (DelimiterPrecedesLast::Always, true) => r#"Always (i.e. "J. Doe, and T. Williams")"#,
            (DelimiterPrecedesLast::Always, false) => "Always",
            (DelimiterPrecedesLast::Contextual, true) => {
                r#"Contextual (i.e. "J. Doe and T. Williams" or "J. Doe, S. Smith, and T. Williams")"#
            }
            (DelimiterPrecedesLast::Contextual, false) => "Contextual",
        }
    }
}

/// Et al truncation for long lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct EtAlOptions {
    /// Minimum number of items to trigger truncation.
    pub min: usize,
    /// Number of leading items kept before the et al marker.
    pub use_first: usize,
}

/// How a list of formatted names is joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct ListFormatSpec {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub and: Conjunction,
    #[serde(default)]
    pub delimiter_precedes_last: DelimiterPrecedesLast,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub et_al: Option<EtAlOptions>,
    #[serde(default = "default_precedes_et_al")]
    pub delimiter_precedes_et_al: DelimiterPrecedesLast,
}

fn default_delimiter() -> String {
    ", ".to_string()
}

fn default_precedes_et_al() -> DelimiterPrecedesLast {
    DelimiterPrecedesLast::Always
}

impl Default for ListFormatSpec {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            and: Conjunction::Text,
            delimiter_precedes_last: DelimiterPrecedesLast::Never,
            et_al: None,
            delimiter_precedes_et_al: default_precedes_et_al(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = FormatterSettings::default();
        assert_eq!(settings.get("sep1").as_deref(), Some(" "));
        assert_eq!(settings.get("sep2").as_deref(), Some(", "));
        assert_eq!(settings.get("sep3").as_deref(), Some(""));
        assert_eq!(settings.get("markup").as_deref(), Some("none"));
        assert_eq!(settings.get("nonexistent_setting"), None);
    }

    #[test]
    fn test_settings_round_trip_through_set() {
        let mut settings = FormatterSettings::default();
        settings.set("sep1", " - ").unwrap();
        settings.set("markup", "simple").unwrap();
        settings.set("custom_setting", "custom_value").unwrap();
        assert_eq!(settings.separator(1), " - ");
        assert_eq!(settings.markup, MarkupMode::Simple);
        assert_eq!(settings.get("custom_setting").as_deref(), Some("custom_value"));
        assert!(settings.set("markup", "fancy").is_err());
        assert_eq!(settings.markup, MarkupMode::Simple);
    }

    #[test]
    fn test_extra_settings_accept_scalars() {
        let yaml = "sep1: ' '\nmarkup: html\nweight: 3\nenabled: true\nlabel: short\n";
        let settings: FormatterSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.markup, MarkupMode::Html);
        assert_eq!(settings.get("weight").as_deref(), Some("3"));
        assert_eq!(settings.get("enabled").as_deref(), Some("1"));
        assert_eq!(settings.get("label").as_deref(), Some("short"));
        assert!(!settings.extra.contains_key("sep1"));
    }

    #[test]
    fn test_list_spec_yaml_defaults() {
        let spec: ListFormatSpec = serde_yaml::from_str("and: symbol").unwrap();
        assert_eq!(spec.delimiter, ", ");
        assert_eq!(spec.and, Conjunction::Symbol);
        assert_eq!(spec.delimiter_precedes_last, DelimiterPrecedesLast::Never);
        assert_eq!(spec.delimiter_precedes_et_al, DelimiterPrecedesLast::Always);
        assert!(spec.et_al.is_none());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Conjunction::Symbol.label(true), "Ampersand (i.e. &)");
        assert_eq!(Conjunction::Inherit.label(false), "Inherit delimiter");
        assert!(DelimiterPrecedesLast::Contextual.label(true).contains("S. Smith, and"));
        assert_eq!(DelimiterPrecedesLast::Always.label(false), "Always");
    }
}
