/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The configuration store of named formats.
//!
//! A [`FormatConfig`] maps format identifiers to name patterns and list
//! formats. Lookups for an unknown identifier fall back to
//! [`DEFAULT_FORMAT_ID`]; only a store without that default fails.

use crate::error::ConfigError;
use crate::locale::Terms;
use crate::options::{FormatterSettings, ListFormatSpec};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Identifier every lookup falls back to.
pub const DEFAULT_FORMAT_ID: &str = "default";

/// A named single-name format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NameFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Pattern string, compiled by the processor.
    pub pattern: String,
}

/// A named list format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub spec: ListFormatSpec,
}

/// Name formats, list formats, settings and terms.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct FormatConfig {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub name_formats: IndexMap<String, NameFormat>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub list_formats: IndexMap<String, ListFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<FormatterSettings>,
    #[serde(default)]
    pub terms: Terms,
}

impl FormatConfig {
    /// Parse a configuration from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a configuration file. `.json` files are read as JSON, anything
    /// else as YAML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Self::from_yaml_str(&content),
        }
    }

    /// The embedded builtin formats with `overlay` applied on top.
    pub fn with_builtins(overlay: &FormatConfig) -> Result<Self, ConfigError> {
        let mut config = Self::builtin()?;
        config.merge(overlay);
        Ok(config)
    }

    /// Overlay another configuration. Formats with the same identifier are
    /// replaced; settings are replaced wholesale when `other` sets them.
    pub fn merge(&mut self, other: &FormatConfig) {
        for (id, format) in &other.name_formats {
            self.name_formats.insert(id.clone(), format.clone());
        }
        for (id, format) in &other.list_formats {
            self.list_formats.insert(id.clone(), format.clone());
        }
        if other.settings.is_some() {
            self.settings.clone_from(&other.settings);
        }
        self.terms.merge(&other.terms);
    }

    /// Effective settings, defaulting when none are configured.
    pub fn settings(&self) -> FormatterSettings {
        self.settings.clone().unwrap_or_default()
    }

    /// Resolve a name format, falling back to the default identifier.
    ///
    /// Returns the identifier that was actually used alongside the format.
    pub fn resolve_name_format(&self, id: &str) -> Result<(&str, &NameFormat), ConfigError> {
        resolve(&self.name_formats, id, "name")
    }

    /// Resolve a list format, falling back to the default identifier.
    pub fn resolve_list_format(&self, id: &str) -> Result<(&str, &ListFormat), ConfigError> {
        resolve(&self.list_formats, id, "list")
    }

    /// Pattern string for a name format identifier.
    pub fn name_pattern(&self, id: &str) -> Result<&str, ConfigError> {
        self.resolve_name_format(id)
            .map(|(_, format)| format.pattern.as_str())
    }

    /// List format specification for a list format identifier.
    pub fn list_format(&self, id: &str) -> Result<&ListFormatSpec, ConfigError> {
        self.resolve_list_format(id).map(|(_, format)| &format.spec)
    }
}

fn resolve<'a, T>(
    formats: &'a IndexMap<String, T>,
    id: &str,
    kind: &'static str,
) -> Result<(&'a str, &'a T), ConfigError> {
    formats
        .get_key_value(id)
        .or_else(|| formats.get_key_value(DEFAULT_FORMAT_ID))
        .map(|(key, format)| (key.as_str(), format))
        .ok_or_else(|| ConfigError::ConfigurationMissing {
            kind,
            id: id.to_string(),
        })
}
