/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Structured name components.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder value submitted by select lists when nothing was chosen.
const NONE_SENTINEL: &str = "_none";

/// One structured part of a personal name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Title,
    Given,
    Middle,
    Family,
    Generational,
    Credentials,
}

impl ComponentKind {
    /// All component kinds, in display order.
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::Title,
        ComponentKind::Given,
        ComponentKind::Middle,
        ComponentKind::Family,
        ComponentKind::Generational,
        ComponentKind::Credentials,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Title => "title",
            ComponentKind::Given => "given",
            ComponentKind::Middle => "middle",
            ComponentKind::Family => "family",
            ComponentKind::Generational => "generational",
            ComponentKind::Credentials => "credentials",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of a single personal name.
///
/// Every field is independently optional. An absent, empty, whitespace-only,
/// or `_none` value is omitted during formatting; it is never an error.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NameComponents {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generational: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
    /// Target URL; when present the formatted name is rendered as a link.
    #[serde(alias = "url", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl NameComponents {
    /// Create components with just a given and family name.
    pub fn new(given: &str, family: &str) -> Self {
        Self {
            given: Some(given.to_string()),
            family: Some(family.to_string()),
            ..Default::default()
        }
    }

    /// Builder-style setter for any component.
    pub fn with(mut self, kind: ComponentKind, value: &str) -> Self {
        *self.slot_mut(kind) = Some(value.to_string());
        self
    }

    /// Builder-style setter for the link target.
    pub fn with_link(mut self, url: &str) -> Self {
        self.link = Some(url.to_string());
        self
    }

    fn slot(&self, kind: ComponentKind) -> &Option<String> {
        match kind {
            ComponentKind::Title => &self.title,
            ComponentKind::Given => &self.given,
            ComponentKind::Middle => &self.middle,
            ComponentKind::Family => &self.family,
            ComponentKind::Generational => &self.generational,
            ComponentKind::Credentials => &self.credentials,
        }
    }

    fn slot_mut(&mut self, kind: ComponentKind) -> &mut Option<String> {
        match kind {
            ComponentKind::Title => &mut self.title,
            ComponentKind::Given => &mut self.given,
            ComponentKind::Middle => &mut self.middle,
            ComponentKind::Family => &mut self.family,
            ComponentKind::Generational => &mut self.generational,
            ComponentKind::Credentials => &mut self.credentials,
        }
    }

    /// The usable value of a component, or `None` when it should be omitted.
    pub fn get(&self, kind: ComponentKind) -> Option<&str> {
        self.slot(kind)
            .as_deref()
            .filter(|v| !v.trim().is_empty() && *v != NONE_SENTINEL)
    }

    /// The link target, if one is set and non-blank.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }

    /// True when no component has a usable value. The link is not a component.
    pub fn is_empty(&self) -> bool {
        ComponentKind::ALL.iter().all(|k| self.get(*k).is_none())
    }

    /// Extract components from loosely typed input (a JSON or YAML mapping).
    ///
    /// Unknown keys are ignored. Scalars are coerced to strings (`true`
    /// becomes `"1"`, `false` and `null` are absent); nested arrays and
    /// objects under a component key are treated as absent.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        let mut components = Self::default();
        for kind in ComponentKind::ALL {
            *components.slot_mut(kind) = map.get(kind.as_str()).and_then(scalar_to_string);
        }
        components.link = map
            .get("link")
            .or_else(|| map.get("url"))
            .and_then(scalar_to_string);
        components
    }

    /// The six components as a map with empty strings for absent values.
    pub fn to_map(&self) -> IndexMap<&'static str, String> {
        ComponentKind::ALL
            .iter()
            .map(|k| (k.as_str(), self.get(*k).unwrap_or_default().to_string()))
            .collect()
    }
}

pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
