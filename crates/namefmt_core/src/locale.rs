/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Localizable words used when joining name lists.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct Terms {
    /// The word "and" (e.g., "Smith and Jones").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub and: Option<String>,
    /// Symbol form of "and" (e.g., "&").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub and_symbol: Option<String>,
    /// Marker appended to truncated lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et_al: Option<String>,
}

impl Terms {
    /// Get the "and" term.
    pub fn and_term(&self, use_symbol: bool) -> &str {
        if use_symbol {
            self.and_symbol.as_deref().unwrap_or("&")
        } else {
            self.and.as_deref().unwrap_or("and")
        }
    }

    /// Get the "et al" term.
    pub fn et_al(&self) -> &str {
        self.et_al.as_deref().unwrap_or("et al")
    }

    /// Overlay the terms set in `other` on top of these.
    pub fn merge(&mut self, other: &Terms) {
        if other.and.is_some() {
            self.and.clone_from(&other.and);
        }
        if other.and_symbol.is_some() {
            self.and_symbol.clone_from(&other.and_symbol);
        }
        if other.et_al.is_some() {
            self.et_al.clone_from(&other.et_al);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_terms() {
        let terms = Terms::default();
        assert_eq!(terms.and_term(false), "and");
        assert_eq!(terms.and_term(true), "&");
        assert_eq!(terms.et_al(), "et al");
    }

    #[test]
    fn test_merge_only_overrides_set_terms() {
        let mut terms = Terms {
            and: Some("und".to_string()),
            ..Default::default()
        };
        terms.merge(&Terms {
            et_al: Some("u. a.".to_string()),
            ..Default::default()
        });
        assert_eq!(terms.and_term(false), "und");
        assert_eq!(terms.et_al(), "u. a.");
    }
}
