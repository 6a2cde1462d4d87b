/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Errors raised while loading or querying a [`crate::FormatConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{format} parse error: {message}")]
    Parse { format: String, message: String },

    /// Neither the requested identifier nor the default one is configured.
    #[error("no {kind} format configured for '{id}' and no default to fall back to")]
    ConfigurationMissing { kind: &'static str, id: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse {
            format: "JSON".to_string(),
            message: e.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            format: "YAML".to_string(),
            message: e.to_string(),
        }
    }
}
