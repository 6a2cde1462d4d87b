/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Builtin formats baked into the binary at compile time.
//!
//! | id | pattern | example |
//! |----|---------|---------|
//! | `default`, `full` | `((((t+ig)+im)+if)+is)+jc` | Dr. John Michael Smith Jr., PhD |
//! | `family` | `f` | Smith |
//! | `given` | `g` | John |
//! | `given-family` | `(g+if)+is` | John Smith Jr. |
//! | `formal` | `t+if` | Dr. Smith |
//! | `short-full` | `((t+ig)+if)+is` | Dr. John Smith Jr. |
//! | `initials` | `(x+iy)+iz` | J. M. S. |

use crate::config::FormatConfig;
use crate::error::ConfigError;

const BUILTIN_YAML: &str = include_str!("../formats/builtin.yaml");

impl FormatConfig {
    /// The builtin formats.
    pub fn builtin() -> Result<Self, ConfigError> {
        FormatConfig::from_yaml_str(BUILTIN_YAML)
    }
}

/// Identifiers of the builtin name formats, in declaration order.
pub const BUILTIN_NAME_FORMATS: &[&str] = &[
    "default",
    "full",
    "family",
    "given",
    "given-family",
    "formal",
    "short-full",
    "initials",
];

/// Identifiers of the builtin list formats.
pub const BUILTIN_LIST_FORMATS: &[&str] = &["default", "oxford"];
