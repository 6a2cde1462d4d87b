/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::pattern::PatternError;
use namefmt_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid value {value:?} for setting {key}")]
    InvalidSetting { key: String, value: String },

    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
