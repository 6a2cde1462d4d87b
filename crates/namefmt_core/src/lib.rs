/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Core data model for the namefmt engine.
//!
//! This crate holds the types that describe *what* gets formatted and *how*
//! it is configured, without any of the formatting logic itself:
//!
//! - [`NameComponents`]: the structured parts of a single personal name.
//! - [`FormatterSettings`]: separator strings and the markup mode.
//! - [`ListFormatSpec`]: delimiter, conjunction and et al rules for lists.
//! - [`Terms`]: localizable words such as "and" and "et al".
//! - [`FormatConfig`]: the store of named name formats and list formats,
//!   with fallback to the `default` identifier.
//!
//! The formatting engine lives in `namefmt_processor`.

pub mod components;
pub mod config;
pub mod embedded;
pub mod error;
pub mod locale;
pub mod options;

pub use components::{ComponentKind, NameComponents};
pub use config::{FormatConfig, ListFormat, NameFormat, DEFAULT_FORMAT_ID};
pub use error::ConfigError;
pub use locale::Terms;
pub use options::{
    Conjunction, DelimiterPrecedesLast, EtAlOptions, FormatterSettings, ListFormatSpec,
    MarkupMode,
};
