/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Name Format Processor
//!
//! This crate turns structured personal names into display strings. A
//! compact pattern such as `t+if` is compiled once into a
//! [`FormatPattern`] and applied to any number of [`NameComponents`];
//! several formatted names are joined by a [`ListFormatSpec`] with
//! conjunctions and et al truncation.
//!
//! Output is a [`Markup`] tree that renders as plain text or as HTML, so
//! user-supplied text is escaped exactly once.
//!
//! # Example
//!
//! ```rust
//! use namefmt_processor::{NameFormatter, NameComponents, ComponentKind};
//!
//! let formatter = NameFormatter::builtin().unwrap();
//!
//! let name = NameComponents::new("John", "Smith")
//!     .with(ComponentKind::Title, "Dr.")
//!     .with(ComponentKind::Middle, "Michael")
//!     .with(ComponentKind::Generational, "Jr.")
//!     .with(ComponentKind::Credentials, "PhD");
//!
//! let formatted = formatter.format(&name, None).unwrap();
//! assert_eq!(formatted.to_string(), "Dr. John Michael Smith Jr., PhD");
//!
//! let names = vec![
//!     NameComponents::new("John", "Smith"),
//!     NameComponents::new("Jane", "Doe"),
//!     NameComponents::new("Ann", "Lee"),
//! ];
//! let list = formatter
//!     .format_list(&names, Some("given-family"), Some("oxford"))
//!     .unwrap();
//! assert_eq!(list.to_string(), "John Smith, Jane Doe, and Ann Lee");
//! ```

pub mod engine;
pub mod error;
pub mod formatter;
pub mod io;
pub mod list;
pub mod pattern;
pub mod render;

pub use engine::NameFormatter;
pub use error::ProcessorError;
pub use formatter::format;
pub use list::format_list;
pub use pattern::{compile, FormatPattern, PatternError, PatternErrorKind, Token};
pub use render::Markup;

pub use namefmt_core::{
    ComponentKind, Conjunction, DelimiterPrecedesLast, EtAlOptions, FormatConfig,
    FormatterSettings, ListFormatSpec, MarkupMode, NameComponents, Terms,
};
