/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use namefmt_processor::{
    compile, ComponentKind, FormatPattern, FormatterSettings, NameComponents, NameFormatter,
};

// --- Helper Functions for Test Data Construction ---

/// A name with every component set.
pub fn full_name() -> NameComponents {
    NameComponents::new("John", "Smith")
        .with(ComponentKind::Title, "Dr.")
        .with(ComponentKind::Middle, "Michael")
        .with(ComponentKind::Generational, "Jr.")
        .with(ComponentKind::Credentials, "PhD")
}

/// Names built from `(given, family)` pairs.
pub fn make_names(pairs: &[(&str, &str)]) -> Vec<NameComponents> {
    pairs
        .iter()
        .map(|(given, family)| NameComponents::new(given, family))
        .collect()
}

pub fn pattern(source: &str) -> FormatPattern {
    compile(source).unwrap_or_else(|e| panic!("pattern should compile: {}", e))
}

/// Format a name as plain text with default settings.
pub fn render(components: &NameComponents, source: &str) -> String {
    namefmt_processor::format(components, &pattern(source), &FormatterSettings::default())
        .to_text()
}

pub fn builtin_formatter() -> NameFormatter {
    NameFormatter::builtin().expect("builtin formats should load")
}
