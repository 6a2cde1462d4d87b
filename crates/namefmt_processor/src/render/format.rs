/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable renderers.

/// Trait for defining how formatted names are written in a specific format.
///
/// Implementations decide how text is escaped and how emphasis, semantic
/// classes and links are expressed.
pub trait OutputFormat: Default + Clone {
    /// The type used for intermediate rendered content.
    type Output;

    /// Convert a raw string into the format's output type, escaping it as
    /// the target format requires.
    fn text(&self, s: &str) -> Self::Output;

    /// Content that is already valid in the target format.
    fn raw(&self, s: &str) -> Self::Output;

    /// Join multiple outputs into a single output using a delimiter.
    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output;

    /// Convert the intermediate output into the final result string.
    fn finish(&self, output: Self::Output) -> String;

    /// Render content with emphasis.
    fn emph(&self, content: Self::Output) -> Self::Output;

    /// Apply a semantic class to the content, e.g. `name-family`.
    fn semantic(&self, class: &str, content: Self::Output) -> Self::Output;

    /// Hyperlink the content to a URL.
    fn link(&self, url: &str, content: Self::Output) -> Self::Output;
}
