/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Formatted output as a markup tree, and the formats it renders to.

pub mod format;
pub mod html;
pub mod plain;

pub use format::OutputFormat;
pub use html::Html;
pub use plain::PlainText;

use std::fmt;

/// The result of formatting a name or a list of names.
///
/// Output is composed from parts rather than concatenated, so a caller
/// chooses the final rendering and untrusted text is escaped exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// Text that still needs escaping for markup targets.
    Plain(String),
    /// Text already valid as HTML.
    Escaped(String),
    Hyperlink {
        url: String,
        content: Box<Markup>,
    },
    Emphasis(Box<Markup>),
    Concat(Vec<Markup>),
}

impl Default for Markup {
    fn default() -> Self {
        Markup::Plain(String::new())
    }
}

impl Markup {
    /// Concatenate parts, merging adjacent plain text and dropping empty
    /// plain parts. A single remaining part is returned as is.
    pub fn concat(parts: Vec<Markup>) -> Markup {
        let mut merged: Vec<Markup> = Vec::with_capacity(parts.len());
        for part in parts {
            match (merged.last_mut(), part) {
                (_, Markup::Plain(text)) if text.is_empty() => {}
                (Some(Markup::Plain(prev)), Markup::Plain(text)) => prev.push_str(&text),
                (_, Markup::Concat(inner)) => merged.extend(inner),
                (_, part) => merged.push(part),
            }
        }
        match merged.len() {
            0 => Markup::default(),
            1 => merged.pop().unwrap_or_default(),
            _ => Markup::Concat(merged),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Markup::Plain(s) | Markup::Escaped(s) => s.is_empty(),
            Markup::Hyperlink { content, .. } => content.is_empty(),
            Markup::Emphasis(content) => content.is_empty(),
            Markup::Concat(parts) => parts.iter().all(Markup::is_empty),
        }
    }

    /// Render through an output format.
    pub fn render<F: OutputFormat>(&self, format: &F) -> String {
        format.finish(self.build(format))
    }

    fn build<F: OutputFormat>(&self, format: &F) -> F::Output {
        match self {
            Markup::Plain(s) => format.text(s),
            Markup::Escaped(s) => format.raw(s),
            Markup::Hyperlink { url, content } => format.link(url, content.build(format)),
            Markup::Emphasis(content) => format.emph(content.build(format)),
            Markup::Concat(parts) => {
                format.join(parts.iter().map(|p| p.build(format)).collect(), "")
            }
        }
    }

    /// Text rendering; links are reduced to their content.
    pub fn to_text(&self) -> String {
        self.render(&PlainText)
    }

    /// HTML rendering; plain parts are escaped, escaped parts are kept.
    pub fn to_html(&self) -> String {
        self.render(&Html::default())
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for Markup {
    fn from(s: &str) -> Self {
        Markup::Plain(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_merges_plain() {
        let markup = Markup::concat(vec![
            Markup::from("John"),
            Markup::from(""),
            Markup::from(" and "),
            Markup::from("Jane"),
        ]);
        assert_eq!(markup, Markup::Plain("John and Jane".to_string()));
        assert_eq!(Markup::concat(vec![]), Markup::default());
    }

    #[test]
    fn test_concat_keeps_structure() {
        let markup = Markup::concat(vec![
            Markup::Escaped("A &amp; B".to_string()),
            Markup::from(", "),
            Markup::Emphasis(Box::new(Markup::from("et al"))),
        ]);
        assert_eq!(markup.to_html(), "A &amp; B, <em>et al</em>");
        assert_eq!(markup.to_text(), "A &amp; B, et al");
    }

    #[test]
    fn test_hyperlink() {
        let markup = Markup::Hyperlink {
            url: "https://example.org".to_string(),
            content: Box::new(Markup::from("Smith & Co")),
        };
        assert_eq!(
            markup.to_html(),
            r#"<a href="https://example.org">Smith &amp; Co</a>"#
        );
        assert_eq!(markup.to_string(), "Smith & Co");
    }

    #[test]
    fn test_is_empty() {
        assert!(Markup::default().is_empty());
        assert!(Markup::Concat(vec![Markup::from(""), Markup::Escaped(String::new())]).is_empty());
        assert!(!Markup::Emphasis(Box::new(Markup::from("et al"))).is_empty());
    }
}
