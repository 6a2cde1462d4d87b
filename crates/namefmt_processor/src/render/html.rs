/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML output format.

use super::format::OutputFormat;

/// HTML output. With `semantics` set, each component is wrapped in a
/// `<span class="name-…">`.
#[derive(Debug, Default, Clone)]
pub struct Html {
    pub semantics: bool,
}

impl Html {
    pub fn with_semantics() -> Self {
        Self { semantics: true }
    }
}

/// Escape text for use in HTML content and attribute values.
pub fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

impl OutputFormat for Html {
    type Output = String;

    fn text(&self, s: &str) -> Self::Output {
        escape(s)
    }

    fn raw(&self, s: &str) -> Self::Output {
        s.to_string()
    }

    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output {
        items.join(&escape(delimiter))
    }

    fn finish(&self, output: Self::Output) -> String {
        output
    }

    fn emph(&self, content: Self::Output) -> Self::Output {
        if content.is_empty() {
            return content;
        }
        format!("<em>{}</em>", content)
    }

    fn semantic(&self, class: &str, content: Self::Output) -> Self::Output {
        if !self.semantics || content.is_empty() {
            return content;
        }
        format!(r#"<span class="{}">{}</span>"#, class, content)
    }

    fn link(&self, url: &str, content: Self::Output) -> Self::Output {
        if content.is_empty() {
            return content;
        }
        format!(r#"<a href="{}">{}</a>"#, escape(url), content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"O'Brien & <Sons> "Ltd""#),
            "O&#39;Brien &amp; &lt;Sons&gt; &quot;Ltd&quot;"
        );
    }

    #[test]
    fn test_semantic_only_when_enabled() {
        let content = "Smith".to_string();
        assert_eq!(Html::default().semantic("name-family", content.clone()), "Smith");
        assert_eq!(
            Html::with_semantics().semantic("name-family", content),
            r#"<span class="name-family">Smith</span>"#
        );
        assert_eq!(Html::with_semantics().semantic("name-family", String::new()), "");
    }

    #[test]
    fn test_link_escapes_url() {
        let html = Html::default().link("https://example.org/?a=1&b=2", "Smith".to_string());
        assert_eq!(html, r#"<a href="https://example.org/?a=1&amp;b=2">Smith</a>"#);
    }
}
