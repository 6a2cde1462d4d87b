/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Applying a compiled pattern to one name.

use crate::pattern::{initialize, ComponentSource, ComponentToken, FormatPattern, Modifier, Token};
use crate::render::{Html, Markup, OutputFormat, PlainText};
use namefmt_core::{FormatterSettings, MarkupMode, NameComponents};

/// Format one name.
///
/// Never fails: absent components are omitted and conditions decide which
/// joiners survive. Empty components produce empty output whatever the
/// pattern, and a link is only applied to non-empty output.
pub fn format(
    components: &NameComponents,
    pattern: &FormatPattern,
    settings: &FormatterSettings,
) -> Markup {
    if components.is_empty() {
        return Markup::default();
    }

    let content = match settings.markup {
        MarkupMode::None => Markup::Plain(format_with(&PlainText, components, pattern, settings)),
        MarkupMode::Simple => {
            Markup::Escaped(format_with(&Html::default(), components, pattern, settings))
        }
        MarkupMode::Html => {
            Markup::Escaped(format_with(&Html::with_semantics(), components, pattern, settings))
        }
        // Values are trusted, so they pass through unescaped.
        MarkupMode::Raw => Markup::Escaped(format_with(&PlainText, components, pattern, settings)),
    };

    match components.link() {
        Some(url) if !content.is_empty() => Markup::Hyperlink {
            url: url.to_string(),
            content: Box::new(content),
        },
        _ => content,
    }
}

/// Evaluate a pattern directly into an output format.
pub fn format_with<F>(
    format: &F,
    components: &NameComponents,
    pattern: &FormatPattern,
    settings: &FormatterSettings,
) -> String
where
    F: OutputFormat<Output = String>,
{
    let evaluator = Evaluator {
        format,
        components,
        settings,
    };
    format.finish(evaluator.sequence(pattern.tokens()).output)
}

/// A token's value: the plain text that modifiers work on, and its
/// rendering in the output format.
#[derive(Debug, Default)]
struct Piece {
    text: String,
    output: String,
}

impl Piece {
    fn is_empty(&self) -> bool {
        self.output.is_empty()
    }
}

struct Evaluator<'a, F> {
    format: &'a F,
    components: &'a NameComponents,
    settings: &'a FormatterSettings,
}

impl<F> Evaluator<'_, F>
where
    F: OutputFormat<Output = String>,
{
    fn sequence(&self, tokens: &[Token]) -> Piece {
        // Conditions look ahead at the unconditioned value of the next token.
        let pieces: Vec<Piece> = tokens.iter().map(|token| self.token(token)).collect();

        let mut result = Piece::default();
        let mut previous_empty = true;
        for (index, (token, piece)) in tokens.iter().zip(&pieces).enumerate() {
            let emit = match token.condition() {
                Some(condition) => {
                    let after = pieces.get(index + 1).is_some_and(|next| !next.is_empty());
                    condition.holds(!result.is_empty(), previous_empty, after)
                }
                None => true,
            };
            if emit {
                result.text.push_str(&piece.text);
                result.output.push_str(&piece.output);
            }
            previous_empty = !emit || piece.is_empty();
        }
        result
    }

    fn token(&self, token: &Token) -> Piece {
        match token {
            Token::Component(component) => self.component(component, &[]),
            Token::Literal(text) => self.text(text.clone()),
            Token::Separator(index) => self.text(self.settings.separator(*index).to_string()),
            Token::Group(tokens) => self.sequence(tokens),
            Token::Modified { modifiers, token } => match token.as_ref() {
                Token::Component(component) => self.component(component, modifiers),
                other => {
                    let piece = self.token(other);
                    self.text(apply_modifiers(modifiers, piece.text))
                }
            },
            Token::Conditional { token, .. } => self.token(token),
        }
    }

    fn text(&self, text: String) -> Piece {
        Piece {
            output: self.format.text(&text),
            text,
        }
    }

    fn component(&self, component: &ComponentToken, modifiers: &[Modifier]) -> Piece {
        let resolved = match component.source {
            ComponentSource::Single(kind) => self.components.get(kind).map(|v| (kind, v)),
            ComponentSource::Either(first, second) => self
                .components
                .get(first)
                .map(|v| (first, v))
                .or_else(|| self.components.get(second).map(|v| (second, v))),
        };
        let Some((kind, value)) = resolved else {
            return Piece::default();
        };

        let mut text = apply_modifiers(modifiers, value.to_string());
        if component.initial {
            text = initialize(&text);
        }
        let output = self
            .format
            .semantic(&format!("name-{}", kind), self.format.text(&text));
        Piece { text, output }
    }
}

fn apply_modifiers(modifiers: &[Modifier], value: String) -> String {
    modifiers
        .iter()
        .fold(value, |value, modifier| modifier.apply(&value))
}
