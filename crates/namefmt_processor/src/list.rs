/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Joining several formatted names into one list.

use crate::formatter::format;
use crate::pattern::FormatPattern;
use crate::render::Markup;
use namefmt_core::{
    Conjunction, DelimiterPrecedesLast, FormatterSettings, ListFormatSpec, MarkupMode,
    NameComponents, Terms,
};

/// Format a list of names with one pattern.
///
/// When et al truncation applies, names past `use-first` are never
/// formatted. Entries that format to nothing keep their position.
pub fn format_list(
    items: &[NameComponents],
    pattern: &FormatPattern,
    spec: &ListFormatSpec,
    settings: &FormatterSettings,
    terms: &Terms,
) -> Markup {
    let count = items.len();
    if count == 0 {
        return Markup::default();
    }

    let kept = match spec.et_al {
        Some(et_al) if count >= et_al.min && et_al.use_first.max(1) < count => {
            et_al.use_first.max(1)
        }
        _ => count,
    };
    let truncated = kept < count;

    let mut entries: Vec<Markup> = items[..kept]
        .iter()
        .map(|item| format(item, pattern, settings))
        .collect();

    if !truncated && entries.len() == 1 {
        return entries.remove(0);
    }

    let mut parts = Vec::with_capacity(entries.len() * 2 + 2);
    if truncated {
        for (index, entry) in entries.into_iter().enumerate() {
            if index > 0 {
                parts.push(Markup::from(spec.delimiter.as_str()));
            }
            parts.push(entry);
        }
        let boundary = if delimiter_precedes(spec.delimiter_precedes_et_al, kept, 2) {
            spec.delimiter.as_str()
        } else {
            " "
        };
        parts.push(Markup::from(boundary));
        parts.push(et_al_marker(terms, settings.markup));
    } else {
        let last = last_boundary(spec, terms, count);
        for (index, entry) in entries.into_iter().enumerate() {
            if index + 1 == count {
                parts.push(Markup::Plain(last.clone()));
            } else if index > 0 {
                parts.push(Markup::from(spec.delimiter.as_str()));
            }
            parts.push(entry);
        }
    }
    Markup::concat(parts)
}

/// Whether the delimiter is used at a boundary; `contextual` uses it only
/// when there are at least `threshold` entries.
fn delimiter_precedes(policy: DelimiterPrecedesLast, entries: usize, threshold: usize) -> bool {
    match policy {
        DelimiterPrecedesLast::Never => false,
        DelimiterPrecedesLast::Always => true,
        DelimiterPrecedesLast::Contextual => entries >= threshold,
    }
}

/// The text between the second-to-last and last entry.
fn last_boundary(spec: &ListFormatSpec, terms: &Terms, count: usize) -> String {
    let and = match spec.and {
        Conjunction::Inherit => return spec.delimiter.clone(),
        Conjunction::Text => terms.and_term(false),
        Conjunction::Symbol => terms.and_term(true),
    };
    if delimiter_precedes(spec.delimiter_precedes_last, count, 3) {
        format!("{}{} ", spec.delimiter, and)
    } else {
        format!(" {} ", and)
    }
}

fn et_al_marker(terms: &Terms, markup: MarkupMode) -> Markup {
    let marker = Markup::from(terms.et_al());
    match markup {
        MarkupMode::None => marker,
        _ => Markup::Emphasis(Box::new(marker)),
    }
}
