/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use namefmt_processor::{
    format, format_list, Conjunction, DelimiterPrecedesLast, EtAlOptions, FormatterSettings,
    ListFormatSpec, Markup, MarkupMode, NameComponents, Terms,
};

fn list_spec(and: Conjunction, precedes: DelimiterPrecedesLast) -> ListFormatSpec {
    ListFormatSpec {
        delimiter: ", ".to_string(),
        and,
        delimiter_precedes_last: precedes,
        ..Default::default()
    }
}

fn render_list(items: &[NameComponents], spec: &ListFormatSpec) -> String {
    format_list(
        items,
        &pattern("(g+if)+is"),
        spec,
        &FormatterSettings::default(),
        &Terms::default(),
    )
    .to_text()
}

#[test]
fn test_empty_list_is_empty() {
    let spec = list_spec(Conjunction::Text, DelimiterPrecedesLast::Contextual);
    assert_eq!(
        format_list(
            &[],
            &pattern("f"),
            &spec,
            &FormatterSettings::default(),
            &Terms::default()
        ),
        Markup::default()
    );
}

#[test]
fn test_single_item_matches_single_format() {
    let items = vec![full_name()];
    let settings = FormatterSettings {
        markup: MarkupMode::Html,
        ..Default::default()
    };
    let spec = list_spec(Conjunction::Symbol, DelimiterPrecedesLast::Always);
    let compiled = pattern("((((t+ig)+im)+if)+is)+jc");
    assert_eq!(
        format_list(&items, &compiled, &spec, &settings, &Terms::default()),
        format(&items[0], &compiled, &settings)
    );
}

#[test]
fn test_never_and_always() {
    let items = make_names(&[("John", "Smith"), ("Jane", "Doe")]);
    assert_eq!(
        render_list(&items, &list_spec(Conjunction::Text, DelimiterPrecedesLast::Never)),
        "John Smith and Jane Doe"
    );
    assert_eq!(
        render_list(&items, &list_spec(Conjunction::Text, DelimiterPrecedesLast::Always)),
        "John Smith, and Jane Doe"
    );
}

#[test]
fn test_contextual_conjunction() {
    let spec = list_spec(Conjunction::Text, DelimiterPrecedesLast::Contextual);
    let three = make_names(&[("", "A"), ("", "B"), ("", "C")]);
    assert_eq!(render_list(&three, &spec), "A, B, and C");
    assert_eq!(render_list(&three[..2], &spec), "A and B");
}

#[test]
fn test_symbol_conjunction() {
    let items = make_names(&[("John", "Smith"), ("Jane", "Doe"), ("Ann", "Lee")]);
    assert_eq!(
        render_list(&items, &list_spec(Conjunction::Symbol, DelimiterPrecedesLast::Never)),
        "John Smith, Jane Doe & Ann Lee"
    );
}

#[test]
fn test_inherit_uses_delimiter() {
    let items = make_names(&[("John", "Smith"), ("Jane", "Doe")]);
    let mut spec = list_spec(Conjunction::Inherit, DelimiterPrecedesLast::Always);
    spec.delimiter = " / ".to_string();
    assert_eq!(render_list(&items, &spec), "John Smith / Jane Doe");
}

#[test]
fn test_localized_terms() {
    let items = make_names(&[("", "A"), ("", "B"), ("", "C"), ("", "D")]);
    let terms = Terms {
        and: Some("und".to_string()),
        et_al: Some("u. a.".to_string()),
        ..Default::default()
    };
    let mut spec = list_spec(Conjunction::Text, DelimiterPrecedesLast::Never);
    let settings = FormatterSettings::default();
    assert_eq!(
        format_list(&items[..2], &pattern("f"), &spec, &settings, &terms).to_text(),
        "A und B"
    );
    spec.et_al = Some(EtAlOptions {
        min: 4,
        use_first: 1,
    });
    spec.delimiter_precedes_et_al = DelimiterPrecedesLast::Never;
    assert_eq!(
        format_list(&items, &pattern("f"), &spec, &settings, &terms).to_text(),
        "A u. a."
    );
}

#[test]
fn test_et_al_truncation_drops_later_items() {
    let items = make_names(&[
        ("Ann", "First"),
        ("Bob", "Second"),
        ("Cat", "Third"),
        ("Dan", "Fourth"),
    ]);
    let mut spec = list_spec(Conjunction::Text, DelimiterPrecedesLast::Never);
    spec.et_al = Some(EtAlOptions {
        min: 3,
        use_first: 2,
    });
    let rendered = render_list(&items, &spec);
    assert_eq!(rendered, "Ann First, Bob Second, et al");
    assert!(!rendered.contains("Third"));
    assert!(!rendered.contains("Fourth"));
}

#[test]
fn test_et_al_emphasis_in_html() {
    let mut items = vec![full_name().with_link("https://example.org/smith")];
    items.extend(make_names(&[("Jane", "Doe"), ("Ann", "Lee")]));
    let settings = FormatterSettings {
        markup: MarkupMode::Simple,
        ..Default::default()
    };
    let mut spec = list_spec(Conjunction::Text, DelimiterPrecedesLast::Never);
    spec.et_al = Some(EtAlOptions {
        min: 3,
        use_first: 1,
    });
    let html = format_list(&items, &pattern("g+if"), &spec, &settings, &Terms::default())
        .to_html();
    assert_eq!(
        html,
        r#"<a href="https://example.org/smith">John Smith</a>, <em>et al</em>"#
    );
}

#[test]
fn test_delimiter_is_escaped_in_html() {
    let items = make_names(&[("", "A"), ("", "B"), ("", "C")]);
    let mut spec = list_spec(Conjunction::Symbol, DelimiterPrecedesLast::Never);
    spec.delimiter = " <> ".to_string();
    let html = format_list(
        &items,
        &pattern("f"),
        &spec,
        &FormatterSettings::default(),
        &Terms::default(),
    )
    .to_html();
    assert_eq!(html, "A &lt;&gt; B &amp; C");
}
