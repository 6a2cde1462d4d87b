/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Compiled name patterns.
//!
//! A pattern such as `((((t+ig)+im)+if)+is)+jc` is compiled once into a
//! [`FormatPattern`] and then applied to any number of names.
//!
//! | code | meaning |
//! |------|---------|
//! | `t` `g` `m` `f` `s` `c` | title, given, middle, family, generational, credentials |
//! | `x` `y` `z` | initial of given, middle, family |
//! | `e` / `E` | given falling back to family / family falling back to given |
//! | `i` `j` `k` | separators `sep1`, `sep2`, `sep3` |
//! | `*` after a component | initialize: first grapheme, uppercased, then `.` |
//! | `+` | emit next token if output so far and the next token are both non-empty |
//! | `-` / `~` | emit next token if output so far is non-empty / empty |
//! | `=` / `^` | emit next token if the token after it is non-empty / empty |
//! | `\|` | emit next token only if the preceding token rendered empty |
//! | `L` `U` `F` `G` `T` `B` `b` | lowercase, uppercase, capitalize, capitalize words, trim, first word, last word |
//! | `(` `)` | group |
//! | `\` | escape the next character |
//!
//! Any other non-letter character is literal text. Unknown letters are
//! rejected so that typos surface at compile time.

mod parser;

use namefmt_core::ComponentKind;
use std::fmt;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

pub use parser::compile;

/// A name value a component token resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentSource {
    Single(ComponentKind),
    /// The first kind, or the second when the first is absent.
    Either(ComponentKind, ComponentKind),
}

/// A reference to a name component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentToken {
    pub source: ComponentSource,
    /// Render only the uppercased first letter followed by a period.
    pub initial: bool,
}

/// Condition gating a token on its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// `+`
    Both,
    /// `-`
    AfterContent,
    /// `~`
    AfterNothing,
    /// `=`
    BeforeContent,
    /// `^`
    BeforeNothing,
    /// `|`
    Alternative,
}

impl Condition {
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Condition::Both),
            '-' => Some(Condition::AfterContent),
            '~' => Some(Condition::AfterNothing),
            '=' => Some(Condition::BeforeContent),
            '^' => Some(Condition::BeforeNothing),
            '|' => Some(Condition::Alternative),
            _ => None,
        }
    }

    /// Whether the gated token is emitted.
    ///
    /// `before` is true when the group has produced output so far,
    /// `previous_empty` when the immediately preceding token rendered
    /// nothing, and `after` when the following token has content.
    pub fn holds(&self, before: bool, previous_empty: bool, after: bool) -> bool {
        match self {
            Condition::Both => before && after,
            Condition::AfterContent => before,
            Condition::AfterNothing => !before,
            Condition::BeforeContent => after,
            Condition::BeforeNothing => !after,
            Condition::Alternative => previous_empty,
        }
    }
}

/// Text transformation applied to a token's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `L`
    Lowercase,
    /// `U`
    Uppercase,
    /// `F`
    Capitalize,
    /// `G`
    CapitalizeWords,
    /// `T`
    Trim,
    /// `B`
    FirstWord,
    /// `b`
    LastWord,
}

impl Modifier {
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Modifier::Lowercase),
            'U' => Some(Modifier::Uppercase),
            'F' => Some(Modifier::Capitalize),
            'G' => Some(Modifier::CapitalizeWords),
            'T' => Some(Modifier::Trim),
            'B' => Some(Modifier::FirstWord),
            'b' => Some(Modifier::LastWord),
            _ => None,
        }
    }

    pub fn apply(&self, value: &str) -> String {
        match self {
            Modifier::Lowercase => value.to_lowercase(),
            Modifier::Uppercase => value.to_uppercase(),
            Modifier::Capitalize => capitalize(value),
            Modifier::CapitalizeWords => value
                .split(' ')
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" "),
            Modifier::Trim => value.trim().to_string(),
            Modifier::FirstWord => value.split_whitespace().next().unwrap_or("").to_string(),
            Modifier::LastWord => value
                .split_whitespace()
                .next_back()
                .unwrap_or("")
                .to_string(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reduce a name part to its uppercased first letter and a period.
///
/// The first extended grapheme cluster is kept whole, so combining marks
/// stay attached to their base letter.
pub fn initialize(value: &str) -> String {
    match value.trim_start().graphemes(true).next() {
        Some(first) => {
            let mut initial = first.to_uppercase();
            initial.push('.');
            initial
        }
        None => String::new(),
    }
}

/// One element of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Component(ComponentToken),
    /// Text emitted verbatim.
    Literal(String),
    /// `sep1`, `sep2` or `sep3` (1-based).
    Separator(u8),
    /// A parenthesised sub-sequence evaluated to one piece.
    Group(Vec<Token>),
    Modified {
        modifiers: Vec<Modifier>,
        token: Box<Token>,
    },
    Conditional {
        condition: Condition,
        token: Box<Token>,
    },
}

impl Token {
    /// The condition gating this token, if any.
    pub fn condition(&self) -> Option<Condition> {
        match self {
            Token::Conditional { condition, .. } => Some(*condition),
            _ => None,
        }
    }
}

/// A compiled, immutable pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FormatPattern {
    source: String,
    tokens: Vec<Token>,
}

impl FormatPattern {
    pub(crate) fn new(source: &str, tokens: Vec<Token>) -> Self {
        Self {
            source: source.to_string(),
            tokens,
        }
    }

    /// The pattern string this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::str::FromStr for FormatPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

impl fmt::Display for FormatPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// What made a pattern invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternErrorKind {
    UnknownComponent(char),
    UnclosedGroup,
    UnexpectedGroupClose,
    /// A condition or modifier with no token to apply to.
    DanglingPrefix,
    TrailingEscape,
}

impl fmt::Display for PatternErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternErrorKind::UnknownComponent(c) => write!(f, "unknown component code '{}'", c),
            PatternErrorKind::UnclosedGroup => write!(f, "unclosed group"),
            PatternErrorKind::UnexpectedGroupClose => write!(f, "')' without matching '('"),
            PatternErrorKind::DanglingPrefix => {
                write!(f, "condition or modifier is not followed by a token")
            }
            PatternErrorKind::TrailingEscape => write!(f, "escape at end of pattern"),
        }
    }
}

/// A pattern failed to compile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid name pattern {pattern:?} at offset {offset}: {kind}")]
pub struct PatternError {
    pub pattern: String,
    /// Byte offset into the pattern.
    pub offset: usize,
    pub kind: PatternErrorKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize() {
        assert_eq!(initialize("john"), "J.");
        assert_eq!(initialize("  émile"), "É.");
        assert_eq!(initialize("e\u{301}mile"), "E\u{301}.");
        assert_eq!(initialize("E\u{301}mile"), "E\u{301}.");
        assert_eq!(initialize(""), "");
    }

    #[test]
    fn test_modifiers() {
        assert_eq!(Modifier::Lowercase.apply("McDonald"), "mcdonald");
        assert_eq!(Modifier::Uppercase.apply("smith"), "SMITH");
        assert_eq!(Modifier::Capitalize.apply("van gogh"), "Van gogh");
        assert_eq!(Modifier::CapitalizeWords.apply("van der berg"), "Van Der Berg");
        assert_eq!(Modifier::Trim.apply("  Jr. "), "Jr.");
        assert_eq!(Modifier::FirstWord.apply("Mary Ann"), "Mary");
        assert_eq!(Modifier::LastWord.apply("de la Cruz"), "Cruz");
        assert_eq!(Modifier::LastWord.apply(""), "");
    }

    #[test]
    fn test_conditions() {
        assert!(Condition::Both.holds(true, false, true));
        assert!(!Condition::Both.holds(false, true, true));
        assert!(!Condition::Both.holds(true, false, false));
        assert!(Condition::AfterNothing.holds(false, true, false));
        assert!(Condition::BeforeNothing.holds(true, false, false));
        assert!(Condition::Alternative.holds(true, true, false));
        assert!(!Condition::Alternative.holds(true, false, true));
    }
}
