/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Pattern compiler built with winnow.

use super::{
    ComponentSource, ComponentToken, Condition, FormatPattern, Modifier, PatternError,
    PatternErrorKind, Token,
};
use namefmt_core::ComponentKind;
use winnow::combinator::{alt, cut_err, fail, opt, preceded, repeat};
use winnow::error::{ContextError, ErrMode, StrContext};
use winnow::prelude::*;
use winnow::token::{any, one_of, take_while};

const UNCLOSED_GROUP: &str = "unclosed group";
const DANGLING_PREFIX: &str = "dangling prefix";
const TRAILING_ESCAPE: &str = "trailing escape";

const CONDITIONS: [char; 6] = ['+', '-', '~', '=', '^', '|'];
const MODIFIERS: [char; 7] = ['L', 'U', 'F', 'G', 'T', 'B', 'b'];
const COMPONENTS: [char; 11] = ['t', 'g', 'm', 'f', 's', 'c', 'x', 'y', 'z', 'e', 'E'];

/// Compile a pattern string into a reusable [`FormatPattern`].
pub fn compile(pattern: &str) -> Result<FormatPattern, PatternError> {
    sequence
        .parse(pattern)
        .map(|tokens| FormatPattern::new(pattern, tokens))
        .map_err(|e| {
            let offset = e.offset();
            PatternError {
                pattern: pattern.to_string(),
                offset,
                kind: error_kind(pattern, offset, e.inner()),
            }
        })
}

fn error_kind(pattern: &str, offset: usize, error: &ContextError) -> PatternErrorKind {
    let label = error.context().find_map(|c| match c {
        StrContext::Label(label) => Some(*label),
        _ => None,
    });
    match label {
        Some(UNCLOSED_GROUP) => PatternErrorKind::UnclosedGroup,
        Some(DANGLING_PREFIX) => PatternErrorKind::DanglingPrefix,
        Some(TRAILING_ESCAPE) => PatternErrorKind::TrailingEscape,
        _ => match pattern.get(offset..).and_then(|rest| rest.chars().next()) {
            Some(')') => PatternErrorKind::UnexpectedGroupClose,
            Some(c) => PatternErrorKind::UnknownComponent(c),
            None => PatternErrorKind::DanglingPrefix,
        },
    }
}

fn is_reserved(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '(' | ')' | '\\') || CONDITIONS.contains(&c)
}

fn sequence(input: &mut &str) -> Result<Vec<Token>, ErrMode<ContextError>> {
    let tokens: Vec<Token> = repeat(0.., token).parse_next(input)?;
    Ok(merge_literals(tokens))
}

/// Join adjacent unconditional literals so that `\(` and a following run
/// become one token.
fn merge_literals(tokens: Vec<Token>) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match (merged.last_mut(), token) {
            (Some(Token::Literal(prev)), Token::Literal(next)) => prev.push_str(&next),
            (_, token) => merged.push(token),
        }
    }
    merged
}

fn token(input: &mut &str) -> Result<Token, ErrMode<ContextError>> {
    let condition = opt(one_of(CONDITIONS))
        .parse_next(input)?
        .and_then(Condition::from_char);
    let modifiers: Vec<char> = repeat(0.., one_of(MODIFIERS)).parse_next(input)?;
    let modifiers: Vec<Modifier> = modifiers.into_iter().filter_map(Modifier::from_char).collect();

    let mut token = if condition.is_none() && modifiers.is_empty() {
        base_token.parse_next(input)?
    } else {
        cut_err(base_token)
            .context(StrContext::Label(DANGLING_PREFIX))
            .parse_next(input)?
    };

    if !modifiers.is_empty() {
        token = Token::Modified {
            modifiers,
            token: Box::new(token),
        };
    }
    if let Some(condition) = condition {
        token = Token::Conditional {
            condition,
            token: Box::new(token),
        };
    }
    Ok(token)
}

fn base_token(input: &mut &str) -> Result<Token, ErrMode<ContextError>> {
    alt((group, escaped, separator, component, literal_run, unknown_code)).parse_next(input)
}

fn group(input: &mut &str) -> Result<Token, ErrMode<ContextError>> {
    let tokens = preceded('(', sequence).parse_next(input)?;
    cut_err(')')
        .context(StrContext::Label(UNCLOSED_GROUP))
        .parse_next(input)?;
    Ok(Token::Group(tokens))
}

fn escaped(input: &mut &str) -> Result<Token, ErrMode<ContextError>> {
    let c = preceded(
        '\\',
        cut_err(any).context(StrContext::Label(TRAILING_ESCAPE)),
    )
    .parse_next(input)?;
    Ok(Token::Literal(c.to_string()))
}

fn separator(input: &mut &str) -> Result<Token, ErrMode<ContextError>> {
    let c = one_of(['i', 'j', 'k']).parse_next(input)?;
    Ok(Token::Separator(match c {
        'i' => 1,
        'j' => 2,
        _ => 3,
    }))
}

fn component(input: &mut &str) -> Result<Token, ErrMode<ContextError>> {
    let code = one_of(COMPONENTS).parse_next(input)?;
    let suffix = opt('*').parse_next(input)?.is_some();

    let (source, initial) = match code {
        't' => (ComponentSource::Single(ComponentKind::Title), suffix),
        'g' => (ComponentSource::Single(ComponentKind::Given), suffix),
        'm' => (ComponentSource::Single(ComponentKind::Middle), suffix),
        'f' => (ComponentSource::Single(ComponentKind::Family), suffix),
        's' => (ComponentSource::Single(ComponentKind::Generational), suffix),
        'c' => (ComponentSource::Single(ComponentKind::Credentials), suffix),
        'x' => (ComponentSource::Single(ComponentKind::Given), true),
        'y' => (ComponentSource::Single(ComponentKind::Middle), true),
        'z' => (ComponentSource::Single(ComponentKind::Family), true),
        'e' => (
            ComponentSource::Either(ComponentKind::Given, ComponentKind::Family),
            suffix,
        ),
        _ => (
            ComponentSource::Either(ComponentKind::Family, ComponentKind::Given),
            suffix,
        ),
    };
    Ok(Token::Component(ComponentToken { source, initial }))
}

fn literal_run(input: &mut &str) -> Result<Token, ErrMode<ContextError>> {
    take_while(1.., |c: char| !is_reserved(c))
        .map(|s: &str| Token::Literal(s.to_string()))
        .parse_next(input)
}

/// Letters that are not codes are an error rather than literal text.
fn unknown_code(input: &mut &str) -> Result<Token, ErrMode<ContextError>> {
    if input.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(ErrMode::Cut(ContextError::new()));
    }
    fail(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(kind: ComponentKind) -> Token {
        Token::Component(ComponentToken {
            source: ComponentSource::Single(kind),
            initial: false,
        })
    }

    fn conditional(condition: Condition, token: Token) -> Token {
        Token::Conditional {
            condition,
            token: Box::new(token),
        }
    }

    #[test]
    fn test_compile_joiner_pattern() {
        let pattern = compile("t+if").unwrap();
        assert_eq!(
            pattern.tokens(),
            &[
                single(ComponentKind::Title),
                conditional(Condition::Both, Token::Separator(1)),
                single(ComponentKind::Family),
            ]
        );
        assert_eq!(pattern.source(), "t+if");
    }

    #[test]
    fn test_compile_groups() {
        let pattern = compile("(g+if)+jc").unwrap();
        assert_eq!(
            pattern.tokens(),
            &[
                Token::Group(vec![
                    single(ComponentKind::Given),
                    conditional(Condition::Both, Token::Separator(1)),
                    single(ComponentKind::Family),
                ]),
                conditional(Condition::Both, Token::Separator(2)),
                single(ComponentKind::Credentials),
            ]
        );
    }

    #[test]
    fn test_literal_runs_and_escapes_merge() {
        let pattern = compile(r"f, \(g\)").unwrap();
        assert_eq!(
            pattern.tokens(),
            &[
                single(ComponentKind::Family),
                Token::Literal(", (".to_string()),
                single(ComponentKind::Given),
                Token::Literal(")".to_string()),
            ]
        );
    }

    #[test]
    fn test_conditional_applies_to_whole_literal_run() {
        let pattern = compile("f+, g").unwrap();
        assert_eq!(
            pattern.tokens()[1],
            conditional(Condition::Both, Token::Literal(", ".to_string()))
        );
    }

    #[test]
    fn test_initial_suffix_and_shorthands() {
        let suffixed = compile("g*").unwrap();
        let shorthand = compile("x").unwrap();
        assert_eq!(suffixed.tokens(), shorthand.tokens());
        assert_eq!(
            shorthand.tokens()[0],
            Token::Component(ComponentToken {
                source: ComponentSource::Single(ComponentKind::Given),
                initial: true,
            })
        );
        // A star anywhere else is literal.
        assert_eq!(
            compile("i*").unwrap().tokens(),
            &[Token::Separator(1), Token::Literal("*".to_string())]
        );
    }

    #[test]
    fn test_modifiers_and_condition_prefixes() {
        let pattern = compile("=UTf").unwrap();
        assert_eq!(
            pattern.tokens(),
            &[conditional(
                Condition::BeforeContent,
                Token::Modified {
                    modifiers: vec![Modifier::Uppercase, Modifier::Trim],
                    token: Box::new(single(ComponentKind::Family)),
                }
            )]
        );
    }

    #[test]
    fn test_compile_is_deterministic() {
        let pattern = "((((t+ig)+im)+if)+is)+jc";
        assert_eq!(compile(pattern).unwrap(), compile(pattern).unwrap());
    }

    #[test]
    fn test_empty_pattern() {
        assert!(compile("").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_component() {
        let err = compile("t+iq").unwrap_err();
        assert_eq!(err.kind, PatternErrorKind::UnknownComponent('q'));
        assert_eq!(err.offset, 3);
    }

    #[test]
    fn test_unbalanced_groups() {
        assert_eq!(
            compile("(t+ig").unwrap_err().kind,
            PatternErrorKind::UnclosedGroup
        );
        let err = compile("t+ig)").unwrap_err();
        assert_eq!(err.kind, PatternErrorKind::UnexpectedGroupClose);
        assert_eq!(err.offset, 4);
    }

    #[test]
    fn test_dangling_prefixes() {
        assert_eq!(compile("g+").unwrap_err().kind, PatternErrorKind::DanglingPrefix);
        assert_eq!(compile("(gU)").unwrap_err().kind, PatternErrorKind::DanglingPrefix);
    }

    #[test]
    fn test_trailing_escape() {
        assert_eq!(compile("g\\").unwrap_err().kind, PatternErrorKind::TrailingEscape);
    }

    #[test]
    fn test_error_message_names_the_problem() {
        let message = compile("gw").unwrap_err().to_string();
        assert!(message.contains("unknown component code 'w'"), "{}", message);
    }
}
