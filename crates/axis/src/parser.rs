//! A `nom`-based tokenizer for extended-axis path segments.
//!
//! A segment matches exactly one of four surface forms, distinguished by
//! whether the axis-spec is parenthesized and whether a trailing positional
//! bracket `[n]` is present:
//!
//! ```text
//! Form 1: /(AXISSPEC)[@ATTR='VAL']*[N]
//! Form 2: /(AXISSPEC)[@ATTR='VAL']*
//! Form 3: /AXISSPEC[@ATTR='VAL']*[N]
//! Form 4: /AXISSPEC[@ATTR='VAL']*
//! ```
//!
//! Parsing runs in two stages: the segment is first lexed into discrete
//! pieces (axis marker, node test, predicate brackets, offset bracket), then
//! the marker is classified against the fixed axis-kind table.

use crate::error::AxisError;
use crate::token::{AxisKind, AxisToken, NodeTest};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1},
    combinator::{map, opt, recognize},
    multi::many0,
    sequence::{delimited, pair},
};
use std::collections::BTreeMap;

/// The lexed pieces of a segment, before axis-kind classification.
struct RawSegment<'a> {
    marker: &'a str,
    node_test: NodeTest,
    predicates: Vec<(&'a str, &'a str)>,
    offset_digits: Option<&'a str>,
}

// --- Main Public Parsers ---

/// Parses one extended-axis path segment.
pub fn parse_token(token: &str) -> Result<AxisToken, AxisError> {
    let raw = match segment(token) {
        Ok(("", raw)) => raw,
        // Either no form matched at all, or trailing input remained after
        // the offset bracket. Both mean the token fits none of the forms.
        _ => return Err(AxisError::MalformedToken(token.to_string())),
    };

    let kind = AxisKind::from_marker(raw.marker)
        .ok_or_else(|| AxisError::UnknownAxisKind(token.to_string()))?;

    let offset = match raw.offset_digits {
        Some(digits) => digits
            .parse::<usize>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| AxisError::InvalidOffset(token.to_string()))?,
        None => 1,
    };

    let mut predicates = BTreeMap::new();
    for (name, value) in raw.predicates {
        // Last-inserted wins on duplicate keys.
        predicates.insert(name.to_string(), value.to_string());
    }

    Ok(AxisToken {
        kind,
        node_test: raw.node_test,
        offset,
        predicates,
    })
}

/// Splits a navigational path into its segments. A `/` opens a new segment
/// only at bracket depth zero and outside a quoted predicate value.
pub fn split_path(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut in_quote = false;
    for (i, c) in path.char_indices() {
        match c {
            '\'' => in_quote = !in_quote,
            '[' | '(' if !in_quote => depth += 1,
            ']' | ')' if !in_quote => depth = depth.saturating_sub(1),
            '/' if !in_quote && depth == 0 && i > start => {
                segments.push(&path[start..i]);
                start = i;
            }
            _ => {}
        }
    }
    if start < path.len() {
        segments.push(&path[start..]);
    }
    segments
}

/// Parses a whole navigational path into its sequence of axis tokens.
pub fn parse_path(path: &str) -> Result<Vec<AxisToken>, AxisError> {
    split_path(path).into_iter().map(parse_token).collect()
}

// --- Stage 1: Lexers ---

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_').parse(input)
}

fn marker(input: &str) -> IResult<&str, &str> {
    recognize(pair(word, pair(char('-'), word))).parse(input)
}

fn node_test(input: &str) -> IResult<&str, NodeTest> {
    alt((
        map(char('*'), |_| NodeTest::Wildcard),
        map(word, |w: &str| NodeTest::Name(w.to_string())),
    ))
    .parse(input)
}

fn axis_spec(input: &str) -> IResult<&str, (&str, NodeTest)> {
    let (i, m) = marker(input)?;
    let (i, _) = tag("::").parse(i)?;
    let (i, nt) = node_test(i)?;
    Ok((i, (m, nt)))
}

/// One `[@name='value']` bracket. Values are word-chars only; an embedded
/// quote or `]` has no defined escaping rule and fails the segment.
fn predicate(input: &str) -> IResult<&str, (&str, &str)> {
    let (i, _) = tag("[@").parse(input)?;
    let (i, name) = word(i)?;
    let (i, _) = char('=').parse(i)?;
    let (i, value) = delimited(
        char('\''),
        take_while1(|c: char| c.is_alphanumeric() || c == '_'),
        char('\''),
    )
    .parse(i)?;
    let (i, _) = char(']').parse(i)?;
    Ok((i, (name, value)))
}

fn offset(input: &str) -> IResult<&str, &str> {
    delimited(char('['), digit1, char(']')).parse(input)
}

// --- Stage 1: Segment forms ---

/// Forms 1 and 2: the axis-spec is parenthesized.
fn parenthesized_segment(input: &str) -> IResult<&str, RawSegment<'_>> {
    let (i, _) = char('/').parse(input)?;
    let (i, (marker, node_test)) = delimited(char('('), axis_spec, char(')')).parse(i)?;
    let (i, predicates) = many0(predicate).parse(i)?;
    let (i, offset_digits) = opt(offset).parse(i)?;
    Ok((
        i,
        RawSegment {
            marker,
            node_test,
            predicates,
            offset_digits,
        },
    ))
}

/// Forms 3 and 4: the axis-spec stands bare.
fn plain_segment(input: &str) -> IResult<&str, RawSegment<'_>> {
    let (i, _) = char('/').parse(input)?;
    let (i, (marker, node_test)) = axis_spec(i)?;
    let (i, predicates) = many0(predicate).parse(i)?;
    let (i, offset_digits) = opt(offset).parse(i)?;
    Ok((
        i,
        RawSegment {
            marker,
            node_test,
            predicates,
            offset_digits,
        },
    ))
}

fn segment(input: &str) -> IResult<&str, RawSegment<'_>> {
    alt((parenthesized_segment, plain_segment)).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_token() {
        let token = parse_token("/download-click::div[@id='x'][@role='y'][2]").unwrap();
        assert_eq!(token.kind, AxisKind::DownloadClick);
        assert_eq!(token.node_test, NodeTest::Name("div".to_string()));
        assert_eq!(token.offset, 2);
        assert_eq!(token.predicates.len(), 2);
        assert_eq!(token.predicates["id"], "x");
        assert_eq!(token.predicates["role"], "y");
    }

    #[test]
    fn test_default_offset_is_one() {
        let token = parse_token("/follow-link::a").unwrap();
        assert_eq!(token.offset, 1);
        let token = parse_token("/follow-link::a[@id='top']").unwrap();
        assert_eq!(token.offset, 1);
    }

    #[test]
    fn test_parenthesized_forms() {
        let token = parse_token("/(next-click::*)").unwrap();
        assert_eq!(token.kind, AxisKind::NextClick);
        assert_eq!(token.node_test, NodeTest::Wildcard);
        assert_eq!(token.offset, 1);

        let token = parse_token("/(form-submit::input)[@name='q'][3]").unwrap();
        assert_eq!(token.kind, AxisKind::FormSubmit);
        assert_eq!(token.node_test, NodeTest::Name("input".to_string()));
        assert_eq!(token.offset, 3);
        assert_eq!(token.predicates["name"], "q");
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        // No `::` separator.
        assert_eq!(
            parse_token("/badaxis(div)"),
            Err(AxisError::MalformedToken("/badaxis(div)".to_string()))
        );
        // Unquoted predicate value.
        assert_eq!(
            parse_token("/a-b::div[@id=x]"),
            Err(AxisError::MalformedToken("/a-b::div[@id=x]".to_string()))
        );
        // Missing leading slash.
        assert!(parse_token("follow-link::a").is_err());
        // Trailing garbage after the offset bracket.
        assert!(parse_token("/follow-link::a[2]x").is_err());
    }

    #[test]
    fn test_unrecognized_axis_kind() {
        assert_eq!(
            parse_token("/tele-port::div"),
            Err(AxisError::UnknownAxisKind("/tele-port::div".to_string()))
        );
    }

    #[test]
    fn test_embedded_quote_and_bracket_unsupported() {
        assert!(parse_token("/follow-link::a[@id='x'y']").is_err());
        assert!(parse_token("/follow-link::a[@id='x]y']").is_err());
    }

    #[test]
    fn test_zero_offset_rejected() {
        assert_eq!(
            parse_token("/follow-link::a[0]"),
            Err(AxisError::InvalidOffset("/follow-link::a[0]".to_string()))
        );
    }

    #[test]
    fn test_duplicate_predicate_key_last_wins() {
        let token = parse_token("/mouse-over::li[@id='a'][@id='b']").unwrap();
        assert_eq!(token.predicates.len(), 1);
        assert_eq!(token.predicates["id"], "b");
    }

    #[test]
    fn test_round_trip() {
        for source in [
            "/download-click::div[@id='x'][@role='y'][2]",
            "/follow-link::a",
            "/next-click::*[5]",
            "/field-fill::input[@name='q']",
        ] {
            let token = parse_token(source).unwrap();
            let rendered = token.to_string();
            assert_eq!(rendered, source);
            assert_eq!(parse_token(&rendered).unwrap(), token);
        }
    }

    #[test]
    fn test_round_trip_normalizes_parenthesized_form() {
        let token = parse_token("/(follow-link::a)[@id='x'][2]").unwrap();
        let reparsed = parse_token(&token.to_string()).unwrap();
        assert_eq!(reparsed, token);
    }

    #[test]
    fn test_split_path() {
        let segments = split_path("/follow-link::a[@id='x']/next-click::b[2]");
        assert_eq!(
            segments,
            vec!["/follow-link::a[@id='x']", "/next-click::b[2]"]
        );
        assert_eq!(split_path(""), Vec::<&str>::new());
        assert_eq!(split_path("/follow-link::a"), vec!["/follow-link::a"]);
    }

    #[test]
    fn test_parse_path() {
        let steps = parse_path("/(follow-link::a)[2]/form-submit::input[@name='go']").unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].kind, AxisKind::FollowLink);
        assert_eq!(steps[1].kind, AxisKind::FormSubmit);

        // A malformed segment anywhere fails the whole path.
        assert!(parse_path("/follow-link::a/badaxis(div)").is_err());
    }
}
