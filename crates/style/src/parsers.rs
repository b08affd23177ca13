//! Low-level nom parsers for the free-text size values found in catalogs.
//!
//! Catalog typography rows describe sizes as ranges such as `"44-54pt"`,
//! `"24pt"` or `"18 - 20 px"`.

use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{map_res, opt};
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),
}

/// An inclusive point-size range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: u16,
    pub max: u16,
}

impl SizeRange {
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }
}

// --- Helper Parsers ---

fn parse_u16(input: &str) -> IResult<&str, u16> {
    map_res(digit1, |s: &str| s.parse::<u16>()).parse(input)
}

fn parse_unit(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("pt"), tag_no_case("px"))).parse(input)
}

fn parse_size(input: &str) -> IResult<&str, u16> {
    let (input, value) = delimited(space0, parse_u16, space0).parse(input)?;
    let (input, _) = opt(parse_unit).parse(input)?;
    Ok((input, value))
}

/// Parses a size or size range with an optional `pt`/`px` unit.
pub fn parse_size_range(input: &str) -> IResult<&str, SizeRange> {
    let (input, min) = parse_size(input)?;
    let (input, max) = opt(preceded((space0, char('-')), parse_size)).parse(input)?;
    let (input, _) = space0(input)?;
    let max = max.unwrap_or(min).max(min);
    Ok((input, SizeRange { min, max }))
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

/// Returns the lower bound of a size range, or `fallback` when the text is not a size.
pub fn leading_size_or(input: &str, fallback: u16) -> u16 {
    run_parser(parse_size_range, input)
        .map(|range| range.min)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_range() {
        assert_eq!(run_parser(parse_size_range, "44-54pt"), Ok(SizeRange::new(44, 54)));
        assert_eq!(run_parser(parse_size_range, "24pt"), Ok(SizeRange::new(24, 24)));
        assert_eq!(run_parser(parse_size_range, " 18 - 20 px "), Ok(SizeRange::new(18, 20)));
        assert_eq!(run_parser(parse_size_range, "40pt-32pt"), Ok(SizeRange::new(40, 40)));
    }

    #[test]
    fn test_rejects_non_sizes() {
        assert!(run_parser(parse_size_range, "large").is_err());
        assert!(run_parser(parse_size_range, "44-54pt bold").is_err());
        assert!(run_parser(parse_size_range, "").is_err());
    }

    #[test]
    fn test_leading_size_or() {
        assert_eq!(leading_size_or("44-54pt", 36), 44);
        assert_eq!(leading_size_or("huge", 36), 36);
    }
}
