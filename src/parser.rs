//! nom parsers for everything typed at a menu prompt.

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{char, digit1, multispace0, multispace1, one_of},
    combinator::{all_consuming, map_res, opt, recognize, value},
    sequence::{delimited, pair, separated_pair},
    IResult,
};

use crate::error::{Error, Result};

// --- BASIC PARSERS ---

/// `12`, `-3.5`, `+7,25`, `.5`, `5.` (comma accepted as decimal separator).
fn decimal(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(pair(
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(one_of(".,"), opt(digit1))))),
                recognize(pair(one_of(".,"), digit1)),
            )),
        )),
        |s: &str| s.replace(',', ".").parse::<f64>(),
    )(input)
}

fn signed_int(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| s.parse::<i64>())(input)
}

fn unsigned_int(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>())(input)
}

fn range_separator(input: &str) -> IResult<&str, &str> {
    alt((ws(tag("..")), ws(tag("-")), ws(tag(",")), multispace1))(input)
}

fn yes_no(input: &str) -> IResult<&str, bool> {
    alt((
        value(true, alt((tag_no_case("yes"), tag_no_case("sí"), tag_no_case("si")))),
        value(true, alt((tag_no_case("s"), tag_no_case("y")))),
        value(false, alt((tag_no_case("no"), tag_no_case("n")))),
    ))(input)
}

// --- HELPERS ---

fn ws<'a, F, O, E: nom::error::ParseError<&'a str>>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, E>,
{
    delimited(multispace0, inner, multispace0)
}

/// Run `parser` over the whole line, surrounding whitespace allowed.
fn complete<'a, O, F>(input: &'a str, expected: &'static str, parser: F) -> Result<O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    match all_consuming(ws(parser))(input) {
        Ok((_, out)) => Ok(out),
        Err(_) => Err(Error::parse(input.trim(), expected)),
    }
}

// --- ENTRY POINTS ---

pub fn parse_menu_choice(input: &str) -> Result<u32> {
    complete(input, "a menu option", unsigned_int)
}

pub fn parse_decimal(input: &str) -> Result<f64> {
    complete(input, "a number", decimal)
}

pub fn parse_integer(input: &str) -> Result<i64> {
    complete(input, "a whole number", signed_int)
}

/// `1940-1970`, `1940..1970`, `1940, 1970` or `1940 1970`.
pub fn parse_range(input: &str) -> Result<(i64, i64)> {
    complete(input, "a range like 1940-1970", separated_pair(signed_int, range_separator, signed_int))
}

pub fn parse_yes_no(input: &str) -> Result<bool> {
    complete(input, "yes or no", yes_no)
}
