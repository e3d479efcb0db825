// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Small [nom] building blocks shared by every command parser.

use nom::{IResult, Parser,
          bytes::complete::{is_not, tag, tag_no_case},
          character::complete::{char, digit1, hex_digit1, multispace0},
          sequence::{delimited, preceded}};

use super::constants::{EQUALS, HEX_PREFIX, QUOTE, QUOTE_STR};

/// Error type used by every parser in this module.
pub type StrError<'a> = nom::error::Error<&'a str>;

/// Allow any amount of whitespace (including none) on both sides of `inner`.
pub fn ws<'a, O, P>(inner: P) -> impl Parser<&'a str, Output = O, Error = StrError<'a>>
where
    P: Parser<&'a str, Output = O, Error = StrError<'a>>,
{
    delimited(multispace0, inner, multispace0)
}

/// A single punctuation character, with insignificant whitespace around it.
pub fn punct<'a>(it: char) -> impl Parser<&'a str, Output = char, Error = StrError<'a>> {
    ws(char(it))
}

/// - Parse input: `"some text"`. Output: `some text`.
/// - No escapes, and the text must not be empty.
pub fn quoted_text(input: &str) -> IResult<&str, &str> {
    delimited(char(QUOTE), is_not(QUOTE_STR), char(QUOTE)).parse(input)
}

/// - Parse input: `0xa1` or `0XA1`. Output: `a1` / `A1` (digits only).
pub fn hex_literal(input: &str) -> IResult<&str, &str> {
    preceded(tag_no_case(HEX_PREFIX), hex_digit1).parse(input)
}

/// - Parse input: `speed = 3000`. Output: `3000`.
/// - The digits are returned as text, so the caller can report overflow as a semantic
///   rejection rather than a shape mismatch.
pub fn keyword_arg<'a>(
    keyword: &'a str,
) -> impl Parser<&'a str, Output = &'a str, Error = StrError<'a>> {
    preceded((ws(tag(keyword)), punct(EQUALS)), ws(digit1))
}

#[cfg(test)]
mod tests {
    use nom::{Err as NomErr, error::ErrorKind};

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_quoted_text() {
        assert_eq2!(quoted_text("\"Hello World\")"), Ok((")", "Hello World")));
        assert_eq2!(
            quoted_text("\"\""),
            Err(NomErr::Error(StrError::new("\"", ErrorKind::IsNot)))
        );
        assert!(quoted_text("Hello\"").is_err());
    }

    #[test]
    fn test_hex_literal() {
        assert_eq2!(hex_literal("0xa1)"), Ok((")", "a1")));
        assert_eq2!(hex_literal("0XB2"), Ok(("", "B2")));
        assert!(hex_literal("0xZZ").is_err());
        assert!(hex_literal("A1").is_err());
    }

    #[test]
    fn test_keyword_arg_whitespace() {
        assert_eq2!(keyword_arg("speed").parse("speed=3000)"), Ok((")", "3000")));
        assert_eq2!(
            keyword_arg("speed").parse("  speed  =  3000  )"),
            Ok((")", "3000"))
        );
        assert!(keyword_arg("speed").parse("speed=fast").is_err());
        assert!(keyword_arg("speed").parse("rpm=3000").is_err());
    }

    #[test]
    fn test_punct() {
        assert_eq2!(punct('(').parse("  (  \"x\""), Ok(("\"x\"", '(')));
    }
}
