//! Ready-made parsers over character input.
//!
//! Everything here works on `Cursor<char>`, which [`Cursor::from_text`] builds
//! from a string. Parsers that produce text return `String` so repetitions and
//! merges of them concatenate.

use crate::accumulator::TextConcat;
use crate::cursor::Cursor;
use crate::element::{Any, Is, NoneOf, OneOf, any, is, none_of, one_of};
use crate::error::ParseResult;
use crate::filter::{FilterExt, FilterParser};
use crate::inside::{Inside, inside};
use crate::lift::Map;
use crate::literal::Literal;
use crate::many::{Many, many, many1};
use crate::or::{Or, OrExt};
use crate::parser::Parser;

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "1234567890";
const SYMBOLS: &str = "!#$%&|*+-/:<=>?@^_~";
const SPACES: &str = " \t\r\n";

/// Matches exactly the character `expected`
pub fn character(expected: char) -> Is<char> {
    is(expected)
}

/// Matches the characters of `expected` in order and returns them as a `String`
pub fn string(expected: &str) -> Literal<char, String> {
    Literal::new(expected.chars(), expected.to_string())
}

/// Matches any character contained in `choices`
pub fn one_of_chars(choices: &str) -> OneOf<char> {
    one_of(choices.chars())
}

/// Matches any character not contained in `rejects`
pub fn none_of_chars(rejects: &str) -> NoneOf<char> {
    none_of(rejects.chars())
}

/// ASCII upper case letter
pub fn upper() -> OneOf<char> {
    one_of_chars(UPPER)
}

/// ASCII lower case letter
pub fn lower() -> OneOf<char> {
    one_of_chars(LOWER)
}

/// ASCII letter of either case
pub fn letter() -> Or<OneOf<char>, OneOf<char>> {
    upper().or(lower())
}

/// ASCII decimal digit
pub fn digit() -> OneOf<char> {
    one_of_chars(DIGITS)
}

/// Punctuation allowed in Lisp-style identifiers
pub fn symbol() -> OneOf<char> {
    one_of_chars(SYMBOLS)
}

/// One or more whitespace characters, returned as the matched text
pub fn spaces() -> Many<OneOf<char>, TextConcat> {
    many1(one_of_chars(SPACES))
}

/// Any character Unicode considers alphabetic
pub fn unicode_letter() -> FilterParser<Any<char>, fn(&char) -> bool> {
    let alphabetic: fn(&char) -> bool = |c| c.is_alphabetic();
    any().filter(alphabetic)
}

/// Any character Unicode considers whitespace
pub fn unicode_whitespace() -> FilterParser<Any<char>, fn(&char) -> bool> {
    let whitespace: fn(&char) -> bool = |c| c.is_whitespace();
    any().filter(whitespace)
}

/// Double-quoted string without escapes; returns the text between the quotes
pub fn quoted() -> Inside<Is<char>, Many<NoneOf<char>, TextConcat>, Is<char>> {
    inside(character('"'), many(none_of_chars("\"")), character('"'))
}

/// Turn a character parser into a parser of one-character strings
pub fn lift_string<P>(parser: P) -> Map<P, fn(char) -> String>
where
    P: Parser<Element = char, Output = char>,
{
    let widen: fn(char) -> String = String::from;
    Map::new(parser, widen)
}

/// Run `parser` over the characters of `input`
pub fn parse_str<P>(parser: &P, input: &str) -> ParseResult<P::Output>
where
    P: Parser<Element = char> + ?Sized,
{
    let mut cursor = Cursor::from_text(input);
    parser.parse(&mut cursor)
}
