use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::maybe::Maybe;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Left-biased: when both alternatives would match, only the first is ever run.
/// A failing first parser has already restored the cursor, so the second starts
/// from the same position.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2, O> Parser for Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Element = P1::Element, Output = O>,
{
    type Element = P1::Element;
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'_, Self::Element>) -> ParseResult<Self::Output> {
        match self.parser1.parse(cursor)? {
            Maybe::Present(value) => Ok(Maybe::Present(value)),
            Maybe::Absent => self.parser2.parse(cursor),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Element = Self::Element, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn choice<P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Element = P1::Element, Output = O>,
{
    Or::new(parser1, parser2)
}
