use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::maybe::Maybe;
use crate::parser::Parser;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value counts as a failed parse: the input the inner parser consumed
/// is given back.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<P, F> Parser for FilterParser<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    type Element = P::Element;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'_, Self::Element>) -> ParseResult<Self::Output> {
        let start = cursor.mark();

        match self.parser.parse(cursor)? {
            Maybe::Present(value) if (self.predicate)(&value) => Ok(Maybe::Present(value)),
            Maybe::Present(_) => {
                cursor.rewind(start);
                Ok(Maybe::Absent)
            }
            Maybe::Absent => Ok(Maybe::Absent),
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt: Parser + Sized {
    fn filter<F>(self, predicate: F) -> FilterParser<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate)
    }
}

impl<P: Parser> FilterExt for P {}

/// Convenience function to create a filtered parser
pub fn filter<P, F>(parser: P, predicate: F) -> FilterParser<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate)
}
