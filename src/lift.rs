use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// This is how parsers of different output types are brought to a common type so
/// they can be combined with `or`, `merge_with` or a block.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Element = P::Element;
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'_, Self::Element>) -> ParseResult<Self::Output> {
        let value = self.parser.parse(cursor)?;
        Ok(value.map(&self.mapper))
    }
}

/// Convenience function to create a Map parser
pub fn lift<P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Wrap each result of a parser in a single-element `Vec`
pub fn lift_vector<P>(parser: P) -> Map<P, fn(P::Output) -> Vec<P::Output>>
where
    P: Parser,
{
    let wrap: fn(P::Output) -> Vec<P::Output> = |value| vec![value];
    Map::new(parser, wrap)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}
