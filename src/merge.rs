use crate::accumulator::{Accumulate, Accumulator};
use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::maybe::Maybe;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser combinator that runs two parsers of the same output type in sequence and
/// folds both results with an accumulator
///
/// With the default policies two characters merge into a `String`, two strings
/// concatenate, and anything else becomes a two-element `Vec`. Chaining merges
/// with the sequence policy therefore nests (`Vec<R>` cannot be merged with `R`);
/// lift each side into a `Vec` and use [`Flatten`](crate::accumulator::Flatten) for
/// flat N-way merges.
pub struct Merge<P1, P2, A> {
    parser1: P1,
    parser2: P2,
    _accumulator: PhantomData<fn() -> A>,
}

impl<P1, P2, A> Merge<P1, P2, A> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Merge {
            parser1,
            parser2,
            _accumulator: PhantomData,
        }
    }
}

impl<P1, P2, A> Parser for Merge<P1, P2, A>
where
    P1: Parser,
    P2: Parser<Element = P1::Element, Output = P1::Output>,
    A: Accumulator<P1::Output>,
{
    type Element = P1::Element;
    type Output = A::Output;

    fn parse(&self, cursor: &mut Cursor<'_, Self::Element>) -> ParseResult<Self::Output> {
        let start = cursor.mark();

        let Maybe::Present(first) = self.parser1.parse(cursor)? else {
            return Ok(Maybe::Absent);
        };
        let Maybe::Present(second) = self.parser2.parse(cursor)? else {
            cursor.rewind(start);
            return Ok(Maybe::Absent);
        };

        let mut accumulator = A::default();
        accumulator.append(first);
        accumulator.append(second);
        Ok(Maybe::Present(accumulator.finish()))
    }
}

/// Default accumulator for the output of parser `P`
pub type DefaultAccumulator<P> = <<P as Parser>::Output as Accumulate>::Accumulator;

/// Convenience function to create a Merge parser using the default accumulator
pub fn merge<P1, P2>(parser1: P1, parser2: P2) -> Merge<P1, P2, DefaultAccumulator<P1>>
where
    P1: Parser,
    P1::Output: Accumulate,
    P2: Parser<Element = P1::Element, Output = P1::Output>,
{
    Merge::new(parser1, parser2)
}

/// Extension trait to add .merge_with() method support for parsers
pub trait MergeExt: Parser + Sized {
    fn merge_with<P>(self, other: P) -> Merge<Self, P, DefaultAccumulator<Self>>
    where
        Self::Output: Accumulate,
        P: Parser<Element = Self::Element, Output = Self::Output>,
    {
        Merge::new(self, other)
    }

    /// Merge with an explicitly chosen accumulator, e.g.
    /// `a.merge_into::<Flatten<_>, _>(b)`
    fn merge_into<A, P>(self, other: P) -> Merge<Self, P, A>
    where
        A: Accumulator<Self::Output>,
        P: Parser<Element = Self::Element, Output = Self::Output>,
    {
        Merge::new(self, other)
    }
}

/// Implement MergeExt for all parsers
impl<P> MergeExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::{Flatten, SequenceCollect};
    use crate::element::{is, one_of};
    use crate::lift::MapExt;
    use crate::text::{digit, string};

    #[test]
    fn test_merge_chars_into_string() {
        let mut cursor = Cursor::from_text("42x");
        let parser = digit().merge_with(digit());

        assert_eq!(
            parser.parse(&mut cursor).unwrap(),
            Maybe::Present("42".to_string())
        );
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_merge_strings_concatenate() {
        let mut cursor = Cursor::from_text("foobar");
        let parser = merge(string("foo"), string("bar"));

        assert_eq!(
            parser.parse(&mut cursor).unwrap(),
            Maybe::Present("foobar".to_string())
        );
    }

    #[test]
    fn test_merge_text_chains_associatively() {
        let mut cursor = Cursor::from_text("abc");
        let parser = string("a")
            .merge_with(string("b"))
            .merge_with(string("c"));

        assert_eq!(
            parser.parse(&mut cursor).unwrap(),
            Maybe::Present("abc".to_string())
        );
    }

    #[test]
    fn test_merge_scalars_into_vec() {
        let data = [1u32, 2, 3];
        let mut cursor = Cursor::new(&data[..]);
        let parser = is(1u32).merge_with(is(2u32));

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Present(vec![1, 2]));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_merge_second_fails_rewinds() {
        let mut cursor = Cursor::from_text("4x");
        let parser = digit().merge_with(digit());

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Absent);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_merge_first_fails() {
        let mut cursor = Cursor::from_text("x4");
        let parser = digit().merge_with(digit());

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Absent);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_merge_into_explicit_policy() {
        let mut cursor = Cursor::from_text("ab");
        let parser = one_of(['a'])
            .merge_into::<SequenceCollect<char>, _>(one_of(['b']));

        assert_eq!(
            parser.parse(&mut cursor).unwrap(),
            Maybe::Present(vec!['a', 'b'])
        );
    }

    #[test]
    fn test_flatten_chain() {
        let data = [1u8, 2, 3];
        let mut cursor = Cursor::new(&data[..]);
        let single = |n: u8| is(n).map(|v| vec![v]);
        let parser = single(1)
            .merge_into::<Flatten<u8>, _>(single(2))
            .merge_into::<Flatten<u8>, _>(single(3));

        assert_eq!(
            parser.parse(&mut cursor).unwrap(),
            Maybe::Present(vec![1, 2, 3])
        );
    }
}
