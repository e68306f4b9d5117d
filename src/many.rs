use crate::accumulator::{Accumulate, Accumulator};
use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::maybe::Maybe;
use crate::merge::DefaultAccumulator;
use crate::parser::Parser;
use log::{trace, warn};
use std::marker::PhantomData;

/// Parser combinator that applies a parser repeatedly and folds the results
///
/// Stops at the first failure of the inner parser or after `max` successes
/// (`max == 0` means unbounded). Fewer than `min` successes rewinds to the entry
/// position and fails; otherwise the accumulated value is returned, which is the
/// empty aggregate when nothing matched and `min == 0`.
///
/// A success that consumed no input ends the repetition and satisfies `min`, so
/// `many(optional(p))` terminates. Its value is kept only when it is the first
/// success; after real progress it is dropped.
pub struct Many<P, A> {
    parser: P,
    min: usize,
    max: usize,
    _accumulator: PhantomData<fn() -> A>,
}

impl<P, A> Many<P, A> {
    pub fn new(parser: P, min: usize, max: usize) -> Self {
        Many {
            parser,
            min,
            max,
            _accumulator: PhantomData,
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl<P, A> Parser for Many<P, A>
where
    P: Parser,
    A: Accumulator<P::Output>,
{
    type Element = P::Element;
    type Output = A::Output;

    fn parse(&self, cursor: &mut Cursor<'_, Self::Element>) -> ParseResult<Self::Output> {
        let start = cursor.mark();
        let mut accumulator = A::default();
        let mut count = 0;

        while self.max == 0 || count < self.max {
            let before = cursor.mark();
            let Maybe::Present(value) = self.parser.parse(cursor)? else {
                break;
            };

            if cursor.mark() == before {
                warn!(
                    "repetition matched without consuming input at offset {}; stopping",
                    before.offset()
                );
                if count == 0 {
                    accumulator.append(value);
                }
                // an empty match can repeat any number of times
                count = count.max(self.min);
                break;
            }

            accumulator.append(value);
            count += 1;
        }

        if count < self.min {
            trace!(
                "repetition matched {} of at least {} at offset {}; rewinding",
                count,
                self.min,
                start.offset()
            );
            cursor.rewind(start);
            return Ok(Maybe::Absent);
        }

        Ok(Maybe::Present(accumulator.finish()))
    }
}

/// Convenience function to create a Many parser matching zero or more times
pub fn many<P>(parser: P) -> Many<P, DefaultAccumulator<P>>
where
    P: Parser,
    P::Output: Accumulate,
{
    Many::new(parser, 0, 0)
}

/// Convenience function to create a Many parser matching one or more times
pub fn many1<P>(parser: P) -> Many<P, DefaultAccumulator<P>>
where
    P: Parser,
    P::Output: Accumulate,
{
    Many::new(parser, 1, 0)
}

/// Convenience function to create a Many parser with explicit bounds
///
/// `max == 0` leaves the repetition unbounded.
pub fn repeat<P>(parser: P, min: usize, max: usize) -> Many<P, DefaultAccumulator<P>>
where
    P: Parser,
    P::Output: Accumulate,
{
    Many::new(parser, min, max)
}

/// Extension trait to add repetition methods to parsers
pub trait ManyExt: Parser + Sized {
    fn many(self) -> Many<Self, DefaultAccumulator<Self>>
    where
        Self::Output: Accumulate,
    {
        Many::new(self, 0, 0)
    }

    fn many1(self) -> Many<Self, DefaultAccumulator<Self>>
    where
        Self::Output: Accumulate,
    {
        Many::new(self, 1, 0)
    }

    fn repeat(self, min: usize, max: usize) -> Many<Self, DefaultAccumulator<Self>>
    where
        Self::Output: Accumulate,
    {
        Many::new(self, min, max)
    }

    /// Repeat with an explicitly chosen accumulator, e.g.
    /// `letter().many_into::<SequenceCollect<char>>(0, 0)` for a `Vec<char>`
    fn many_into<A>(self, min: usize, max: usize) -> Many<Self, A>
    where
        A: Accumulator<Self::Output>,
    {
        Many::new(self, min, max)
    }
}

/// Implement ManyExt for all parsers
impl<P> ManyExt for P where P: Parser {}
