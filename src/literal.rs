use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::maybe::Maybe;
use crate::parser::Parser;

/// Parser that matches an exact run of elements, element by element
///
/// On a full match it returns `value`, a fixed representation of the literal
/// (the elements themselves for [`literal`], the `String` for
/// [`text::string`](crate::text::string)). A mismatch or running out of input
/// part way through rewinds to where matching started.
pub struct Literal<T, O> {
    expected: Vec<T>,
    value: O,
}

impl<T, O> Literal<T, O> {
    pub fn new(expected: impl IntoIterator<Item = T>, value: O) -> Self {
        Literal {
            expected: expected.into_iter().collect(),
            value,
        }
    }

    /// Number of elements the literal consumes
    pub fn len(&self) -> usize {
        self.expected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }
}

impl<T, O> Parser for Literal<T, O>
where
    T: Atomic,
    O: Clone,
{
    type Element = T;
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'_, T>) -> ParseResult<O> {
        let start = cursor.mark();

        for expected in &self.expected {
            match cursor.next() {
                Maybe::Present(element) if element == *expected => {}
                _ => {
                    cursor.rewind(start);
                    return Ok(Maybe::Absent);
                }
            }
        }

        Ok(Maybe::Present(self.value.clone()))
    }
}

/// Convenience function to create a Literal parser returning the matched elements
pub fn literal<T: Atomic>(expected: impl IntoIterator<Item = T>) -> Literal<T, Vec<T>> {
    let expected: Vec<T> = expected.into_iter().collect();
    let value = expected.clone();
    Literal::new(expected, value)
}
