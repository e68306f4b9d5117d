//! Parsers that consume exactly one element.

use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::maybe::Maybe;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Consume the next element if `accept` approves of it, otherwise leave the
/// cursor untouched
fn take_if<T, F>(cursor: &mut Cursor<'_, T>, accept: F) -> Maybe<T>
where
    T: Atomic,
    F: FnOnce(&T) -> bool,
{
    let start = cursor.mark();
    match cursor.next() {
        Maybe::Present(element) if accept(&element) => Maybe::Present(element),
        Maybe::Present(_) => {
            cursor.rewind(start);
            Maybe::Absent
        }
        Maybe::Absent => Maybe::Absent,
    }
}

/// Parser that consumes and returns any single element
pub struct Any<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Any<T> {
    pub fn new() -> Self {
        Any {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Any<T> {
    fn default() -> Self {
        Any::new()
    }
}

impl<T: Atomic> Parser for Any<T> {
    type Element = T;
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_, T>) -> ParseResult<T> {
        Ok(cursor.next())
    }
}

/// Convenience function to create an Any parser
pub fn any<T: Atomic>() -> Any<T> {
    Any::new()
}

/// Parser that matches one specific element
pub struct Is<T> {
    expected: T,
}

impl<T> Is<T> {
    pub fn new(expected: T) -> Self {
        Is { expected }
    }
}

impl<T: Atomic> Parser for Is<T> {
    type Element = T;
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_, T>) -> ParseResult<T> {
        Ok(take_if(cursor, |element| *element == self.expected))
    }
}

/// Convenience function to create an Is parser
pub fn is<T: Atomic>(expected: T) -> Is<T> {
    Is::new(expected)
}

/// Parser that matches any element that is a member of a set
pub struct OneOf<T> {
    choices: Vec<T>,
}

impl<T> OneOf<T> {
    pub fn new(choices: impl IntoIterator<Item = T>) -> Self {
        OneOf {
            choices: choices.into_iter().collect(),
        }
    }
}

impl<T: Atomic> Parser for OneOf<T> {
    type Element = T;
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_, T>) -> ParseResult<T> {
        Ok(take_if(cursor, |element| self.choices.contains(element)))
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of<T: Atomic>(choices: impl IntoIterator<Item = T>) -> OneOf<T> {
    OneOf::new(choices)
}

/// Parser that matches any element that is not a member of a set
///
/// Still requires an element to be present: it fails at the end of input.
pub struct NoneOf<T> {
    rejects: Vec<T>,
}

impl<T> NoneOf<T> {
    pub fn new(rejects: impl IntoIterator<Item = T>) -> Self {
        NoneOf {
            rejects: rejects.into_iter().collect(),
        }
    }
}

impl<T: Atomic> Parser for NoneOf<T> {
    type Element = T;
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_, T>) -> ParseResult<T> {
        Ok(take_if(cursor, |element| !self.rejects.contains(element)))
    }
}

/// Convenience function to create a NoneOf parser
pub fn none_of<T: Atomic>(rejects: impl IntoIterator<Item = T>) -> NoneOf<T> {
    NoneOf::new(rejects)
}

/// Parser that matches an element within an inclusive range
pub struct InRange<T> {
    start: T,
    end: T,
}

impl<T> InRange<T> {
    pub fn new(start: T, end: T) -> Self {
        InRange { start, end }
    }
}

impl<T: Atomic + PartialOrd> Parser for InRange<T> {
    type Element = T;
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_, T>) -> ParseResult<T> {
        Ok(take_if(cursor, |element| {
            *element >= self.start && *element <= self.end
        }))
    }
}

/// Convenience function to create an InRange parser
pub fn in_range<T: Atomic + PartialOrd>(start: T, end: T) -> InRange<T> {
    InRange::new(start, end)
}
