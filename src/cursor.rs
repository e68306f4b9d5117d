use crate::atomic::Atomic;
use crate::maybe::Maybe;
use std::borrow::Cow;

/// Opaque snapshot of a cursor position, produced by [`Cursor::mark`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mark(usize);

impl Mark {
    /// Number of elements that had been consumed when the mark was taken
    pub fn offset(&self) -> usize {
        self.0
    }
}

/// Rewindable position over an immutable sequence of elements
///
/// The cursor is the only mutable state of a parse. Parsers receive it as
/// `&mut Cursor` and must leave it where they found it whenever they report
/// `Maybe::Absent`, which they do by taking a [`Mark`] up front and calling
/// [`Cursor::rewind`] on the failure path.
///
/// The input is either borrowed or owned; character input built from a `&str`
/// with [`Cursor::from_text`] is owned since a `str` is not a slice of `char`.
#[derive(Debug, Clone)]
pub struct Cursor<'code, T: Atomic> {
    data: Cow<'code, [T]>,
    position: usize,
}

impl<'code, T: Atomic> Cursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        Cursor {
            data: Cow::Borrowed(data),
            position: 0,
        }
    }

    /// Whether at least one element remains
    pub fn has_next(&self) -> bool {
        self.position < self.data.len()
    }

    /// Consume and return the element under the cursor
    ///
    /// Returns `Absent` without moving if the input is exhausted.
    pub fn next(&mut self) -> Maybe<T> {
        match self.data.get(self.position) {
            Some(element) => {
                self.position += 1;
                Maybe::Present(element.clone())
            }
            None => Maybe::Absent,
        }
    }

    /// Look at the element under the cursor without consuming it
    pub fn peek(&self) -> Option<&T> {
        self.data.get(self.position)
    }

    pub fn mark(&self) -> Mark {
        Mark(self.position)
    }

    /// Return to a previously taken mark
    ///
    /// Marks are only meaningful for the cursor they were taken from; a mark
    /// beyond the end of the input is clamped to the end.
    pub fn rewind(&mut self, mark: Mark) {
        self.position = mark.0.min(self.data.len());
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        !self.has_next()
    }

    /// The unconsumed tail of the input
    pub fn remaining(&self) -> &[T] {
        &self.data[self.position..]
    }

    /// The whole input, regardless of position
    pub fn source(&self) -> &[T] {
        &self.data
    }
}

impl Cursor<'static, char> {
    /// Build a character cursor over a string
    pub fn from_text(text: &str) -> Self {
        Cursor::from(text.chars().collect::<Vec<_>>())
    }

    /// The unconsumed tail of the input as a string
    pub fn remaining_text(&self) -> String {
        self.remaining().iter().collect()
    }
}

impl<T: Atomic> From<Vec<T>> for Cursor<'static, T> {
    fn from(data: Vec<T>) -> Self {
        Cursor {
            data: Cow::Owned(data),
            position: 0,
        }
    }
}

impl<'code, T: Atomic> From<&'code [T]> for Cursor<'code, T> {
    fn from(data: &'code [T]) -> Self {
        Cursor::new(data)
    }
}
