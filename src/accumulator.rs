//! Consolidation of repeated parse results.
//!
//! `many` and `merge` produce one result per successful sub-parse and need to fold
//! them into a single value. How that happens depends on what is being folded:
//! characters and text concatenate into a `String`, everything else collects into a
//! `Vec`. The [`Accumulator`] trait is the folding strategy, and [`Accumulate`]
//! picks the default strategy for an element type when the grammar is built.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// Folding strategy for a stream of values of type `R`
///
/// A fresh accumulator is created with `Default` for every invocation of the
/// combinator that owns it.
pub trait Accumulator<R>: Default {
    type Output;

    fn append(&mut self, value: R);

    fn finish(self) -> Self::Output;
}

/// Collects every value into a `Vec` in the order produced
#[derive(Debug, Clone)]
pub struct SequenceCollect<R> {
    items: Vec<R>,
}

impl<R> Default for SequenceCollect<R> {
    fn default() -> Self {
        SequenceCollect { items: Vec::new() }
    }
}

impl<R> Accumulator<R> for SequenceCollect<R> {
    type Output = Vec<R>;

    fn append(&mut self, value: R) {
        self.items.push(value);
    }

    fn finish(self) -> Self::Output {
        self.items
    }
}

/// Concatenates characters or text fragments into one `String`
#[derive(Debug, Clone, Default)]
pub struct TextConcat {
    text: String,
}

impl Accumulator<char> for TextConcat {
    type Output = String;

    fn append(&mut self, value: char) {
        self.text.push(value);
    }

    fn finish(self) -> Self::Output {
        self.text
    }
}

impl Accumulator<String> for TextConcat {
    type Output = String;

    fn append(&mut self, value: String) {
        self.text.push_str(&value);
    }

    fn finish(self) -> Self::Output {
        self.text
    }
}

impl<'a> Accumulator<&'a str> for TextConcat {
    type Output = String;

    fn append(&mut self, value: &'a str) {
        self.text.push_str(value);
    }

    fn finish(self) -> Self::Output {
        self.text
    }
}

impl<'a> Accumulator<Cow<'a, str>> for TextConcat {
    type Output = String;

    fn append(&mut self, value: Cow<'a, str>) {
        self.text.push_str(&value);
    }

    fn finish(self) -> Self::Output {
        self.text
    }
}

/// Splices `Vec<R>` values end to end into a single `Vec<R>`
///
/// Never chosen by default. Select it explicitly to make chains of merges
/// associative: `a.merge_into::<Flatten<_>, _>(b).merge_into::<Flatten<_>, _>(c)` yields
/// one flat vector rather than nested pairs.
#[derive(Debug, Clone)]
pub struct Flatten<R> {
    items: Vec<R>,
}

impl<R> Default for Flatten<R> {
    fn default() -> Self {
        Flatten { items: Vec::new() }
    }
}

impl<R> Accumulator<Vec<R>> for Flatten<R> {
    type Output = Vec<R>;

    fn append(&mut self, value: Vec<R>) {
        self.items.extend(value);
    }

    fn finish(self) -> Self::Output {
        self.items
    }
}

/// Default folding strategy for an element type
///
/// Implemented for the standard scalar, text and container types. Grammar authors
/// opt their own result types into sequence collection with
/// [`collect_as_sequence!`](crate::collect_as_sequence).
pub trait Accumulate: Sized {
    type Accumulator: Accumulator<Self>;
}

/// Use [`SequenceCollect`] as the default accumulator for the listed types
///
/// ```
/// #[derive(Debug, Clone, PartialEq)]
/// struct Token(u32);
///
/// descent::collect_as_sequence!(Token);
/// ```
#[macro_export]
macro_rules! collect_as_sequence {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::accumulator::Accumulate for $ty {
                type Accumulator = $crate::accumulator::SequenceCollect<$ty>;
            }
        )*
    };
}

collect_as_sequence!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, ()
);

impl Accumulate for char {
    type Accumulator = TextConcat;
}

impl Accumulate for String {
    type Accumulator = TextConcat;
}

impl<'a> Accumulate for &'a str {
    type Accumulator = TextConcat;
}

impl<'a> Accumulate for Cow<'a, str> {
    type Accumulator = TextConcat;
}

impl<T> Accumulate for Vec<T> {
    type Accumulator = SequenceCollect<Vec<T>>;
}

impl<T> Accumulate for Option<T> {
    type Accumulator = SequenceCollect<Option<T>>;
}

impl<T: ?Sized> Accumulate for Box<T> {
    type Accumulator = SequenceCollect<Box<T>>;
}

impl<T: ?Sized> Accumulate for Rc<T> {
    type Accumulator = SequenceCollect<Rc<T>>;
}

impl<T: ?Sized> Accumulate for Arc<T> {
    type Accumulator = SequenceCollect<Arc<T>>;
}

impl<A, B> Accumulate for (A, B) {
    type Accumulator = SequenceCollect<(A, B)>;
}

impl<A, B, C> Accumulate for (A, B, C) {
    type Accumulator = SequenceCollect<(A, B, C)>;
}

/// Fold an iterator of values with the default strategy for their type
pub fn accumulate<R, I>(values: I) -> <R::Accumulator as Accumulator<R>>::Output
where
    R: Accumulate,
    I: IntoIterator<Item = R>,
{
    let mut accumulator = R::Accumulator::default();
    for value in values {
        accumulator.append(value);
    }
    accumulator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Token(u32);

    collect_as_sequence!(Token);

    #[test]
    fn test_scalars_collect_into_vec() {
        assert_eq!(accumulate([1u32, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_chars_concatenate() {
        assert_eq!(accumulate(['a', 'b', 'c']), "abc");
    }

    #[test]
    fn test_text_concatenates() {
        assert_eq!(
            accumulate(["foo".to_string(), "bar".to_string()]),
            "foobar".to_string()
        );
        assert_eq!(accumulate(["x", "y"]), "xy");
    }

    #[test]
    fn test_empty_aggregate() {
        let empty: Vec<u8> = accumulate(Vec::<u8>::new());
        assert!(empty.is_empty());
        assert_eq!(accumulate(Vec::<char>::new()), "");
    }

    #[test]
    fn test_vectors_nest_by_default() {
        assert_eq!(accumulate([vec![1u8], vec![2, 3]]), vec![vec![1], vec![2, 3]]);
    }

    #[test]
    fn test_flatten_splices_vectors() {
        let mut flatten = Flatten::default();
        flatten.append(vec![1u8, 2]);
        flatten.append(vec![]);
        flatten.append(vec![3]);
        assert_eq!(flatten.finish(), vec![1, 2, 3]);
    }

    #[test]
    fn test_user_type_opt_in() {
        assert_eq!(
            accumulate([Token(1), Token(2)]),
            vec![Token(1), Token(2)]
        );
    }
}
