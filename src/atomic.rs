/// Trait for the elements a cursor hands out to parsers
///
/// Elements are compared by equality against literals and sets, cloned out of the
/// input when consumed, and must be shareable across threads so that a finished
/// grammar can be driven from several threads at once.
pub trait Atomic: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {}

impl<T> Atomic for T where T: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {}
